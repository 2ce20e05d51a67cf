use core::borrow::Borrow;
use core::ops::{Bound, RangeBounds};

use super::{Iter, SortedList};

impl<T: Ord + Clone> SortedList<T> {
    /// Returns the number of elements strictly less than `value`: the leftmost
    /// position at which `value` could be inserted while keeping the list
    /// sorted.
    ///
    /// Returns `0` for an empty list and `len()` when `value` is greater than
    /// every element.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.bisect_left(&3), 2);
    /// assert_eq!(list.bisect_left(&0), 0);
    /// assert_eq!(list.bisect_left(&6), 5);
    /// ```
    #[must_use]
    pub fn bisect_left<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.bisect_left(value)
    }

    /// Returns the number of elements less than or equal to `value`: the
    /// rightmost position at which `value` could be inserted while keeping the
    /// list sorted.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.bisect_right(&3), 3);
    /// ```
    #[must_use]
    pub fn bisect_right<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.bisect_right(value)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3]);
    /// assert!(list.contains(&1));
    /// assert!(!list.contains(&4));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).is_some()
    }

    /// Returns the number of elements equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 2, 2, 3]);
    /// assert_eq!(list.count(&2), 3);
    /// assert_eq!(list.count(&7), 0);
    /// ```
    #[must_use]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bisect_right(value) - self.bisect_left(value)
    }

    /// Returns the position of the first element equal to `value`, or `None`
    /// if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([10, 20, 20, 30]);
    /// assert_eq!(list.index_of(&20), Some(1));
    /// assert_eq!(list.index_of(&25), None);
    /// ```
    #[must_use]
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (block, offset) = self.raw.search(value)?;
        Some(self.raw.position_of(block, offset))
    }

    /// Constructs a double-ended iterator over the elements whose values fall
    /// within `range`, in ascending order.
    ///
    /// A range whose start lies past its end yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 3, 3, 5, 7, 9]);
    /// let values: Vec<_> = list.range(3..7).copied().collect();
    /// assert_eq!(values, [3, 3, 5]);
    /// let values: Vec<_> = list.range(4..=9).copied().collect();
    /// assert_eq!(values, [5, 7, 9]);
    /// assert_eq!(list.range(8..2).count(), 0);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(value) => self.bisect_left(value),
            Bound::Excluded(value) => self.bisect_right(value),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(value) => self.bisect_right(value),
            Bound::Excluded(value) => self.bisect_left(value),
            Bound::Unbounded => self.len(),
        };
        self.slice(start..end.max(start))
    }
}
