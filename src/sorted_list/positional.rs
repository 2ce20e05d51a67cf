use alloc::vec::Vec;
use core::ops::{Index, RangeBounds};

use super::{Iter, SortedList};
use crate::error::{Error, Result};
use crate::raw::{resolve_index, resolve_range};

impl<T> SortedList<T> {
    /// Returns a reference to the element at position `index` in sorted order.
    ///
    /// Negative positions count backward from the end, so `-1` is the largest
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is outside `[-len, len)`.
    ///
    /// # Complexity
    ///
    /// O(log n). The positional index is built on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::{Error, SortedList};
    ///
    /// let list = SortedList::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(-3), Ok(&10));
    /// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = resolve_index(index, self.len())?;
        Ok(self.raw.get(position))
    }

    /// Returns an iterator over the elements at the positions in `range`.
    ///
    /// Bounds may be negative and count backward from the end. Inclusive and
    /// exclusive ends are honored as written (`1..3` versus `1..=3`). Positions
    /// past either end of the list are clamped, so they contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the start resolves to a position
    /// past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3, 4, 5]);
    /// let values: Vec<_> = list.get_range(1..3)?.copied().collect();
    /// assert_eq!(values, [2, 3]);
    /// let values: Vec<_> = list.get_range(-2..)?.copied().collect();
    /// assert_eq!(values, [4, 5]);
    /// let values: Vec<_> = list.get_range(3..=10)?.copied().collect();
    /// assert_eq!(values, [4, 5]);
    /// assert!(list.get_range(4..2).is_err());
    /// # Ok::<(), sorted_blocks::Error>(())
    /// ```
    pub fn get_range<R>(&self, range: R) -> Result<Iter<'_, T>>
    where
        R: RangeBounds<isize>,
    {
        let range = resolve_range(&range, self.len())?;
        Ok(self.slice(range))
    }

    /// Returns every `step`-th element of the positions in `range`.
    ///
    /// A positive step walks the range forward from its start; a negative step
    /// walks it backward from its end. Bounds follow the same rules as
    /// [`get_range`](SortedList::get_range).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `step` is zero or the range is
    /// malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list: SortedList<i32> = (0..10).collect();
    /// assert_eq!(list.get_by_step(.., 3)?, [&0, &3, &6, &9]);
    /// assert_eq!(list.get_by_step(2..7, -2)?, [&6, &4, &2]);
    /// assert!(list.get_by_step(.., 0).is_err());
    /// # Ok::<(), sorted_blocks::Error>(())
    /// ```
    pub fn get_by_step<R>(&self, range: R, step: isize) -> Result<Vec<&T>>
    where
        R: RangeBounds<isize>,
    {
        if step == 0 {
            return Err(Error::InvalidArgument {
                name: "step",
                reason: "must not be zero",
            });
        }
        let elements = self.get_range(range)?;
        let stride = step.unsigned_abs();
        if step > 0 { Ok(elements.step_by(stride).collect()) } else { Ok(elements.rev().step_by(stride).collect()) }
    }
}

impl<T: Ord + Clone> SortedList<T> {
    /// Removes and returns the element at position `index` in sorted order.
    ///
    /// Negative positions count backward from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is outside `[-len, len)`; the
    /// list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove_at(2), Ok(3));
    /// assert_eq!(list.remove_at(-1), Ok(5));
    /// assert!(list.remove_at(3).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);
    /// ```
    pub fn remove_at(&mut self, index: isize) -> Result<T> {
        let position = resolve_index(index, self.len())?;
        Ok(self.raw.remove_at(position))
    }
}

/// Indexes into the list by position in sorted order.
///
/// # Panics
///
/// Panics if `position` is out of bounds.
///
/// # Examples
///
/// ```
/// use sorted_blocks::SortedList;
///
/// let list = SortedList::from([30, 10, 20]);
/// assert_eq!(list[0], 10);
/// assert_eq!(list[2], 30);
/// ```
impl<T> Index<usize> for SortedList<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        let len = self.len();
        assert!(position < len, "index out of bounds: the len is {len} but the index is {position}");
        self.raw.get(position)
    }
}
