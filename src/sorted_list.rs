use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Flatten};
use core::ops::Range;

use crate::raw::RawSortedList;

mod bisect;
mod load_factor;
mod positional;

/// The load factor used by [`SortedList::new`].
pub const DEFAULT_LOAD_FACTOR: usize = 1000;

/// A sorted list based on a sequence of bounded, sorted blocks.
///
/// Elements are kept in ascending order as defined by [`Ord`]. Duplicates are
/// allowed; a new element is placed after any elements equal to it.
///
/// Internally the list is split into blocks of roughly
/// [`load_factor`](SortedList::load_factor) elements. Value lookups binary
/// search the per-block maxima and then the selected block. Positional lookups
/// go through a summation tree over block lengths that is built on first use
/// and kept current until the number of blocks changes. Inserting or removing
/// an element costs one block search plus an in-block shift of at most
/// `2 * load_factor` elements.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the [`Ord`] trait,
/// changes while it is in the list. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the `SortedList` that observed the logic error and not
/// result in undefined behavior.
///
/// The positional index is built lazily behind a shared reference. The build
/// is synchronized, so a `SortedList` is [`Send`] and [`Sync`] and may be read
/// from several threads at once while no thread mutates it.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use sorted_blocks::SortedList;
///
/// let mut scores = SortedList::new();
/// scores.insert(72);
/// scores.insert(95);
/// scores.insert(88);
/// scores.insert(72);
///
/// assert_eq!(scores.len(), 4);
/// assert_eq!(scores.first(), Some(&72));
/// assert_eq!(scores.count(&72), 2);
///
/// // Position-based access, negative positions count from the end.
/// assert_eq!(scores.get(-1), Ok(&95));
/// assert_eq!(scores.bisect_left(&88), 2);
///
/// assert!(scores.remove(&72));
/// assert_eq!(scores.iter().copied().collect::<Vec<_>>(), [72, 88, 95]);
/// ```
///
/// A `SortedList` can be built from any iterator or array:
///
/// ```
/// use sorted_blocks::SortedList;
///
/// let list = SortedList::from([3, 1, 2]);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct SortedList<T> {
    raw: RawSortedList<T>,
}

/// An iterator over the elements of a `SortedList`, in ascending order.
///
/// This `struct` is created by the [`iter`], [`range`] and [`get_range`]
/// methods on [`SortedList`]. Each call starts a fresh traversal. The iterator
/// borrows the list, so the list cannot be mutated while it is alive.
///
/// # Examples
///
/// ```
/// use sorted_blocks::SortedList;
///
/// let list = SortedList::from([3, 1, 2]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SortedList::iter
/// [`range`]: SortedList::range
/// [`get_range`]: SortedList::get_range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    blocks: &'a [VecDeque<T>],
    // Next element from the front.
    front: (usize, usize),
    // One past the next element from the back.
    back: (usize, usize),
    remaining: usize,
}

/// An owning iterator over the elements of a `SortedList`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedList`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use sorted_blocks::SortedList;
///
/// let list = SortedList::from([1, 2, 3]);
/// let mut iter = list.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.len(), 1);
/// ```
///
/// [`into_iter`]: SortedList#method.into_iter
pub struct IntoIter<T> {
    inner: Flatten<alloc::vec::IntoIter<VecDeque<T>>>,
    remaining: usize,
}

impl<T> SortedList<T> {
    /// Makes a new, empty `SortedList` with the [default load factor](DEFAULT_LOAD_FACTOR).
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list: SortedList<i32> = SortedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.load_factor(), 1000);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SortedList {
            raw: RawSortedList::new(DEFAULT_LOAD_FACTOR),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the list, removing all elements. Calling it again is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([1, 2]);
    /// list.clear();
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the smallest element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.first(), None);
    /// list.insert(2);
    /// list.insert(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns a reference to the largest element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Same as [`first`](SortedList::first).
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.first()
    }

    /// Same as [`last`](SortedList::last).
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.last()
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from([3, 1, 2, 1]);
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            blocks: self.raw.blocks(),
            front: (0, 0),
            back: (self.raw.blocks().len(), 0),
            remaining: self.len(),
        }
    }

    /// Iterator over the half-open range of positions `range`, which must lie
    /// within `0..=len`.
    pub(crate) fn slice(&self, range: Range<usize>) -> Iter<'_, T> {
        Iter {
            blocks: self.raw.blocks(),
            front: self.raw.cursor(range.start),
            back: self.raw.cursor(range.end),
            remaining: range.end - range.start,
        }
    }
}

impl<T: Ord + Clone> SortedList<T> {
    /// Adds a value to the list, after any elements equal to it.
    ///
    /// # Complexity
    ///
    /// Amortized O(load factor + log n).
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// for value in [5, 2, 7, 1, 4] {
    ///     list.insert(value);
    /// }
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 7]);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.raw.insert(value);
    }

    /// Removes one element equal to `value`. Returns whether such an element
    /// was present; removing an absent value leaves the list unchanged.
    ///
    /// The value may be any borrowed form of the list's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the element
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([1, 2, 2]);
    /// assert!(list.remove(&2));
    /// assert!(!list.remove(&5));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value)
    }

    /// Removes and returns the smallest element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([2, 1]);
    /// assert_eq!(list.pop_first(), Some(1));
    /// assert_eq!(list.pop_first(), Some(2));
    /// assert_eq!(list.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first()
    }

    /// Removes and returns the largest element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([2, 1]);
    /// assert_eq!(list.pop_last(), Some(2));
    /// assert_eq!(list.pop_last(), Some(1));
    /// assert_eq!(list.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last()
    }

    /// Adds every value from `values` to the list.
    ///
    /// The batch is sorted first. When it holds at least a quarter as many
    /// elements as the list, the whole list is rebuilt from one combined sort;
    /// smaller batches are inserted one element at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::from([1, 2, 3, 4, 5]);
    /// list.update([10, 8, 6, 9, 7]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    /// ```
    pub fn update<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.raw.update(values);
    }
}

impl<T> Default for SortedList<T> {
    /// Creates an empty `SortedList`.
    fn default() -> SortedList<T> {
        SortedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SortedList<T> {
    fn eq(&self, other: &SortedList<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T: Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SortedList<T> {
        let mut list = SortedList::new();
        list.update(iter);
        list
    }
}

impl<T: Ord + Clone, const N: usize> From<[T; N]> for SortedList<T> {
    /// Converts a `[T; N]` into a `SortedList<T>`.
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list1 = SortedList::from([1, 2, 3, 4]);
    /// let list2: SortedList<_> = [4, 3, 2, 1].into();
    /// assert_eq!(list1, list2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let mut list = SortedList::new();
        list.update(arr);
        list
    }
}

impl<T: Ord + Clone> Extend<T> for SortedList<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.update(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SortedList`'s contents in ascending
    /// order.
    fn into_iter(self) -> IntoIter<T> {
        let remaining = self.len();
        IntoIter {
            inner: self.raw.into_blocks().into_iter().flatten(),
            remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            blocks: self.blocks,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let (block, offset) = self.front;
        let element = &self.blocks[block][offset];
        self.front = if offset + 1 == self.blocks[block].len() { (block + 1, 0) } else { (block, offset + 1) };
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let (mut block, mut offset) = self.back;
        if offset == 0 {
            block -= 1;
            offset = self.blocks[block].len();
        }
        offset -= 1;
        self.back = (block, offset);
        self.remaining -= 1;
        Some(&self.blocks[block][offset])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.inner.next()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let element = self.inner.next_back()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}
