use super::SortedList;
use crate::error::{Error, Result};
use crate::raw::RawSortedList;

impl<T> SortedList<T> {
    /// Creates an empty list whose blocks target `load_factor` elements.
    ///
    /// Blocks are split once they exceed twice the load factor and merged once
    /// they drop below half of it. A smaller load factor makes insertion and
    /// removal shift fewer elements at the cost of more blocks to search. The
    /// load factor is fixed for the lifetime of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `load_factor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let mut list = SortedList::with_load_factor(3)?;
    /// list.update([3, 1, 2, 5, 4]);
    /// assert_eq!(list.load_factor(), 3);
    /// assert!(SortedList::<i32>::with_load_factor(0).is_err());
    /// # Ok::<(), sorted_blocks::Error>(())
    /// ```
    pub fn with_load_factor(load_factor: usize) -> Result<Self> {
        if load_factor == 0 {
            return Err(Error::InvalidArgument {
                name: "load_factor",
                reason: "must be positive",
            });
        }
        Ok(SortedList {
            raw: RawSortedList::new(load_factor),
        })
    }

    /// Returns the load factor the list was created with.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn load_factor(&self) -> usize {
        self.raw.load_factor()
    }
}

impl<T: Ord + Clone> SortedList<T> {
    /// Creates a list with the given load factor holding the elements of
    /// `iter`, bulk-loaded in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `load_factor` is zero; `iter` is
    /// not consumed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_blocks::SortedList;
    ///
    /// let list = SortedList::from_iter_with_load_factor([5, 1, 3], 2)?;
    /// assert_eq!(list.load_factor(), 2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
    /// # Ok::<(), sorted_blocks::Error>(())
    /// ```
    pub fn from_iter_with_load_factor<I>(iter: I, load_factor: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_load_factor(load_factor)?;
        list.update(iter);
        Ok(list)
    }
}
