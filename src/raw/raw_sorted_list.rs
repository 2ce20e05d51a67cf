use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::borrow::Borrow;

use super::position_index::{LazyIndex, PositionIndex};

/// The segmented engine backing `SortedList`.
///
/// Elements live in a sequence of sorted blocks whose concatenation is the
/// sorted content. Blocks are kept near `load` elements: a block longer than
/// `2 * load` is split, and a block shorter than `load / 2` is merged into a
/// neighbor unless the position index is built.
#[derive(Clone)]
pub(crate) struct RawSortedList<T> {
    /// Sorted, non-empty blocks. Deques keep removal at either end of a
    /// block O(1).
    blocks: Vec<VecDeque<T>>,
    /// `maxes[i]` is the last element of `blocks[i]`.
    maxes: Vec<T>,
    /// Summation tree over block lengths, built on demand.
    index: LazyIndex,
    /// Total number of elements.
    len: usize,
    /// Target block length.
    load: usize,
}

impl<T> RawSortedList<T> {
    /// Creates an empty list with the given load factor.
    pub(crate) const fn new(load: usize) -> Self {
        assert!(load > 0, "`RawSortedList::new()` - `load` must be positive!");
        Self {
            blocks: Vec::new(),
            maxes: Vec::new(),
            index: LazyIndex::new(),
            len: 0,
            load,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn load_factor(&self) -> usize {
        self.load
    }

    pub(crate) fn blocks(&self) -> &[VecDeque<T>] {
        &self.blocks
    }

    pub(crate) fn into_blocks(self) -> Vec<VecDeque<T>> {
        self.blocks
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.blocks.first().and_then(VecDeque::front)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.maxes.last()
    }

    /// Removes every element and drops the position index.
    pub(crate) fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, blocks = self.blocks.len(), "sorted list cleared");

        self.blocks.clear();
        self.maxes.clear();
        self.index.invalidate();
        self.len = 0;
    }

    /// Translates a global position into `(block, offset within block)`.
    ///
    /// Positions inside the first or last block are resolved directly; all
    /// others go through the position index, building it if necessary.
    pub(crate) fn locate(&self, position: usize) -> (usize, usize) {
        assert!(position < self.len, "`RawSortedList::locate()` - `position` >= `len`!");

        let first = self.blocks[0].len();
        if position < first {
            return (0, position);
        }
        let last = self.blocks.len() - 1;
        let last_start = self.len - self.blocks[last].len();
        if position >= last_start {
            return (last, position - last_start);
        }
        self.position_index().locate(position)
    }

    /// Returns the element at `position`, which must be less than `len`.
    pub(crate) fn get(&self, position: usize) -> &T {
        let (block, offset) = self.locate(position);
        &self.blocks[block][offset]
    }

    /// Translates `(block, offset within block)` into a global position.
    ///
    /// `block == blocks.len()` with `offset == 0` denotes the end of the list.
    pub(crate) fn position_of(&self, block: usize, offset: usize) -> usize {
        if block == 0 {
            return offset;
        }
        let last = self.blocks.len() - 1;
        if block > last {
            return self.len;
        }
        if block == last {
            return self.len - self.blocks[last].len() + offset;
        }
        self.position_index().position_of(block, offset)
    }

    /// Translates the half-open end of a positional range into the
    /// `(block, offset)` cursor just past it.
    pub(crate) fn cursor(&self, position: usize) -> (usize, usize) {
        if position == self.len {
            return (self.blocks.len(), 0);
        }
        self.locate(position)
    }

    fn position_index(&self) -> &PositionIndex {
        self.index.get_or_build(|| self.blocks.iter().map(VecDeque::len))
    }

    /// Removes the block at `pos` and its max. The block count changes, so the
    /// position index is dropped.
    fn drop_block(&mut self, pos: usize) {
        self.blocks.remove(pos);
        self.maxes.remove(pos);
        self.index.invalidate();

        #[cfg(feature = "tracing")]
        tracing::trace!(block = pos, blocks = self.blocks.len(), "empty block dropped");
    }
}

impl<T: Ord + Clone> RawSortedList<T> {
    /// Inserts `value` after any elements equal to it.
    pub(crate) fn insert(&mut self, value: T) {
        if self.maxes.is_empty() {
            self.maxes.push(value.clone());
            self.blocks.push(VecDeque::from([value]));
            self.len = 1;
            self.index.invalidate();
            return;
        }

        let mut pos = self.maxes.partition_point(|max| max < &value);
        if pos == self.maxes.len() {
            pos -= 1;
            self.maxes[pos].clone_from(&value);
            self.blocks[pos].push_back(value);
        } else {
            let block = &mut self.blocks[pos];
            let at = block.partition_point(|element| element <= &value);
            block.insert(at, value);
        }
        self.len += 1;

        self.expand(pos);
    }

    /// Removes the leftmost element equal to `value`. Returns whether an element
    /// was removed.
    pub(crate) fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(value) {
            Some((pos, offset)) => {
                self.take(pos, offset);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `position`.
    pub(crate) fn remove_at(&mut self, position: usize) -> T {
        let (pos, offset) = self.locate(position);
        self.take(pos, offset)
    }

    /// Removes the largest element. Blocks are only dropped once empty; no merge
    /// is attempted.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let pos = self.blocks.len().checked_sub(1)?;
        let value = self.blocks[pos].pop_back()?;
        self.len -= 1;

        if self.blocks[pos].is_empty() {
            self.drop_block(pos);
        } else {
            self.shrunk_in_place(pos);
        }
        Some(value)
    }

    /// Removes the smallest element in O(1) amortized time. Blocks are only
    /// dropped once empty; no merge is attempted.
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let value = self.blocks.first_mut()?.pop_front()?;
        self.len -= 1;

        if self.blocks[0].is_empty() {
            self.drop_block(0);
        } else if let Some(index) = self.index.built_mut() {
            index.decrement(0);
        }
        Some(value)
    }

    /// Merges `values` into the list.
    ///
    /// Large batches (at least a quarter of the current length) are merged by
    /// flattening and re-partitioning everything; small batches are inserted
    /// one at a time.
    pub(crate) fn update<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return;
        }
        values.sort();

        if self.len == 0 {
            self.rebuild(values);
        } else if values.len() * 4 >= self.len {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = self.len, batch = values.len(), "bulk rebuild");

            // Existing elements go first so the stable sort keeps them ahead of
            // equal incoming ones.
            let mut merged: Vec<T> = Vec::with_capacity(self.len + values.len());
            merged.extend(self.blocks.drain(..).flatten());
            merged.extend(values);
            merged.sort();
            self.rebuild(merged);
        } else {
            for value in values {
                self.insert(value);
            }
        }
    }

    /// Returns `(block, offset)` of the leftmost element equal to `value`.
    pub(crate) fn search<Q>(&self, value: &Q) -> Option<(usize, usize)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let pos = self.maxes.partition_point(|max| max.borrow() < value);
        let block = self.blocks.get(pos)?;
        let offset = block.partition_point(|element| element.borrow() < value);
        (block[offset].borrow() == value).then_some((pos, offset))
    }

    /// Number of elements strictly less than `value`.
    pub(crate) fn bisect_left<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let pos = self.maxes.partition_point(|max| max.borrow() < value);
        let Some(block) = self.blocks.get(pos) else {
            return self.len;
        };
        let offset = block.partition_point(|element| element.borrow() < value);
        self.position_of(pos, offset)
    }

    /// Number of elements less than or equal to `value`.
    pub(crate) fn bisect_right<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let pos = self.maxes.partition_point(|max| max.borrow() <= value);
        let Some(block) = self.blocks.get(pos) else {
            return self.len;
        };
        let offset = block.partition_point(|element| element.borrow() <= value);
        self.position_of(pos, offset)
    }

    /// Removes the element at `offset` in block `pos` and rebalances.
    fn take(&mut self, pos: usize, offset: usize) -> T {
        let value = self.blocks[pos].remove(offset).expect("`RawSortedList::take()` - `offset` is out of range!");
        self.len -= 1;
        self.shrink(pos);
        value
    }

    /// Split policy, applied after block `pos` gained one element.
    fn expand(&mut self, pos: usize) {
        if self.blocks[pos].len() > 2 * self.load {
            let tail = self.blocks[pos].split_off(self.load);
            let tail_max = tail.back().cloned().expect("`RawSortedList::expand()` - split produced an empty tail!");
            self.refresh_max(pos);
            self.maxes.insert(pos + 1, tail_max);
            self.blocks.insert(pos + 1, tail);
            self.index.invalidate();

            #[cfg(feature = "tracing")]
            tracing::debug!(block = pos, load = self.load, blocks = self.blocks.len(), "block split");
        } else if let Some(index) = self.index.built_mut() {
            index.increment(pos);
        }
    }

    /// Merge policy, applied after block `pos` lost one element.
    fn shrink(&mut self, pos: usize) {
        let remaining = self.blocks[pos].len();
        if remaining == 0 {
            self.drop_block(pos);
            return;
        }

        // An undersized block is tolerated while the index is built, trading
        // block count for not rebuilding the index.
        if remaining >= self.load / 2 || self.blocks.len() == 1 || self.index.is_built() {
            self.shrunk_in_place(pos);
            return;
        }

        let pos = pos.max(1);
        let prev = pos - 1;
        let merged = self.blocks.remove(pos);
        self.maxes.remove(pos);
        self.blocks[prev].extend(merged);
        self.refresh_max(prev);
        self.index.invalidate();

        #[cfg(feature = "tracing")]
        tracing::debug!(block = prev, len = self.blocks[prev].len(), blocks = self.blocks.len(), "blocks merged");

        self.expand(prev);
    }

    /// Records that block `pos` lost one element without changing the block
    /// count.
    fn shrunk_in_place(&mut self, pos: usize) {
        self.refresh_max(pos);
        if let Some(index) = self.index.built_mut() {
            index.decrement(pos);
        }
    }

    fn refresh_max(&mut self, pos: usize) {
        if let Some(last) = self.blocks[pos].back() {
            self.maxes[pos].clone_from(last);
        }
    }

    /// Replaces the contents with already sorted `values`, partitioned into
    /// blocks of `load` elements.
    fn rebuild(&mut self, values: Vec<T>) {
        self.blocks.clear();
        self.maxes.clear();
        self.index.invalidate();
        self.len = values.len();

        let mut values = values.into_iter();
        loop {
            let block: VecDeque<T> = values.by_ref().take(self.load).collect();
            let Some(max) = block.back() else {
                break;
            };
            self.maxes.push(max.clone());
            self.blocks.push(block);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<T: Ord + Clone + core::fmt::Debug> RawSortedList<T> {
        /// Validates all engine invariants. Panics with a descriptive message if
        /// any are violated.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            if self.blocks.is_empty() != (self.len == 0) {
                errors.push(alloc::format!("blocks.is_empty()={} but len={}", self.blocks.is_empty(), self.len));
            }
            if self.blocks.len() != self.maxes.len() {
                errors.push(alloc::format!("{} blocks but {} maxes", self.blocks.len(), self.maxes.len()));
            }

            let mut previous: Option<&T> = None;
            for (i, block) in self.blocks.iter().enumerate() {
                if block.is_empty() {
                    errors.push(alloc::format!("block {} is empty", i));
                    continue;
                }
                if block.len() > 2 * self.load {
                    errors.push(alloc::format!("block {} has {} elements, over 2 * load={}", i, block.len(), self.load));
                }
                for element in block {
                    if previous.is_some_and(|previous| previous > element) {
                        errors.push(alloc::format!("block {} out of order at {:?}", i, element));
                    }
                    previous = Some(element);
                }
                if self.maxes.get(i) != block.back() {
                    errors.push(alloc::format!("maxes[{}]={:?} but block ends with {:?}", i, self.maxes.get(i), block.back()));
                }
            }

            let actual: usize = self.blocks.iter().map(VecDeque::len).sum();
            if actual != self.len {
                errors.push(alloc::format!("len mismatch: self.len={}, actual count={}", self.len, actual));
            }

            if let Some(index) = self.index.built() {
                let expected = PositionIndex::build(self.blocks.iter().map(VecDeque::len));
                if *index != expected {
                    errors.push(alloc::format!("stale position index: {:?}, expected {:?}", index, expected));
                }
            }

            assert!(errors.is_empty(), "Sorted list invariant violations:\n{}", errors.join("\n"));
        }

        fn to_vec(&self) -> Vec<T> {
            self.blocks.iter().flatten().cloned().collect()
        }

        fn block_lengths(&self) -> Vec<usize> {
            self.blocks.iter().map(VecDeque::len).collect()
        }
    }

    #[test]
    #[should_panic(expected = "`RawSortedList::new()` - `load` must be positive!")]
    fn zero_load_factor() {
        let _ = RawSortedList::<i32>::new(0);
    }

    #[test]
    fn insert_out_of_order() {
        let mut list = RawSortedList::new(1000);
        for value in [5, 2, 7, 1, 4] {
            list.insert(value);
        }
        list.validate_invariants();
        assert_eq!(list.to_vec(), [1, 2, 4, 5, 7]);
        assert_eq!(list.block_lengths(), [5]);
    }

    #[test]
    fn insert_splits_overflowing_block() {
        let mut list = RawSortedList::new(2);
        for value in 0..5 {
            list.insert(value);
        }
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [2, 3]);
        assert!(!list.index.is_built());
    }

    #[test]
    fn insert_updates_built_index_in_place() {
        let mut list = RawSortedList::new(4);
        list.update(0..12);
        assert_eq!(list.bisect_left(&6), 6);
        assert!(list.index.is_built());

        list.insert(5);
        assert!(list.index.is_built());
        list.validate_invariants();
        assert_eq!(list.bisect_right(&5), 7);
    }

    #[test]
    fn duplicates_insert_after_equals() {
        let mut list = RawSortedList::new(2);
        for value in [3, 3, 1, 3, 2, 3] {
            list.insert(value);
        }
        list.validate_invariants();
        assert_eq!(list.to_vec(), [1, 2, 3, 3, 3, 3]);
        assert_eq!(list.bisect_left(&3), 2);
        assert_eq!(list.bisect_right(&3), 6);
    }

    #[test]
    fn remove_merges_undersized_block_when_index_unbuilt() {
        let mut list = RawSortedList::new(4);
        list.update(0..12);
        assert_eq!(list.block_lengths(), [4, 4, 4]);

        assert!(list.remove(&5));
        assert!(list.remove(&6));
        assert!(list.remove(&7));
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [5, 4]);
        assert_eq!(list.to_vec(), [0, 1, 2, 3, 4, 8, 9, 10, 11]);
    }

    #[test]
    fn remove_from_first_block_merges_successor() {
        let mut list = RawSortedList::new(4);
        list.update(0..12);

        for value in 0..3 {
            assert!(list.remove(&value));
        }
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [5, 4]);
        assert_eq!(list.first(), Some(&3));
    }

    #[test]
    fn remove_tolerates_undersized_block_when_index_built() {
        let mut list = RawSortedList::new(4);
        list.update(0..12);
        assert_eq!(list.bisect_left(&5), 5);

        for value in 4..7 {
            assert!(list.remove(&value));
        }
        assert!(list.index.is_built());
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [4, 1, 4]);
    }

    #[test]
    fn merge_resplits_overflowing_block() {
        let mut list = RawSortedList::new(4);
        list.update(0..8);
        for value in 8..12 {
            list.insert(value);
        }
        assert_eq!(list.block_lengths(), [4, 8]);

        // Shrink the first block below load / 2, forcing a merge into 11 elements.
        assert!(list.remove(&0));
        assert!(list.remove(&1));
        assert!(list.remove(&2));
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [4, 5]);
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let mut list = RawSortedList::new(4);
        list.update([1, 3, 5]);
        assert!(!list.remove(&2));
        assert!(!list.remove(&6));
        assert_eq!(list.len(), 3);

        let mut empty = RawSortedList::<i32>::new(4);
        assert!(!empty.remove(&1));
    }

    #[test]
    fn remove_at_with_unit_load_drops_empty_block() {
        let mut list = RawSortedList::new(1);
        for value in 1..=5 {
            list.insert(value);
        }
        assert_eq!(list.remove_at(2), 3);
        list.validate_invariants();
        assert_eq!(list.to_vec(), [1, 2, 4, 5]);
        let (block, offset) = list.locate(2);
        assert_eq!(list.blocks()[block][offset], 4);
    }

    #[test]
    fn remove_last_element_empties_list() {
        let mut list = RawSortedList::new(4);
        list.insert(9);
        assert!(list.remove(&9));
        list.validate_invariants();
        assert!(list.is_empty());
        assert!(list.blocks().is_empty());
    }

    #[test]
    fn pops_drop_blocks_only_when_empty() {
        let mut list = RawSortedList::new(2);
        list.update(0..6);
        assert_eq!(list.block_lengths(), [2, 2, 2]);

        assert_eq!(list.pop_last(), Some(5));
        assert_eq!(list.block_lengths(), [2, 2, 1]);
        assert_eq!(list.pop_last(), Some(4));
        assert_eq!(list.block_lengths(), [2, 2]);
        assert_eq!(list.pop_first(), Some(0));
        assert_eq!(list.block_lengths(), [1, 2]);
        list.validate_invariants();

        let mut empty = RawSortedList::<i32>::new(2);
        assert_eq!(empty.pop_last(), None);
        assert_eq!(empty.pop_first(), None);
    }

    #[test]
    fn pop_first_drains_front_block_from_the_head() {
        let mut list = RawSortedList::new(1000);
        list.update(0..1500);
        assert_eq!(list.block_lengths(), [1000, 500]);

        for expected in 0..999 {
            assert_eq!(list.pop_first(), Some(expected));
        }
        assert_eq!(list.block_lengths(), [1, 500]);
        assert_eq!(list.first(), Some(&999));
        assert_eq!(list.maxes[0], 999);

        assert_eq!(list.pop_first(), Some(999));
        assert_eq!(list.block_lengths(), [500]);
        list.validate_invariants();
    }

    #[test]
    fn pops_keep_built_index_current() {
        let mut list = RawSortedList::new(3);
        list.update(0..9);
        assert_eq!(list.bisect_left(&4), 4);

        assert_eq!(list.pop_first(), Some(0));
        assert_eq!(list.pop_last(), Some(8));
        assert!(list.index.is_built());
        list.validate_invariants();
        assert_eq!(list.bisect_left(&4), 3);
    }

    #[test]
    fn update_partitions_into_load_sized_blocks() {
        let mut list = RawSortedList::new(3);
        list.update([9, 3, 7, 1, 5, 8, 2, 6, 4, 0]);
        list.validate_invariants();
        assert_eq!(list.block_lengths(), [3, 3, 3, 1]);
        assert_eq!(list.to_vec(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn update_large_batch_rebuilds() {
        let mut list = RawSortedList::new(4);
        list.update([1, 2, 3, 4, 5]);
        list.update([6, 7, 8, 9, 10]);
        list.validate_invariants();
        assert_eq!(list.to_vec(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(list.block_lengths(), [4, 4, 2]);
    }

    #[test]
    fn update_small_batch_inserts_individually() {
        let mut list = RawSortedList::new(4);
        list.update(0..40);
        assert_eq!(list.bisect_left(&20), 20);

        list.update([15, 25]);
        // Incremental inserts keep the built index current instead of dropping it.
        assert!(list.index.is_built());
        list.validate_invariants();
        assert_eq!(list.len(), 42);
    }

    #[test]
    fn bisect_on_empty_list() {
        let list = RawSortedList::<i32>::new(4);
        assert_eq!(list.bisect_left(&1), 0);
        assert_eq!(list.bisect_right(&1), 0);
        assert_eq!(list.search(&1), None);
    }

    #[test]
    fn position_of_end_cursor() {
        let mut list = RawSortedList::new(2);
        list.update(0..5);
        assert_eq!(list.cursor(5), (3, 0));
        assert_eq!(list.position_of(3, 0), 5);
        assert_eq!(list.cursor(3), (1, 1));
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = RawSortedList::new(2);
        list.update(0..10);
        let _ = list.locate(5);
        list.clear();
        list.validate_invariants();
        assert!(list.is_empty());
        assert!(!list.index.is_built());
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        RemoveAt(usize),
        PopFirst,
        PopLast,
        Update(Vec<i32>),
        Bisect(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..200).prop_map(Op::Insert),
            3 => (0i32..200).prop_map(Op::Remove),
            2 => any::<usize>().prop_map(Op::RemoveAt),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
            1 => prop::collection::vec(0i32..200, 0..40).prop_map(Op::Update),
            2 => (0i32..200).prop_map(Op::Bisect),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_maintained_after_operations(
            load in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..400),
        ) {
            let mut list: RawSortedList<i32> = RawSortedList::new(load);
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(value) => {
                        list.insert(value);
                        let at = model.partition_point(|&element| element <= value);
                        model.insert(at, value);
                    }
                    Op::Remove(value) => {
                        let expected = model.binary_search(&value).is_ok();
                        if expected {
                            let at = model.partition_point(|&element| element < value);
                            model.remove(at);
                        }
                        prop_assert_eq!(list.remove(&value), expected);
                    }
                    Op::RemoveAt(which) => {
                        if model.is_empty() {
                            continue;
                        }
                        let position = which % model.len();
                        prop_assert_eq!(list.remove_at(position), model.remove(position));
                    }
                    Op::PopFirst => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(list.pop_first(), expected);
                    }
                    Op::PopLast => {
                        prop_assert_eq!(list.pop_last(), model.pop());
                    }
                    Op::Update(values) => {
                        model.extend(values.iter().copied());
                        model.sort();
                        list.update(values);
                    }
                    Op::Bisect(value) => {
                        prop_assert_eq!(list.bisect_left(&value), model.partition_point(|&element| element < value));
                        prop_assert_eq!(list.bisect_right(&value), model.partition_point(|&element| element <= value));
                    }
                }

                list.validate_invariants();
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.first(), model.first());
                prop_assert_eq!(list.last(), model.last());
            }

            prop_assert_eq!(list.to_vec(), model);
        }

        #[test]
        fn locate_matches_flattened_order(load in 1usize..6, values in prop::collection::vec(any::<i16>(), 1..300)) {
            let mut list = RawSortedList::new(load);
            for value in &values {
                list.insert(*value);
            }
            let flat = list.to_vec();

            for (position, expected) in flat.iter().enumerate() {
                let (block, offset) = list.locate(position);
                prop_assert_eq!(&list.blocks()[block][offset], expected);
                prop_assert_eq!(list.position_of(block, offset), position);
            }
        }
    }
}
