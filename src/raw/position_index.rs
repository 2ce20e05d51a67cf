use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use spin::Once;

/// Implicit binary summation tree over block lengths.
///
/// The tree is stored heap-style in one flat array: the root is at `0`, the
/// children of node `i` are at `2i + 1` and `2i + 2`, and the leaves start at
/// `offset`. The leaf count is padded to a power of two with zero leaves, so
/// every internal node has exactly two children and holds their sum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PositionIndex {
    tree: Vec<usize>,
    offset: usize,
}

impl PositionIndex {
    /// Builds the tree from block lengths, in block order.
    pub(crate) fn build<I>(lengths: I) -> Self
    where
        I: ExactSizeIterator<Item = usize>,
    {
        let leaves = lengths.len().next_power_of_two();
        let offset = leaves - 1;
        let mut tree = vec![0; offset + leaves];

        for (slot, length) in tree[offset..].iter_mut().zip(lengths) {
            *slot = length;
        }
        for node in (0..offset).rev() {
            tree[node] = tree[2 * node + 1] + tree[2 * node + 2];
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(leaves, total = tree[0], "position index built");

        Self {
            tree,
            offset,
        }
    }

    /// Sum of all leaves.
    pub(crate) fn total(&self) -> usize {
        self.tree[0]
    }

    /// Translates a global position into `(block, offset within block)`.
    ///
    /// `position` must be less than [`total`](Self::total).
    pub(crate) fn locate(&self, mut position: usize) -> (usize, usize) {
        debug_assert!(position < self.total(), "`PositionIndex::locate()` - `position` >= total!");

        let mut node = 0;
        while node < self.offset {
            let left = 2 * node + 1;
            if position < self.tree[left] {
                node = left;
            } else {
                position -= self.tree[left];
                node = left + 1;
            }
        }
        (node - self.offset, position)
    }

    /// Translates `(block, offset within block)` into a global position.
    pub(crate) fn position_of(&self, block: usize, offset: usize) -> usize {
        let mut node = self.leaf(block);
        let mut position = offset;
        while node > 0 {
            // Right children have even indices.
            if node % 2 == 0 {
                position += self.tree[node - 1];
            }
            node = (node - 1) / 2;
        }
        position
    }

    /// Records that `block` gained one element.
    pub(crate) fn increment(&mut self, block: usize) {
        let mut node = self.leaf(block);
        loop {
            self.tree[node] += 1;
            if node == 0 {
                break;
            }
            node = (node - 1) / 2;
        }
    }

    /// Records that `block` lost one element.
    pub(crate) fn decrement(&mut self, block: usize) {
        let mut node = self.leaf(block);
        loop {
            self.tree[node] -= 1;
            if node == 0 {
                break;
            }
            node = (node - 1) / 2;
        }
    }

    /// Leaf values, including zero padding.
    #[cfg(test)]
    pub(crate) fn leaves(&self) -> &[usize] {
        &self.tree[self.offset..]
    }

    /// Checks that every internal node is the sum of its children.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        (0..self.offset).all(|node| self.tree[node] == self.tree[2 * node + 1] + self.tree[2 * node + 2])
    }

    fn leaf(&self, block: usize) -> usize {
        let node = self.offset + block;
        assert!(node < self.tree.len(), "`PositionIndex::leaf()` - `block` is out of range!");
        node
    }
}

/// The position index as cached, derived state: either unbuilt or built.
///
/// Building happens lazily through a shared reference on the first positional
/// query. Concurrent readers racing on the first build wait for a single
/// builder. Any change in block count must [`invalidate`](Self::invalidate)
/// it; a change in a single block's length may update it in place through
/// [`built_mut`](Self::built_mut), which only yields the tree when it is built.
pub(crate) struct LazyIndex {
    built: Once<PositionIndex>,
}

impl LazyIndex {
    pub(crate) const fn new() -> Self {
        Self { built: Once::new() }
    }

    /// Returns the built tree, building it from `lengths` if necessary.
    pub(crate) fn get_or_build<I>(&self, lengths: impl FnOnce() -> I) -> &PositionIndex
    where
        I: ExactSizeIterator<Item = usize>,
    {
        self.built.call_once(|| PositionIndex::build(lengths()))
    }

    /// Returns the tree for in-place updates, or `None` if it is unbuilt.
    pub(crate) fn built_mut(&mut self) -> Option<&mut PositionIndex> {
        self.built.get_mut()
    }

    pub(crate) fn is_built(&self) -> bool {
        self.built.is_completed()
    }

    #[cfg(test)]
    pub(crate) fn built(&self) -> Option<&PositionIndex> {
        self.built.get()
    }

    pub(crate) fn invalidate(&mut self) {
        self.built = Once::new();
    }
}

impl Clone for LazyIndex {
    fn clone(&self) -> Self {
        match self.built.get() {
            Some(index) => Self {
                built: Once::initialized(index.clone()),
            },
            None => Self::new(),
        }
    }
}

impl Default for LazyIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LazyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyIndex").field("built", &self.built.get()).finish()
    }
}
