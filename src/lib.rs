//! A sorted list for Rust, built from bounded sorted blocks.
//!
//! This crate provides [`SortedList`], a mutable collection that keeps its
//! elements in ascending order while supporting both value-based queries
//! (membership, rank, value ranges) and position-based queries (indexing,
//! slicing, positional removal):
//!
//! - [`bisect_left`](SortedList::bisect_left) / [`bisect_right`](SortedList::bisect_right) -
//!   Insertion points before or after equal elements
//! - [`get`](SortedList::get) / [`get_range`](SortedList::get_range) - Access by
//!   position, with negative positions counting from the end
//! - [`update`](SortedList::update) - Bulk insertion that rebuilds the list when
//!   the batch is large
//!
//! # Example
//!
//! ```
//! use sorted_blocks::SortedList;
//!
//! let mut latencies = SortedList::new();
//! latencies.update([120, 85, 300, 95, 85]);
//!
//! // Value-based queries
//! assert!(latencies.contains(&95));
//! assert_eq!(latencies.count(&85), 2);
//! assert_eq!(latencies.bisect_right(&100), 3); // three samples at or under 100
//!
//! // Position-based queries (O(log n))
//! let median = latencies.get(2)?;
//! assert_eq!(*median, 95);
//! assert_eq!(latencies.get(-1)?, &300);
//!
//! // Removal by value or by position
//! latencies.remove(&300);
//! assert_eq!(latencies.remove_at(0)?, 85);
//! assert_eq!(latencies.iter().copied().collect::<Vec<_>>(), [85, 95, 120]);
//! # Ok::<(), sorted_blocks::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Cache-efficient** - Elements live in contiguous blocks of about
//!   [`load_factor`](SortedList::load_factor) elements
//! - **`tracing`** (cargo feature) - Emits structured events for block splits,
//!   merges, index builds and bulk rebuilds
//!
//! # Implementation
//!
//! The list is a sequence of sorted blocks plus the maximum of each block.
//! Value lookups binary search the maxima to pick a block, then the block
//! itself. Blocks split when they exceed twice the load factor and merge when
//! they fall under half of it. Position lookups descend an implicit summation
//! tree over block lengths, which is built lazily and updated in place while
//! the number of blocks stays the same.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod sorted_list;

pub use error::{Error, Result};
pub use sorted_list::{DEFAULT_LOAD_FACTOR, SortedList};
