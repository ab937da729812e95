//! Order-statistic multiset for Rust.
//!
//! This crate provides [`OrderedMultiset`], an ordered collection with multiset
//! semantics (duplicate values collapse into a per-value occurrence count) and
//! O(log n) order-statistic operations:
//!
//! - [`rank`](OrderedMultiset::rank) - Count the elements strictly less than a value
//! - [`select`](OrderedMultiset::select) - Get the element at a given sorted position
//! - [`predecessor`](OrderedMultiset::predecessor) / [`successor`](OrderedMultiset::successor) -
//!   Nearest neighbors strictly below / above a value
//! - Indexing by [`Rank`] - e.g., `set[Rank(1)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use tally_tree::OrderedMultiset;
//!
//! let mut scores = OrderedMultiset::new();
//! scores.insert(85);
//! scores.insert(92);
//! scores.insert(92);
//! scores.insert(100);
//!
//! // Multiset semantics: duplicates are counted, not discarded.
//! assert_eq!(scores.len(), 4);
//! assert_eq!(scores.count(&92), 2);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(scores.rank(&92), 1); // only 85 is strictly less
//! assert_eq!(scores.select(3), Ok(&92)); // positions are 1-indexed
//! assert_eq!(scores.predecessor(&92), Some(&85));
//! assert_eq!(scores.successor(&92), Some(&100));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Multiset semantics** - Duplicates share one node via an occurrence count
//! - **O(log n) rank operations** - Order-statistic queries via subtree size augmentation
//! - **Compact storage** - AVL nodes live in a contiguous arena addressed by indices
//!
//! # Implementation
//!
//! The multiset is an AVL tree augmented with per-subtree occurrence totals.
//! Nodes are stored in an arena and linked by index handles rather than
//! pointers; freed slots are recycled through a free list. Every mutation
//! restores the height-balance and subtree-size invariants bottom-up along
//! the traversal path, so queries can skip whole branches by size alone.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
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

mod order_statistic;
mod raw;

pub mod multiset;

pub use multiset::OrderedMultiset;
pub use order_statistic::{OutOfRangeError, Rank};
