use thiserror::Error;

/// A one-based rank into the sorted order of a multiset.
///
/// Position 1 is the smallest element; position `len()` is the largest.
/// Duplicate values occupy as many consecutive positions as their
/// occurrence count.
///
/// # Examples
///
/// ```
/// use tally_tree::{OrderedMultiset, Rank};
///
/// let set = OrderedMultiset::from([10, 20, 20]);
///
/// assert_eq!(set[Rank(1)], 10);
/// assert_eq!(set[Rank(3)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub u64);

/// The error returned by [`select`](crate::OrderedMultiset::select) when the
/// requested position lies outside `1..=len()`.
///
/// Out-of-range positions are reported rather than clamped; a clamped result
/// would be indistinguishable from a legitimate answer.
///
/// # Examples
///
/// ```
/// use tally_tree::{OrderedMultiset, OutOfRangeError};
///
/// let set = OrderedMultiset::from([10, 20]);
///
/// assert_eq!(set.select(0), Err(OutOfRangeError { rank: 0, len: 2 }));
/// assert_eq!(set.select(3), Err(OutOfRangeError { rank: 3, len: 2 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("rank {rank} is out of range 1..={len}")]
pub struct OutOfRangeError {
    /// The requested one-based rank.
    pub rank: u64,
    /// The total occurrence count at the time of the call.
    pub len: u64,
}
