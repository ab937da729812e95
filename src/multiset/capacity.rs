use super::OrderedMultiset;
use crate::raw::RawMultiset;

impl<T> OrderedMultiset<T> {
    /// Creates an empty multiset with node slots pre-allocated for at least
    /// `capacity` distinct values.
    ///
    /// Occurrence counts live inside the nodes, so duplicates never consume
    /// additional capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_tree::OrderedMultiset;
    ///
    /// let set: OrderedMultiset<i32> = OrderedMultiset::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMultiset {
            tree: RawMultiset::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct values the multiset can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_tree::OrderedMultiset;
    ///
    /// let set: OrderedMultiset<i32> = OrderedMultiset::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
