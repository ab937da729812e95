use core::num::NonZero;

/// The occurrence count of one distinct value.
///
/// A node exists only while at least one occurrence of its value is alive, so
/// the count is `NonZero` and `Option<Count>` costs nothing extra.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Count(NonZero<u32>);

impl Count {
    pub(crate) const ONE: Self = Self(NonZero::<u32>::MIN);
    pub(crate) const MAX: u32 = u32::MAX;

    #[inline]
    pub(crate) const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the count one higher than `self`.
    #[inline]
    pub(crate) const fn incremented(self) -> Self {
        assert!(self.get() < Self::MAX, "`Count::incremented()` - occurrence count is at maximum capacity!");
        Self(NonZero::new(self.get() + 1).unwrap())
    }

    /// Returns the count one lower than `self`. The last occurrence is removed
    /// by freeing the node, never by decrementing through zero.
    #[inline]
    pub(crate) const fn decremented(self) -> Self {
        assert!(self.get() > 1, "`Count::decremented()` - cannot decrement a count of one!");
        Self(NonZero::new(self.get() - 1).unwrap())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Count` and the niche optimization.
    assert_eq_size!(Count, Option<Count>);
    assert_eq_size!(Count, u32);

    #[test]
    #[should_panic(expected = "`Count::decremented()` - cannot decrement a count of one!")]
    fn decrement_of_one() {
        let _ = Count::ONE.decremented();
    }

    proptest! {
        #[test]
        fn increment_then_decrement_round_trip(bumps in 1u32..64) {
            let mut count = Count::ONE;
            for _ in 0..bumps {
                count = count.incremented();
            }
            assert_eq!(count.get(), bumps + 1);
            for _ in 0..bumps {
                count = count.decremented();
            }
            assert_eq!(count, Count::ONE);
        }
    }
}
