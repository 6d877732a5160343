//! Inclusive numeric bands over the five-digit ZIP space.

use crate::rng::RandomSource;

/// A closed interval `[lo, hi]` of five-digit ZIP numbers.
///
/// Both ends are inclusive. Construction is `const` and asserts that the
/// interval is non-empty and stays within `0..=99999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    lo: u32,
    hi: u32,
}

impl Band {
    #[must_use]
    pub const fn new(lo: u32, hi: u32) -> Self {
        assert!(lo <= hi, "band must not be empty");
        assert!(hi <= 99_999, "band must stay within the five-digit space");
        Self { lo, hi }
    }

    #[must_use]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    #[must_use]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Number of values in the band; both ends count.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.hi - self.lo + 1
    }

    #[must_use]
    pub const fn contains(self, n: u32) -> bool {
        self.lo <= n && n <= self.hi
    }

    /// Draws one value uniformly from the band using a single sample.
    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> u32 {
        self.lo + (rng.next_f64() * f64::from(self.width())) as u32
    }
}
