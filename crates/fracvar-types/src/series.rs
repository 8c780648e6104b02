//! Validated low/high series.

use crate::{FracvarError, MAX_BLOCK, Result};

/// Borrowed pair of equal-length low and high price slices.
///
/// Construction rejects slices of different lengths, so every consumer
/// can index both sides in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSeries<'a> {
    low: &'a [f64],
    high: &'a [f64],
}

impl<'a> PriceSeries<'a> {
    /// Creates a series from parallel low and high slices.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::LengthMismatch`] if the slices differ in length.
    pub const fn new(low: &'a [f64], high: &'a [f64]) -> Result<Self> {
        if low.len() != high.len() {
            return Err(FracvarError::LengthMismatch {
                low: low.len(),
                high: high.len(),
            });
        }
        Ok(Self { low, high })
    }

    /// Returns the low prices.
    #[must_use]
    pub const fn low(&self) -> &'a [f64] {
        self.low
    }

    /// Returns the high prices.
    #[must_use]
    pub const fn high(&self) -> &'a [f64] {
        self.high
    }

    /// Returns the number of bars.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.low.len()
    }

    /// Returns true if the series holds no bars.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// Returns the number of leading bars dropped by [`Self::trimmed`].
    #[must_use]
    pub const fn leading_remainder(&self) -> usize {
        self.len() % MAX_BLOCK
    }

    /// Returns the suffix whose length is a multiple of the largest block.
    ///
    /// The first `len % 32` bars are dropped so the most recent bars are kept.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let skip = self.leading_remainder();
        Self {
            low: &self.low[skip..],
            high: &self.high[skip..],
        }
    }

    /// Returns the sub-series `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            low: &self.low[start..end],
            high: &self.high[start..end],
        }
    }
}
