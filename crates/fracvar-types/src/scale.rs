//! Dyadic block scales used to partition a bar series.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of scales in the fixed scale set.
pub const SCALE_COUNT: usize = 3;

/// Largest block size. Series are trimmed to a multiple of this.
pub const MAX_BLOCK: usize = 32;

/// Block size, in bars, at which a series is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    /// Blocks of 8 bars (2^3).
    #[serde(rename = "8")]
    Bars8,
    /// Blocks of 16 bars (2^4).
    #[serde(rename = "16")]
    Bars16,
    /// Blocks of 32 bars (2^5).
    #[serde(rename = "32")]
    Bars32,
}

impl Scale {
    /// Returns the number of bars per block.
    #[must_use]
    pub const fn rows(&self) -> usize {
        1 << self.exponent()
    }

    /// Returns the base-2 exponent of the block size.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        match self {
            Self::Bars8 => 3,
            Self::Bars16 => 4,
            Self::Bars32 => 5,
        }
    }

    /// Returns the block size as a `u32`, the form echoed in results.
    #[must_use]
    pub const fn sigma(&self) -> u32 {
        1 << self.exponent()
    }

    /// Returns the scale as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bars8 => "8",
            Self::Bars16 => "16",
            Self::Bars32 => "32",
        }
    }

    /// Returns all scales in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self; SCALE_COUNT] {
        &[Self::Bars8, Self::Bars16, Self::Bars32]
    }

    /// Returns the block sizes of all scales in ascending order.
    #[must_use]
    pub const fn sigmas() -> [u32; SCALE_COUNT] {
        [
            Self::Bars8.sigma(),
            Self::Bars16.sigma(),
            Self::Bars32.sigma(),
        ]
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scale {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "8" | "2^3" | "bars8" => Ok(Self::Bars8),
            "16" | "2^4" | "bars16" => Ok(Self::Bars16),
            "32" | "2^5" | "bars32" => Ok(Self::Bars32),
            _ => Err(ScaleParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid scale string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleParseError(String);

impl std::fmt::Display for ScaleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid scale '{}', expected one of: 8, 16, 32", self.0)
    }
}

impl std::error::Error for ScaleParseError {}
