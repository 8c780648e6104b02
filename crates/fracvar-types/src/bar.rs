//! Price bar representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single bar with the lowest and highest observed price.
///
/// Only the extremes matter for range scaling, so open/close/volume
/// columns of richer inputs are dropped when bars are read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Highest price during the bar.
    pub high: f64,
    /// Lowest price during the bar.
    pub low: f64,
}

impl Bar {
    /// Creates a new bar without a timestamp.
    #[must_use]
    pub const fn new(high: f64, low: f64) -> Self {
        Self {
            timestamp: None,
            high,
            low,
        }
    }

    /// Creates a new bar with a timestamp.
    #[must_use]
    pub const fn with_timestamp(timestamp: DateTime<Utc>, high: f64, low: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            high,
            low,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the midpoint ((high + low) / 2).
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// Returns true if the high is below the low.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.high < self.low
    }
}

/// Splits bars into parallel low and high vectors.
#[must_use]
pub fn split_bars(bars: &[Bar]) -> (Vec<f64>, Vec<f64>) {
    bars.iter().map(|bar| (bar.low, bar.high)).unzip()
}
