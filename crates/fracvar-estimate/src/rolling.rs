//! Rolling-window estimation over long series.

use chrono::{DateTime, Utc};
use fracvar_types::{Bar, FracvarError, MAX_BLOCK, PriceSeries, Result, split_bars};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{FractalEstimate, FractalEstimator, RECOMMENDED_MIN_BARS};

/// Estimate for one window `[start, end)` of a longer series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowEstimate {
    /// Index of the first bar in the window.
    pub start: usize,
    /// Index one past the last bar in the window.
    pub end: usize,
    /// Timestamp of the last bar in the window, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// The estimate for this window.
    #[serde(flatten)]
    pub estimate: FractalEstimate,
}

/// Applies the estimator to fixed-length windows sliding over a series.
#[derive(Debug, Clone, Copy)]
pub struct RollingEstimator {
    window: usize,
    step: usize,
    estimator: FractalEstimator,
}

impl RollingEstimator {
    /// Creates a rolling estimator.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::InvalidWindow`] if `window < 32` or `step == 0`.
    pub fn new(window: usize, step: usize) -> Result<Self> {
        if window < MAX_BLOCK || step == 0 {
            return Err(FracvarError::InvalidWindow {
                window,
                step,
                min: MAX_BLOCK,
            });
        }
        if window < RECOMMENDED_MIN_BARS {
            warn!(
                window,
                recommended = RECOMMENDED_MIN_BARS,
                "short window, estimates will be noisy"
            );
        }
        Ok(Self {
            window,
            step,
            estimator: FractalEstimator::new(),
        })
    }

    /// Returns the window length in bars.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Returns the distance between consecutive window starts.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns the number of windows that fit in `len` bars.
    #[must_use]
    pub const fn window_count(&self, len: usize) -> usize {
        if len < self.window {
            0
        } else {
            (len - self.window) / self.step + 1
        }
    }

    /// Estimates every window of parallel low and high slices.
    ///
    /// Windows over a flat stretch (zero range at some scale) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::LengthMismatch`] if the slices differ in length,
    /// or any non-domain error raised for a window.
    pub fn estimate(&self, low: &[f64], high: &[f64]) -> Result<Vec<WindowEstimate>> {
        let series = PriceSeries::new(low, high)?;
        self.run(&series, |_| None)
    }

    /// Estimates every window of a bar series, stamping each result with
    /// the timestamp of the window's last bar.
    ///
    /// # Errors
    ///
    /// Same as [`Self::estimate`], minus the length check.
    pub fn estimate_bars(&self, bars: &[Bar]) -> Result<Vec<WindowEstimate>> {
        let (low, high) = split_bars(bars);
        let series = PriceSeries::new(&low, &high)?;
        self.run(&series, |end| bars[end - 1].timestamp)
    }

    fn run<F>(&self, series: &PriceSeries<'_>, timestamp_at: F) -> Result<Vec<WindowEstimate>>
    where
        F: Fn(usize) -> Option<DateTime<Utc>>,
    {
        let count = self.window_count(series.len());
        let mut results = Vec::with_capacity(count);

        for start in (0..count).map(|i| i * self.step) {
            let end = start + self.window;
            match self.estimator.compute(&series.slice(start, end)) {
                Ok(estimate) => results.push(WindowEstimate {
                    start,
                    end,
                    timestamp: timestamp_at(end),
                    estimate,
                }),
                Err(err) if err.is_math_domain() => {
                    debug!(start, end, error = %err, "skipping flat window");
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            windows = count,
            estimated = results.len(),
            "rolling estimation finished"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_invalid_window() {
        assert!(matches!(
            RollingEstimator::new(16, 1),
            Err(FracvarError::InvalidWindow { window: 16, .. })
        ));
        assert!(RollingEstimator::new(64, 0).is_err());
    }

    #[test]
    fn test_window_count() {
        let rolling = RollingEstimator::new(128, 32).unwrap();
        assert_eq!(rolling.window_count(100), 0);
        assert_eq!(rolling.window_count(128), 1);
        assert_eq!(rolling.window_count(255), 4);
        assert_eq!(rolling.window_count(256), 5);
    }

    #[test]
    fn test_rolling_windows() {
        let low = vec![0.0; 96];
        let high = vec![1.0; 96];
        let rolling = RollingEstimator::new(64, 16).unwrap();

        let results = rolling.estimate(&low, &high).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!((results[0].start, results[0].end), (0, 64));
        assert_eq!((results[2].start, results[2].end), (32, 96));
        for window in &results {
            assert_eq!(window.estimate.v_sigma, [8.0, 4.0, 2.0]);
            assert_abs_diff_eq!(window.estimate.fractal_dim, 2.0, epsilon = 1e-12);
            assert_eq!(window.timestamp, None);
        }
    }

    #[test]
    fn test_flat_windows_skipped() {
        // First 64 bars flat, last 64 bars with unit range.
        let mut low = vec![5.0; 128];
        let mut high = vec![5.0; 128];
        low[64..].fill(0.0);
        high[64..].fill(1.0);

        let rolling = RollingEstimator::new(64, 64).unwrap();
        let results = rolling.estimate(&low, &high).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start, 64);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let rolling = RollingEstimator::new(32, 1).unwrap();
        let err = rolling.estimate(&[0.0; 40], &[1.0; 41]).unwrap_err();
        assert_eq!(err, FracvarError::LengthMismatch { low: 40, high: 41 });
    }

    #[test]
    fn test_bars_carry_last_timestamp() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let bars: Vec<Bar> = (0..64)
            .map(|i| Bar::with_timestamp(base + chrono::TimeDelta::minutes(i), 1.0, 0.0))
            .collect();

        let rolling = RollingEstimator::new(32, 32).unwrap();
        let results = rolling.estimate_bars(&bars).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].timestamp, bars[31].timestamp);
        assert_eq!(results[1].timestamp, bars[63].timestamp);
    }
}
