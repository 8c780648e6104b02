//! Variation index and fractal dimension estimation.

use std::sync::OnceLock;

use fracvar_aggregate::BlockAggregator;
use fracvar_types::{Bar, FracvarError, PriceSeries, Result, SCALE_COUNT, Scale, split_bars};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::LinearFit;

/// Series shorter than this still work but give noisy estimates.
pub const RECOMMENDED_MIN_BARS: usize = 128;

/// Fractal dimension of an uncorrelated (Brownian) series.
const BROWNIAN_DIMENSION: f64 = 1.5;

/// Static estimator instance.
static ESTIMATOR: OnceLock<FractalEstimator> = OnceLock::new();

/// Result of a fractal dimension estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalEstimate {
    /// Variation index (negated log-log slope).
    pub v_indx: f64,
    /// Fractal dimension (`v_indx + 1`).
    pub fractal_dim: f64,
    /// Summed block ranges, one per scale in ascending order.
    #[serde(rename = "V_sigma")]
    pub v_sigma: [f64; SCALE_COUNT],
    /// Block sizes in bars, always `[8, 16, 32]`.
    pub sigma: [u32; SCALE_COUNT],
}

impl FractalEstimate {
    /// Builds an estimate from range sums and the fitted log-log slope.
    #[must_use]
    pub fn from_slope(slope: f64, v_sigma: [f64; SCALE_COUNT]) -> Self {
        let v_indx = -slope;
        Self {
            v_indx,
            fractal_dim: v_indx + 1.0,
            v_sigma,
            sigma: Scale::sigmas(),
        }
    }

    /// Returns the Hurst exponent implied by the dimension (`2 - D`).
    #[must_use]
    pub fn hurst(&self) -> f64 {
        2.0 - self.fractal_dim
    }

    /// Returns true if the series trends (dimension below 1.5).
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.fractal_dim < BROWNIAN_DIMENSION
    }

    /// Returns true if the series mean-reverts (dimension above 1.5).
    #[must_use]
    pub fn is_anti_persistent(&self) -> bool {
        self.fractal_dim > BROWNIAN_DIMENSION
    }
}

/// Estimates the variation index and fractal dimension of a bar series.
///
/// The estimator is stateless; [`FractalEstimator::global`] returns a shared
/// instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalEstimator;

impl FractalEstimator {
    /// Creates a new estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the global estimator instance.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::new)
    }

    /// Estimates from parallel low and high slices.
    ///
    /// # Errors
    ///
    /// - [`FracvarError::LengthMismatch`] if the slices differ in length
    /// - [`FracvarError::Dimension`] if fewer than 32 bars are supplied
    /// - [`FracvarError::MathDomain`] if any range sum is not positive
    pub fn estimate(&self, low: &[f64], high: &[f64]) -> Result<FractalEstimate> {
        let series = PriceSeries::new(low, high)?;
        self.estimate_series(&series)
    }

    /// Estimates from bars.
    ///
    /// # Errors
    ///
    /// Same as [`Self::estimate`], minus the length check.
    pub fn estimate_bars(&self, bars: &[Bar]) -> Result<FractalEstimate> {
        let (low, high) = split_bars(bars);
        self.estimate(&low, &high)
    }

    /// Estimates from a validated series.
    ///
    /// # Errors
    ///
    /// Same as [`Self::estimate`], minus the length check.
    pub fn estimate_series(&self, series: &PriceSeries<'_>) -> Result<FractalEstimate> {
        if series.len() < RECOMMENDED_MIN_BARS {
            warn!(
                bars = series.len(),
                recommended = RECOMMENDED_MIN_BARS,
                "short series, estimate will be noisy"
            );
        }
        self.compute(series)
    }

    /// Returns the summed block range at each scale.
    ///
    /// The leading `len % 32` bars are dropped first.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::Dimension`] if nothing is left after trimming.
    pub fn range_sums(&self, series: &PriceSeries<'_>) -> Result<[f64; SCALE_COUNT]> {
        let trimmed = series.trimmed();
        let mut v_sigma = [0.0; SCALE_COUNT];
        for (slot, &scale) in v_sigma.iter_mut().zip(Scale::all()) {
            *slot = BlockAggregator::new(scale).range_sum(&trimmed)?;
        }
        debug!(
            bars = series.len(),
            dropped = series.leading_remainder(),
            v_sigma = ?v_sigma,
            "computed range sums"
        );
        Ok(v_sigma)
    }

    /// Runs the pipeline without the short-series warning.
    pub(crate) fn compute(&self, series: &PriceSeries<'_>) -> Result<FractalEstimate> {
        let v_sigma = self.range_sums(series)?;

        for (&scale, &range_sum) in Scale::all().iter().zip(&v_sigma) {
            if range_sum.is_nan() || range_sum <= 0.0 {
                return Err(FracvarError::MathDomain {
                    scale: scale.sigma(),
                    range_sum,
                });
            }
        }

        let log_sigma = Scale::sigmas().map(|s| f64::from(s).ln());
        let log_v = v_sigma.map(f64::ln);
        let fit = LinearFit::ols(&log_sigma, &log_v)?;

        let estimate = FractalEstimate::from_slope(fit.slope, v_sigma);
        debug!(
            v_indx = estimate.v_indx,
            fractal_dim = estimate.fractal_dim,
            "fitted log-log slope"
        );
        Ok(estimate)
    }
}

/// Estimates the variation index and fractal dimension of `(low, high)`.
///
/// Shorthand for [`FractalEstimator::estimate`] on the global estimator.
///
/// # Errors
///
/// See [`FractalEstimator::estimate`].
pub fn estimate(low: &[f64], high: &[f64]) -> Result<FractalEstimate> {
    FractalEstimator::global().estimate(low, high)
}
