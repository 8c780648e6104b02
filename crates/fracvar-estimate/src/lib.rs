//! Variation index and fractal dimension estimation for price series.
//!
//! This crate measures how the price range of a series scales with block
//! size:
//!
//! - [`FractalEstimator`] - Single-shot estimator over a whole series
//! - [`FractalEstimate`] - Variation index, fractal dimension and range sums
//! - [`RollingEstimator`] - Applies the estimator to sliding windows
//! - [`WindowEstimate`] - Estimate for one window
//! - [`LinearFit`] - Ordinary least-squares line fit

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fracvar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod fit;
mod rolling;

pub use estimator::{FractalEstimate, FractalEstimator, RECOMMENDED_MIN_BARS, estimate};
pub use fit::LinearFit;
pub use rolling::{RollingEstimator, WindowEstimate};
