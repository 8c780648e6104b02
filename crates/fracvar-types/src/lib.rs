//! Core types for the fracvar fractal dimension estimator.
//!
//! This crate provides the fundamental data structures used throughout fracvar:
//!
//! - [`Bar`] - A price bar with optional timestamp, high, and low
//! - [`PriceSeries`] - Length-validated pair of low and high slices
//! - [`Scale`] - Dyadic block size used to partition a series
//! - [`FracvarError`] - Typed failures of the estimation pipeline

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fracvar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod scale;
mod series;

pub use bar::{Bar, split_bars};
pub use error::{FracvarError, Result};
pub use scale::{MAX_BLOCK, SCALE_COUNT, Scale, ScaleParseError};
pub use series::PriceSeries;
