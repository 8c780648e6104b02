//! Variation index and fractal dimension of price series.
//!
//! This is a facade crate that re-exports functionality from the fracvar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use fracvar_lib::prelude::*;
//!
//! let low: Vec<f64> = (0..128u32).map(f64::from).collect();
//! let high: Vec<f64> = low.iter().map(|l| l + 1.0).collect();
//!
//! let est = estimate(&low, &high)?;
//! println!("fractal dimension: {:.3}", est.fractal_dim);
//! # Ok::<(), FracvarError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fracvar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use fracvar_types::*;

// Re-export block aggregation
pub use fracvar_aggregate::{Block, BlockAggregator, BlockMatrix};

// Re-export estimation
pub use fracvar_estimate::{
    FractalEstimate, FractalEstimator, LinearFit, RECOMMENDED_MIN_BARS, RollingEstimator,
    WindowEstimate, estimate,
};

// Re-export formats
#[cfg(feature = "format")]
pub use fracvar_format::{
    CsvFormatter, FormatError, Formatter, InputFormat, JsonFormatter, read_bars,
    read_bars_from_path,
};

/// Prelude module for convenient imports.
///
/// ```
/// use fracvar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use fracvar_types::{Bar, FracvarError, PriceSeries, Result, Scale, split_bars};

    pub use fracvar_estimate::{
        FractalEstimate, FractalEstimator, RollingEstimator, WindowEstimate, estimate,
    };

    #[cfg(feature = "format")]
    pub use fracvar_format::{
        CsvFormatter, Formatter, InputFormat, JsonFormatter, read_bars, read_bars_from_path,
    };
}
