//! Error types for fracvar.

use thiserror::Error;

/// Result type alias for fracvar operations.
pub type Result<T> = std::result::Result<T, FracvarError>;

/// Errors that can occur while estimating the fractal dimension of a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FracvarError {
    /// The low and high series have different lengths.
    #[error("Length mismatch: {low} low values vs {high} high values")]
    LengthMismatch {
        /// Length of the low series.
        low: usize,
        /// Length of the high series.
        high: usize,
    },

    /// A block size does not evenly divide the working length.
    #[error("Dimension error: cannot partition {len} bars into blocks of {rows}")]
    Dimension {
        /// Working length of the series.
        len: usize,
        /// Requested block size.
        rows: usize,
    },

    /// A non-positive range sum leaves the logarithm undefined.
    #[error("Math domain error: range sum {range_sum} at scale {scale} is not positive")]
    MathDomain {
        /// Block size at which the range sum was taken.
        scale: u32,
        /// The offending range sum.
        range_sum: f64,
    },

    /// Least-squares fit preconditions are violated.
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Rolling window parameters are unusable.
    #[error("Invalid window: window {window} with step {step} (window must be >= {min}, step >= 1)")]
    InvalidWindow {
        /// Requested window length.
        window: usize,
        /// Requested step.
        step: usize,
        /// Smallest accepted window.
        min: usize,
    },
}

impl FracvarError {
    /// Returns true if the error comes from a flat stretch of data.
    #[must_use]
    pub const fn is_math_domain(&self) -> bool {
        matches!(self, Self::MathDomain { .. })
    }
}
