//! Format identifiers, errors and the output abstraction.

use fracvar_estimate::WindowEstimate;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Format of a bar input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    /// CSV with a header row.
    #[default]
    Csv,
    /// JSON array of bar objects.
    Json,
    /// Newline-delimited JSON bar objects.
    Ndjson,
}

impl InputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownFormat`] if the path has no recognised
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| FormatError::UnknownFormat(path.display().to_string()))?
            .parse()
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for InputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while reading bars or writing estimates.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown input format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),
}

/// Trait for estimate formatters.
pub trait Formatter: Send + Sync {
    /// Writes window estimates to the output.
    ///
    /// A whole-series estimate is written as a single window.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_estimates<W: Write + Send>(
        &self,
        estimates: &[WindowEstimate],
        writer: W,
    ) -> Result<(), FormatError>;
}
