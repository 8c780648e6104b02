//! CSV output format.

use fracvar_estimate::WindowEstimate;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_estimates<W: Write + Send>(
        &self,
        estimates: &[WindowEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "start{d}end{d}timestamp{d}v_indx{d}fractal_dim{d}v_sigma_8{d}v_sigma_16{d}v_sigma_32"
            )?;
        }

        for row in estimates {
            let timestamp = row
                .timestamp
                .map(|ts| ts.format("%Y-%m-%dT%H:%M:%SZ").to_string())
                .unwrap_or_default();
            let est = &row.estimate;
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                row.start,
                row.end,
                timestamp,
                est.v_indx,
                est.fractal_dim,
                est.v_sigma[0],
                est.v_sigma[1],
                est.v_sigma[2]
            )?;
        }

        Ok(())
    }
}
