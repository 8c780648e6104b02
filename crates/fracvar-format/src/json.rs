//! JSON and NDJSON output.

use fracvar_estimate::WindowEstimate;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Writes estimates as one JSON array, or as one object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    lines: bool,
    pretty: bool,
}

impl JsonFormatter {
    /// Array output, compact.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: false,
            pretty: false,
        }
    }

    /// Newline-delimited output, one window per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            lines: true,
            pretty: false,
        }
    }

    /// Indents array output. Ignored for NDJSON.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_estimates<W: Write + Send>(
        &self,
        estimates: &[WindowEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.lines {
            for row in estimates {
                serde_json::to_writer(&mut writer, row)?;
                writer.write_all(b"\n")?;
            }
            return Ok(());
        }

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, estimates)?;
        } else {
            serde_json::to_writer(&mut writer, estimates)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}
