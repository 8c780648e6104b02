//! Display utilities and output formatting for the fracvar CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fracvar_lib::MAX_BLOCK;
use fracvar_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output format for estimates.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

/// Input format for bar files.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum InputKind {
    Csv,
    Json,
    Ndjson,
}

impl From<InputKind> for InputFormat {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Csv => Self::Csv,
            InputKind::Json => Self::Json,
            InputKind::Ndjson => Self::Ndjson,
        }
    }
}

/// Warn about bars whose high is below their low.
pub(crate) fn warn_inverted(bars: &[Bar]) {
    let inverted = bars.iter().filter(|bar| bar.is_inverted()).count();
    if inverted > 0 {
        tracing::warn!(inverted, "bars with high below low, estimate may be meaningless");
    }
}

/// Write estimates to `output` (or stdout) in the given format.
pub(crate) fn emit(
    rows: &[WindowEstimate],
    output: Option<&Path>,
    format: Format,
    pretty: bool,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_rows(rows, BufWriter::new(file), format, pretty)?;
            tracing::info!(path = %path.display(), rows = rows.len(), "wrote estimates");
            Ok(())
        }
        None => write_rows(rows, BufWriter::new(io::stdout()), format, pretty),
    }
}

fn write_rows<W: Write + Send>(
    rows: &[WindowEstimate],
    mut writer: W,
    format: Format,
    pretty: bool,
) -> Result<()> {
    match format {
        Format::Table => write_table(rows, &mut writer)?,
        Format::Csv => CsvFormatter::new().write_estimates(rows, &mut writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_estimates(rows, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_estimates(rows, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write a human-readable table.
///
/// A single row gets the per-scale breakdown; several rows are listed one
/// window per line.
fn write_table<W: Write>(rows: &[WindowEstimate], writer: &mut W) -> io::Result<()> {
    if let [row] = rows {
        return write_summary(row, writer);
    }

    writeln!(
        writer,
        "{:>8} {:>8} {:<22} {:>10} {:>12}",
        "START", "END", "TIMESTAMP", "V_INDEX", "FRACTAL_DIM"
    )?;
    writeln!(writer, "{}", "-".repeat(64))?;
    for row in rows {
        writeln!(
            writer,
            "{:>8} {:>8} {:<22} {:>10.4} {:>12.4}",
            row.start,
            row.end,
            format_timestamp(row),
            row.estimate.v_indx,
            row.estimate.fractal_dim
        )?;
    }
    writeln!(writer, "\nTotal: {} windows", rows.len())
}

fn write_summary<W: Write>(row: &WindowEstimate, writer: &mut W) -> io::Result<()> {
    let est = &row.estimate;
    let bars = row.end - row.start;

    writeln!(writer, "Bars:              {bars}")?;
    writeln!(
        writer,
        "Bars used:         {} (first {} dropped)",
        bars - bars % MAX_BLOCK,
        bars % MAX_BLOCK
    )?;
    if row.timestamp.is_some() {
        writeln!(writer, "Last bar:          {}", format_timestamp(row))?;
    }

    writeln!(writer, "\n{:<8} {:>16}", "SIGMA", "V_SIGMA")?;
    writeln!(writer, "{}", "-".repeat(25))?;
    for (sigma, v) in est.sigma.iter().zip(&est.v_sigma) {
        writeln!(writer, "{sigma:<8} {v:>16.6}")?;
    }

    writeln!(writer, "\nVariation index:   {:.6}", est.v_indx)?;
    writeln!(writer, "Fractal dimension: {:.6}", est.fractal_dim)?;
    writeln!(writer, "Regime:            {}", regime(est))
}

fn regime(est: &FractalEstimate) -> &'static str {
    if est.is_persistent() {
        "persistent (trending)"
    } else if est.is_anti_persistent() {
        "anti-persistent (mean-reverting)"
    } else {
        "brownian"
    }
}

fn format_timestamp(row: &WindowEstimate) -> String {
    row.timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(start: usize, end: usize) -> WindowEstimate {
        WindowEstimate {
            start,
            end,
            timestamp: None,
            estimate: FractalEstimate::from_slope(-0.5, [6.0, 4.0, 3.0]),
        }
    }

    #[test]
    fn test_summary_table() {
        let mut out = Vec::new();
        write_table(&[row(0, 40)], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Bars used:         32 (first 8 dropped)"));
        assert!(text.contains("Fractal dimension: 1.500000"));
        assert!(text.contains("brownian"));
    }

    #[test]
    fn test_rolling_table() {
        let mut out = Vec::new();
        write_table(&[row(0, 64), row(1, 65)], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total: 2 windows"));
        assert_eq!(text.lines().filter(|l| l.contains("1.5000")).count(), 2);
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        emit(&[row(0, 32)], Some(path.as_path()), Format::Csv, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("start,end,timestamp"));
    }
}
