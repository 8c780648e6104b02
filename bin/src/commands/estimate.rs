//! Estimate command implementation.
//!
//! Runs the estimator once over every bar in the input file.

use anyhow::{Context, Result};
use fracvar_lib::prelude::*;
use std::path::Path;

use crate::display::{self, Format};

/// Estimate the fractal dimension of a whole bar file.
pub(crate) async fn estimate(
    input: &Path,
    input_format: Option<InputFormat>,
    format: Format,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let bars = read_bars_from_path(input, input_format)
        .await
        .with_context(|| format!("Failed to read bars from {}", input.display()))?;
    tracing::info!(path = %input.display(), bars = bars.len(), "loaded bars");
    display::warn_inverted(&bars);

    let estimate = FractalEstimator::global()
        .estimate_bars(&bars)
        .with_context(|| format!("Cannot estimate {} bars", bars.len()))?;

    let row = WindowEstimate {
        start: 0,
        end: bars.len(),
        timestamp: bars.last().and_then(|bar| bar.timestamp),
        estimate,
    };
    display::emit(&[row], output, format, pretty)
}
