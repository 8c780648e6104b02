//! Rolling command implementation.

use anyhow::{Context, Result};
use fracvar_lib::prelude::*;
use std::path::Path;

use crate::display::{self, Format};

/// Estimate the fractal dimension over sliding windows of a bar file.
pub(crate) async fn rolling(
    input: &Path,
    window: usize,
    step: usize,
    input_format: Option<InputFormat>,
    format: Format,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let estimator = RollingEstimator::new(window, step)?;

    let bars = read_bars_from_path(input, input_format)
        .await
        .with_context(|| format!("Failed to read bars from {}", input.display()))?;
    tracing::info!(
        path = %input.display(),
        bars = bars.len(),
        windows = estimator.window_count(bars.len()),
        "loaded bars"
    );
    display::warn_inverted(&bars);

    if bars.len() < window {
        tracing::warn!(bars = bars.len(), window, "input shorter than one window");
    }

    let rows = estimator
        .estimate_bars(&bars)
        .context("Rolling estimation failed")?;
    display::emit(&rows, output, format, pretty)
}
