//! Scales command implementation.

use anyhow::Result;
use fracvar_lib::{MAX_BLOCK, RECOMMENDED_MIN_BARS};
use fracvar_lib::prelude::*;

/// Print the block scales the estimator partitions a series into.
pub(crate) fn show_scales() -> Result<()> {
    println!("{:<8} {:>10} {:>10}", "SCALE", "EXPONENT", "ROWS");
    println!("{}", "-".repeat(30));

    for scale in Scale::all() {
        println!(
            "{:<8} {:>10} {:>10}",
            scale.as_str(),
            format!("2^{}", scale.exponent()),
            scale.rows()
        );
    }

    println!("\nSeries are trimmed to a multiple of {MAX_BLOCK} bars (oldest bars dropped).");
    println!("At least {RECOMMENDED_MIN_BARS} bars are recommended.");
    Ok(())
}
