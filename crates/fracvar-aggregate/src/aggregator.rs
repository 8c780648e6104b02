//! Block aggregation of bars at a fixed scale.

use fracvar_types::{PriceSeries, Result, Scale};
use tracing::trace;

use crate::block::{nan_max, nan_min};
use crate::{Block, BlockMatrix};

/// Aggregates consecutive bars into blocks of `scale.rows()` bars.
///
/// Each block keeps the lowest low and the highest high of its bars, like a
/// candlestick rebuilt at a coarser timeframe.
#[derive(Debug, Clone, Copy)]
pub struct BlockAggregator {
    scale: Scale,
}

impl BlockAggregator {
    /// Creates a new aggregator for the given scale.
    #[must_use]
    pub const fn new(scale: Scale) -> Self {
        Self { scale }
    }

    /// Returns the scale being aggregated to.
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Aggregates the series into blocks.
    ///
    /// The series length must be a positive multiple of the block size;
    /// callers trim beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`fracvar_types::FracvarError::Dimension`] if the series
    /// cannot be partitioned evenly.
    pub fn blocks(&self, series: &PriceSeries<'_>) -> Result<Vec<Block>> {
        let rows = self.scale.rows();
        let lows = BlockMatrix::new(series.low(), rows)?;
        let highs = BlockMatrix::new(series.high(), rows)?;
        trace!(scale = %self.scale, shape = ?lows.shape(), "partitioned series");

        let blocks = lows
            .columns()
            .zip(highs.columns())
            .enumerate()
            .map(|(index, (low, high))| {
                let mut builder = BlockBuilder::new(index);
                for (&l, &h) in low.iter().zip(high) {
                    builder.update(l, h);
                }
                builder.finish()
            })
            .collect();

        Ok(blocks)
    }

    /// Returns the sum of block ranges across the whole series.
    ///
    /// # Errors
    ///
    /// Returns [`fracvar_types::FracvarError::Dimension`] if the series
    /// cannot be partitioned evenly.
    pub fn range_sum(&self, series: &PriceSeries<'_>) -> Result<f64> {
        let rows = self.scale.rows();
        let lows = BlockMatrix::new(series.low(), rows)?;
        let highs = BlockMatrix::new(series.high(), rows)?;

        let amp_min = lows.column_min();
        let amp_max = highs.column_max();
        trace!(
            scale = %self.scale,
            min_shape = amp_min.len(),
            max_shape = amp_max.len(),
            "reduced blocks"
        );

        Ok(amp_max.iter().zip(&amp_min).map(|(max, min)| max - min).sum())
    }
}

/// Builder for a single block.
#[derive(Debug)]
struct BlockBuilder {
    index: usize,
    low: f64,
    high: f64,
}

impl BlockBuilder {
    /// Creates an empty builder for the block at `index`.
    const fn new(index: usize) -> Self {
        Self {
            index,
            low: f64::INFINITY,
            high: f64::NEG_INFINITY,
        }
    }

    /// Folds one bar into the block.
    fn update(&mut self, low: f64, high: f64) {
        self.low = nan_min(self.low, low);
        self.high = nan_max(self.high, high);
    }

    /// Finishes building and returns the block.
    const fn finish(self) -> Block {
        Block::new(self.index, self.low, self.high)
    }
}
