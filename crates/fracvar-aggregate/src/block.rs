//! Column-major block view over a flat series.

use fracvar_types::{FracvarError, Result};
use serde::{Deserialize, Serialize};

/// A `rows x cols` matrix view over a flat slice, filled column-major.
///
/// Element `k` of the slice sits at `(k % rows, k / rows)`, so each column
/// is one contiguous run of `rows` consecutive values. No data is copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMatrix<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
}

impl<'a> BlockMatrix<'a> {
    /// Creates a view with `rows` values per column.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::Dimension`] if `data` is empty, `rows` is zero,
    /// or `rows` does not divide the length of `data`.
    pub const fn new(data: &'a [f64], rows: usize) -> Result<Self> {
        let len = data.len();
        if len == 0 || rows == 0 || len % rows != 0 {
            return Err(FracvarError::Dimension { len, rows });
        }
        Ok(Self {
            data,
            rows,
            cols: len / rows,
        })
    }

    /// Returns the number of rows (values per block).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (blocks).
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, cols)` shape.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the value at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(col * self.rows + row).copied()
    }

    /// Returns column `col` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    #[must_use]
    pub fn column(&self, col: usize) -> &'a [f64] {
        let start = col * self.rows;
        &self.data[start..start + self.rows]
    }

    /// Iterates over all columns in order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a [f64]> + 'a {
        self.data.chunks_exact(self.rows)
    }

    /// Returns the minimum of every column.
    #[must_use]
    pub fn column_min(&self) -> Vec<f64> {
        self.columns()
            .map(|col| col.iter().copied().fold(f64::INFINITY, nan_min))
            .collect()
    }

    /// Returns the maximum of every column.
    #[must_use]
    pub fn column_max(&self) -> Vec<f64> {
        self.columns()
            .map(|col| col.iter().copied().fold(f64::NEG_INFINITY, nan_max))
            .collect()
    }
}

/// Minimum that propagates NaN instead of skipping it.
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// Maximum that propagates NaN instead of skipping it.
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// One aggregated block of consecutive bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Column index of the block.
    pub index: usize,
    /// Lowest low within the block.
    pub low: f64,
    /// Highest high within the block.
    pub high: f64,
}

impl Block {
    /// Creates a new block.
    #[must_use]
    pub const fn new(index: usize, low: f64, high: f64) -> Self {
        Self { index, low, high }
    }

    /// Returns the price range spanned by the block (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}
