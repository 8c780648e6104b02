//! Ordinary least-squares line fit.

use fracvar_types::{FracvarError, Result};
use serde::{Deserialize, Serialize};

/// Slope and intercept of a fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Fitted slope.
    pub slope: f64,
    /// Fitted intercept.
    pub intercept: f64,
}

impl LinearFit {
    /// Fits a line to `(x, y)` by ordinary least squares.
    ///
    /// Equivalent to a degree-1 polynomial fit. Data is centered on the means
    /// before the sums are taken.
    ///
    /// # Errors
    ///
    /// Returns [`FracvarError::DegenerateFit`] if the slices differ in length,
    /// hold fewer than two points, or `x` has zero variance.
    pub fn ols(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(FracvarError::DegenerateFit(format!(
                "{} x values vs {} y values",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(FracvarError::DegenerateFit(format!(
                "need at least 2 points, got {}",
                x.len()
            )));
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (sxy, sxx) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxy, sxx), (xi, yi)| {
                let dx = xi - mean_x;
                (sxy + dx * (yi - mean_y), sxx + dx * dx)
            });

        if sxx == 0.0 {
            return Err(FracvarError::DegenerateFit(
                "x values have zero variance".to_string(),
            ));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}
