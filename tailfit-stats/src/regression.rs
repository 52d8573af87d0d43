//! Least-Squares Regression Collaborator
//!
//! Ordinary least squares over two equal-length sequences, used to overlay
//! an illustrative best-fit line on log-log frequency plots. This is a
//! diagnostic aid only; the fitting algorithm never consumes it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slope and intercept of the best-fit line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

/// Errors from regression inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// Both sequences must be non-empty.
    #[error("regression input is empty")]
    EmptyInput,

    /// The sequences must have the same length.
    #[error("sequence lengths differ: x has {x_len}, y has {y_len}")]
    LengthMismatch {
        /// Length of the x sequence.
        x_len: usize,
        /// Length of the y sequence.
        y_len: usize,
    },

    /// A vertical point cloud has no finite slope.
    #[error("x values are all identical; the slope is undefined")]
    ZeroVariance,
}

/// Fits `y = slope * x + intercept` by ordinary least squares.
pub fn least_squares(x: &[f64], y: &[f64]) -> Result<LinearFit, RegressionError> {
    if x.is_empty() || y.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sxx += (xi - mean_x) * (xi - mean_x);
        sxy += (xi - mean_x) * (yi - mean_y);
    }
    if sxx == 0.0 {
        return Err(RegressionError::ZeroVariance);
    }

    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();
        let fit = least_squares(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_symmetric_points_average_out() {
        // Residuals +e/-e at mirrored x positions leave the line unchanged.
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.5, 1.9, 3.1, 3.5];
        let fit = least_squares(&x, &y).unwrap();
        assert!((fit.slope - 0.72).abs() < 1e-12);
        assert!((fit.intercept - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            least_squares(&[], &[]),
            Err(RegressionError::EmptyInput)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            least_squares(&[1.0, 2.0], &[1.0]),
            Err(RegressionError::LengthMismatch { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_zero_variance() {
        assert!(matches!(
            least_squares(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]),
            Err(RegressionError::ZeroVariance)
        ));
    }
}
