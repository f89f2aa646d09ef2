//! Relationship statistics between two equal-length samples

use crate::column_stats::{finite, rescale_factor, scaled_mean, standard_deviation};
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// Covariance and correlation of two samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairSummary {
    pub covariance: f64,
    pub correlation: f64,
}

/// Sample covariance: `sum((x - mean_x) * (y - mean_y)) / (n - 1)`
///
/// Uses the same divisor as [`standard_deviation`], so
/// `covariance(x, x) == standard_deviation(x)^2`.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::EmptyInput {
            required: 2,
            actual: x.len(),
        });
    }

    let (scale_x, scale_y) = (rescale_factor(x), rescale_factor(y));
    let mean_x = scaled_mean(x, scale_x);
    let mean_y = scaled_mean(y, scale_y);
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi * scale_x - mean_x) * (yi * scale_y - mean_y))
        .sum();

    finite(sum / (x.len() - 1) as f64 / scale_x / scale_y, "covariance")
}

/// Pearson correlation from a covariance and the two standard deviations
///
/// # Example
///
/// ```
/// use tabstat::pairwise::correlation;
///
/// assert_eq!(correlation(2.0, 1.0, 2.0).unwrap(), 1.0);
/// assert!(correlation(1.0, 0.0, 2.0).is_err());
/// ```
pub fn correlation(covariance: f64, std_x: f64, std_y: f64) -> Result<f64> {
    if std_x == 0.0 || std_y == 0.0 {
        return Err(StatsError::DivisionByZero);
    }
    // Divided one at a time: the product of two large deviations may overflow
    Ok(covariance / std_x / std_y)
}

/// Covariance and correlation of two samples
pub fn summarize_pair(x: &[f64], y: &[f64]) -> Result<PairSummary> {
    let covariance = covariance(x, y)?;
    let correlation = correlation(covariance, standard_deviation(x)?, standard_deviation(y)?)?;
    Ok(PairSummary {
        covariance,
        correlation,
    })
}
