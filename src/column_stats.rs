//! Descriptive statistics for a single sample
//!
//! Conventions used throughout the crate:
//! - Standard deviation is the *sample* standard deviation (divisor `n - 1`,
//!   Bessel's correction). [`crate::pairwise::covariance`] uses the same divisor
//!   so that correlation normalizes to [-1, 1].
//! - Quartiles use inclusive linear interpolation: the p-th percentile sits at
//!   position `p * (n - 1)` of the ascending order statistics, interpolating
//!   between the two neighbours when the position is fractional.
//! - Any finite input is accepted. Samples holding magnitudes above
//!   `1e100` are rescaled by an exact power of two before summing, so sums and
//!   squared deviations stay finite; a result that still cannot be represented
//!   is reported as [`StatsError::Overflow`].

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// First quartile, median and third quartile of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

/// Summary of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Number of observations
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 divisor)
    pub standard_deviation: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

fn require_len(sample: &[f64], required: usize) -> Result<()> {
    if sample.len() < required {
        return Err(StatsError::EmptyInput {
            required,
            actual: sample.len(),
        });
    }
    Ok(())
}

/// Magnitude above which a sample is rescaled before summing
const RESCALE_ABOVE: f64 = 1e100;

/// Power-of-two exponent applied when rescaling (exact in binary floating point)
const RESCALE_EXP: i32 = 600;

/// Factor that brings every value of `sample` below `RESCALE_ABOVE`
///
/// 1.0 for ordinary data, so results there are bit-for-bit plain sums.
pub(crate) fn rescale_factor(sample: &[f64]) -> f64 {
    let largest = sample.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if largest > RESCALE_ABOVE {
        2.0_f64.powi(-RESCALE_EXP)
    } else {
        1.0
    }
}

/// Mean of `sample` multiplied by `scale`
pub(crate) fn scaled_mean(sample: &[f64], scale: f64) -> f64 {
    sample.iter().map(|x| x * scale).sum::<f64>() / sample.len() as f64
}

pub(crate) fn finite(value: f64, quantity: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::Overflow(quantity))
    }
}

/// Arithmetic mean: `sum / len`
///
/// # Example
///
/// ```
/// use tabstat::column_stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// assert_eq!(mean(&[1e308, 1e308, 1e308]).unwrap(), 1e308);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    require_len(sample, 1)?;
    let scale = rescale_factor(sample);
    finite(scaled_mean(sample, scale) / scale, "mean")
}

/// Sample standard deviation (divisor `n - 1`)
///
/// A single observation has no sample variance and is rejected rather than
/// reported as zero.
///
/// # Example
///
/// ```
/// use tabstat::column_stats::standard_deviation;
///
/// let sd = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.5811).abs() < 1e-4);
/// assert!(standard_deviation(&[42.0]).is_err());
/// ```
pub fn standard_deviation(sample: &[f64]) -> Result<f64> {
    require_len(sample, 2)?;
    // Exactly zero for constant samples, whatever rounding the mean picks up
    if sample.iter().all(|&x| x == sample[0]) {
        return Ok(0.0);
    }

    let scale = rescale_factor(sample);
    let m = scaled_mean(sample, scale);
    let sum_sq: f64 = sample
        .iter()
        .map(|x| {
            let d = x * scale - m;
            d * d
        })
        .sum();
    finite(
        (sum_sq / (sample.len() - 1) as f64).sqrt() / scale,
        "standard deviation",
    )
}

/// Percentile of ascending-sorted data by inclusive linear interpolation
///
/// `p` is in percent and clamped to 0-100. Returns `None` for empty input.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let index = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
            let lower = index.floor() as usize;
            let upper = index.ceil() as usize;

            let (lo, hi) = (sorted[lower], sorted[upper]);
            if lower == upper {
                Some(lo)
            } else {
                // Clamped so rounding never steps outside [lo, hi]
                let weight = index - lower as f64;
                Some((lo + (hi - lo) * weight).max(lo).min(hi))
            }
        }
    }
}

fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn quartiles_of_sorted(sorted: &[f64]) -> Result<Quartiles> {
    let at = |p| {
        percentile(sorted, p).ok_or(StatsError::EmptyInput {
            required: 1,
            actual: 0,
        })
    };
    Ok(Quartiles {
        q1: at(25.0)?,
        median: at(50.0)?,
        q3: at(75.0)?,
    })
}

/// Q1, median and Q3 of a sample; the input is left untouched
///
/// # Example
///
/// ```
/// use tabstat::column_stats::quartiles;
///
/// let q = quartiles(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
/// assert_eq!((q.q1, q.median, q.q3), (2.0, 3.0, 4.0));
/// ```
pub fn quartiles(sample: &[f64]) -> Result<Quartiles> {
    require_len(sample, 1)?;
    quartiles_of_sorted(&sorted_copy(sample))
}

/// Compute the full [`ColumnSummary`] of a sample
pub fn summarize(sample: &[f64]) -> Result<ColumnSummary> {
    let mean = mean(sample)?;
    let standard_deviation = standard_deviation(sample)?;

    let sorted = sorted_copy(sample);
    let Quartiles { q1, median, q3 } = quartiles_of_sorted(&sorted)?;

    Ok(ColumnSummary {
        count: sample.len(),
        mean,
        standard_deviation,
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
    })
}
