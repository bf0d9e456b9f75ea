//! Descriptive statistics for the surge residual.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::debug;

use crate::error::SurgeError;

/// Jarque-Bera normality check on a residual series.
///
/// The statistic is `n/6 · (g1² + g2²/4)` from the population skewness g1
/// and excess kurtosis g2, asymptotically χ²(2) under normality. A small
/// p-value means the residual distribution is unlikely to be normal.
#[derive(Clone, Copy, Debug)]
pub struct NormalityTest {
    /// The Jarque-Bera statistic.
    pub statistic: f64,
    /// The χ²(2) tail probability of the statistic.
    pub p_value: f64,
}

/// Summary statistics of a surge residual series.
///
/// Spread and moment statistics use the population (N) denominator; see
/// [`tethys_stats`]. `skewness`/`kurtosis` are `None` for degenerate
/// (constant) input, and the normality test is only available when both
/// moments are.
#[derive(Clone, Debug)]
pub struct ResidualStats {
    pub mean: f64,
    pub median: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    pub abs_max: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    /// Percentage of strictly positive samples.
    pub pct_positive: f64,
    /// Percentage of strictly negative samples.
    pub pct_negative: f64,
    pub normality: Option<NormalityTest>,
}

/// Computes summary statistics for a residual series.
///
/// # Errors
///
/// Returns [`SurgeError::EmptyData`] for empty input.
pub fn residual_stats(values: &[f64]) -> Result<ResidualStats, SurgeError> {
    if values.is_empty() {
        return Err(SurgeError::EmptyData);
    }

    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut abs_max = 0.0_f64;
    let mut n_positive = 0usize;
    let mut n_negative = 0usize;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        abs_max = abs_max.max(v.abs());
        if v > 0.0 {
            n_positive += 1;
        } else if v < 0.0 {
            n_negative += 1;
        }
    }

    let skewness = tethys_stats::skewness(values);
    let kurtosis = tethys_stats::kurtosis(values);
    let normality = match (skewness, kurtosis) {
        (Some(g1), Some(g2)) => Some(jarque_bera(values.len(), g1, g2)),
        _ => None,
    };

    debug!(n = values.len(), "residual statistics computed");

    Ok(ResidualStats {
        mean: tethys_stats::mean(values),
        median: tethys_stats::median(values),
        sd: tethys_stats::sd(values),
        min,
        max,
        abs_max,
        skewness,
        kurtosis,
        pct_positive: n_positive as f64 / n * 100.0,
        pct_negative: n_negative as f64 / n * 100.0,
        normality,
    })
}

fn jarque_bera(n: usize, skewness: f64, excess_kurtosis: f64) -> NormalityTest {
    let statistic =
        n as f64 / 6.0 * (skewness * skewness + excess_kurtosis * excess_kurtosis / 4.0);
    let chi2 = ChiSquared::new(2.0).expect("chi-squared with 2 dof is valid");
    NormalityTest {
        statistic,
        p_value: 1.0 - chi2.cdf(statistic),
    }
}
