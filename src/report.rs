//! JSON output structures for analysis results.

use serde::Serialize;

use tethys_events::{Detection, SweepCell, ThresholdComparison};
use tethys_surge::{MonthlyStats, NormalityTest, ResidualStats};

/// Top-level statistics report written by `tethys analyze`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// In-sample R² of the harmonic fit the residual is based on.
    pub fit_r_squared: f64,
    /// Statistics of the raw residual.
    pub raw: ResidualStatsOut,
    /// Statistics of the filtered residual, when filtering ran.
    pub filtered: Option<ResidualStatsOut>,
    /// Per-month summary of the analysed residual.
    pub monthly: Vec<MonthlyStatsOut>,
    /// Event detection summary.
    pub detection: DetectionSummary,
}

/// Serialisable mirror of [`ResidualStats`].
#[derive(Debug, Serialize)]
pub struct ResidualStatsOut {
    pub mean: f64,
    pub median: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    pub abs_max: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub pct_positive: f64,
    pub pct_negative: f64,
    pub normality: Option<NormalityOut>,
}

/// Serialisable mirror of [`NormalityTest`].
#[derive(Debug, Serialize)]
pub struct NormalityOut {
    pub statistic: f64,
    pub p_value: f64,
}

/// Serialisable mirror of [`MonthlyStats`].
#[derive(Debug, Serialize)]
pub struct MonthlyStatsOut {
    pub month: u8,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Summary of one event detection run.
#[derive(Debug, Serialize)]
pub struct DetectionSummary {
    /// Which residual was analysed ("raw" or "filtered").
    pub series: String,
    pub std_multiplier: f64,
    pub mean: f64,
    pub sd: f64,
    pub threshold: f64,
    pub n_events: usize,
    pub n_positive: usize,
    pub n_negative: usize,
}

/// Sweep report written by `tethys sweep`.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    /// Cells over the raw residual.
    pub raw: Vec<SweepCell>,
    /// Cells over the filtered residual.
    pub filtered: Vec<SweepCell>,
    /// Raw-vs-filtered counts per threshold at the comparison duration.
    pub comparison_min_duration: f64,
    pub comparison: Vec<ThresholdComparison>,
}

impl From<&ResidualStats> for ResidualStatsOut {
    fn from(stats: &ResidualStats) -> Self {
        Self {
            mean: stats.mean,
            median: stats.median,
            sd: stats.sd,
            min: stats.min,
            max: stats.max,
            abs_max: stats.abs_max,
            skewness: stats.skewness,
            kurtosis: stats.kurtosis,
            pct_positive: stats.pct_positive,
            pct_negative: stats.pct_negative,
            normality: stats.normality.as_ref().map(NormalityOut::from),
        }
    }
}

impl From<&NormalityTest> for NormalityOut {
    fn from(test: &NormalityTest) -> Self {
        Self {
            statistic: test.statistic,
            p_value: test.p_value,
        }
    }
}

impl From<&MonthlyStats> for MonthlyStatsOut {
    fn from(stats: &MonthlyStats) -> Self {
        Self {
            month: stats.month,
            mean: stats.mean,
            sd: stats.sd,
            min: stats.min,
            max: stats.max,
            count: stats.count,
        }
    }
}

/// Builds a detection summary for the report.
pub fn detection_summary(series: &str, std_multiplier: f64, detection: &Detection) -> DetectionSummary {
    DetectionSummary {
        series: series.to_string(),
        std_multiplier,
        mean: detection.mean(),
        sd: detection.sd(),
        threshold: detection.threshold(),
        n_events: detection.events().len(),
        n_positive: detection.n_positive(),
        n_negative: detection.n_negative(),
    }
}
