//! Threshold sensitivity sweeps over the event detector.

use serde::Serialize;
use tracing::info;

use crate::config::DetectorConfig;
use crate::detect::detect_events;
use crate::error::EventError;
use crate::event::{Direction, SurgeEvent};

/// Configuration for a threshold × minimum-duration sweep.
///
/// # Example
///
/// ```
/// use tethys_events::SweepConfig;
///
/// let config = SweepConfig::new().with_multipliers(vec![2.0, 3.0]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SweepConfig {
    multipliers: Vec<f64>,
    min_durations: Vec<f64>,
    max_gap_hours: f64,
}

impl SweepConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `multipliers = [1.0, 1.5, 2.0, 2.5, 3.0]`,
    /// `min_durations = [1.0, 3.0, 6.0]` hours, `max_gap_hours = 3.0`.
    pub fn new() -> Self {
        Self {
            multipliers: vec![1.0, 1.5, 2.0, 2.5, 3.0],
            min_durations: vec![1.0, 3.0, 6.0],
            max_gap_hours: 3.0,
        }
    }

    /// Sets the threshold multipliers to sweep.
    pub fn with_multipliers(mut self, multipliers: Vec<f64>) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Sets the minimum durations to sweep, in hours.
    pub fn with_min_durations(mut self, min_durations: Vec<f64>) -> Self {
        self.min_durations = min_durations;
        self
    }

    /// Sets the gap tolerance used by every detector run.
    pub fn with_max_gap_hours(mut self, hours: f64) -> Self {
        self.max_gap_hours = hours;
        self
    }

    /// Returns the threshold multipliers.
    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    /// Returns the minimum durations in hours.
    pub fn min_durations(&self) -> &[f64] {
        &self.min_durations
    }

    /// Returns the gap tolerance in hours.
    pub fn max_gap_hours(&self) -> f64 {
        self.max_gap_hours
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.multipliers.is_empty() {
            return Err(EventError::InvalidConfig {
                reason: "multipliers must not be empty".to_string(),
            });
        }
        if self.min_durations.is_empty() {
            return Err(EventError::InvalidConfig {
                reason: "min_durations must not be empty".to_string(),
            });
        }
        // Each cell is checked again by the detector; validating here
        // surfaces bad values before any work is done.
        for &m in &self.multipliers {
            DetectorConfig::new()
                .with_std_multiplier(m)
                .with_max_gap_hours(self.max_gap_hours)
                .validate()?;
        }
        for &d in &self.min_durations {
            DetectorConfig::new()
                .with_min_duration_hours(d)
                .with_max_gap_hours(self.max_gap_hours)
                .validate()?;
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One cell of the sweep matrix.
#[derive(Clone, Debug, Serialize)]
pub struct SweepCell {
    /// Threshold multiplier of this cell.
    pub std_multiplier: f64,
    /// Minimum duration of this cell, in hours.
    pub min_duration_hours: f64,
    /// Absolute threshold value (multiplier × σ).
    pub threshold: f64,
    /// Detected events, sorted by descending peak magnitude.
    pub events: Vec<SurgeEvent>,
    /// Number of positive-direction events.
    pub n_positive: usize,
    /// Number of negative-direction events.
    pub n_negative: usize,
}

impl SweepCell {
    /// Returns the total number of events in this cell.
    pub fn n_events(&self) -> usize {
        self.events.len()
    }
}

/// Paired raw/filtered event counts at one threshold.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ThresholdComparison {
    /// Threshold multiplier compared.
    pub std_multiplier: f64,
    /// Event count on the raw residual.
    pub raw_count: usize,
    /// Event count on the filtered residual.
    pub filtered_count: usize,
    /// `(raw - filtered) / raw × 100`; 0 when no raw events exist.
    pub reduction_pct: f64,
}

/// Runs the event detector for every multiplier × minimum-duration
/// combination.
///
/// The input is never mutated; cells are ordered multiplier-major in the
/// order the configuration lists them.
///
/// # Errors
///
/// Returns a config validation error or [`EventError::EmptyData`].
pub fn sweep(values: &[f64], config: &SweepConfig) -> Result<Vec<SweepCell>, EventError> {
    config.validate()?;
    if values.is_empty() {
        return Err(EventError::EmptyData);
    }

    let mut cells = Vec::with_capacity(config.multipliers().len() * config.min_durations().len());
    for &multiplier in config.multipliers() {
        for &min_duration in config.min_durations() {
            let detector = DetectorConfig::new()
                .with_std_multiplier(multiplier)
                .with_max_gap_hours(config.max_gap_hours())
                .with_min_duration_hours(min_duration);
            let detection = detect_events(values, &detector)?;
            cells.push(SweepCell {
                std_multiplier: multiplier,
                min_duration_hours: min_duration,
                threshold: detection.threshold(),
                n_positive: detection.n_positive(),
                n_negative: detection.n_negative(),
                events: detection.events().to_vec(),
            });
        }
    }

    info!(n_cells = cells.len(), "threshold sweep complete");
    Ok(cells)
}

/// Compares event counts between a raw and a filtered residual across the
/// configured thresholds, at a fixed minimum duration.
///
/// # Errors
///
/// Returns [`EventError::LengthMismatch`] when the two series disagree in
/// length, plus anything [`sweep`]'s detector runs can raise.
pub fn compare(
    raw: &[f64],
    filtered: &[f64],
    config: &SweepConfig,
    min_duration_hours: f64,
) -> Result<Vec<ThresholdComparison>, EventError> {
    config.validate()?;
    if raw.len() != filtered.len() {
        return Err(EventError::LengthMismatch {
            raw_len: raw.len(),
            filtered_len: filtered.len(),
        });
    }
    if raw.is_empty() {
        return Err(EventError::EmptyData);
    }

    let mut out = Vec::with_capacity(config.multipliers().len());
    for &multiplier in config.multipliers() {
        let detector = DetectorConfig::new()
            .with_std_multiplier(multiplier)
            .with_max_gap_hours(config.max_gap_hours())
            .with_min_duration_hours(min_duration_hours);
        let raw_count = detect_events(raw, &detector)?.events().len();
        let filtered_count = detect_events(filtered, &detector)?.events().len();
        let reduction_pct = if raw_count > 0 {
            (raw_count as f64 - filtered_count as f64) / raw_count as f64 * 100.0
        } else {
            0.0
        };
        out.push(ThresholdComparison {
            std_multiplier: multiplier,
            raw_count,
            filtered_count,
            reduction_pct,
        });
    }
    Ok(out)
}

/// Splits a cell's events by direction (convenience for reporting).
pub fn split_by_direction(events: &[SurgeEvent]) -> (Vec<SurgeEvent>, Vec<SurgeEvent>) {
    let positive = events
        .iter()
        .copied()
        .filter(|e| e.direction == Direction::Positive)
        .collect();
    let negative = events
        .iter()
        .copied()
        .filter(|e| e.direction == Direction::Negative)
        .collect();
    (positive, negative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spiky_series() -> Vec<f64> {
        let mut values = vec![0.0; 500];
        for (i, v) in values.iter_mut().enumerate() {
            *v = ((i % 5) as f64 - 2.0) * 0.05;
        }
        // Three events of different strengths and lengths.
        values[50] = 2.0;
        values[51] = 2.5;
        values[52] = 2.2;
        values[200] = -4.0;
        values[201] = -4.5;
        values[400] = 1.5;
        values
    }

    #[test]
    fn sweep_covers_matrix() {
        let values = spiky_series();
        let cells = sweep(&values, &SweepConfig::new()).unwrap();
        assert_eq!(cells.len(), 15);
        // Multiplier-major ordering.
        assert_relative_eq!(cells[0].std_multiplier, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cells[0].min_duration_hours, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cells[1].min_duration_hours, 3.0, epsilon = 1e-12);
        assert_relative_eq!(cells[14].std_multiplier, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn stricter_threshold_never_increases_count() {
        let values = spiky_series();
        let config = SweepConfig::new().with_min_durations(vec![0.0]);
        let cells = sweep(&values, &config).unwrap();
        for pair in cells.windows(2) {
            assert!(
                pair[1].n_events() <= pair[0].n_events(),
                "multiplier {} -> {} events, multiplier {} -> {}",
                pair[0].std_multiplier,
                pair[0].n_events(),
                pair[1].std_multiplier,
                pair[1].n_events()
            );
        }
    }

    #[test]
    fn longer_min_duration_never_increases_count() {
        let values = spiky_series();
        let config = SweepConfig::new().with_multipliers(vec![1.0]);
        let cells = sweep(&values, &config).unwrap();
        for pair in cells.windows(2) {
            assert!(pair[1].n_events() <= pair[0].n_events());
        }
    }

    #[test]
    fn cell_counts_split_by_direction() {
        let values = spiky_series();
        let config = SweepConfig::new()
            .with_multipliers(vec![1.0])
            .with_min_durations(vec![0.0]);
        let cells = sweep(&values, &config).unwrap();
        let cell = &cells[0];
        assert_eq!(cell.n_events(), cell.n_positive + cell.n_negative);
        let (pos, neg) = split_by_direction(&cell.events);
        assert_eq!(pos.len(), cell.n_positive);
        assert_eq!(neg.len(), cell.n_negative);
    }

    #[test]
    fn comparison_reports_reduction() {
        let raw = spiky_series();
        // "Filtering" flattens the two weaker events away.
        let mut filtered = vec![0.0; 500];
        for (i, v) in filtered.iter_mut().enumerate() {
            *v = ((i % 5) as f64 - 2.0) * 0.05;
        }
        filtered[200] = -4.0;
        filtered[201] = -4.5;

        let config = SweepConfig::new().with_multipliers(vec![2.0]);
        let comparison = compare(&raw, &filtered, &config, 0.0).unwrap();
        assert_eq!(comparison.len(), 1);
        let entry = comparison[0];
        assert!(entry.raw_count >= entry.filtered_count);
        if entry.raw_count > 0 {
            let expected = (entry.raw_count - entry.filtered_count) as f64
                / entry.raw_count as f64
                * 100.0;
            assert_relative_eq!(entry.reduction_pct, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn comparison_zero_raw_count_guards_division() {
        // Identical near-constant series: no events anywhere.
        let quiet: Vec<f64> = (0..100).map(|i| ((i % 3) as f64 - 1.0) * 0.01).collect();
        let config = SweepConfig::new().with_multipliers(vec![3.0]);
        let comparison = compare(&quiet, &quiet, &config, 0.0).unwrap();
        assert_eq!(comparison[0].raw_count, 0);
        assert_relative_eq!(comparison[0].reduction_pct, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn comparison_length_mismatch_errors() {
        let err = compare(&[1.0, 2.0], &[1.0], &SweepConfig::new(), 0.0).unwrap_err();
        assert!(matches!(err, EventError::LengthMismatch { .. }));
    }

    #[test]
    fn empty_multipliers_rejected() {
        let config = SweepConfig::new().with_multipliers(vec![]);
        assert!(matches!(
            sweep(&[1.0, 2.0], &config),
            Err(EventError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn inputs_not_mutated() {
        let values = spiky_series();
        let copy = values.clone();
        let _ = sweep(&values, &SweepConfig::new()).unwrap();
        assert_eq!(values, copy);
    }
}
