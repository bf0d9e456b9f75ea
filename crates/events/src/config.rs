//! Configuration for surge event detection.

use crate::error::EventError;

/// Configuration for threshold-based event detection.
///
/// The threshold is expressed as a multiple of the series' population
/// standard deviation; exceedances closer together than the gap tolerance
/// merge into one event.
///
/// # Example
///
/// ```
/// use tethys_events::DetectorConfig;
///
/// let config = DetectorConfig::new()
///     .with_std_multiplier(2.5)
///     .with_min_duration_hours(3.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DetectorConfig {
    std_multiplier: f64,
    max_gap_hours: f64,
    min_duration_hours: f64,
}

impl DetectorConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `std_multiplier = 2.0`, `max_gap_hours = 3.0`,
    /// `min_duration_hours = 0.0` (every group survives, including
    /// single-sample events of zero duration).
    pub fn new() -> Self {
        Self {
            std_multiplier: 2.0,
            max_gap_hours: 3.0,
            min_duration_hours: 0.0,
        }
    }

    /// Sets the threshold multiplier (multiples of σ).
    pub fn with_std_multiplier(mut self, multiplier: f64) -> Self {
        self.std_multiplier = multiplier;
        self
    }

    /// Sets the gap tolerance between exceedances of one event.
    pub fn with_max_gap_hours(mut self, hours: f64) -> Self {
        self.max_gap_hours = hours;
        self
    }

    /// Sets the minimum duration an event must span to be kept.
    pub fn with_min_duration_hours(mut self, hours: f64) -> Self {
        self.min_duration_hours = hours;
        self
    }

    /// Returns the threshold multiplier.
    pub fn std_multiplier(&self) -> f64 {
        self.std_multiplier
    }

    /// Returns the gap tolerance in hours.
    pub fn max_gap_hours(&self) -> f64 {
        self.max_gap_hours
    }

    /// Returns the minimum event duration in hours.
    pub fn min_duration_hours(&self) -> f64 {
        self.min_duration_hours
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.std_multiplier.is_finite() || self.std_multiplier < 0.0 {
            return Err(EventError::InvalidConfig {
                reason: format!(
                    "std_multiplier must be finite and >= 0, got {}",
                    self.std_multiplier
                ),
            });
        }
        if !self.max_gap_hours.is_finite() || self.max_gap_hours <= 0.0 {
            return Err(EventError::InvalidConfig {
                reason: format!(
                    "max_gap_hours must be finite and > 0, got {}",
                    self.max_gap_hours
                ),
            });
        }
        if !self.min_duration_hours.is_finite() || self.min_duration_hours < 0.0 {
            return Err(EventError::InvalidConfig {
                reason: format!(
                    "min_duration_hours must be finite and >= 0, got {}",
                    self.min_duration_hours
                ),
            });
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
