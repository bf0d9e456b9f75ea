//! Conversions from TOML sections to library crate configurations.

use tethys_events::{DetectorConfig, SweepConfig};
use tethys_filter::FilterConfig;

use crate::config::{EventsToml, FilterToml, SweepToml};

/// Builds the low-pass filter configuration.
pub fn build_filter_config(toml: &FilterToml) -> FilterConfig {
    FilterConfig::new()
        .with_cutoff_period_hours(toml.cutoff_period_hours)
        .with_order(toml.order)
}

/// Builds the event detector configuration.
pub fn build_detector_config(toml: &EventsToml) -> DetectorConfig {
    DetectorConfig::new()
        .with_std_multiplier(toml.std_multiplier)
        .with_max_gap_hours(toml.max_gap_hours)
        .with_min_duration_hours(toml.min_duration_hours)
}

/// Builds the threshold sweep configuration; the gap tolerance is shared
/// with the detector settings.
pub fn build_sweep_config(toml: &SweepToml, events: &EventsToml) -> SweepConfig {
    SweepConfig::new()
        .with_multipliers(toml.multipliers.clone())
        .with_min_durations(toml.min_durations.clone())
        .with_max_gap_hours(events.max_gap_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_config_carries_toml_values() {
        let toml = FilterToml {
            cutoff_period_hours: 24.0,
            order: 5,
        };
        let config = build_filter_config(&toml);
        assert_eq!(config.cutoff_period_hours(), 24.0);
        assert_eq!(config.order(), 5);
    }

    #[test]
    fn detector_config_carries_toml_values() {
        let toml = EventsToml {
            std_multiplier: 2.5,
            max_gap_hours: 6.0,
            min_duration_hours: 1.0,
        };
        let config = build_detector_config(&toml);
        assert_eq!(config.std_multiplier(), 2.5);
        assert_eq!(config.max_gap_hours(), 6.0);
        assert_eq!(config.min_duration_hours(), 1.0);
    }

    #[test]
    fn sweep_config_shares_gap_tolerance() {
        let sweep = SweepToml {
            multipliers: vec![2.0],
            min_durations: vec![0.0],
            comparison_min_duration: 3.0,
        };
        let events = EventsToml {
            std_multiplier: 2.0,
            max_gap_hours: 4.0,
            min_duration_hours: 0.0,
        };
        let config = build_sweep_config(&sweep, &events);
        assert_eq!(config.multipliers(), &[2.0]);
        assert_eq!(config.max_gap_hours(), 4.0);
    }
}
