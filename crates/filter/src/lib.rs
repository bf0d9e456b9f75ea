//! Tethys low-pass filtering: zero-phase Butterworth smoothing of the
//! storm surge residual.
//!
//! Meteorological surges evolve over many hours; oscillations faster than
//! the cutoff period are treated as noise. The filter is applied forward
//! and backward so the smoothed series stays time-aligned with the input —
//! a causal single pass would shift every event peak.

mod butterworth;
mod config;
mod error;
mod explore;
mod filtfilt;

use tracing::debug;

pub use butterworth::butter_lowpass;
pub use config::FilterConfig;
pub use error::FilterError;
pub use explore::{FilterSweepCell, filter_sweep};
pub use filtfilt::filtfilt;

/// Applies a zero-phase Butterworth low-pass filter to an hourly series.
///
/// Designs the filter from `config` and applies it forward-backward; the
/// output has the same length and time alignment as the input.
///
/// # Errors
///
/// Returns a config validation error, [`FilterError::EmptyData`], or
/// [`FilterError::SeriesTooShort`] when the series cannot absorb the edge
/// padding.
pub fn low_pass(values: &[f64], config: &FilterConfig) -> Result<Vec<f64>, FilterError> {
    config.validate()?;
    debug!(
        order = config.order(),
        cutoff_period_hours = config.cutoff_period_hours(),
        n = values.len(),
        "applying zero-phase Butterworth low-pass"
    );
    let (b, a) = butter_lowpass(config.order(), config.cutoff_frequency());
    filtfilt(&b, &a, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn low_pass_validates_config() {
        let config = FilterConfig::new().with_order(0);
        assert!(matches!(
            low_pass(&[0.0; 100], &config),
            Err(FilterError::InvalidOrder { .. })
        ));
    }

    #[test]
    fn low_pass_preserves_length_and_alignment() {
        let config = FilterConfig::new();
        let x: Vec<f64> = (0..400).map(|t| (0.05 * t as f64).sin()).collect();
        let y = low_pass(&x, &config).unwrap();
        assert_eq!(y.len(), x.len());
    }

    #[test]
    fn low_pass_dc_input() {
        let config = FilterConfig::new();
        let y = low_pass(&[1.5; 100], &config).unwrap();
        for v in y {
            assert_relative_eq!(v, 1.5, epsilon = 1e-8);
        }
    }

    #[test]
    fn low_pass_smooths_semidiurnal_leakage() {
        // Leftover tidal energy at the M2 period (12.42 h) sits right at
        // the default cutoff and is strongly attenuated by the double pass.
        let config = FilterConfig::new();
        let x: Vec<f64> = (0..1000)
            .map(|t| (2.0 * PI * t as f64 / 12.42).sin())
            .collect();
        let y = low_pass(&x, &config).unwrap();
        let peak = y[200..800].iter().fold(0.0_f64, |m, &v| m.max(v.abs()));
        assert!(peak < 0.6, "near-cutoff energy should be reduced, got {peak}");
    }
}
