//! Diagnostic sweep over filter settings.

use tracing::debug;

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::low_pass;

/// Outcome of one (order, cutoff) combination in a filter sweep.
#[derive(Clone, Debug)]
pub struct FilterSweepCell {
    /// Filter order used.
    pub order: usize,
    /// Cutoff period in hours used.
    pub cutoff_period_hours: f64,
    /// Pearson correlation between the raw and filtered series; `None`
    /// for degenerate (constant) input.
    pub correlation: Option<f64>,
}

/// Applies every (order × cutoff period) combination and reports how well
/// each filtered series tracks the raw one.
///
/// Diagnostic only: the correlation quantifies how much signal each
/// setting preserves, and nothing in the pipeline consumes the result.
///
/// # Errors
///
/// Propagates the first [`FilterError`] from an invalid combination or a
/// series too short for its padding.
pub fn filter_sweep(
    values: &[f64],
    orders: &[usize],
    cutoff_periods: &[f64],
) -> Result<Vec<FilterSweepCell>, FilterError> {
    let mut cells = Vec::with_capacity(orders.len() * cutoff_periods.len());
    for &order in orders {
        for &cutoff in cutoff_periods {
            let config = FilterConfig::new()
                .with_order(order)
                .with_cutoff_period_hours(cutoff);
            let filtered = low_pass(values, &config)?;
            let correlation = tethys_stats::pearson_correlation(values, &filtered);
            debug!(order, cutoff, ?correlation, "filter sweep cell");
            cells.push(FilterSweepCell {
                order,
                cutoff_period_hours: cutoff,
                correlation,
            });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn noisy_series(n: usize) -> Vec<f64> {
        // Slow oscillation, a medium 9-hour component, and a fast one
        // standing in for noise.
        (0..n)
            .map(|t| {
                let tf = t as f64;
                (2.0 * PI * tf / 72.0).sin()
                    + 0.5 * (2.0 * PI * tf / 9.0).sin()
                    + 0.3 * (2.0 * PI * tf / 3.0).sin()
            })
            .collect()
    }

    #[test]
    fn sweep_covers_every_combination() {
        let values = noisy_series(500);
        let cells = filter_sweep(&values, &[2, 3, 5], &[6.0, 12.0, 24.0, 48.0]).unwrap();
        assert_eq!(cells.len(), 12);
    }

    #[test]
    fn wider_cutoff_tracks_raw_more_closely() {
        // A 6-hour cutoff passes the 9-hour component that a 48-hour
        // cutoff removes, so its correlation with the raw series is higher.
        let values = noisy_series(1000);
        let cells = filter_sweep(&values, &[3], &[6.0, 48.0]).unwrap();
        let corr_6 = cells[0].correlation.unwrap();
        let corr_48 = cells[1].correlation.unwrap();
        assert!(corr_6 > corr_48);
    }

    #[test]
    fn invalid_combination_propagates() {
        let values = noisy_series(100);
        assert!(matches!(
            filter_sweep(&values, &[0], &[12.0]),
            Err(FilterError::InvalidOrder { order: 0 })
        ));
    }
}
