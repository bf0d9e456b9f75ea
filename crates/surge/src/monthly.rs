//! Per-calendar-month residual summaries.

use crate::error::SurgeError;

/// Summary statistics of the residual for one calendar month.
#[derive(Clone, Debug)]
pub struct MonthlyStats {
    /// 1-indexed calendar month (1 = January).
    pub month: u8,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    /// Number of samples that fell in this month.
    pub count: usize,
}

/// Extracts the values belonging to a specific month.
pub fn extract_monthly(values: &[f64], months: &[u8], target_month: u8) -> Vec<f64> {
    values
        .iter()
        .zip(months.iter())
        .filter(|&(_, m)| *m == target_month)
        .map(|(&v, _)| v)
        .collect()
}

/// Computes per-month summary statistics over a residual series.
///
/// `months` carries the 1-indexed calendar month of every sample, produced
/// by the caller's time index. Months with no samples are omitted from the
/// result; the remaining entries are ordered January to December.
///
/// # Errors
///
/// Returns [`SurgeError::EmptyData`] for empty input,
/// [`SurgeError::MonthLengthMismatch`] if the slices disagree in length,
/// and [`SurgeError::InvalidMonth`] for month labels outside 1..=12.
pub fn monthly_stats(values: &[f64], months: &[u8]) -> Result<Vec<MonthlyStats>, SurgeError> {
    if values.is_empty() {
        return Err(SurgeError::EmptyData);
    }
    if values.len() != months.len() {
        return Err(SurgeError::MonthLengthMismatch {
            values_len: values.len(),
            months_len: months.len(),
        });
    }
    for &m in months {
        if !(1..=12).contains(&m) {
            return Err(SurgeError::InvalidMonth { month: m });
        }
    }

    let mut out = Vec::new();
    for month in 1..=12u8 {
        let subset = extract_monthly(values, months, month);
        if subset.is_empty() {
            continue;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &subset {
            min = min.min(v);
            max = max.max(v);
        }
        out.push(MonthlyStats {
            month,
            mean: tethys_stats::mean(&subset),
            sd: tethys_stats::sd(&subset),
            min,
            max,
            count: subset.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extract_filters_by_month() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let months = [1u8, 2, 1, 2, 1, 3];
        assert_eq!(extract_monthly(&values, &months, 1), vec![1.0, 3.0, 5.0]);
        assert_eq!(extract_monthly(&values, &months, 2), vec![2.0, 4.0]);
        assert!(extract_monthly(&values, &months, 5).is_empty());
    }

    #[test]
    fn stats_per_present_month() {
        let values = [1.0, 3.0, -2.0, 2.0];
        let months = [1u8, 1, 6, 6];
        let stats = monthly_stats(&values, &months).unwrap();
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].month, 1);
        assert_relative_eq!(stats[0].mean, 2.0, epsilon = 1e-12);
        assert_relative_eq!(stats[0].min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(stats[0].max, 3.0, epsilon = 1e-12);
        assert_eq!(stats[0].count, 2);

        assert_eq!(stats[1].month, 6);
        assert_relative_eq!(stats[1].mean, 0.0, epsilon = 1e-12);
        assert_eq!(stats[1].count, 2);
    }

    #[test]
    fn missing_months_are_omitted() {
        let values = [1.0, 2.0];
        let months = [3u8, 3];
        let stats = monthly_stats(&values, &months).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].month, 3);
    }

    #[test]
    fn empty_errors() {
        assert!(matches!(
            monthly_stats(&[], &[]),
            Err(SurgeError::EmptyData)
        ));
    }

    #[test]
    fn length_mismatch_errors() {
        let err = monthly_stats(&[1.0, 2.0], &[1u8]).unwrap_err();
        assert!(matches!(
            err,
            SurgeError::MonthLengthMismatch {
                values_len: 2,
                months_len: 1
            }
        ));
    }

    #[test]
    fn invalid_month_errors() {
        let err = monthly_stats(&[1.0], &[0u8]).unwrap_err();
        assert!(matches!(err, SurgeError::InvalidMonth { month: 0 }));
        let err = monthly_stats(&[1.0], &[13u8]).unwrap_err();
        assert!(matches!(err, SurgeError::InvalidMonth { month: 13 }));
    }
}
