//! Sea level record loading and gap filling.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;

/// Loads a single-column CSV of hourly sea-surface heights.
///
/// Only the first comma-separated field of each row is read. Fields that
/// fail to parse as numbers become NaN and are then filled by
/// [`fill_gaps`], so the returned series is NaN-free and ready for the
/// harmonic fit.
///
/// # Errors
///
/// Returns [`IoError::MissingInput`] when the file does not exist,
/// [`IoError::EmptyFile`] when no data rows remain, and
/// [`IoError::AllMissing`] when not a single field parses.
pub fn read_series(path: &Path, has_header: bool) -> Result<Vec<f64>, IoError> {
    if !path.exists() {
        return Err(IoError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 && has_header {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let field = trimmed.split(',').next().unwrap_or("").trim();
        values.push(field.parse::<f64>().unwrap_or(f64::NAN));
    }

    if values.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let n_missing = values.iter().filter(|v| !v.is_finite()).count();
    if n_missing > 0 {
        info!(
            n_missing,
            n_total = values.len(),
            "filling gaps by linear interpolation"
        );
        values = fill_gaps(&values)?;
    }

    debug!(path = %path.display(), n = values.len(), "sea level record loaded");
    Ok(values)
}

/// Fills non-finite samples by linear interpolation between their nearest
/// finite neighbours.
///
/// Leading and trailing gaps are extended flat from the first and last
/// finite value, so interpolation works in both directions.
///
/// # Errors
///
/// Returns [`IoError::AllMissing`] when no finite value exists.
pub fn fill_gaps(values: &[f64]) -> Result<Vec<f64>, IoError> {
    let finite: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, _)| i)
        .collect();
    if finite.is_empty() {
        return Err(IoError::AllMissing);
    }

    let mut out = values.to_vec();
    let first = finite[0];
    let last = *finite.last().expect("finite is non-empty");

    for v in out.iter_mut().take(first) {
        *v = values[first];
    }
    for v in out.iter_mut().skip(last + 1) {
        *v = values[last];
    }
    for window in finite.windows(2) {
        let (a, b) = (window[0], window[1]);
        if b > a + 1 {
            let (va, vb) = (values[a], values[b]);
            for i in a + 1..b {
                let fraction = (i - a) as f64 / (b - a) as f64;
                out[i] = va + fraction * (vb - va);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_interior_gap() {
        let filled = fill_gaps(&[1.0, f64::NAN, f64::NAN, 4.0]).unwrap();
        assert_relative_eq!(filled[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(filled[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn extends_leading_and_trailing_gaps_flat() {
        let filled = fill_gaps(&[f64::NAN, 2.0, 3.0, f64::NAN, f64::NAN]).unwrap();
        assert_eq!(filled, vec![2.0, 2.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn no_gaps_is_identity() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(fill_gaps(&values).unwrap(), values);
    }

    #[test]
    fn all_missing_errors() {
        assert!(matches!(
            fill_gaps(&[f64::NAN, f64::NAN]),
            Err(IoError::AllMissing)
        ));
    }

    #[test]
    fn single_finite_value_fills_everything() {
        let filled = fill_gaps(&[f64::NAN, 5.0, f64::NAN]).unwrap();
        assert_eq!(filled, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn infinity_counts_as_missing() {
        let filled = fill_gaps(&[1.0, f64::INFINITY, 3.0]).unwrap();
        assert_relative_eq!(filled[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_file_errors() {
        let err = read_series(Path::new("/nonexistent/ssh.csv"), false).unwrap_err();
        assert!(matches!(err, IoError::MissingInput { .. }));
    }
}
