//! Statistical helper functions shared across the Tethys workspace.
//!
//! All spread and moment statistics use the population (N) denominator,
//! matching the convention of the surge pipeline: the event threshold and
//! the residual summary are both defined against the population standard
//! deviation of the full record.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (N denominator). Returns 0.0 if empty.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n
}

/// Population standard deviation (N denominator). Returns 0.0 if empty.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Median. Sorts a copy; for even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "median: input must not be empty");
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Skewness (Fisher g1, population moments: m3 / m2^1.5).
///
/// Returns `None` for fewer than 2 values or zero variance.
pub fn skewness(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let n = data.len() as f64;
    let m = mean(data);
    let m2 = data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / n;
    if m2 <= 0.0 {
        return None;
    }
    let m3 = data.iter().map(|&x| (x - m).powi(3)).sum::<f64>() / n;
    Some(m3 / m2.powf(1.5))
}

/// Excess kurtosis (Fisher g2, population moments: m4 / m2^2 - 3).
///
/// Returns `None` for fewer than 2 values or zero variance. A normal
/// distribution scores 0.
pub fn kurtosis(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let n = data.len() as f64;
    let m = mean(data);
    let m2 = data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / n;
    if m2 <= 0.0 {
        return None;
    }
    let m4 = data.iter().map(|&x| (x - m).powi(4)).sum::<f64>() / n;
    Some(m4 / (m2 * m2) - 3.0)
}

/// Coefficient of determination R² of `predicted` against `observed`.
///
/// R² = 1 - SS_res / SS_tot with SS_tot taken around the observed mean.
/// Returns 1.0 for a constant observed series that is matched exactly and
/// 0.0 for a constant observed series that is not (degenerate SS_tot).
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
pub fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        predicted.len(),
        "r_squared: length mismatch"
    );
    assert!(!observed.is_empty(), "r_squared: input must not be empty");

    let m = mean(observed);
    let ss_tot: f64 = observed.iter().map(|&y| (y - m) * (y - m)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&y, &p)| (y - p) * (y - p))
        .sum();

    if ss_tot <= 0.0 {
        return if ss_res <= 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is
/// zero (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}
