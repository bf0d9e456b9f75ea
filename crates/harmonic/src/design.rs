//! Design matrix construction for the harmonic regression.

use std::f64::consts::PI;

use faer::Mat;

/// Builds the harmonic design matrix for `n` hourly samples.
///
/// Layout is one row per sample t = 0..n-1 and 1 + 2K columns:
///
/// ```text
/// X = [1, cos(2π·f₁·t), sin(2π·f₁·t), cos(2π·f₂·t), sin(2π·f₂·t), ...]
/// ```
///
/// The sample index is the time variable; frequencies are in cycles per
/// hour, so one unit of t is one hour. Calendar time never enters the
/// regression.
pub fn design_matrix(n: usize, frequencies: &[f64]) -> Mat<f64> {
    let k = frequencies.len();
    let mut x = Mat::<f64>::zeros(n, 1 + 2 * k);
    for t in 0..n {
        let tf = t as f64;
        x[(t, 0)] = 1.0;
        for (i, &freq) in frequencies.iter().enumerate() {
            let arg = 2.0 * PI * freq * tf;
            x[(t, 1 + 2 * i)] = arg.cos();
            x[(t, 2 + 2 * i)] = arg.sin();
        }
    }
    x
}
