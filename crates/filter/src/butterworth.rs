//! Digital Butterworth low-pass design via the bilinear transform.

use std::f64::consts::PI;

/// Designs a digital Butterworth low-pass filter.
///
/// `cutoff` is the cutoff frequency in cycles per sample (e.g. `1/12` for
/// a 12-sample period) and must lie in (0, 0.5). The analog prototype
/// cutoff is prewarped with `tan(π·cutoff)` so the digital response hits
/// -3 dB exactly at the requested frequency; each pole pair (plus a real
/// pole for odd orders) is mapped through the bilinear transform and the
/// second-order sections are convolved into transfer-function form.
///
/// Returns `(b, a)` numerator/denominator coefficients with `a[0] = 1` and
/// unity gain at DC.
pub fn butter_lowpass(order: usize, cutoff: f64) -> (Vec<f64>, Vec<f64>) {
    assert!(order >= 1, "butter_lowpass: order must be >= 1");
    assert!(
        cutoff > 0.0 && cutoff < 0.5,
        "butter_lowpass: cutoff must be in (0, 0.5), got {cutoff}"
    );

    // Prewarped analog cutoff.
    let wa = (PI * cutoff).tan();

    let mut b_all = vec![1.0_f64];
    let mut a_all = vec![1.0_f64];

    // Real pole at s = -wa for odd orders.
    if order % 2 == 1 {
        let d0 = 1.0 + wa;
        let b_sec = [wa / d0, wa / d0];
        let a_sec = [1.0, (wa - 1.0) / d0];
        b_all = convolve(&b_all, &b_sec);
        a_all = convolve(&a_all, &a_sec);
    }

    // Conjugate pole pairs: s² + a1_s·s + a0_s with
    // a1_s = -2·wa·cos(θ_k), a0_s = wa².
    for k in 0..order / 2 {
        let angle = PI * (2 * k + order + 1) as f64 / (2 * order) as f64;
        let a1_s = -2.0 * wa * angle.cos();
        let a0_s = wa * wa;

        let d0 = 1.0 + a1_s + a0_s;
        let b_sec = [a0_s / d0, 2.0 * a0_s / d0, a0_s / d0];
        let a_sec = [
            1.0,
            (2.0 * a0_s - 2.0) / d0,
            (1.0 - a1_s + a0_s) / d0,
        ];
        b_all = convolve(&b_all, &b_sec);
        a_all = convolve(&a_all, &a_sec);
    }

    (b_all, a_all)
}

/// Polynomial convolution (coefficient multiplication).
fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}
