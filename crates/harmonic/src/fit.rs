//! Fitted harmonic model results.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tethys_constituents::ConstituentDefinition;

use crate::design::design_matrix;
use crate::error::HarmonicError;
use crate::ols::solve_least_squares;

/// Amplitude and phase of a single constituent, derived from its fitted
/// cosine/sine coefficient pair.
///
/// `amplitude = sqrt(cos² + sin²)` and
/// `phase = atan2(sin, cos)` in degrees, wrapped to `[0, 360)`.
#[derive(Clone, Debug, Serialize)]
pub struct FittedConstituent {
    /// Constituent name (e.g. "M2").
    pub name: String,
    /// Frequency in cycles per hour.
    pub frequency: f64,
    /// Amplitude in the units of the observations.
    pub amplitude: f64,
    /// Phase in degrees, in `[0, 360)`.
    pub phase_degrees: f64,
    /// Fitted cosine coefficient.
    pub cosine_coef: f64,
    /// Fitted sine coefficient.
    pub sine_coef: f64,
}

impl FittedConstituent {
    /// Returns the constituent period in hours (1 / frequency).
    pub fn period_hours(&self) -> f64 {
        1.0 / self.frequency
    }
}

/// A fitted harmonic model produced by [`fit()`].
///
/// Holds the regression intercept, the interleaved cosine/sine coefficient
/// pairs, and the constituent frequencies and names, which together are
/// everything the prediction stage needs. The struct serialises to JSON so
/// that prediction can run as a separate, later stage against persisted
/// parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HarmonicFit {
    names: Vec<String>,
    frequencies: Vec<f64>,
    /// Interleaved pairs: `[cos₁, sin₁, cos₂, sin₂, ...]`.
    coefficients: Vec<f64>,
    intercept: f64,
    n_obs: usize,
    r_squared: f64,
}

impl HarmonicFit {
    /// Creates a new `HarmonicFit` (crate-internal constructor).
    pub(crate) fn new(
        names: Vec<String>,
        frequencies: Vec<f64>,
        coefficients: Vec<f64>,
        intercept: f64,
        n_obs: usize,
        r_squared: f64,
    ) -> Self {
        Self {
            names,
            frequencies,
            coefficients,
            intercept,
            n_obs,
            r_squared,
        }
    }

    /// Returns the constituent names, in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the constituent frequencies in cycles per hour, in catalog
    /// order.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns the interleaved cosine/sine coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the regression intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the number of observations the model was fitted on.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Returns the in-sample coefficient of determination.
    ///
    /// Reported for diagnostics only; nothing downstream branches on it.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Returns the number of constituents in the model.
    pub fn n_constituents(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns the cosine coefficient of constituent `index`.
    pub fn cosine_coef(&self, index: usize) -> f64 {
        self.coefficients[2 * index]
    }

    /// Returns the sine coefficient of constituent `index`.
    pub fn sine_coef(&self, index: usize) -> f64 {
        self.coefficients[2 * index + 1]
    }

    /// Derives the per-constituent amplitude/phase table, sorted by
    /// descending amplitude.
    pub fn constituents(&self) -> Vec<FittedConstituent> {
        let mut out: Vec<FittedConstituent> = (0..self.n_constituents())
            .map(|i| {
                let cos = self.cosine_coef(i);
                let sin = self.sine_coef(i);
                FittedConstituent {
                    name: self.names[i].clone(),
                    frequency: self.frequencies[i],
                    amplitude: (cos * cos + sin * sin).sqrt(),
                    phase_degrees: sin.atan2(cos).to_degrees().rem_euclid(360.0),
                    cosine_coef: cos,
                    sine_coef: sin,
                }
            })
            .collect();
        out.sort_by(|a, b| {
            b.amplitude
                .partial_cmp(&a.amplitude)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        out
    }
}

/// Fits the harmonic model to an hourly observation series.
///
/// Builds the cosine/sine design matrix over t = 0..N-1 and solves the
/// ordinary least-squares regression with intercept. The solution is
/// deterministic for fixed input. NaN observations are not guarded against
/// and propagate into the coefficients; gap filling is the loader's job.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`HarmonicError::EmptyData`] | `values` is empty |
/// | [`HarmonicError::NoConstituents`] | `constituents` is empty |
/// | [`HarmonicError::InsufficientData`] | fewer observations than unknowns |
pub fn fit(
    values: &[f64],
    constituents: &[ConstituentDefinition],
) -> Result<HarmonicFit, HarmonicError> {
    if values.is_empty() {
        return Err(HarmonicError::EmptyData);
    }
    if constituents.is_empty() {
        return Err(HarmonicError::NoConstituents);
    }

    let n = values.len();
    let k = constituents.len();
    let min = 1 + 2 * k;
    if n < min {
        return Err(HarmonicError::InsufficientData { n, min });
    }

    let frequencies: Vec<f64> = constituents.iter().map(|c| c.frequency()).collect();
    let names: Vec<String> = constituents.iter().map(|c| c.name().to_string()).collect();

    debug!(n, k, "building harmonic design matrix");
    let x = design_matrix(n, &frequencies);
    let beta = solve_least_squares(&x, values);

    let intercept = beta[0];
    let coefficients = beta[1..].to_vec();

    let fit = HarmonicFit::new(names, frequencies, coefficients, intercept, n, 0.0);
    let reconstructed = fit.predict(n);
    let r2 = tethys_stats::r_squared(values, &reconstructed);
    info!(n, k, r_squared = r2, "harmonic fit complete");

    Ok(HarmonicFit { r_squared: r2, ..fit })
}
