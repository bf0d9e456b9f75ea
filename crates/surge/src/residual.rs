//! Storm surge residual computation.

use tracing::debug;

use crate::error::SurgeError;

/// Time-aligned original, predicted and residual series.
///
/// The residual (storm surge) is `original - predicted` per sample; an
/// optional filtered residual can be attached after low-pass smoothing.
/// Invariant: every attached series has the same length and shares the
/// implicit hourly index.
#[derive(Clone, Debug)]
pub struct SurgeSeries {
    original: Vec<f64>,
    predicted: Vec<f64>,
    residual: Vec<f64>,
    filtered: Option<Vec<f64>>,
}

impl SurgeSeries {
    /// Returns the observed series.
    pub fn original(&self) -> &[f64] {
        &self.original
    }

    /// Returns the predicted tide.
    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    /// Returns the raw residual (observed minus predicted).
    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// Returns the filtered residual, if one has been attached.
    pub fn filtered(&self) -> Option<&[f64]> {
        self.filtered.as_deref()
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.residual.len()
    }

    /// Returns `true` if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }

    /// Attaches a filtered residual series.
    ///
    /// # Errors
    ///
    /// Returns [`SurgeError::FilteredLengthMismatch`] if the filtered
    /// series does not match the residual length.
    pub fn with_filtered(mut self, filtered: Vec<f64>) -> Result<Self, SurgeError> {
        if filtered.len() != self.residual.len() {
            return Err(SurgeError::FilteredLengthMismatch {
                residual_len: self.residual.len(),
                filtered_len: filtered.len(),
            });
        }
        self.filtered = Some(filtered);
        Ok(self)
    }

    /// Returns the series event detection should run on: the filtered
    /// residual when present, otherwise the raw residual.
    pub fn active_residual(&self) -> &[f64] {
        self.filtered.as_deref().unwrap_or(&self.residual)
    }
}

/// Computes the storm surge residual from aligned observed and predicted
/// series.
///
/// `residual[i] = original[i] - predicted[i]`, exactly and elementwise.
/// Both inputs are copied into the returned [`SurgeSeries`]; neither is
/// mutated.
///
/// # Errors
///
/// Returns [`SurgeError::EmptyData`] for empty input and
/// [`SurgeError::LengthMismatch`] when the lengths disagree.
pub fn compute_residual(original: &[f64], predicted: &[f64]) -> Result<SurgeSeries, SurgeError> {
    if original.is_empty() {
        return Err(SurgeError::EmptyData);
    }
    if original.len() != predicted.len() {
        return Err(SurgeError::LengthMismatch {
            original_len: original.len(),
            predicted_len: predicted.len(),
        });
    }

    let residual: Vec<f64> = original
        .iter()
        .zip(predicted.iter())
        .map(|(&o, &p)| o - p)
        .collect();

    debug!(n = residual.len(), "storm surge residual computed");

    Ok(SurgeSeries {
        original: original.to_vec(),
        predicted: predicted.to_vec(),
        residual,
        filtered: None,
    })
}
