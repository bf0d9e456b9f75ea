//! Persistence of fitted harmonic parameters.
//!
//! The fit and prediction stages can run in separate invocations; the
//! JSON file written here is the hand-off artifact between them.

use std::path::Path;

use tracing::info;

use tethys_harmonic::HarmonicFit;

use crate::error::IoError;

/// Writes fitted harmonic parameters to a JSON file.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if encoding fails and propagates
/// filesystem errors.
pub fn save_fit(fit: &HarmonicFit, path: &Path) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(fit).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "fit parameters saved");
    Ok(())
}

/// Reads fitted harmonic parameters back from a JSON file.
///
/// # Errors
///
/// Returns [`IoError::MissingInput`] when the file does not exist —
/// the fitting stage has to run first — and [`IoError::Serialization`]
/// when the contents do not decode.
pub fn load_fit(path: &Path) -> Result<HarmonicFit, IoError> {
    if !path.exists() {
        return Err(IoError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let fit = serde_json::from_str(&text).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "fit parameters loaded");
    Ok(fit)
}
