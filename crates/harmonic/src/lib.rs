//! Tethys harmonic analysis: least-squares fitting of tidal constituents
//! and reconstruction of the predicted tide.
//!
//! The observed sea level is modelled as
//!
//! ```text
//! η(t) = η₀ + Σᵢ [Aᵢ cos(2π·fᵢ·t) + Bᵢ sin(2π·fᵢ·t)]
//! ```
//!
//! over hourly sample indices t, with one cosine/sine pair per constituent
//! frequency from the [`tethys_constituents`] catalog. Fitting is ordinary
//! least squares with intercept; prediction re-evaluates the same design at
//! any length.

mod design;
mod error;
mod fit;
mod ols;
mod predict;

pub use design::design_matrix;
pub use error::HarmonicError;
pub use fit::{FittedConstituent, HarmonicFit, fit};
