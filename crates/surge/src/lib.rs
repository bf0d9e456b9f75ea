//! Tethys storm surge extraction: the non-tidal residual and its
//! descriptive statistics.
//!
//! The storm surge is what remains of the observed sea level after the
//! predicted astronomical tide is subtracted. This crate computes that
//! residual, characterises its distribution (including a normality check),
//! and summarises it per calendar month.

mod error;
mod monthly;
mod residual;
mod stats;

pub use error::SurgeError;
pub use monthly::{MonthlyStats, extract_monthly, monthly_stats};
pub use residual::{SurgeSeries, compute_residual};
pub use stats::{NormalityTest, ResidualStats, residual_stats};
