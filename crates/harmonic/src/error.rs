//! Error types for the tethys-harmonic crate.

/// Error type for all fallible operations in the tethys-harmonic crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HarmonicError {
    /// Returned when the observation series is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when there are too few observations to determine all
    /// regression coefficients (intercept plus a cosine/sine pair per
    /// constituent).
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum required (1 + 2 × number of constituents).
        min: usize,
    },

    /// Returned when a fit is requested with an empty constituent list.
    #[error("no constituents to fit")]
    NoConstituents,
}
