//! Error types for the tethys-filter crate.

/// Error type for all fallible operations in the tethys-filter crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the cutoff period is not usable at hourly sampling.
    #[error("invalid cutoff period: {value} hours (must be finite and > 2)")]
    InvalidCutoff {
        /// The rejected cutoff period in hours.
        value: f64,
    },

    /// Returned when the filter order is zero.
    #[error("invalid filter order: {order} (must be >= 1)")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// Returned when the series is too short for the zero-phase edge
    /// padding.
    #[error("series too short for zero-phase filtering: got {n} samples, need more than {min}")]
    SeriesTooShort {
        /// Number of samples provided.
        n: usize,
        /// Padding length the series must exceed.
        min: usize,
    },
}
