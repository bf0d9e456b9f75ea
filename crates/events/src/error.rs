//! Error types for the tethys-events crate.

/// Error type for all fallible operations in the tethys-events crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when a detector or sweep configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the two series of a comparison differ in length.
    #[error("length mismatch: raw has {raw_len} samples, filtered has {filtered_len}")]
    LengthMismatch {
        /// Length of the raw series.
        raw_len: usize,
        /// Length of the filtered series.
        filtered_len: usize,
    },
}
