//! Error types for the tethys-surge crate.

/// Error type for all fallible operations in the tethys-surge crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SurgeError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when observed and predicted series differ in length.
    #[error("length mismatch: original has {original_len} samples, predicted has {predicted_len}")]
    LengthMismatch {
        /// Length of the observed series.
        original_len: usize,
        /// Length of the predicted series.
        predicted_len: usize,
    },

    /// Returned when a filtered series does not match the residual length.
    #[error("filtered length mismatch: residual has {residual_len} samples, filtered has {filtered_len}")]
    FilteredLengthMismatch {
        /// Length of the residual series.
        residual_len: usize,
        /// Length of the filtered series.
        filtered_len: usize,
    },

    /// Returned when the month labels do not align with the value series.
    #[error("month length mismatch: values has {values_len} samples, months has {months_len}")]
    MonthLengthMismatch {
        /// Length of the value series.
        values_len: usize,
        /// Length of the month labels.
        months_len: usize,
    },

    /// Returned when a month label is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_data() {
        assert_eq!(SurgeError::EmptyData.to_string(), "input data is empty");
    }

    #[test]
    fn error_length_mismatch() {
        let e = SurgeError::LengthMismatch {
            original_len: 100,
            predicted_len: 99,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: original has 100 samples, predicted has 99"
        );
    }

    #[test]
    fn error_filtered_length_mismatch() {
        let e = SurgeError::FilteredLengthMismatch {
            residual_len: 10,
            filtered_len: 12,
        };
        assert_eq!(
            e.to_string(),
            "filtered length mismatch: residual has 10 samples, filtered has 12"
        );
    }

    #[test]
    fn error_invalid_month() {
        let e = SurgeError::InvalidMonth { month: 13 };
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SurgeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SurgeError>();
    }
}
