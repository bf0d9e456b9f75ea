//! Error types for tethys-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the tethys-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required upstream artifact does not exist on disk.
    #[error("missing input file: {} (run the producing stage first)", path.display())]
    MissingInput {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem error.
    #[error("io error: {source}")]
    Io {
        /// The underlying error.
        #[from]
        source: std::io::Error,
    },

    /// Returned when an input file contains no data rows.
    #[error("empty input file: {}", path.display())]
    EmptyFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Returned when a series contains no numeric values at all, so gap
    /// filling has nothing to interpolate from.
    #[error("series contains no numeric values")]
    AllMissing,

    /// Returned when fit parameters fail to serialise or deserialise.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a start date cannot be parsed.
    #[error("invalid start date: {value} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)")]
    InvalidStartDate {
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_input() {
        let e = IoError::MissingInput {
            path: PathBuf::from("model_parameters.json"),
        };
        assert_eq!(
            e.to_string(),
            "missing input file: model_parameters.json (run the producing stage first)"
        );
    }

    #[test]
    fn error_empty_file() {
        let e = IoError::EmptyFile {
            path: PathBuf::from("ssh.csv"),
        };
        assert_eq!(e.to_string(), "empty input file: ssh.csv");
    }

    #[test]
    fn error_all_missing() {
        assert_eq!(
            IoError::AllMissing.to_string(),
            "series contains no numeric values"
        );
    }

    #[test]
    fn error_invalid_start_date() {
        let e = IoError::InvalidStartDate {
            value: "not-a-date".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid start date: not-a-date (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)"
        );
    }

    #[test]
    fn error_from_io() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: IoError = inner.into();
        assert!(e.to_string().starts_with("io error:"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
