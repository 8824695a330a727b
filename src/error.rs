//! Error types for the veracity pipeline

use thiserror::Error;

/// Result type alias for veracity operations
pub type Result<T> = std::result::Result<T, VeracityError>;

/// Main error type for the pipeline
#[derive(Error, Debug)]
pub enum VeracityError {
    #[error("Invalid dataset: {0} (expected ISOT or LIAR2)")]
    InvalidDataset(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Training error: {0}")]
    TrainingError(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<polars::error::PolarsError> for VeracityError {
    fn from(err: polars::error::PolarsError) -> Self {
        VeracityError::DataError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VeracityError::InvalidDataset("FOO".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid dataset: FOO (expected ISOT or LIAR2)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VeracityError = io_err.into();
        assert!(matches!(err, VeracityError::IoError(_)));
    }
}
