//! Error types for userdesk.

use thiserror::Error;

/// Infrastructure error type for userdesk.
///
/// User-facing flow failures (bad credentials, invalid input) are not
/// represented here; see [`crate::auth::FlowError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error for stored records.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Durable storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for userdesk operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = AppError::Storage("store is corrupted".to_string());
        assert_eq!(err.to_string(), "storage error: store is corrupted");
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("empty seed email".to_string());
        assert_eq!(err.to_string(), "configuration error: empty seed email");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
