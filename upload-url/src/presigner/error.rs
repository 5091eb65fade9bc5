//! Error types for presigning operations

use thiserror::Error;

/// Result type for presigning operations
pub type PresignResult<T> = Result<T, PresignError>;

/// Errors that can occur while issuing a presigned URL
#[derive(Error, Debug)]
pub enum PresignError {
    /// Presigning configuration could not be built
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// S3 client failed to sign the request
    #[error("S3 service error: {0}")]
    S3Error(String),
}
