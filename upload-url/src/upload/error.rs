//! Error types for upload URL issuance

use thiserror::Error;

use crate::presigner::PresignError;

/// Result type for upload URL issuance
pub type UploadResult<T> = Result<T, UploadError>;

/// Why an upload URL could not be issued
#[derive(Error, Debug)]
pub enum UploadError {
    /// Body is not JSON, or `path` is missing or empty
    #[error("Invalid request body")]
    InvalidRequestBody,

    /// `BUCKET_NAME` or `BUCKET_REGION` is missing or empty
    #[error("Invalid configuration")]
    InvalidConfiguration,

    /// The signer rejected the request
    #[error("{0}")]
    Signing(#[from] PresignError),
}

impl UploadError {
    /// Whether the caller is at fault
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequestBody)
    }
}
