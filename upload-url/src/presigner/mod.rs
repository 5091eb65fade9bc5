//! S3 presigned upload URLs

mod error;

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{config::Region, presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use error::{PresignError, PresignResult};

/// Lifetime of every issued upload URL
pub const PRESIGNED_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Everything needed to authorize a single object upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningParameters {
    /// Region the bucket lives in
    pub region: String,
    /// Destination bucket
    pub bucket_name: String,
    /// Destination object key
    pub object_key: String,
    /// When set, the upload must be sent with exactly this `Content-Type`
    pub content_type: Option<String>,
}

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL for PUT operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Issues presigned PUT URLs
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Signs a PUT of `params.object_key` valid for [`PRESIGNED_URL_EXPIRY_SECS`]
    ///
    /// # Errors
    ///
    /// Returns a `PresignError` if the URL cannot be signed
    async fn presign_put(&self, params: &SigningParameters) -> PresignResult<PresignedUrl>;
}

/// Signer backed by the AWS S3 SDK
///
/// A fresh client is scoped to the requested region for every call, sharing
/// credentials and endpoint settings from the base configuration.
pub struct S3Presigner {
    base_config: aws_sdk_s3::Config,
}

impl S3Presigner {
    /// Creates a new presigner
    ///
    /// # Arguments
    ///
    /// * `base_config` - S3 configuration holding credentials and endpoint overrides
    #[must_use]
    pub const fn new(base_config: aws_sdk_s3::Config) -> Self {
        Self { base_config }
    }

    fn client_for_region(&self, region: &str) -> S3Client {
        let config = self
            .base_config
            .to_builder()
            .region(Region::new(region.to_owned()))
            .build();

        S3Client::from_conf(config)
    }
}

#[async_trait]
impl UrlSigner for S3Presigner {
    async fn presign_put(&self, params: &SigningParameters) -> PresignResult<PresignedUrl> {
        debug!(
            "Generating presigned URL for object: {} in bucket: {} ({})",
            params.object_key, params.bucket_name, params.region
        );

        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS))
                .map_err(|e| {
                    PresignError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned_request = self
            .client_for_region(&params.region)
            .put_object()
            .bucket(&params.bucket_name)
            .key(&params.object_key)
            .set_content_type(params.content_type.clone())
            .presigned(presigned_config)
            .await
            .map_err(|e| PresignError::S3Error(format!("Failed to generate presigned URL: {e}")))?;

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS);

        debug!(
            "Generated presigned URL for object: {} expires at: {}",
            params.object_key, expires_at
        );

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}
