//! Request validation and the validate → sign pipeline

mod error;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    presigner::{PresignedUrl, SigningParameters, UrlSigner},
    types::BucketConfig,
};

pub use error::{UploadError, UploadResult};

/// Upload request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Destination object key
    pub path: Option<String>,
    /// MIME type the upload must be sent with
    pub content_type: Option<String>,
}

/// Validates a raw request body against the bucket configuration
///
/// Configuration is checked before the body, so a misconfigured deployment
/// reports `InvalidConfiguration` whatever the client sent. Malformed JSON
/// is indistinguishable from a missing `path`.
///
/// # Errors
///
/// Returns `UploadError::InvalidConfiguration` if the bucket name or region is unset
/// Returns `UploadError::InvalidRequestBody` if the body has no usable `path`
pub fn validate(body: &[u8], config: &BucketConfig) -> UploadResult<SigningParameters> {
    let (Some(bucket_name), Some(region)) = (&config.bucket_name, &config.bucket_region) else {
        return Err(UploadError::InvalidConfiguration);
    };

    // Must be a JSON object, arrays would otherwise fill the struct positionally
    let fields: Map<String, Value> =
        serde_json::from_slice(body).map_err(|_| UploadError::InvalidRequestBody)?;
    let request: UploadRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|_| UploadError::InvalidRequestBody)?;

    let object_key = request
        .path
        .filter(|path| !path.is_empty())
        .ok_or(UploadError::InvalidRequestBody)?;

    Ok(SigningParameters {
        region: region.clone(),
        bucket_name: bucket_name.clone(),
        object_key,
        content_type: request.content_type.filter(|ct| !ct.is_empty()),
    })
}

/// Validates the request and signs an upload URL for it
///
/// The signer is only called for a valid request.
///
/// # Errors
///
/// Returns the validation error, or `UploadError::Signing` if signing fails
pub async fn create_upload_url(
    body: &[u8],
    config: &BucketConfig,
    signer: &dyn UrlSigner,
) -> UploadResult<PresignedUrl> {
    let params = validate(body, config)?;
    Ok(signer.presign_put(&params).await?)
}
