use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    presigner::UrlSigner,
    types::{AppError, BucketConfigSource},
    upload,
};

/// Success envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadUrlResponse {
    /// Always `false`
    pub error: bool,
    /// Presigned URL to PUT the file to
    pub data: String,
}

/// Issues a presigned URL for uploading one file straight to the bucket
///
/// The bucket configuration is loaded once per invocation and handed to the
/// validator; the signer is only reached for a valid request.
///
/// # Errors
///
/// - `400` with `Invalid request body` when the body is unreadable, not JSON, or has no `path`
/// - `500` with `Invalid configuration` when `BUCKET_NAME` or `BUCKET_REGION` is unset
/// - `500` with the signer's message when signing fails
#[instrument(skip(signer, config_source, body))]
pub async fn create_upload_url(
    Extension(signer): Extension<Arc<dyn UrlSigner>>,
    Extension(config_source): Extension<BucketConfigSource>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let config = config_source.load();
    let body = body.unwrap_or_default();

    let presigned_url = upload::create_upload_url(&body, &config, signer.as_ref()).await?;

    tracing::info!("Issued upload URL expiring at {}", presigned_url.expires_at);

    Ok(Json(UploadUrlResponse {
        error: false,
        data: presigned_url.url,
    }))
}
