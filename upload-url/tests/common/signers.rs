use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use chrono::Utc;
use upload_url::presigner::{
    PresignError, PresignResult, PresignedUrl, S3Presigner, SigningParameters, UrlSigner,
    PRESIGNED_URL_EXPIRY_SECS,
};
use url::Url;

/// Signer that records every call and issues deterministic fake URLs
///
/// The issued URL carries the bound content type as a query parameter so
/// tests can play the storage provider with [`stub_accepts_upload`].
#[derive(Default)]
pub struct StubSigner {
    calls: Mutex<Vec<SigningParameters>>,
}

impl StubSigner {
    pub fn calls(&self) -> Vec<SigningParameters> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlSigner for StubSigner {
    async fn presign_put(&self, params: &SigningParameters) -> PresignResult<PresignedUrl> {
        self.calls.lock().unwrap().push(params.clone());

        let mut url = Url::parse(&format!(
            "https://{}.s3.{}.amazonaws.com/",
            params.bucket_name, params.region
        ))
        .map_err(|e| PresignError::S3Error(e.to_string()))?;
        url.set_path(&params.object_key);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("X-Amz-Expires", &PRESIGNED_URL_EXPIRY_SECS.to_string());
            match &params.content_type {
                Some(content_type) => {
                    query.append_pair("X-Amz-SignedHeaders", "content-type;host");
                    query.append_pair("content-type", content_type);
                }
                None => {
                    query.append_pair("X-Amz-SignedHeaders", "host");
                }
            }
        }

        Ok(PresignedUrl {
            url: url.to_string(),
            expires_at: Utc::now() + std::time::Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS),
        })
    }
}

/// Whether the storage provider would accept a PUT to a stub-issued URL
/// sent with the given `Content-Type` header
pub fn stub_accepts_upload(presigned_url: &str, content_type: Option<&str>) -> bool {
    let url = Url::parse(presigned_url).unwrap();
    let bound = url
        .query_pairs()
        .find(|(key, _)| key == "content-type")
        .map(|(_, value)| value.into_owned());

    match bound {
        Some(bound) => content_type == Some(bound.as_str()),
        None => true,
    }
}

/// Signer that always fails
pub struct FailingSigner;

#[async_trait]
impl UrlSigner for FailingSigner {
    async fn presign_put(&self, _params: &SigningParameters) -> PresignResult<PresignedUrl> {
        Err(PresignError::S3Error(
            "Failed to generate presigned URL: no credentials".to_string(),
        ))
    }
}

/// Real S3 presigner with static test credentials
///
/// Presigning happens locally, so no network access is needed.
pub fn s3_presigner() -> Arc<S3Presigner> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .credentials_provider(Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            None,
            None,
            "test",
        ))
        .region(Region::new("eu-central-1"))
        .build();

    Arc::new(S3Presigner::new(config))
}

/// Looks up a decoded query parameter
pub fn query_param(url: &str, name: &str) -> Option<String> {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
