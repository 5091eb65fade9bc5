use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;
use upload_url::{
    presigner::UrlSigner,
    server,
    types::{BucketConfig, BucketConfigSource},
};

use super::StubSigner;

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Bucket settings used by most tests
pub fn test_bucket_config() -> BucketConfig {
    BucketConfig::new("my-bucket", "us-east-1")
}

/// Router wired to a recording stub signer
pub struct TestContext {
    pub router: Router,
    pub signer: Arc<StubSigner>,
}

impl TestContext {
    /// Context with fixed bucket settings and CORS enabled
    pub fn new(bucket_config: BucketConfig) -> Self {
        Self::with_source(BucketConfigSource::Fixed(bucket_config), true)
    }

    pub fn with_source(config_source: BucketConfigSource, cors_enabled: bool) -> Self {
        setup_test_env();

        let signer = Arc::new(StubSigner::default());
        let router = server::router(signer.clone(), config_source, cors_enabled);

        Self { router, signer }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_request("POST", route, payload.to_string()).await
    }

    pub async fn send_request(
        &self,
        method: &str,
        route: &str,
        body: impl Into<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .header("Content-Type", "application/json")
            .body(body.into())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Router wired to an arbitrary signer with fixed bucket settings
pub fn router_with_signer(signer: Arc<dyn UrlSigner>, bucket_config: BucketConfig) -> Router {
    setup_test_env();
    server::router(signer, BucketConfigSource::Fixed(bucket_config), true)
}

pub async fn send_post(
    router: &Router,
    route: &str,
    payload: serde_json::Value,
) -> Result<Response, Box<dyn std::error::Error>> {
    let request = Request::builder()
        .uri(route)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))?;

    let response = router.clone().oneshot(request).await?;
    Ok(response)
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
