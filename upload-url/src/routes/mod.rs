mod health;
/// Presigned upload URL function
pub mod upload_url;

use axum::{routing::get, Router};

/// Creates the router with all handler routes
///
/// The upload URL function answers on every path and method other than
/// `/health`, since the function is mounted behind an API Gateway route.
#[must_use]
pub fn handler() -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .fallback(upload_url::create_upload_url)
}
