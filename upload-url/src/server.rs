use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::{header, HeaderValue},
    middleware::from_fn,
    Extension, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    middleware::answer_preflight,
    presigner::UrlSigner,
    routes,
    types::{BucketConfigSource, Environment},
};

/// Builds the application router with its dependencies attached
///
/// With `cors_enabled`, preflight requests are answered directly and every
/// response allows any origin and credentials.
#[must_use]
pub fn router(
    signer: Arc<dyn UrlSigner>,
    config_source: BucketConfigSource,
    cors_enabled: bool,
) -> Router {
    let router = routes::handler()
        .layer(Extension(signer))
        .layer(Extension(config_source))
        .layer(TraceLayer::new_for_http());

    if !cors_enabled {
        return router;
    }

    router.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            ))
            .layer(from_fn(answer_preflight)),
    )
}

/// Starts the function with the given environment and signer
///
/// Runs under the Lambda runtime when `AWS_LAMBDA_RUNTIME_API` is set,
/// otherwise serves HTTP locally on `PORT` (default 8001).
///
/// # Errors
///
/// Returns an error if the runtime fails or the server cannot bind to the port
pub async fn start(environment: Environment, signer: Arc<dyn UrlSigner>) -> anyhow::Result<()> {
    let router = router(
        signer,
        BucketConfigSource::Environment,
        environment.cors_enabled(),
    );

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        info!("Upload URL function started on AWS Lambda");
        return lambda_http::run(router)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime error: {e}"));
    }

    let addr = SocketAddr::from((
        [0, 0, 0, 0],
        env::var("PORT").map_or(Ok(8001), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    info!("Upload URL service started on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Received shutdown signal, stopping server");
}
