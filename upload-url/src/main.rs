use std::sync::Arc;

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};
use upload_url::{presigner::S3Presigner, server, types::Environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local runs may keep their settings in a .env file
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt().json().with_env_filter(env_filter).init();
    } else {
        fmt().with_env_filter(env_filter).init();
    }

    let signer = Arc::new(S3Presigner::new(environment.s3_client_config().await));

    server::start(environment, signer).await
}
