mod bucket_config;
mod environment;
mod error;

pub use bucket_config::{BucketConfig, BucketConfigSource};
pub use environment::Environment;
pub use error::{AppError, ErrorResponse};
