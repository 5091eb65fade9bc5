//! Destination bucket configuration, read at invocation time

use std::env;

/// Snapshot of the destination bucket settings
///
/// Values are kept optional: a missing bucket or region is reported per
/// request as a configuration error rather than failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketConfig {
    /// `BUCKET_NAME`
    pub bucket_name: Option<String>,
    /// `BUCKET_REGION`
    pub bucket_region: Option<String>,
}

impl BucketConfig {
    /// Reads `BUCKET_NAME` and `BUCKET_REGION` from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, treating empty values as unset
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|val| !val.is_empty());

        Self {
            bucket_name: non_empty("BUCKET_NAME"),
            bucket_region: non_empty("BUCKET_REGION"),
        }
    }

    /// Config with both values present
    #[must_use]
    pub fn new(bucket_name: impl Into<String>, bucket_region: impl Into<String>) -> Self {
        Self {
            bucket_name: Some(bucket_name.into()),
            bucket_region: Some(bucket_region.into()),
        }
    }
}

/// Where handlers obtain the bucket configuration for each invocation
#[derive(Debug, Clone, Default)]
pub enum BucketConfigSource {
    /// Re-read the process environment on every invocation
    #[default]
    Environment,
    /// Use a fixed configuration
    Fixed(BucketConfig),
}

impl BucketConfigSource {
    /// Takes the configuration snapshot for one invocation
    #[must_use]
    pub fn load(&self) -> BucketConfig {
        match self {
            Self::Environment => BucketConfig::from_env(),
            Self::Fixed(config) => config.clone(),
        }
    }
}
