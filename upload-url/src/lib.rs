//! Presigned upload URL function
//!
//! Issues short-lived URLs that let clients `PUT` one file straight into an
//! S3 bucket.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, missing_docs, dead_code)]

/// Request middleware
pub mod middleware;

/// S3 presigning
pub mod presigner;

/// HTTP routes
pub mod routes;

/// Router assembly and hosting
pub mod server;

/// Configuration and API error types
pub mod types;

/// Request validation and issuance pipeline
pub mod upload;
