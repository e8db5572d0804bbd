//! Storage module for program images
//!
//! [`ObjectStorage`] is the seam the upload service talks to;
//! [`MinIOClient`] implements it on top of any S3-compatible endpoint.

mod minio_client;

use async_trait::async_trait;

use crate::core::error::Result;

pub use minio_client::MinIOClient;

/// Blob storage for publicly readable objects
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` under `key`; returns the stored key
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String>;

    /// Public URL of a stored key
    fn public_url(&self, key: &str) -> String;
}
