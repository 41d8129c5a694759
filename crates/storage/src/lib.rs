//! S3-compatible object storage for pet photos.
//!
//! Wraps the AWS S3 SDK with the small surface the journal pipeline needs:
//! upload a byte payload under a generated key, build its public URL, and
//! delete objects on cleanup paths. Works against AWS proper or any
//! S3-compatible vendor via a custom endpoint.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;

/// Default bucket holding journal photos.
pub const DEFAULT_BUCKET: &str = "pet-photos";

/// Default region when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Cache lifetime advertised on uploaded objects (seconds).
pub const OBJECT_CACHE_SECS: u32 = 3600;

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket name (default: `pet-photos`).
    pub bucket: String,
    /// Region (default: `us-east-1`).
    pub region: String,
    /// Custom endpoint for S3-compatible vendors. When set, path-style
    /// addressing is used.
    pub endpoint_url: Option<String>,
    /// Base URL for public object access. When unset, the AWS
    /// virtual-hosted URL is used.
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var                   | Default       |
    /// |---------------------------|---------------|
    /// | `STORAGE_BUCKET`          | `pet-photos`  |
    /// | `STORAGE_REGION`          | `us-east-1`   |
    /// | `STORAGE_ENDPOINT_URL`    | --            |
    /// | `STORAGE_PUBLIC_BASE_URL` | --            |
    pub fn from_env() -> Self {
        Self {
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.into()),
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| DEFAULT_REGION.into()),
            endpoint_url: std::env::var("STORAGE_ENDPOINT_URL").ok(),
            public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL").ok(),
        }
    }
}

/// Errors from the object storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object upload failed: {0}")]
    Upload(String),

    #[error("Object delete failed: {0}")]
    Delete(String),
}

/// Client for the photo bucket.
pub struct ObjectStorage {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
    public_base_url: Option<String>,
}

impl ObjectStorage {
    /// Build a client from configuration. Credentials come from the
    /// standard AWS environment/profile chain.
    pub async fn connect(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // S3-compatible vendors generally require path-style addressing.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    /// Upload a byte payload under the given key.
    ///
    /// Objects are uploaded with `cache-control: max-age=3600` so the CDN
    /// and browsers can cache journal photos.
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .cache_control(format!("max-age={OBJECT_CACHE_SECS}"))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;
        tracing::debug!(key, size, bucket = %self.bucket, "Uploaded object");
        Ok(())
    }

    /// Public URL for a stored object.
    pub fn public_url(&self, key: &str) -> String {
        build_public_url(
            self.public_base_url.as_deref(),
            &self.bucket,
            &self.region,
            key,
        )
    }

    /// Delete an object. Used by cleanup paths; missing keys are not an error.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;
        Ok(())
    }
}

/// Build the public URL for an object.
///
/// With a configured public base (CDN or S3-compatible vendor) the URL is
/// `{base}/{bucket}/{key}`; otherwise the AWS virtual-hosted form is used.
fn build_public_url(public_base: Option<&str>, bucket: &str, region: &str, key: &str) -> String {
    match public_base {
        Some(base) => format!("{}/{bucket}/{key}", base.trim_end_matches('/')),
        None => format!("https://{bucket}.s3.{region}.amazonaws.com/{key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_virtual_hosted_url() {
        let url = build_public_url(None, "pet-photos", "us-east-1", "1706190600000-a1b2c3d4.png");
        assert_eq!(
            url,
            "https://pet-photos.s3.us-east-1.amazonaws.com/1706190600000-a1b2c3d4.png"
        );
    }

    #[test]
    fn custom_public_base_url() {
        let url = build_public_url(
            Some("https://storage.example.com"),
            "pet-photos",
            "us-east-1",
            "photo.png",
        );
        assert_eq!(url, "https://storage.example.com/pet-photos/photo.png");
    }

    #[test]
    fn custom_base_trailing_slash_is_normalized() {
        let url = build_public_url(
            Some("https://storage.example.com/"),
            "pet-photos",
            "us-east-1",
            "photo.png",
        );
        assert_eq!(url, "https://storage.example.com/pet-photos/photo.png");
    }
}
