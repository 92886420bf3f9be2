//! Blob storage port for order attachments.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::sync::Arc;
use thiserror::Error;

/// Bytes left unescaped in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Result type for blob storage operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Attachment storage contract.
///
/// Each call succeeds or fails on its own; a failure never affects other
/// files of the same batch.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `logical_path` and returns a stable public URL.
    async fn store(&self, logical_path: &str, bytes: &[u8]) -> BlobStoreResult<String>;
}

/// Errors returned by blob storage adapters.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The logical path cannot be stored safely.
    #[error("invalid blob path '{0}'")]
    InvalidPath(String),

    /// The storage backend rejected the file.
    #[error("blob storage error for '{path}': {reason}")]
    Storage {
        /// Logical path of the failed file.
        path: String,
        /// Underlying failure.
        reason: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl BlobStoreError {
    /// Wraps a backend failure for the given path.
    pub fn storage(
        path: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            path: path.into(),
            reason: Arc::new(err),
        }
    }
}

/// Joins `base_url` and a logical path, percent-encoding each path segment.
///
/// ```
/// use workboard::order::ports::public_url;
///
/// assert_eq!(
///     public_url("https://files.example/", "orders/my report#2.pdf"),
///     "https://files.example/orders/my%20report%232.pdf"
/// );
/// ```
#[must_use]
pub fn public_url(base_url: &str, logical_path: &str) -> String {
    let encoded: Vec<String> = logical_path
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect();
    format!("{}/{}", base_url.trim_end_matches('/'), encoded.join("/"))
}
