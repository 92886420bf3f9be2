//! Concurrent attachment uploads.

use crate::order::ports::{BlobStore, BlobStoreError};
use futures::future::join_all;
use tracing::warn;

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    /// Original file name, used as the last path segment.
    pub name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl AttachmentFile {
    /// Creates an attachment file.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Returns the logical storage path `<prefix>/<name>`.
#[must_use]
pub fn logical_path(prefix: &str, name: &str) -> String {
    let directory = prefix.trim_end_matches('/');
    if directory.is_empty() {
        name.to_owned()
    } else {
        format!("{directory}/{name}")
    }
}

/// Uploads every file concurrently and returns one outcome per file in
/// input order.
///
/// Uploads do not depend on each other; one failure leaves the rest
/// untouched.
pub async fn upload_attachments<B>(
    blob_store: &B,
    prefix: &str,
    files: &[AttachmentFile],
) -> Vec<Result<String, BlobStoreError>>
where
    B: BlobStore + ?Sized,
{
    let uploads = files.iter().map(|file| async move {
        let path = logical_path(prefix, &file.name);
        blob_store
            .store(&path, &file.bytes)
            .await
            .inspect_err(|error| warn!(%path, %error, "attachment upload failed"))
    });
    join_all(uploads).await
}

/// Keeps the URLs of successful uploads in input order.
#[must_use]
pub fn successful_urls(outcomes: Vec<Result<String, BlobStoreError>>) -> Vec<String> {
    outcomes.into_iter().filter_map(Result::ok).collect()
}
