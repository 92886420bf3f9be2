//! Filesystem blob store rooted in a capability directory.

use async_trait::async_trait;
use camino::{Utf8Component, Utf8Path};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::order::ports::{BlobStore, BlobStoreError, BlobStoreResult, public_url};

/// Stores attachments below a directory and serves them from a public base
/// URL. Files keep their raw names on disk; returned URLs are
/// percent-encoded per path segment.
///
/// All writes go through the directory capability, so logical paths cannot
/// escape the root.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: Arc<Dir>,
    public_base_url: String,
}

impl FsBlobStore {
    /// Opens (creating if needed) the root directory.
    ///
    /// # Errors
    ///
    /// Returns I/O errors when the directory cannot be created or opened.
    pub fn open(root: &Utf8Path, public_base_url: impl Into<String>) -> io::Result<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self {
            root: Arc::new(dir),
            public_base_url: public_base_url.into(),
        })
    }
}

fn validate_logical_path(logical_path: &str) -> BlobStoreResult<&Utf8Path> {
    let path = Utf8Path::new(logical_path);
    let is_relative_and_plain = !logical_path.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Utf8Component::Normal(_)));
    if !is_relative_and_plain {
        return Err(BlobStoreError::InvalidPath(logical_path.to_owned()));
    }
    Ok(path)
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(&self, logical_path: &str, bytes: &[u8]) -> BlobStoreResult<String> {
        let path = validate_logical_path(logical_path)?.to_owned();
        let root = Arc::clone(&self.root);
        let contents = bytes.to_vec();
        let write_path = path.clone();

        tokio::task::spawn_blocking(move || -> io::Result<()> {
            if let Some(parent) = write_path.parent().filter(|parent| !parent.as_str().is_empty())
            {
                root.create_dir_all(parent)?;
            }
            root.write(&write_path, contents)
        })
        .await
        .map_err(|err| BlobStoreError::storage(logical_path, err))?
        .map_err(|err| BlobStoreError::storage(logical_path, err))?;

        Ok(public_url(&self.public_base_url, path.as_str()))
    }
}
