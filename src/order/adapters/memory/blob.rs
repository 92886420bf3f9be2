//! In-memory blob store for attachment tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::order::ports::{BlobStore, BlobStoreError, BlobStoreResult, public_url};

/// In-memory blob store returning percent-encoded URLs below a fixed base.
///
/// Individual logical paths can be marked as failing so that batch uploads
/// see a mix of successes and failures.
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    base_url: String,
    state: Arc<RwLock<InMemoryBlobState>>,
}

#[derive(Debug, Default)]
struct InMemoryBlobState {
    blobs: HashMap<String, Vec<u8>>,
    failing_paths: HashSet<String>,
}

impl InMemoryBlobStore {
    /// Creates an empty store serving URLs below `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            state: Arc::new(RwLock::new(InMemoryBlobState::default())),
        }
    }

    /// Makes every upload to `logical_path` fail.
    ///
    /// # Errors
    ///
    /// Returns storage errors when lock acquisition fails.
    pub fn fail_path(&self, logical_path: impl Into<String>) -> BlobStoreResult<()> {
        let path = logical_path.into();
        let mut state = self.state.write().map_err(|err| {
            BlobStoreError::storage(path.clone(), std::io::Error::other(err.to_string()))
        })?;
        state.failing_paths.insert(path);
        Ok(())
    }

    /// Returns the bytes stored under `logical_path`, if any.
    #[must_use]
    pub fn contents(&self, logical_path: &str) -> Option<Vec<u8>> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.blobs.get(logical_path).cloned())
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new("memory://blobs")
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn store(&self, logical_path: &str, bytes: &[u8]) -> BlobStoreResult<String> {
        let mut state = self.state.write().map_err(|err| {
            BlobStoreError::storage(logical_path, std::io::Error::other(err.to_string()))
        })?;
        if state.failing_paths.contains(logical_path) {
            return Err(BlobStoreError::storage(
                logical_path,
                std::io::Error::other("upload rejected"),
            ));
        }
        state.blobs.insert(logical_path.to_owned(), bytes.to_vec());
        Ok(public_url(&self.base_url, logical_path))
    }
}
