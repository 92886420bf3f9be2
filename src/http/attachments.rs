//! `/api/attachments/{name}` upload handler.

use super::{ApiError, ApiResult};
use crate::order::{
    ports::BlobStore,
    services::{AttachmentFile, uploads::upload_attachments},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Blob store and logical folder that uploads are written to.
#[derive(Debug)]
pub struct AttachmentTarget<B> {
    blobs: Arc<B>,
    prefix: Arc<str>,
}

impl<B> AttachmentTarget<B> {
    /// Creates a target storing files below `prefix`.
    #[must_use]
    pub fn new(blobs: Arc<B>, prefix: &str) -> Self {
        Self {
            blobs,
            prefix: Arc::from(prefix),
        }
    }
}

impl<B> Clone for AttachmentTarget<B> {
    fn clone(&self) -> Self {
        Self {
            blobs: Arc::clone(&self.blobs),
            prefix: Arc::clone(&self.prefix),
        }
    }
}

/// Stores the request body as one attachment and returns its public URL.
///
/// # Errors
///
/// Returns [`ApiError::Blob`] when the name is not a safe path or the
/// storage backend rejects the file.
pub async fn upload_attachment<B>(
    State(target): State<AttachmentTarget<B>>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)>
where
    B: BlobStore + 'static,
{
    let files = [AttachmentFile::new(name, body.to_vec())];
    let outcome = upload_attachments(&*target.blobs, &target.prefix, &files)
        .await
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::BadRequest("no file received".to_owned()))?;
    let url = outcome?;
    Ok((StatusCode::CREATED, Json(json!({ "url": url }))))
}
