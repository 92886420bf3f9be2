//! JSON error responses for the HTTP boundary.

use crate::order::{
    ports::{BlobStoreError, OrderRepositoryError},
    services::OrderStoreError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is malformed or lacks a usable order id.
    #[error("{0}")]
    BadRequest(String),

    /// The order store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] OrderStoreError),

    /// The attachment could not be stored.
    #[error(transparent)]
    Blob(#[from] BlobStoreError),
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Returns the status code the error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Blob(BlobStoreError::InvalidPath(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(
                OrderStoreError::NotFound(_)
                | OrderStoreError::Repository(OrderRepositoryError::NotFound(_)),
            ) => StatusCode::NOT_FOUND,
            Self::Store(OrderStoreError::NumbersExhausted) => StatusCode::CONFLICT,
            Self::Store(OrderStoreError::Repository(OrderRepositoryError::Persistence(_)))
            | Self::Blob(BlobStoreError::Storage { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed in storage");
            "storage failure".to_owned()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
