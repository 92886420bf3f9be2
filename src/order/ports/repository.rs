//! Repository port for row-level order and comment persistence.

use crate::order::domain::{Comment, NewComment, NewOrder, Order, OrderId, OrderPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order repository operations.
pub type OrderRepositoryResult<T> = Result<T, OrderRepositoryError>;

/// Order persistence contract.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads every order with its comments, ordered by identifier.
    async fn load_all(&self) -> OrderRepositoryResult<Vec<Order>>;

    /// Inserts a new order and returns the stored row.
    async fn insert(&self, order: &NewOrder) -> OrderRepositoryResult<Order>;

    /// Writes the fields present in `patch` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRepositoryError::NotFound`] when the order does not
    /// exist.
    async fn update(&self, id: OrderId, patch: &OrderPatch) -> OrderRepositoryResult<Order>;

    /// Deletes an order together with its comments.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRepositoryError::NotFound`] when the order does not
    /// exist.
    async fn delete(&self, id: OrderId) -> OrderRepositoryResult<()>;

    /// Appends a comment row and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRepositoryError::NotFound`] when the order does not
    /// exist.
    async fn insert_comment(
        &self,
        order_id: OrderId,
        comment: &NewComment,
    ) -> OrderRepositoryResult<Comment>;
}

/// Errors returned by order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderRepositoryError {
    /// The order was not found.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
