//! HTTP boundary over the order store.
//!
//! `/api/orders` supports listing, creating, partially updating and deleting
//! orders. `/api/attachments/{name}` stores one uploaded file and returns its
//! public URL for use in an order's attachment list. Unsupported methods
//! receive `405` with an `Allow` header.

mod attachments;
mod error;
mod handlers;

pub use attachments::AttachmentTarget;
pub use error::{ApiError, ApiResult};

use crate::order::{
    ports::{BlobStore, OrderRepository},
    services::OrderStore,
};
use axum::{
    Router,
    routing::{get, put},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Order store shared between request handlers.
pub type SharedStore<R, C> = Arc<Mutex<OrderStore<R, C>>>;

/// Builds the API router.
#[must_use]
pub fn router<R, B, C>(
    store: SharedStore<R, C>,
    attachment_target: AttachmentTarget<B>,
) -> Router
where
    R: OrderRepository + 'static,
    B: BlobStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let orders = Router::new()
        .route(
            "/api/orders",
            get(handlers::list_orders::<R, C>)
                .post(handlers::create_order::<R, C>)
                .put(handlers::update_order::<R, C>)
                .delete(handlers::delete_order::<R, C>),
        )
        .with_state(store);
    let uploads = Router::new()
        .route(
            "/api/attachments/{name}",
            put(attachments::upload_attachment::<B>),
        )
        .with_state(attachment_target);
    orders.merge(uploads)
}
