//! Port contracts for order persistence, attachment storage and rendering.
//!
//! Ports define infrastructure-agnostic interfaces used by order services.

pub mod blob;
pub mod renderer;
pub mod repository;

pub use blob::{BlobStore, BlobStoreError, BlobStoreResult, public_url};
pub use renderer::{OrderRenderer, RenderError};
pub use repository::{OrderRepository, OrderRepositoryError, OrderRepositoryResult};
