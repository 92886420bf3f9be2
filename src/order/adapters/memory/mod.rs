//! In-memory adapters for tests and local runs.

mod blob;
mod repository;

pub use blob::InMemoryBlobStore;
pub use repository::InMemoryOrderRepository;
