//! Adapter implementations for order ports.

pub mod memory;
pub mod postgres;

mod fs_blob;
mod render;

pub use fs_blob::FsBlobStore;
pub use render::PlainDocumentRenderer;
