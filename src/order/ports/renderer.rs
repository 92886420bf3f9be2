//! Document rendering port for printing a single order.

use crate::order::domain::Order;
use thiserror::Error;

/// Renders a static document from one order snapshot.
pub trait OrderRenderer: Send + Sync {
    /// Produces the printable document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the document cannot be produced.
    fn render(&self, order: &Order) -> Result<String, RenderError>;
}

/// Error returned by renderer adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render order document: {0}")]
pub struct RenderError(pub String);
