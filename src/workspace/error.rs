//! Errors reported by workspace handlers.

use crate::order::{
    ports::RenderError,
    services::{BoardError, OrderStoreError},
};
use thiserror::Error;

/// Errors returned by workspace handlers after they have been logged.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The handler needs the editor dialog to be open.
    #[error("no order editor is open")]
    EditorClosed,

    /// The handler needs the calendar dialog to be open.
    #[error("the calendar is not open")]
    CalendarClosed,

    /// The handler needs an order to be open in the view dialog.
    #[error("no order is being viewed")]
    NothingViewed,

    /// The order store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] OrderStoreError),

    /// A board transition failed.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The printable document could not be produced.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for workspace handlers.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
