//! Domain model for work orders.
//!
//! Orders move through a fixed set of board columns, collect append-only
//! comments and carry at most one appointment. All infrastructure concerns
//! stay outside of this boundary.

mod comment;
mod error;
mod ids;
mod order;
mod status;

pub use comment::{Comment, CommentDraft, NewComment};
pub use error::{OrderDomainError, ParseImportanceError, ParseOrderStatusError};
pub use ids::{CommentId, OrderId, OrderNumber};
pub use order::{NewOrder, Order, OrderDraft, OrderPatch, PersistedOrderData};
pub use status::{Importance, OrderStatus};
