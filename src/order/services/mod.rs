//! Application services for the order board.
//!
//! [`OrderStore`] owns the authoritative in-memory projection. Board columns
//! and calendar events are pure projections over it.

pub mod board;
pub mod calendar;
pub mod uploads;

mod store;

pub use board::{BoardColumn, BoardError};
pub use calendar::{CalendarEvent, CalendarGranularity, CalendarNavigation, CalendarView};
pub use store::{OrderStore, OrderStoreError, OrderStoreResult};
pub use uploads::AttachmentFile;
