//! Modal dialog state.

use super::OrderEditor;
use crate::order::domain::Order;

/// The single dialog currently shown over the board.
///
/// Opening any dialog replaces whichever one was open before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    /// Only the board is visible.
    #[default]
    Closed,
    /// The create or edit form.
    Editor(OrderEditor),
    /// Read-only view of a cached order snapshot.
    Viewing(Order),
    /// The appointment calendar.
    Calendar,
}

impl Dialog {
    /// Returns `true` when no dialog is open.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the open editor, if any.
    #[must_use]
    pub const fn editor(&self) -> Option<&OrderEditor> {
        match self {
            Self::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    /// Returns the order shown in the view dialog, if any.
    #[must_use]
    pub const fn viewed(&self) -> Option<&Order> {
        match self {
            Self::Viewing(order) => Some(order),
            _ => None,
        }
    }
}
