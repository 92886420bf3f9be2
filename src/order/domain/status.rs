//! Board column statuses and order importance levels.

use super::{ParseImportanceError, ParseOrderStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage an order occupies; one board column per variant.
///
/// Variants are declared in board order. Every stage is reachable from every
/// other stage. Serializes as the storage code and deserializes from
/// anything [`TryFrom<&str>`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum OrderStatus {
    /// Newly created, not yet picked up.
    Open,
    /// Someone is working on the order.
    InProgress,
    /// An on-site appointment has been arranged.
    AppointmentScheduled,
    /// A follow-up visit is needed.
    Revisit,
    /// Work is finished.
    Done,
    /// The customer has been invoiced.
    Invoiced,
}

impl OrderStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 6] = [
        Self::Open,
        Self::InProgress,
        Self::AppointmentScheduled,
        Self::Revisit,
        Self::Done,
        Self::Invoiced,
    ];

    /// The column new orders are placed in.
    pub const INITIAL: Self = Self::Open;

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::AppointmentScheduled => "appointment_scheduled",
            Self::Revisit => "revisit",
            Self::Done => "done",
            Self::Invoiced => "invoiced",
        }
    }

    /// Returns the column heading shown on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::AppointmentScheduled => "Appointment Scheduled",
            Self::Revisit => "Revisit",
            Self::Done => "Done",
            Self::Invoiced => "Invoiced",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = ParseOrderStatusError;

    /// Accepts storage codes and column labels alike; case, spaces, hyphens
    /// and underscores are not significant.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "inprogress" => Ok(Self::InProgress),
            "appointmentscheduled" => Ok(Self::AppointmentScheduled),
            "revisit" => Ok(Self::Revisit),
            "done" => Ok(Self::Done),
            "invoiced" => Ok(Self::Invoiced),
            _ => Err(ParseOrderStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Urgency of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Importance {
    /// Needs attention first.
    High,
    /// Regular priority.
    #[default]
    Normal,
    /// Can wait.
    Low,
}

impl Importance {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Importance {
    type Error = ParseImportanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(ParseImportanceError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Importance {
    type Error = ParseImportanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
