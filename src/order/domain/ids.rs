//! Identifier and numbering types for the order domain.

use super::OrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persistence-assigned identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wraps an identifier issued by the persistence layer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persistence-assigned identifier of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
    /// Wraps an identifier issued by the persistence layer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable sequential order number.
///
/// Numbers start at one and render zero-padded to four digits. Wider values
/// render without truncation.
///
/// ```
/// use workboard::order::domain::OrderNumber;
///
/// let number = OrderNumber::new(7).expect("valid order number");
/// assert_eq!(number.to_string(), "0007");
/// assert_eq!(number.next().map(|next| next.to_string()), Some("0008".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// The number given to the first order of an empty store.
    pub const FIRST: Self = Self(1);

    /// Digits used when rendering the number.
    const WIDTH: usize = 4;

    /// Creates a validated order number.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::ZeroOrderNumber`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, OrderDomainError> {
        if value == 0 {
            return Err(OrderDomainError::ZeroOrderNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the number following this one, or `None` past the largest
    /// representable number.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = Self::WIDTH)
    }
}

impl TryFrom<&str> for OrderNumber {
    type Error = OrderDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed = value
            .trim()
            .parse::<u32>()
            .map_err(|_| OrderDomainError::InvalidOrderNumber(value.to_owned()))?;
        Self::new(parsed)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = OrderDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<OrderNumber> for String {
    fn from(value: OrderNumber) -> Self {
        value.to_string()
    }
}
