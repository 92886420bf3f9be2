//! Append-only order comments.

use super::{CommentId, OrderDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Timestamped note attached to an order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Reconstructs a comment from a persisted row.
    #[must_use]
    pub fn from_persisted(id: CommentId, comment: NewComment) -> Self {
        let NewComment {
            author,
            text,
            created_at,
        } = comment;
        Self {
            id,
            author,
            text,
            created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the comment was appended.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Validated comment input: author and text are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    author: String,
    text: String,
}

impl CommentDraft {
    /// Validates and trims comment input.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::EmptyCommentAuthor`] or
    /// [`OrderDomainError::EmptyCommentText`] when either part is blank.
    pub fn new(author: &str, text: &str) -> Result<Self, OrderDomainError> {
        let trimmed_author = author.trim();
        if trimmed_author.is_empty() {
            return Err(OrderDomainError::EmptyCommentAuthor);
        }
        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(OrderDomainError::EmptyCommentText);
        }
        Ok(Self {
            author: trimmed_author.to_owned(),
            text: trimmed_text.to_owned(),
        })
    }

    /// Returns the trimmed author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the trimmed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stamps the draft with the current clock time for insertion.
    #[must_use]
    pub fn stamp(self, clock: &impl Clock) -> NewComment {
        NewComment {
            author: self.author,
            text: self.text,
            created_at: clock.utc(),
        }
    }
}

/// Comment row awaiting a persistence-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Comment author.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// Append timestamp.
    pub created_at: DateTime<Utc>,
}
