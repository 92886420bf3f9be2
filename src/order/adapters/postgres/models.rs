//! Diesel row models for order persistence.

use super::schema::{comments, orders};
use diesel::prelude::*;

/// Query result row for order records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    /// Order identifier.
    pub id: i64,
    /// Zero-padded order number.
    pub number: String,
    /// Customer name.
    pub customer: String,
    /// Site address.
    pub address: String,
    /// Tenant name.
    pub tenant: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Problem description.
    pub problem: String,
    /// JSON-encoded attachment URLs.
    pub attachments: String,
    /// Board column code.
    pub status: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Importance code.
    pub importance: String,
    /// ISO-8601 appointment timestamp.
    pub appointment: Option<String>,
}

/// Insert model for order records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    /// Zero-padded order number.
    pub number: String,
    /// Customer name.
    pub customer: String,
    /// Site address.
    pub address: String,
    /// Tenant name.
    pub tenant: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Problem description.
    pub problem: String,
    /// JSON-encoded attachment URLs.
    pub attachments: String,
    /// Board column code.
    pub status: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Importance code.
    pub importance: String,
}

/// Partial update model; `None` columns are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChangeset {
    /// Customer name.
    pub customer: Option<String>,
    /// Site address.
    pub address: Option<String>,
    /// Tenant name.
    pub tenant: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Problem description.
    pub problem: Option<String>,
    /// JSON-encoded attachment URLs.
    pub attachments: Option<String>,
    /// Board column code.
    pub status: Option<String>,
    /// Importance code.
    pub importance: Option<String>,
    /// Appointment; `Some(None)` writes `NULL`.
    pub appointment: Option<Option<String>>,
}

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: i64,
    /// Owning order identifier.
    pub order_id: i64,
    /// Comment author.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// ISO-8601 append timestamp.
    pub created_at: String,
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    /// Owning order identifier.
    pub order_id: i64,
    /// Comment author.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// ISO-8601 append timestamp.
    pub created_at: String,
}
