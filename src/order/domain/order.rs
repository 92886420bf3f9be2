//! Order aggregate root, creation input and typed patches.

use super::{Comment, Importance, OrderId, OrderNumber, OrderStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Service work order tracked on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    number: OrderNumber,
    customer: String,
    address: String,
    tenant: String,
    phone: String,
    email: String,
    problem: String,
    attachments: Vec<String>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    importance: Importance,
    comments: Vec<Comment>,
    appointment: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderData {
    /// Persisted order identifier.
    pub id: OrderId,
    /// Persisted insert payload.
    pub order: NewOrder,
    /// Persisted comments in append order.
    pub comments: Vec<Comment>,
    /// Persisted appointment, if any.
    pub appointment: Option<DateTime<Utc>>,
}

impl Order {
    /// Reconstructs an order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOrderData) -> Self {
        let PersistedOrderData {
            id,
            order,
            comments,
            appointment,
        } = data;
        let NewOrder {
            number,
            draft,
            status,
            created_at,
        } = order;
        let OrderDraft {
            customer,
            address,
            tenant,
            phone,
            email,
            problem,
            attachments,
            importance,
        } = draft;

        Self {
            id,
            number,
            customer,
            address,
            tenant,
            phone,
            email,
            problem,
            attachments,
            status,
            created_at,
            importance,
            comments,
            appointment,
        }
    }

    /// Builds the order returned by an insert, before any comment exists.
    #[must_use]
    pub fn inserted(id: OrderId, order: NewOrder) -> Self {
        Self::from_persisted(PersistedOrderData {
            id,
            order,
            comments: Vec::new(),
            appointment: None,
        })
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the sequential order number.
    #[must_use]
    pub const fn number(&self) -> OrderNumber {
        self.number
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Returns the site address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the tenant name.
    #[must_use]
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the problem description.
    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Returns attachment URLs in upload order.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Returns the board column the order sits in.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the importance level.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        self.importance
    }

    /// Returns comments in append order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the scheduled appointment, if any.
    #[must_use]
    pub const fn appointment(&self) -> Option<DateTime<Utc>> {
        self.appointment
    }

    /// Appends a comment to the end of the log.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Applies every field present in the patch; absent fields are untouched.
    pub fn apply(&mut self, patch: &OrderPatch) {
        apply_field(&mut self.customer, patch.customer.as_ref());
        apply_field(&mut self.address, patch.address.as_ref());
        apply_field(&mut self.tenant, patch.tenant.as_ref());
        apply_field(&mut self.phone, patch.phone.as_ref());
        apply_field(&mut self.email, patch.email.as_ref());
        apply_field(&mut self.problem, patch.problem.as_ref());
        apply_field(&mut self.attachments, patch.attachments.as_ref());
        apply_field(&mut self.status, patch.status.as_ref());
        apply_field(&mut self.importance, patch.importance.as_ref());
        apply_field(&mut self.appointment, patch.appointment.as_ref());
    }
}

fn apply_field<T: Clone>(field: &mut T, value: Option<&T>) {
    if let Some(new_value) = value {
        field.clone_from(new_value);
    }
}

/// Caller-supplied fields of a new order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderDraft {
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
    /// Free-text problem description.
    pub problem: String,
    /// Attachment URLs.
    pub attachments: Vec<String>,
    /// Importance level, `Normal` unless chosen otherwise.
    pub importance: Importance,
}

/// Insert payload: a draft plus the fields the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Assigned order number.
    pub number: OrderNumber,
    /// Caller-supplied fields.
    pub draft: OrderDraft,
    /// Initial status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// Prepares a draft for insertion in the initial column.
    #[must_use]
    pub fn from_draft(draft: OrderDraft, number: OrderNumber, clock: &impl Clock) -> Self {
        Self {
            number,
            draft,
            status: OrderStatus::INITIAL,
            created_at: clock.utc(),
        }
    }
}

/// Typed partial update of an order's mutable fields.
///
/// `None` leaves a field untouched. For the appointment, `Some(None)` clears
/// the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderPatch {
    /// New customer name.
    pub customer: Option<String>,
    /// New site address.
    pub address: Option<String>,
    /// New tenant name.
    pub tenant: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New problem description.
    pub problem: Option<String>,
    /// Replacement attachment list.
    pub attachments: Option<Vec<String>>,
    /// New board column.
    pub status: Option<OrderStatus>,
    /// New importance.
    pub importance: Option<Importance>,
    /// New appointment; `Some(None)` clears it.
    #[serde(deserialize_with = "deserialize_present")]
    pub appointment: Option<Option<DateTime<Utc>>>,
}

impl OrderPatch {
    /// Patch that only moves the order to another column.
    #[must_use]
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Patch that sets or clears the appointment.
    #[must_use]
    pub fn appointment(appointment: Option<DateTime<Utc>>) -> Self {
        Self {
            appointment: Some(appointment),
            ..Self::default()
        }
    }

    /// Patch carrying every mutable field of the given snapshot.
    #[must_use]
    pub fn full(order: &Order) -> Self {
        Self {
            customer: Some(order.customer.clone()),
            address: Some(order.address.clone()),
            tenant: Some(order.tenant.clone()),
            phone: Some(order.phone.clone()),
            email: Some(order.email.clone()),
            problem: Some(order.problem.clone()),
            attachments: Some(order.attachments.clone()),
            status: Some(order.status),
            importance: Some(order.importance),
            appointment: Some(order.appointment),
        }
    }

    /// Returns `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Distinguishes an explicit `null` from an absent field.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
