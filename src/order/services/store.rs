//! In-memory order projection kept in sync with the repository.

use crate::order::{
    domain::{
        Comment, CommentDraft, NewOrder, Order, OrderDraft, OrderId, OrderNumber, OrderPatch,
    },
    ports::{OrderRepository, OrderRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for order store operations.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// No order with the identifier is held in memory.
    #[error("order {0} not found")]
    NotFound(OrderId),
    /// Repository operation failed. In-memory changes made before the call
    /// are kept.
    #[error(transparent)]
    Repository(#[from] OrderRepositoryError),
    /// Every order number has been handed out.
    #[error("order numbers are exhausted")]
    NumbersExhausted,
}

/// Result type for order store operations.
pub type OrderStoreResult<T> = Result<T, OrderStoreError>;

/// Authoritative in-memory projection of all orders.
///
/// Mutations take `&mut self`, so completions are applied one at a time in
/// call order and the last write to a field wins. Updates and deletes are
/// applied to memory before the repository call and are not rolled back when
/// it fails. Creates and comment appends need repository-assigned
/// identifiers and reach memory only after the call succeeds.
pub struct OrderStore<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    orders: Vec<Order>,
    next_number: Option<OrderNumber>,
}

impl<R, C> OrderStore<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    /// Creates an empty store. Call [`Self::load`] to populate it.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            orders: Vec::new(),
            next_number: Some(OrderNumber::FIRST),
        }
    }

    /// Returns the clock used for creation and comment timestamps.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Replaces the projection with the repository contents.
    ///
    /// The number counter moves to one past the highest loaded number and
    /// never moves backwards. Once the highest representable number has been
    /// seen, no further orders can be created.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::Repository`] when loading fails; the
    /// projection is left unchanged.
    pub async fn load(&mut self) -> OrderStoreResult<&[Order]> {
        let loaded = self.repository.load_all().await?;
        if let Some(highest) = loaded.iter().map(Order::number).max() {
            self.advance_past(highest);
        }
        self.orders = loaded;
        info!(
            orders = self.orders.len(),
            next_number = ?self.next_number,
            "order store loaded"
        );
        Ok(&self.orders)
    }

    /// Returns all orders in load and creation order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the order with the given identifier.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    /// Returns the number the next created order will receive, or `None`
    /// when numbers are exhausted.
    #[must_use]
    pub const fn next_number(&self) -> Option<OrderNumber> {
        self.next_number
    }

    fn advance_past(&mut self, issued: OrderNumber) {
        if self.next_number.is_some_and(|next| next <= issued) {
            self.next_number = issued.next();
        }
    }

    fn position(&self, id: OrderId) -> OrderStoreResult<usize> {
        self.orders
            .iter()
            .position(|order| order.id() == id)
            .ok_or(OrderStoreError::NotFound(id))
    }

    fn order_mut(&mut self, id: OrderId) -> OrderStoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|order| order.id() == id)
            .ok_or(OrderStoreError::NotFound(id))
    }

    /// Creates an order in the first column with the next number.
    ///
    /// The counter advances only when the insert succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::NumbersExhausted`] without calling the
    /// repository when no number is left, or [`OrderStoreError::Repository`]
    /// when the insert fails.
    pub async fn create(&mut self, draft: OrderDraft) -> OrderStoreResult<Order> {
        let number = self.next_number.ok_or(OrderStoreError::NumbersExhausted)?;
        let new_order = NewOrder::from_draft(draft, number, &*self.clock);
        let created = self.repository.insert(&new_order).await?;
        self.advance_past(created.number());
        self.orders.push(created.clone());
        info!(order_id = %created.id(), number = %created.number(), "order created");
        Ok(created)
    }

    /// Applies a patch in memory, then persists it.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::NotFound`] without side effects when the
    /// order is unknown, or [`OrderStoreError::Repository`] when persisting
    /// fails. The in-memory change stays applied in the latter case.
    pub async fn update(&mut self, id: OrderId, patch: OrderPatch) -> OrderStoreResult<Order> {
        let order = self.order_mut(id)?;
        order.apply(&patch);
        let updated = order.clone();
        self.repository.update(id, &patch).await?;
        debug!(order_id = %id, "order updated");
        Ok(updated)
    }

    /// Removes an order from memory, then from the repository.
    ///
    /// Its number is never handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::NotFound`] without side effects when the
    /// order is unknown, or [`OrderStoreError::Repository`] when the delete
    /// fails. The order stays removed from memory in the latter case.
    pub async fn delete(&mut self, id: OrderId) -> OrderStoreResult<()> {
        let position = self.position(id)?;
        let removed = self.orders.remove(position);
        self.repository.delete(id).await?;
        info!(order_id = %id, number = %removed.number(), "order deleted");
        Ok(())
    }

    /// Persists a comment and appends the stored row to the order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::NotFound`] when the order is unknown, or
    /// [`OrderStoreError::Repository`] when the insert fails.
    pub async fn append_comment(
        &mut self,
        order_id: OrderId,
        draft: CommentDraft,
    ) -> OrderStoreResult<Comment> {
        self.position(order_id)?;
        let new_comment = draft.stamp(&*self.clock);
        let comment = self
            .repository
            .insert_comment(order_id, &new_comment)
            .await?;
        self.order_mut(order_id)?.push_comment(comment.clone());
        debug!(order_id = %order_id, comment_id = %comment.id(), "comment appended");
        Ok(comment)
    }

    /// Persists the appointment, then mirrors it into memory.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError::NotFound`] when the order is unknown, or
    /// [`OrderStoreError::Repository`] when persisting fails; memory is left
    /// untouched in both cases.
    pub async fn set_appointment(
        &mut self,
        order_id: OrderId,
        appointment: Option<DateTime<Utc>>,
    ) -> OrderStoreResult<Order> {
        self.position(order_id)?;
        let patch = OrderPatch::appointment(appointment);
        self.repository.update(order_id, &patch).await?;
        let order = self.order_mut(order_id)?;
        order.apply(&patch);
        debug!(order_id = %order_id, "appointment updated");
        Ok(order.clone())
    }
}
