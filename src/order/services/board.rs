//! Kanban board projection and drag-and-drop transitions.

use crate::order::{
    domain::{Order, OrderId, OrderPatch, OrderStatus, ParseOrderStatusError},
    ports::OrderRepository,
    services::{OrderStore, OrderStoreError},
};
use mockable::Clock;
use thiserror::Error;

/// One board column and the orders currently in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    /// Status the column represents.
    pub status: OrderStatus,
    /// Orders in store order.
    pub orders: Vec<&'a Order>,
}

impl BoardColumn<'_> {
    /// Returns the column heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.status.label()
    }
}

/// Partitions orders into the fixed column set.
///
/// The result always holds one entry per [`OrderStatus`] in board order, and
/// every order appears in exactly one column. Nothing is cached; callers
/// recompute on every read.
#[must_use]
pub fn partition(orders: &[Order]) -> Vec<BoardColumn<'_>> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            orders: orders
                .iter()
                .filter(|order| order.status() == status)
                .collect(),
        })
        .collect()
}

/// Errors returned by board transitions.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The drop target is not a board column.
    #[error(transparent)]
    UnknownColumn(#[from] ParseOrderStatusError),
    /// The store rejected or failed the update.
    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

/// Moves an order to the column named by `target_label`.
///
/// Any column may be the target of any other, including the order's
/// current one.
///
/// # Errors
///
/// Returns [`BoardError::UnknownColumn`] before touching the store when the
/// label names no column, or [`BoardError::Store`] when the update fails.
pub async fn move_order<R, C>(
    store: &mut OrderStore<R, C>,
    order_id: OrderId,
    target_label: &str,
) -> Result<Order, BoardError>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    let target = OrderStatus::try_from(target_label)?;
    Ok(store.update(order_id, OrderPatch::status(target)).await?)
}
