//! In-memory order repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::order::{
    domain::{Comment, CommentId, NewComment, NewOrder, Order, OrderId, OrderPatch},
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};

/// Thread-safe in-memory order repository.
///
/// Identifiers are issued sequentially from one, mirroring a database
/// sequence. Writes can be made to fail on demand to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<InMemoryOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: BTreeMap<OrderId, Order>,
    last_order_id: i64,
    last_comment_id: i64,
    fail_writes: bool,
}

impl InMemoryOrderRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail with a persistence error until
    /// switched off again. Reads keep working.
    ///
    /// # Errors
    ///
    /// Returns persistence errors when lock acquisition fails.
    pub fn set_fail_writes(&self, fail: bool) -> OrderRepositoryResult<()> {
        self.write()?.fail_writes = fail;
        Ok(())
    }

    /// Returns the stored copy of an order, bypassing any caller cache.
    ///
    /// # Errors
    ///
    /// Returns persistence errors when lock acquisition fails.
    pub fn stored(&self, id: OrderId) -> OrderRepositoryResult<Option<Order>> {
        Ok(self.read()?.orders.get(&id).cloned())
    }

    fn read(&self) -> OrderRepositoryResult<RwLockReadGuard<'_, InMemoryOrderState>> {
        self.state.read().map_err(|err| {
            OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> OrderRepositoryResult<RwLockWriteGuard<'_, InMemoryOrderState>> {
        self.state.write().map_err(|err| {
            OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn writable(&self) -> OrderRepositoryResult<RwLockWriteGuard<'_, InMemoryOrderState>> {
        let state = self.write()?;
        if state.fail_writes {
            return Err(OrderRepositoryError::persistence(std::io::Error::other(
                "in-memory repository rejected the write",
            )));
        }
        Ok(state)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn load_all(&self) -> OrderRepositoryResult<Vec<Order>> {
        Ok(self.read()?.orders.values().cloned().collect())
    }

    async fn insert(&self, order: &NewOrder) -> OrderRepositoryResult<Order> {
        let mut state = self.writable()?;
        state.last_order_id += 1;
        let id = OrderId::new(state.last_order_id);
        let stored = Order::inserted(id, order.clone());
        state.orders.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: OrderId, patch: &OrderPatch) -> OrderRepositoryResult<Order> {
        let mut state = self.writable()?;
        let order = state
            .orders
            .get_mut(&id)
            .ok_or(OrderRepositoryError::NotFound(id))?;
        order.apply(patch);
        Ok(order.clone())
    }

    async fn delete(&self, id: OrderId) -> OrderRepositoryResult<()> {
        let mut state = self.writable()?;
        state
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or(OrderRepositoryError::NotFound(id))
    }

    async fn insert_comment(
        &self,
        order_id: OrderId,
        comment: &NewComment,
    ) -> OrderRepositoryResult<Comment> {
        let mut state = self.writable()?;
        if !state.orders.contains_key(&order_id) {
            return Err(OrderRepositoryError::NotFound(order_id));
        }
        state.last_comment_id += 1;
        let stored =
            Comment::from_persisted(CommentId::new(state.last_comment_id), comment.clone());
        if let Some(order) = state.orders.get_mut(&order_id) {
            order.push_comment(stored.clone());
        }
        Ok(stored)
    }
}
