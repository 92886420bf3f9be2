//! Interactive board workspace.
//!
//! A [`Workspace`] ties the order store to the attachment blob store and the
//! transient UI state: the single open [`Dialog`] and the calendar view.
//! Every handler that issues an asynchronous call logs its failure here and
//! returns it to the caller; none of them is fatal.

mod annotations;
mod config;
mod dialog;
mod editor;
mod error;

pub use config::{DEFAULT_UPLOAD_PREFIX, WorkspaceConfig};
pub use dialog::Dialog;
pub use editor::{EditorMode, OrderEditor, OrderField};
pub use error::{WorkspaceError, WorkspaceResult};

use crate::order::{
    domain::{Order, OrderId},
    ports::{BlobStore, OrderRenderer, OrderRepository},
    services::{
        BoardColumn, CalendarEvent, CalendarGranularity, CalendarNavigation, CalendarView,
        OrderStore, OrderStoreError, board, calendar,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{error, info};

/// Board, dialogs and calendar over one order store.
pub struct Workspace<R, B, C>
where
    R: OrderRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    store: OrderStore<R, C>,
    blob_store: Arc<B>,
    config: WorkspaceConfig,
    dialog: Dialog,
    calendar: CalendarView,
}

impl<R, B, C> Workspace<R, B, C>
where
    R: OrderRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates a workspace with all dialogs closed and the calendar on the
    /// current month.
    #[must_use]
    pub fn new(store: OrderStore<R, C>, blob_store: Arc<B>, config: WorkspaceConfig) -> Self {
        let today = store.clock().utc().date_naive();
        Self {
            store,
            blob_store,
            config,
            dialog: Dialog::Closed,
            calendar: CalendarView::starting_at(today),
        }
    }

    /// Loads all orders into the store.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Store`] when loading fails.
    pub async fn load(&mut self) -> WorkspaceResult<usize> {
        let loaded = self
            .store
            .load()
            .await
            .inspect_err(|err| error!(error = %err, "loading orders failed"))?;
        Ok(loaded.len())
    }

    /// Returns the underlying order store.
    #[must_use]
    pub const fn store(&self) -> &OrderStore<R, C> {
        &self.store
    }

    /// Returns the workspace configuration.
    #[must_use]
    pub const fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Returns the open dialog.
    #[must_use]
    pub const fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Returns the board columns for the current orders.
    #[must_use]
    pub fn board(&self) -> Vec<BoardColumn<'_>> {
        board::partition(self.store.orders())
    }

    fn held(&self, order_id: OrderId) -> WorkspaceResult<&Order> {
        self.store
            .get(order_id)
            .ok_or(WorkspaceError::Store(OrderStoreError::NotFound(order_id)))
    }

    /// Replaces the view dialog's cached copy when it shows `order`.
    fn refresh_viewed(&mut self, order: &Order) {
        if let Dialog::Viewing(viewed) = &mut self.dialog
            && viewed.id() == order.id()
        {
            viewed.clone_from(order);
        }
    }

    fn refresh_viewed_from_store(&mut self, order_id: OrderId) {
        if let Some(order) = self.store.get(order_id).cloned() {
            self.refresh_viewed(&order);
        }
    }

    /// Opens the read-only view of an order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Store`] when the order is unknown.
    pub fn open_view(&mut self, order_id: OrderId) -> WorkspaceResult<()> {
        let viewed = self.held(order_id)?.clone();
        self.dialog = Dialog::Viewing(viewed);
        Ok(())
    }

    /// Opens the calendar dialog.
    pub fn open_calendar(&mut self) {
        self.dialog = Dialog::Calendar;
    }

    /// Closes whichever dialog is open. Unsaved editor input is discarded.
    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Moves an order to the column named by `target_label`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Board`] when the label is unknown, the order
    /// is missing or persisting fails. A persistence failure leaves the
    /// order in the target column.
    pub async fn drop_on_column(
        &mut self,
        order_id: OrderId,
        target_label: &str,
    ) -> WorkspaceResult<Order> {
        let outcome = board::move_order(&mut self.store, order_id, target_label).await;
        self.refresh_viewed_from_store(order_id);
        let moved = outcome.inspect_err(
            |err| error!(%order_id, target = target_label, error = %err, "moving order failed"),
        )?;
        info!(%order_id, status = %moved.status(), "order moved");
        Ok(moved)
    }

    /// Deletes an order and closes its view dialog if it is open.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Store`] when the order is unknown or the
    /// delete fails to persist.
    pub async fn delete_order(&mut self, order_id: OrderId) -> WorkspaceResult<()> {
        let result = self.store.delete(order_id).await;
        if self.dialog.viewed().is_some_and(|viewed| viewed.id() == order_id)
            && self.store.get(order_id).is_none()
        {
            self.dialog = Dialog::Closed;
        }
        result.inspect_err(|err| error!(%order_id, error = %err, "deleting order failed"))?;
        Ok(())
    }

    /// Renders the order open in the view dialog.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::NothingViewed`] when no order is viewed, or
    /// [`WorkspaceError::Render`] when rendering fails.
    pub fn print_viewed(&self, renderer: &impl OrderRenderer) -> WorkspaceResult<String> {
        let order = self.dialog.viewed().ok_or(WorkspaceError::NothingViewed)?;
        let document = renderer.render(order).inspect_err(
            |err| error!(order_id = %order.id(), error = %err, "printing order failed"),
        )?;
        Ok(document)
    }

    /// Returns the calendar view state.
    #[must_use]
    pub const fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    /// Returns the appointments inside the visible calendar range.
    #[must_use]
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        calendar::events_in_view(self.store.orders(), &self.calendar)
    }

    /// Moves the calendar one page or back to today.
    pub fn navigate_calendar(&mut self, navigation: CalendarNavigation) {
        let today = self.store.clock().utc().date_naive();
        self.calendar.navigate(navigation, today);
    }

    /// Switches the calendar between month, week and day pages.
    pub const fn set_calendar_granularity(&mut self, granularity: CalendarGranularity) {
        self.calendar.set_granularity(granularity);
    }

    /// Opens the view dialog for the order behind a calendar event,
    /// replacing the calendar dialog.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::CalendarClosed`] when the calendar dialog
    /// is not open, or [`WorkspaceError::Store`] when the order no longer
    /// exists. The dialog is unchanged in both cases.
    pub fn select_calendar_event(&mut self, order_id: OrderId) -> WorkspaceResult<()> {
        if !matches!(self.dialog, Dialog::Calendar) {
            return Err(WorkspaceError::CalendarClosed);
        }
        self.open_view(order_id)
    }
}

#[cfg(test)]
mod tests;
