//! Comment and appointment handlers.

use super::{Workspace, WorkspaceResult};
use crate::order::{
    domain::{Comment, CommentDraft, Order, OrderId},
    ports::{BlobStore, OrderRepository},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, error};

impl<R, B, C> Workspace<R, B, C>
where
    R: OrderRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    /// Appends a comment to an order.
    ///
    /// Blank author or text makes this a no-op returning `Ok(None)`. The
    /// stored comment is reflected into the store and, when the order is
    /// open in the view dialog, into its cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`super::WorkspaceError::Store`] when the order is unknown or
    /// the comment fails to persist.
    pub async fn add_comment(
        &mut self,
        order_id: OrderId,
        author: &str,
        text: &str,
    ) -> WorkspaceResult<Option<Comment>> {
        let draft = match CommentDraft::new(author, text) {
            Ok(draft) => draft,
            Err(reason) => {
                debug!(%order_id, %reason, "comment ignored");
                return Ok(None);
            }
        };
        let comment = self
            .store
            .append_comment(order_id, draft)
            .await
            .inspect_err(|err| error!(%order_id, error = %err, "adding comment failed"))?;
        self.refresh_viewed_from_store(order_id);
        Ok(Some(comment))
    }

    /// Sets or clears the appointment of an order.
    ///
    /// The value is persisted first, then mirrored into the store and the
    /// view dialog's cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`super::WorkspaceError::Store`] when the order is unknown or
    /// the appointment fails to persist.
    pub async fn set_appointment(
        &mut self,
        order_id: OrderId,
        appointment: Option<DateTime<Utc>>,
    ) -> WorkspaceResult<Order> {
        let updated = self
            .store
            .set_appointment(order_id, appointment)
            .await
            .inspect_err(|err| error!(%order_id, error = %err, "setting appointment failed"))?;
        self.refresh_viewed(&updated);
        Ok(updated)
    }
}
