//! Create/edit form for a single order and its submit handlers.

use super::{Dialog, Workspace, WorkspaceError, WorkspaceResult};
use crate::order::{
    domain::{Importance, Order, OrderDraft, OrderId, OrderPatch},
    ports::{BlobStore, OrderRepository},
    services::{
        AttachmentFile,
        uploads::{successful_urls, upload_attachments},
    },
};
use mockable::Clock;
use tracing::{error, info};

/// Whether the editor creates a new order or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Submitting creates a new order.
    Create,
    /// Submitting overwrites the order with this identifier.
    Edit(OrderId),
}

/// Free-text order fields editable in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// Customer name.
    Customer,
    /// Site address.
    Address,
    /// Tenant name.
    Tenant,
    /// Contact phone number.
    Phone,
    /// Contact email.
    Email,
    /// Problem description.
    Problem,
}

impl OrderField {
    fn slot(self, draft: &mut OrderDraft) -> &mut String {
        match self {
            Self::Customer => &mut draft.customer,
            Self::Address => &mut draft.address,
            Self::Tenant => &mut draft.tenant,
            Self::Phone => &mut draft.phone,
            Self::Email => &mut draft.email,
            Self::Problem => &mut draft.problem,
        }
    }

    fn read(self, draft: &OrderDraft) -> &str {
        match self {
            Self::Customer => &draft.customer,
            Self::Address => &draft.address,
            Self::Tenant => &draft.tenant,
            Self::Phone => &draft.phone,
            Self::Email => &draft.email,
            Self::Problem => &draft.problem,
        }
    }

    fn patch(self, value: String) -> OrderPatch {
        let mut patch = OrderPatch::default();
        match self {
            Self::Customer => patch.customer = Some(value),
            Self::Address => patch.address = Some(value),
            Self::Tenant => patch.tenant = Some(value),
            Self::Phone => patch.phone = Some(value),
            Self::Email => patch.email = Some(value),
            Self::Problem => patch.problem = Some(value),
        }
        patch
    }
}

/// Form state of the order editor.
///
/// In create mode the form holds a draft with empty fields. In edit mode it
/// holds a full snapshot of the selected order, which is written back as a
/// whole on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEditor {
    /// Draft of a new order.
    Create(OrderDraft),
    /// Edited copy of an existing order.
    Edit(Order),
}

impl OrderEditor {
    /// Opens an empty form with `Normal` importance.
    #[must_use]
    pub fn create() -> Self {
        Self::Create(OrderDraft::default())
    }

    /// Opens a form pre-populated from `order`.
    #[must_use]
    pub fn edit(order: &Order) -> Self {
        Self::Edit(order.clone())
    }

    /// Returns the editor mode.
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        match self {
            Self::Create(_) => EditorMode::Create,
            Self::Edit(order) => EditorMode::Edit(order.id()),
        }
    }

    /// Returns the current value of a text field.
    #[must_use]
    pub fn field(&self, field: OrderField) -> &str {
        match self {
            Self::Create(draft) => field.read(draft),
            Self::Edit(order) => match field {
                OrderField::Customer => order.customer(),
                OrderField::Address => order.address(),
                OrderField::Tenant => order.tenant(),
                OrderField::Phone => order.phone(),
                OrderField::Email => order.email(),
                OrderField::Problem => order.problem(),
            },
        }
    }

    /// Replaces a text field. No validation is applied.
    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        match self {
            Self::Create(draft) => *field.slot(draft) = value.into(),
            Self::Edit(order) => order.apply(&field.patch(value.into())),
        }
    }

    /// Returns the selected importance.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        match self {
            Self::Create(draft) => draft.importance,
            Self::Edit(order) => order.importance(),
        }
    }

    /// Selects the importance.
    pub fn set_importance(&mut self, importance: Importance) {
        match self {
            Self::Create(draft) => draft.importance = importance,
            Self::Edit(order) => order.apply(&OrderPatch {
                importance: Some(importance),
                ..OrderPatch::default()
            }),
        }
    }

    /// Returns the attachment URLs currently on the form.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        match self {
            Self::Create(draft) => &draft.attachments,
            Self::Edit(order) => order.attachments(),
        }
    }

    /// Adds uploaded URLs to the form.
    ///
    /// A new order takes the batch as its attachment list. An existing order
    /// keeps its attachments and gains the batch at the end.
    pub fn attach(&mut self, urls: Vec<String>) {
        match self {
            Self::Create(draft) => draft.attachments = urls,
            Self::Edit(order) => {
                let mut attachments = order.attachments().to_vec();
                attachments.extend(urls);
                order.apply(&OrderPatch {
                    attachments: Some(attachments),
                    ..OrderPatch::default()
                });
            }
        }
    }
}

impl<R, B, C> Workspace<R, B, C>
where
    R: OrderRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    /// Opens an empty editor.
    pub fn open_create_dialog(&mut self) {
        self.dialog = Dialog::Editor(OrderEditor::create());
    }

    /// Opens the editor pre-populated from an existing order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Store`] when the order is unknown.
    pub fn open_edit_dialog(&mut self, order_id: OrderId) -> WorkspaceResult<()> {
        let editor = OrderEditor::edit(self.held(order_id)?);
        self.dialog = Dialog::Editor(editor);
        Ok(())
    }

    /// Returns the open editor for field changes.
    pub const fn editor_mut(&mut self) -> Option<&mut OrderEditor> {
        match &mut self.dialog {
            Dialog::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    /// Uploads the selected files and adds the successful URLs to the open
    /// editor.
    ///
    /// Failed files are logged and left out. Returns the URLs that were
    /// added.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::EditorClosed`] when no editor is open.
    pub async fn attach_files(
        &mut self,
        files: &[AttachmentFile],
    ) -> WorkspaceResult<Vec<String>> {
        if self.dialog.editor().is_none() {
            return Err(WorkspaceError::EditorClosed);
        }
        let outcomes =
            upload_attachments(&*self.blob_store, self.config.upload_prefix(), files).await;
        let urls = successful_urls(outcomes);
        info!(
            selected = files.len(),
            uploaded = urls.len(),
            "attachments uploaded"
        );
        let editor = self.editor_mut().ok_or(WorkspaceError::EditorClosed)?;
        editor.attach(urls.clone());
        Ok(urls)
    }

    /// Submits the open editor.
    ///
    /// Create mode inserts a new order; edit mode writes the whole edited
    /// snapshot back. The dialog closes on success and stays open with its
    /// contents on failure.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::EditorClosed`] when no editor is open, or
    /// [`WorkspaceError::Store`] when the store call fails.
    pub async fn submit_editor(&mut self) -> WorkspaceResult<Order> {
        let editor = self
            .dialog
            .editor()
            .cloned()
            .ok_or(WorkspaceError::EditorClosed)?;
        let saved = match editor {
            OrderEditor::Create(draft) => self
                .store
                .create(draft)
                .await
                .inspect_err(|err| error!(error = %err, "order creation failed")),
            OrderEditor::Edit(order) => {
                let order_id = order.id();
                self.store
                    .update(order_id, OrderPatch::full(&order))
                    .await
                    .inspect_err(|err| error!(%order_id, error = %err, "order update failed"))
            }
        }?;
        self.dialog = Dialog::Closed;
        Ok(saved)
    }
}
