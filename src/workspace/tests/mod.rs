//! Unit tests for workspace handlers.


use std::sync::Arc;

use crate::order::{
    adapters::memory::{InMemoryBlobStore, InMemoryOrderRepository},
    domain::Order,
    services::OrderStore,
};
use crate::workspace::{OrderField, Workspace, WorkspaceConfig};
use mockable::DefaultClock;
use rstest::fixture;

type TestWorkspace = Workspace<InMemoryOrderRepository, InMemoryBlobStore, DefaultClock>;

struct Harness {
    repository: Arc<InMemoryOrderRepository>,
    blobs: Arc<InMemoryBlobStore>,
    workspace: TestWorkspace,
}

impl Harness {
    async fn seed(&mut self, customer: &str) -> Order {
        self.workspace.open_create_dialog();
        if let Some(editor) = self.workspace.editor_mut() {
            editor.set_field(OrderField::Customer, customer);
        }
        self.workspace
            .submit_editor()
            .await
            .expect("seed order should be created")
    }
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let blobs = Arc::new(InMemoryBlobStore::new("https://files.example"));
    let store = OrderStore::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let workspace = Workspace::new(store, Arc::clone(&blobs), WorkspaceConfig::default());
    Harness {
        repository,
        blobs,
        workspace,
    }
}
