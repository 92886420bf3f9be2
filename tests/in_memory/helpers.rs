//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workboard::order::{
    adapters::memory::{InMemoryBlobStore, InMemoryOrderRepository},
    domain::Order,
    services::OrderStore,
};
use workboard::workspace::{OrderField, Workspace, WorkspaceConfig};

/// Workspace wired to in-memory adapters.
pub type TestWorkspace = Workspace<InMemoryOrderRepository, InMemoryBlobStore, DefaultClock>;

/// Workspace plus handles to its adapters.
pub struct Board {
    pub repository: Arc<InMemoryOrderRepository>,
    pub blobs: Arc<InMemoryBlobStore>,
    pub workspace: TestWorkspace,
}

/// Provides an empty board for each test.
#[fixture]
pub fn board() -> Board {
    board_over(Arc::new(InMemoryOrderRepository::new()))
}

/// Builds a board over an existing repository.
pub fn board_over(repository: Arc<InMemoryOrderRepository>) -> Board {
    let blobs = Arc::new(InMemoryBlobStore::new("https://blob.example"));
    let store = OrderStore::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let workspace = Workspace::new(store, Arc::clone(&blobs), WorkspaceConfig::default());
    Board {
        repository,
        blobs,
        workspace,
    }
}

/// Creates an order through the editor with the given text fields.
///
/// # Errors
///
/// Returns an error when the editor cannot be opened or the submit fails.
pub async fn create_order(
    workspace: &mut TestWorkspace,
    fields: &[(OrderField, &str)],
) -> Result<Order, eyre::Report> {
    workspace.open_create_dialog();
    let editor = workspace
        .editor_mut()
        .ok_or_else(|| eyre::eyre!("editor should open"))?;
    for (field, value) in fields {
        editor.set_field(*field, *value);
    }
    Ok(workspace.submit_editor().await?)
}
