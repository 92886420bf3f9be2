//! Shared world state for work order board scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workboard::order::{
    adapters::memory::{InMemoryBlobStore, InMemoryOrderRepository},
    domain::Order,
    services::OrderStore,
};
use workboard::workspace::{Workspace, WorkspaceConfig};

/// Workspace type used by the BDD world.
pub type TestWorkspace = Workspace<InMemoryOrderRepository, InMemoryBlobStore, DefaultClock>;

/// Scenario world for work order board behaviour tests.
pub struct BoardWorld {
    /// Attachment store handle for injecting upload failures.
    pub blobs: Arc<InMemoryBlobStore>,
    /// Workspace under test.
    pub workspace: TestWorkspace,
    /// Orders created during the scenario, oldest first.
    pub created: Vec<Order>,
    /// Order the scenario currently refers to.
    pub current: Option<Order>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory adapters.
    #[must_use]
    pub fn new() -> Self {
        let blobs = Arc::new(InMemoryBlobStore::new("https://blob.example"));
        let store = OrderStore::new(
            Arc::new(InMemoryOrderRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            workspace: Workspace::new(store, Arc::clone(&blobs), WorkspaceConfig::default()),
            blobs,
            created: Vec::new(),
            current: None,
        }
    }

    /// Returns the order the scenario is focused on.
    ///
    /// # Errors
    ///
    /// Returns an error when no order has been created yet.
    pub fn current(&self) -> Result<&Order, eyre::Report> {
        self.current
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no current order in scenario world"))
    }

    /// Records a freshly saved order as the current one.
    pub fn remember(&mut self, order: Order) {
        self.created.push(order.clone());
        self.current = Some(order);
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
