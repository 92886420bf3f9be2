//! Serves the work order board API.
//!
//! Usage:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/workboard workboard-server
//! ```
//!
//! Configuration is read from the environment and an optional `.env` file;
//! see [`workboard::config::AppConfig`] for the recognised variables.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use workboard::config::AppConfig;
use workboard::http::{self, AttachmentTarget};
use workboard::order::adapters::{FsBlobStore, postgres::PostgresOrderRepository};
use workboard::order::services::OrderStore;
use workboard::telemetry;
use workboard::workspace::WorkspaceConfig;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Route the blob directory is served under; matches the default public URL.
const FILES_ROUTE: &str = "/files";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        return Err(err.into());
    }
    let config = AppConfig::from_env()?;
    telemetry::init(&config.log_filter);
    info!(addr = %config.bind_addr(), "loaded server configuration");

    let pool = Pool::builder().build(ConnectionManager::<PgConnection>::new(
        config.database_url.as_str(),
    ))?;
    let repository = Arc::new(PostgresOrderRepository::new(pool));
    let mut store = OrderStore::new(repository, Arc::new(DefaultClock));
    store.load().await?;

    let blobs = Arc::new(FsBlobStore::open(
        &config.blob_root,
        config.blob_public_url.as_str(),
    )?);
    let attachment_target =
        AttachmentTarget::new(blobs, WorkspaceConfig::default().upload_prefix());

    let app = http::router(Arc::new(Mutex::new(store)), attachment_target)
        .nest_service(FILES_ROUTE, ServeDir::new(&config.blob_root))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "serving work order board");
    axum::serve(listener, app).await?;
    Ok(())
}
