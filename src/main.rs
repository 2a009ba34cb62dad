//! Tontine API server - entry point.
//!
//! Loads configuration from the environment, opens the JSON file store and
//! serves the group management REST API over Axum.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tontine::adapters::http::api_router;
use tontine::adapters::JsonFileStore;
use tontine::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config from environment (reads an optional .env file).
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialise structured logging (RUST_LOG overrides the configured level).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Open the data directory; every collection is seeded on first run.
    let store = Arc::new(JsonFileStore::open(&config.storage.data_dir).await?);

    let app = api_router(store.clone(), store);

    let addr = config.server.socket_addr();
    info!(environment = ?config.server.environment, "API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
