//! HTTP server initialization and runtime setup.
//!
//! Wires the store, slugger and service together and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::MemoryStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::slug_generator::FixedLenSlugger;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let slugger = Arc::new(FixedLenSlugger::new(config.slug_len));
    let url_service = Arc::new(UrlService::new(store, slugger));

    let state = AppState::new(url_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
