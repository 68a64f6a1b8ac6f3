//! HTTP server exposing the contact endpoint.
//!
//! The endpoint is stateless: each request is parsed, logged and answered
//! independently. The only shared state is the metrics collector.

pub mod handlers;

pub use handlers::{confirmation_message, MALFORMED_BODY_MESSAGE};

use crate::client::CONTACTS_PATH;
use crate::config::Config;
use crate::error::ServerError;
use crate::metrics::Metrics;
use axum::routing::post;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// State shared by every request handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub metrics: Metrics,
}

/// Build the router serving `POST /api/contacts`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(CONTACTS_PATH, post(handlers::create_contact))
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn run_server(config: &Config, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.to_string(),
            source,
        })?;

    info!("Contact endpoint listening on {}", config.bind_addr);

    serve(listener, state, shutdown_on(tokio::signal::ctrl_c())).await
}

/// Resolve when `signal` fires. If the signal handler could not be installed,
/// never resolve.
async fn shutdown_on<S>(signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to install Ctrl+C handler, serving until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
