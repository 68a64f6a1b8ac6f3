//! Contact Form - endpoint server entry point.

use anyhow::Result;
use contact_form::server::{self, AppState};
use contact_form::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::default();
    server::run_server(&config, state.clone()).await?;

    info!(
        "Contact endpoint shutdown complete ({} confirmations, {} malformed requests)",
        state.metrics.contacts_received_total(),
        state.metrics.malformed_requests_total()
    );
    Ok(())
}
