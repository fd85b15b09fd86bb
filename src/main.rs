//! Signage Hub - Main Entry Point
//!
//! Starts the REST API server over the in-process service state.

use anyhow::Context;

use signage_hub::api::{create_state, run_server};
use signage_hub::settings::ServerSettings;
use signage_hub::telemetry::{init_logging, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = ServerSettings::load();

    let log_config = LogConfig {
        default_level: settings.log_level.clone(),
        json: settings.log_json,
        file: settings.log_file.clone(),
    };
    let _log_guard = init_logging(&log_config).context("failed to initialize logging")?;

    let state = create_state();

    // Shutdown on ctrl-c
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    run_server(settings.api_port, state, shutdown_rx)
        .await
        .context("API server failed")?;

    Ok(())
}
