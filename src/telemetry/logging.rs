//! Tracing initialization
//!
//! One console layer (compact or JSON) plus an optional non-blocking file
//! layer. The env filter resolves `SIGNAGE_LOG`, then `RUST_LOG`, then the
//! configured default level.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Logging configuration, derived from `ServerSettings`
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter used when no env filter is set
    pub default_level: String,
    /// JSON console output instead of the compact format
    pub json: bool,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

/// Initialize the global subscriber
///
/// The returned guard flushes the file writer on drop; callers keep it alive
/// for the program's lifetime.
pub fn init_logging(config: &LogConfig) -> std::io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("SIGNAGE_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    let mut file_guard = None;
    let file_layer = match &config.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(std::fs::File::create(path)?);
            file_guard = Some(guard);
            Some(fmt::layer().with_writer(writer).with_ansi(false))
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    if config.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().compact().with_target(true)).init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        json = config.json,
        file = config.file.is_some(),
        "logging initialized"
    );

    Ok(file_guard)
}
