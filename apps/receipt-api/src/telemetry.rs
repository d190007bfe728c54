//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `LOG_LEVEL` is used.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.log_format {
        LogFormat::Pretty => builder.with_thread_ids(true).pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}
