//! # Receipt API
//!
//! HTTP server that registers receipts and reports their loyalty points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  POST /receipts/process ──┐                                            │
//! │  GET  /receipts/{id}/points ─► ReceiptService ──► ReceiptStore         │
//! │  GET  /health ────────────┘        │                                   │
//! │                                    └─► receipt-core (validate, score)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - Bind address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_CAPACITY` - Maximum retained receipts (default: unbounded)
//! - `LOG_LEVEL` - Default log filter when `RUST_LOG` is unset (default: info)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

// Re-exports
pub use api::create_router;
pub use config::ServerConfig;
pub use error::ApiError;
pub use service::ReceiptService;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub service: ReceiptService,
    pub config: ServerConfig,
}

impl AppState {
    /// Builds the state with a fresh store sized from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = receipt_store::ReceiptStore::new(config.store_config());
        AppState {
            service: ReceiptService::new(store),
            config,
        }
    }
}
