//! # receipt-store: Receipt Storage for Receipt Points
//!
//! Holds every registered receipt, with its precomputed points, for the life
//! of the process. Nothing is written to disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  receipt-api service (process_receipt / get_points)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐                       │   │
//! │  │   │ StoreConfig   │    │ ReceiptStore  │                       │   │
//! │  │   │ capacity      │───►│ insert / get  │                       │   │
//! │  │   └───────────────┘    │ points / len  │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt};
//! use receipt_store::{ReceiptStore, StoreConfig};
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = ReceiptStore::new(StoreConfig::default());
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "13:13",
//!     "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
//!     "total": "1.25"
//! })).unwrap();
//! let points = calculate_points(&receipt);
//!
//! let stored = store.insert(receipt, points).await.unwrap();
//! assert_eq!(store.points(stored.id).await.unwrap(), points);
//! # });
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ReceiptStore, StoreConfig};
