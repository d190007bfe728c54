//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It validates receipt
//! submissions and scores them, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  points   │  │   │
//! │  │   │ Receipt   │  │   Money   │  │  formats  │  │ 7 rules   │  │   │
//! │  │   │ Item      │  │  (cents)  │  │  order    │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              receipt-store (in-memory map)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (NewReceipt, ReceiptItem, Receipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Raw submission → NewReceipt
//! - [`points`] - The scoring rules
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt};
//! use serde_json::json;
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Walgreens",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "08:13",
//!     "items": [
//!         { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
//!         { "shortDescription": "Dasani", "price": "1.40" }
//!     ],
//!     "total": "2.65"
//! })).unwrap();
//!
//! // 9 (retailer) + 5 (one pair) + 1 (ceil(1.40 × 0.2), "Dasani") = 15
//! assert_eq!(calculate_points(&receipt), 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use points::{calculate_points, score, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;
