//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ├── NotFound          → ApiError::NotFound  → 404                │
//! │       └── CapacityExceeded  → ApiError::Internal  → 500 (generic)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use uuid::Uuid;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt was ever registered under this identifier.
    #[error("Receipt not found: {id}")]
    NotFound { id: Uuid },

    /// The configured receipt limit has been reached.
    ///
    /// ## When This Occurs
    /// Only when the store was built with a capacity. The rejected receipt
    /// is not stored and no identifier is issued.
    #[error("Receipt store is full ({capacity} receipts)")]
    CapacityExceeded { capacity: usize },
}

impl StoreError {
    /// Creates a NotFound error for the given identifier.
    pub fn not_found(id: Uuid) -> Self {
        StoreError::NotFound { id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
