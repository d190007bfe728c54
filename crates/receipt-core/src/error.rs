//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Receipt submission failures                    │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup / capacity failures                     │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → HTTP 400                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every validation message names the offending field
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// Only the first violated constraint is reported; the validator stops
/// at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or null.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is present but has the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType { field: String, expected: String },

    /// Invalid format (pattern mismatch, impossible date, etc.).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A sequence that must have at least one element is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidType { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Empty { field } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "total".to_string(),
        };
        assert_eq!(err.to_string(), "total is required");

        let err = ValidationError::InvalidFormat {
            field: "items[0].price".to_string(),
            reason: "must be a decimal with exactly two fraction digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "items[0].price has invalid format: must be a decimal with exactly two fraction digits"
        );

        let err = ValidationError::Empty {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items must not be empty");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::InvalidType {
            field: "retailer".to_string(),
            expected: "a string".to_string(),
        };
        assert_eq!(err.field(), "retailer");
        assert_eq!(err.to_string(), "retailer must be a string");
    }
}
