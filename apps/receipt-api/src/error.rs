//! Error types for the Receipt API.
//!
//! ## Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                         ApiError           HTTP                 │
//! │  ──────                         ────────           ────                 │
//! │  body is not JSON          ──►  MalformedBody  ──► 400                  │
//! │  ValidationError           ──►  Validation     ──► 400                  │
//! │  StoreError::NotFound      ──►  NotFound       ──► 404                  │
//! │  StoreError::CapacityExc.  ──►  Internal       ──► 500 (generic text)   │
//! │  handler panic             ──►  Internal       ──► 500 (generic text)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal faults are logged with full detail; clients only ever see
//! [`INTERNAL_ERROR_MESSAGE`].

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use receipt_store::StoreError;
use serde::{Deserialize, Serialize};

/// The only message a client receives for a server-side fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Receipt not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MalformedBody(_) => "MALFORMED_BODY",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// What the client is allowed to see.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound(id.to_string()),
            StoreError::CapacityExceeded { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP reason phrase ("Bad Request", "Not Found", ...)
    pub error: String,

    /// Machine-readable error code
    pub code: String,

    /// Human-readable detail
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "Internal error"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "Request failed"),
        }

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            code: self.error_code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Converts a caught handler panic into the generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
