//! Response bodies.
//!
//! Requests are not typed here: `POST /receipts/process` takes raw JSON so
//! the validator can name the first violated field itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `POST /receipts/process` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

/// `GET /receipts/{id}/points` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u128,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
    pub version: String,
}
