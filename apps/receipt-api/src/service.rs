//! Receipt service: the two operations behind the HTTP routes.
//!
//! ```text
//! process_receipt:  raw JSON ─► validate ─► score ─► store.insert ─► id
//! get_points:       id ─► store.points ─► points
//! ```
//!
//! Validation and scoring never hold the store lock. A rejected receipt
//! never reaches the store.

use receipt_core::{points, validate_receipt};
use receipt_store::ReceiptStore;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new(store: ReceiptStore) -> Self {
        ReceiptService { store }
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Validates, scores and registers a raw receipt.
    ///
    /// ## Returns
    /// The identifier the receipt was registered under.
    pub async fn process_receipt(&self, raw: &Value) -> Result<Uuid, ApiError> {
        let receipt = validate_receipt(raw).map_err(|err| {
            warn!(field = err.field(), error = %err, "Rejected receipt");
            err
        })?;

        let breakdown = points::score(&receipt);
        debug!(
            retailer = %receipt.retailer,
            total = %receipt.total,
            ?breakdown,
            "Scored receipt"
        );

        let stored = self.store.insert(receipt, breakdown.total()).await?;
        info!(id = %stored.id, points = stored.points, "Registered receipt");

        Ok(stored.id)
    }

    /// Points recorded for a previously registered receipt.
    ///
    /// Identifiers that are not UUIDs were never issued, so they are
    /// reported as not found rather than as bad input.
    pub async fn get_points(&self, id: &str) -> Result<u128, ApiError> {
        let parsed = Uuid::parse_str(id).map_err(|_| ApiError::NotFound(id.to_string()))?;
        Ok(self.store.points(parsed).await?)
    }
}
