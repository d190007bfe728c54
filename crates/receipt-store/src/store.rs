//! # Receipt Store
//!
//! In-memory map from identifier to registered receipt.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Store Access                                 │
//! │                                                                         │
//! │  POST handler ──► validate ──► score ──► insert() ─┐                    │
//! │                   (no lock)    (no lock)            │ write lock         │
//! │                                                     ▼                    │
//! │                        Arc<RwLock<HashMap<Uuid, Arc<Receipt>>>>         │
//! │                                                     ▲                    │
//! │  GET handler  ─────────────────────────► get() ────┘ read lock          │
//! │                                                                         │
//! │  • The record is fully built before the write lock is taken            │
//! │  • An id becomes visible in the same critical section it is drawn in   │
//! │  • Readers share the lock; they never see a partial receipt            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is a cheap-to-clone handle. Build one at startup, hand clones to
//! whoever needs it, and everything is dropped with the last clone.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use receipt_core::{NewReceipt, Receipt};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use receipt_store::StoreConfig;
///
/// let config = StoreConfig::default().capacity(10_000);
/// assert_eq!(config.capacity, Some(10_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Maximum number of receipts retained. `None` means unbounded.
    pub capacity: Option<usize>,
}

impl StoreConfig {
    /// Unbounded store.
    pub fn unbounded() -> Self {
        StoreConfig { capacity: None }
    }

    /// Sets the maximum number of receipts.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared handle to the registered receipts.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<Uuid, Arc<Receipt>>>>,
    config: StoreConfig,
}

impl Default for ReceiptStore {
    fn default() -> Self {
        ReceiptStore::new(StoreConfig::default())
    }
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        ReceiptStore {
            receipts: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Registers a scored receipt under a fresh identifier.
    ///
    /// ## Returns
    /// The stored record. Its `id` has never been issued before.
    ///
    /// ## Errors
    /// `CapacityExceeded` when a capacity is configured and reached; the
    /// store is left untouched.
    pub async fn insert(&self, receipt: NewReceipt, points: u128) -> StoreResult<Arc<Receipt>> {
        let mut receipts = self.receipts.write().await;

        if let Some(capacity) = self.config.capacity {
            if receipts.len() >= capacity {
                return Err(StoreError::CapacityExceeded { capacity });
            }
        }

        let id = loop {
            let candidate = Uuid::new_v4();
            if !receipts.contains_key(&candidate) {
                break candidate;
            }
        };

        let record = Arc::new(Receipt::new(id, receipt, points, Utc::now()));
        receipts.insert(id, Arc::clone(&record));

        debug!(id = %id, points, stored = receipts.len(), "Stored receipt");
        Ok(record)
    }

    /// Gets a receipt by ID.
    pub async fn get(&self, id: Uuid) -> StoreResult<Arc<Receipt>> {
        self.receipts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Gets the points recorded for a receipt.
    pub async fn points(&self, id: Uuid) -> StoreResult<u128> {
        self.get(id).await.map(|receipt| receipt.points)
    }

    /// Number of registered receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::validate_receipt;
    use serde_json::json;
    use std::collections::HashSet;

    fn new_receipt() -> NewReceipt {
        validate_receipt(&json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
            "total": "1.25"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = ReceiptStore::default();
        assert!(store.is_empty().await);

        let stored = store.insert(new_receipt(), 31).await.unwrap();
        let fetched = store.get(stored.id).await.unwrap();

        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.retailer, "Target");
        assert_eq!(fetched.points, 31);
        assert_eq!(store.points(stored.id).await.unwrap(), 31);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_not_found() {
        let store = ReceiptStore::default();
        store.insert(new_receipt(), 31).await.unwrap();

        let missing = Uuid::new_v4();
        assert_eq!(
            store.points(missing).await,
            Err(StoreError::NotFound { id: missing })
        );
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = ReceiptStore::default();
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let stored = store.insert(new_receipt(), 1).await.unwrap();
            assert!(ids.insert(stored.id));
        }
        assert_eq!(store.len().await, 100);
    }

    #[tokio::test]
    async fn test_capacity_limit() {
        let store = ReceiptStore::new(StoreConfig::default().capacity(2));
        store.insert(new_receipt(), 1).await.unwrap();
        store.insert(new_receipt(), 2).await.unwrap();

        assert_eq!(
            store.insert(new_receipt(), 3).await.unwrap_err(),
            StoreError::CapacityExceeded { capacity: 2 }
        );
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ReceiptStore::default();
        let other = store.clone();

        let stored = store.insert(new_receipt(), 7).await.unwrap();
        assert_eq!(other.points(stored.id).await.unwrap(), 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_all_visible() {
        let store = ReceiptStore::default();

        let handles: Vec<_> = (0..64u128)
            .map(|points| {
                let store = store.clone();
                tokio::spawn(async move {
                    let stored = store.insert(new_receipt(), points).await.unwrap();
                    (stored.id, points)
                })
            })
            .collect();

        let mut inserted = Vec::new();
        for handle in handles {
            inserted.push(handle.await.unwrap());
        }

        assert_eq!(store.len().await, 64);
        for (id, points) in inserted {
            assert_eq!(store.points(id).await.unwrap(), points);
        }
    }
}
