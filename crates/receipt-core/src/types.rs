//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  raw JSON ──validate──► NewReceipt ──score + store──► Receipt          │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewReceipt    │   │  ReceiptItem    │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  id (UUID)      │       │
//! │  │  purchase_date  │   │  price (Money)  │   │  ...NewReceipt  │       │
//! │  │  purchase_time  │   └─────────────────┘   │  points         │       │
//! │  │  items          │                         │  created_at     │       │
//! │  │  total (Money)  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Receipt` is immutable once built: there are no setters, and the store
//! hands out shared references only.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Receipt Item
// =============================================================================

/// A purchased line on a receipt. Owned by its receipt, no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Description as submitted (untrimmed).
    pub short_description: String,

    /// Item price.
    #[ts(as = "String")]
    pub price: Money,
}

impl ReceiptItem {
    /// Description with leading/trailing whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

// =============================================================================
// New Receipt
// =============================================================================

/// A receipt that passed validation but has not been scored or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    pub retailer: String,

    #[ts(as = "String")]
    pub purchase_date: NaiveDate,

    #[ts(as = "String")]
    #[serde(serialize_with = "hh_mm::serialize")]
    pub purchase_time: NaiveTime,

    /// Never empty after validation.
    pub items: Vec<ReceiptItem>,

    #[ts(as = "String")]
    pub total: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// A registered receipt with its identifier and precomputed points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier (UUID v4), never reused.
    #[ts(as = "String")]
    pub id: Uuid,

    pub retailer: String,

    #[ts(as = "String")]
    pub purchase_date: NaiveDate,

    #[ts(as = "String")]
    #[serde(serialize_with = "hh_mm::serialize")]
    pub purchase_time: NaiveTime,

    pub items: Vec<ReceiptItem>,

    #[ts(as = "String")]
    pub total: Money,

    /// Points awarded at registration time.
    pub points: u128,

    /// When the receipt was registered.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Builds the stored record from a validated submission.
    pub fn new(id: Uuid, receipt: NewReceipt, points: u128, created_at: DateTime<Utc>) -> Self {
        let NewReceipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        } = receipt;

        Receipt {
            id,
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
            points,
            created_at,
        }
    }
}

/// `NaiveTime` as `"HH:MM"`, the format receipts are submitted in.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::Serializer;

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewReceipt {
        NewReceipt {
            retailer: "Target".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
            items: vec![ReceiptItem {
                short_description: "  Pepsi - 12-oz ".to_string(),
                price: Money::from_cents(125),
            }],
            total: Money::from_cents(125),
        }
    }

    #[test]
    fn test_trimmed_description() {
        let receipt = sample();
        assert_eq!(receipt.items[0].trimmed_description(), "Pepsi - 12-oz");
    }

    #[test]
    fn test_receipt_keeps_submitted_fields() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let receipt = Receipt::new(id, sample(), 31, now);

        assert_eq!(receipt.id, id);
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total, Money::from_cents(125));
        assert_eq!(receipt.points, 31);
        assert_eq!(receipt.created_at, now);
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["retailer"], "Target");
        assert_eq!(json["purchaseDate"], "2022-01-01");
        assert_eq!(json["purchaseTime"], "13:01");
        assert_eq!(json["total"], "1.25");
        assert_eq!(json["items"][0]["shortDescription"], "  Pepsi - 12-oz ");
        assert_eq!(json["items"][0]["price"], "1.25");
    }
}
