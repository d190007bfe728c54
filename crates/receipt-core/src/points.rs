//! # Points Module
//!
//! The loyalty-points rule engine.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Points Rules                                     │
//! │                                                                         │
//! │  retailer ─────► +1 per alphanumeric character                         │
//! │  total ────────► +50 if no cents                                        │
//! │             └──► +25 if a multiple of 0.25                              │
//! │  items ────────► +5 per pair of items                                   │
//! │             └──► +ceil(price × 0.2) per item whose trimmed              │
//! │                  description length is a multiple of 3                  │
//! │  purchaseDate ─► +6 if the day of month is odd                          │
//! │  purchaseTime ─► +10 if 14:00 <= time < 16:00                           │
//! │                                                                         │
//! │  Every rule is additive and independent; none subtracts.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine trusts its input: a [`NewReceipt`] only exists once validation
//! has passed, so nothing here can fail. Each rule fits in `u64`; the item
//! description sum and the total are `u128`, which no in-memory receipt can
//! overflow.
//!
//! ## Example
//! ```rust
//! use receipt_core::points::calculate_points;
//! use receipt_core::validation::validate_receipt;
//! use serde_json::json;
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-20",
//!     "purchaseTime": "14:33",
//!     "items": [
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" }
//!     ],
//!     "total": "9.00"
//! })).unwrap();
//!
//! assert_eq!(calculate_points(&receipt), 109);
//! ```

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::money::Money;
use crate::types::{NewReceipt, ReceiptItem};

// =============================================================================
// Rule Constants
// =============================================================================

/// Awarded when the total has no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Awarded when the total is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Step used by the quarter rule.
pub const QUARTER: Money = Money::from_cents(25);

/// Awarded for every two items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Item descriptions whose trimmed length is a multiple of this earn a bonus.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Description bonus as a share of the item price, in basis points (20%).
pub const DESCRIPTION_BONUS_BPS: u32 = 2000;

/// Awarded when the day of the purchase date is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Awarded for purchases in the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window, in hours: 14:00 inclusive to 16:00 exclusive.
pub const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
///
/// Kept separate so each rule can be logged and tested on its own;
/// [`PointsBreakdown::total`] is the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u128,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> u128 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .map(u128::from)
        .sum::<u128>()
            + self.item_descriptions
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Applies every rule to a validated receipt.
pub fn score(receipt: &NewReceipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(receipt.total),
        quarter_multiple_total: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(|item| u128::from(item_description_points(item)))
            .sum(),
        odd_purchase_day: odd_day_points(receipt.purchase_date.day()),
        afternoon_purchase: afternoon_points(receipt.purchase_time.hour()),
    }
}

/// Total points for a validated receipt.
#[inline]
pub fn calculate_points(receipt: &NewReceipt) -> u128 {
    score(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per alphanumeric character; spaces and punctuation score 0.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length is counted in characters. A trimmed length of 0 is a multiple of 3;
/// a whitespace-only description therefore qualifies.
pub fn item_description_points(item: &ReceiptItem) -> u64 {
    let length = item.trimmed_description().chars().count();
    if length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }
    // Validated prices are never negative
    item.price.percentage_ceil_dollars(DESCRIPTION_BONUS_BPS).max(0) as u64
}

pub fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

pub fn afternoon_points(hour: u32) -> u64 {
    if AFTERNOON_HOURS.contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
