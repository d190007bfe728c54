//! # Validation Module
//!
//! Turns a raw receipt submission into a typed [`NewReceipt`], or reports the
//! first constraint it violates.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation                                 │
//! │                                                                         │
//! │  raw JSON                                                               │
//! │     │                                                                   │
//! │     ├── 1. is an object?                                                │
//! │     ├── 2. retailer, purchaseDate, purchaseTime, items, total present?  │
//! │     ├── 3. retailer        ^[A-Za-z0-9\s\-&]+$                         │
//! │     ├── 4. purchaseDate    YYYY-MM-DD, real calendar date              │
//! │     ├── 5. purchaseTime    HH:MM, 24-hour                              │
//! │     ├── 6. items           non-empty array                             │
//! │     ├── 7. items[i]        shortDescription ^[A-Za-z0-9\s\-]+$         │
//! │     │                      price            ^\d+\.\d{2}$               │
//! │     └── 8. total           ^\d+\.\d{2}$                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  NewReceipt  (first failure wins, nothing is accumulated)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_receipt;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-01",
//!     "purchaseTime": "13:01",
//!     "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
//!     "total": "1.25"
//! });
//! let receipt = validate_receipt(&raw).unwrap();
//! assert_eq!(receipt.total.cents(), 125);
//!
//! let err = validate_receipt(&json!({ "retailer": "Target" })).unwrap_err();
//! assert_eq!(err.to_string(), "purchaseDate is required");
//! ```

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewReceipt, ReceiptItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fields every submission must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];

static RETAILER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s\-&]+$").expect("retailer pattern compiles"));

static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s\-]+$").expect("description pattern compiles"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a raw receipt submission.
///
/// Extra, unknown fields are ignored. A JSON `null` counts as missing.
pub fn validate_receipt(raw: &Value) -> ValidationResult<NewReceipt> {
    let fields = raw.as_object().ok_or_else(|| ValidationError::InvalidType {
        field: "receipt".to_string(),
        expected: "a JSON object".to_string(),
    })?;

    for field in REQUIRED_FIELDS {
        require(fields, field)?;
    }

    let retailer = validate_retailer(require_str(fields, "retailer")?)?;
    let purchase_date = validate_purchase_date(require_str(fields, "purchaseDate")?)?;
    let purchase_time = validate_purchase_time(require_str(fields, "purchaseTime")?)?;
    let items = validate_items(require(fields, "items")?)?;
    let total = validate_amount("total", require_str(fields, "total")?)?;

    Ok(NewReceipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name against `^[A-Za-z0-9\s\-&]+$`.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_retailer;
///
/// assert!(validate_retailer("M&M Corner Market").is_ok());
/// assert!(validate_retailer("Trader Joe's").is_err());
/// assert!(validate_retailer("").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<String> {
    if !RETAILER_PATTERN.is_match(retailer) {
        return Err(ValidationError::InvalidFormat {
            field: "retailer".to_string(),
            reason: "must contain only letters, digits, whitespace, '-' and '&'".to_string(),
        });
    }
    Ok(retailer.to_string())
}

/// Validates an ISO `YYYY-MM-DD` purchase date.
///
/// The shape is checked first, then the calendar (`2022-02-30` fails).
pub fn validate_purchase_date(date: &str) -> ValidationResult<NaiveDate> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "purchaseDate".to_string(),
        reason: reason.to_string(),
    };

    if !DATE_PATTERN.is_match(date) {
        return Err(invalid("must be YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid("is not a valid calendar date"))
}

/// Validates a 24-hour `HH:MM` purchase time.
pub fn validate_purchase_time(time: &str) -> ValidationResult<NaiveTime> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "purchaseTime".to_string(),
        reason: reason.to_string(),
    };

    if !TIME_PATTERN.is_match(time) {
        return Err(invalid("must be HH:MM"));
    }
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid("is not a valid 24-hour time"))
}

/// Validates a `<digits>.<two digits>` amount and converts it to cents.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_amount;
///
/// assert_eq!(validate_amount("total", "35.35").unwrap().cents(), 3535);
/// assert!(validate_amount("total", "3.5").is_err());
/// ```
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<Money> {
    amount
        .parse::<Money>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Validates the items array: non-empty, every element a well-formed item.
pub fn validate_items(items: &Value) -> ValidationResult<Vec<ReceiptItem>> {
    let items = items.as_array().ok_or_else(|| ValidationError::InvalidType {
        field: "items".to_string(),
        expected: "an array".to_string(),
    })?;

    if items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect()
}

/// Validates one element of `items`. Field names in errors carry the index.
fn validate_item(index: usize, item: &Value) -> ValidationResult<ReceiptItem> {
    let prefix = format!("items[{index}]");
    let fields = item.as_object().ok_or_else(|| ValidationError::InvalidType {
        field: prefix.clone(),
        expected: "an object".to_string(),
    })?;

    let description_field = format!("{prefix}.shortDescription");
    let price_field = format!("{prefix}.price");

    let short_description = require_str_named(fields, "shortDescription", &description_field)?;
    let price = require_str_named(fields, "price", &price_field)?;

    if !DESCRIPTION_PATTERN.is_match(short_description) {
        return Err(ValidationError::InvalidFormat {
            field: description_field,
            reason: "must contain only letters, digits, whitespace and '-'".to_string(),
        });
    }

    Ok(ReceiptItem {
        short_description: short_description.to_string(),
        price: validate_amount(&price_field, price)?,
    })
}

// =============================================================================
// Field Access Helpers
// =============================================================================

fn require<'a>(fields: &'a Map<String, Value>, key: &str) -> ValidationResult<&'a Value> {
    require_named(fields, key, key)
}

fn require_str<'a>(fields: &'a Map<String, Value>, key: &str) -> ValidationResult<&'a str> {
    require_str_named(fields, key, key)
}

/// Looks up `key`, reporting failures under `field` (which may be a path).
fn require_named<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    field: &str,
) -> ValidationResult<&'a Value> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn require_str_named<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    field: &str,
) -> ValidationResult<&'a str> {
    require_named(fields, key, field)?
        .as_str()
        .ok_or_else(|| ValidationError::InvalidType {
            field: field.to_string(),
            expected: "a string".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Gatorade", "price": "2.25" }
            ],
            "total": "4.50"
        })
    }

    fn field_error(raw: &Value) -> String {
        validate_receipt(raw).unwrap_err().field().to_string()
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = validate_receipt(&valid()).unwrap();
        assert_eq!(receipt.retailer, "M&M Corner Market");
        assert_eq!(receipt.purchase_date.day(), 20);
        assert_eq!(receipt.purchase_time.hour(), 14);
        assert_eq!(receipt.purchase_time.minute(), 33);
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0].price.cents(), 225);
        assert_eq!(receipt.total.cents(), 450);
    }

    #[test]
    fn test_not_an_object() {
        let err = validate_receipt(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.field(), "receipt");
        assert!(validate_receipt(&json!("receipt")).is_err());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut raw = valid();
            raw.as_object_mut().unwrap().remove(field);
            let err = validate_receipt(&raw).unwrap_err();
            assert_eq!(err, ValidationError::Required { field: field.to_string() });
        }
    }

    #[test]
    fn test_missing_total_named() {
        let mut raw = valid();
        raw.as_object_mut().unwrap().remove("total");
        assert_eq!(validate_receipt(&raw).unwrap_err().to_string(), "total is required");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut raw = valid();
        raw["retailer"] = Value::Null;
        assert!(matches!(
            validate_receipt(&raw),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_presence_checked_before_format() {
        // Bad retailer AND missing total: presence is reported first
        let mut raw = valid();
        raw["retailer"] = json!("Trader Joe's");
        raw.as_object_mut().unwrap().remove("total");
        assert_eq!(field_error(&raw), "total");
    }

    #[test]
    fn test_retailer_pattern() {
        assert!(validate_retailer("Target").is_ok());
        assert!(validate_retailer("M&M Corner Market").is_ok());
        assert!(validate_retailer("Walgreens - 24 Hr").is_ok());

        assert!(validate_retailer("").is_err());
        assert!(validate_retailer("Trader Joe's").is_err());
        assert!(validate_retailer("Café").is_err());
        assert!(validate_retailer("Target!").is_err());
    }

    #[test]
    fn test_retailer_wrong_type() {
        let mut raw = valid();
        raw["retailer"] = json!(42);
        assert!(matches!(
            validate_receipt(&raw),
            Err(ValidationError::InvalidType { field, .. }) if field == "retailer"
        ));
    }

    #[test]
    fn test_purchase_date() {
        assert!(validate_purchase_date("2022-01-01").is_ok());
        assert!(validate_purchase_date("2024-02-29").is_ok());

        assert!(validate_purchase_date("2022-02-30").is_err());
        assert!(validate_purchase_date("2023-02-29").is_err());
        assert!(validate_purchase_date("2022-13-01").is_err());
        assert!(validate_purchase_date("2022-1-1").is_err());
        assert!(validate_purchase_date("01/01/2022").is_err());
        assert!(validate_purchase_date("2022-01-01T00:00").is_err());
    }

    #[test]
    fn test_purchase_time() {
        assert!(validate_purchase_time("00:00").is_ok());
        assert!(validate_purchase_time("13:01").is_ok());
        assert!(validate_purchase_time("23:59").is_ok());

        assert!(validate_purchase_time("24:00").is_err());
        assert!(validate_purchase_time("12:60").is_err());
        assert!(validate_purchase_time("9:05").is_err());
        assert!(validate_purchase_time("14:33:00").is_err());
        assert!(validate_purchase_time("2pm").is_err());
    }

    #[test]
    fn test_empty_items() {
        let mut raw = valid();
        raw["items"] = json!([]);
        assert_eq!(
            validate_receipt(&raw).unwrap_err(),
            ValidationError::Empty { field: "items".to_string() }
        );
    }

    #[test]
    fn test_items_not_an_array() {
        let mut raw = valid();
        raw["items"] = json!({ "shortDescription": "Gatorade", "price": "2.25" });
        assert_eq!(field_error(&raw), "items");
    }

    #[test]
    fn test_item_price_needs_two_decimals() {
        let mut raw = valid();
        raw["items"][1]["price"] = json!("3.5");
        let err = validate_receipt(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "items[1].price");
    }

    #[test]
    fn test_item_missing_fields() {
        let mut raw = valid();
        raw["items"][0].as_object_mut().unwrap().remove("shortDescription");
        assert_eq!(field_error(&raw), "items[0].shortDescription");

        let mut raw = valid();
        raw["items"][1].as_object_mut().unwrap().remove("price");
        assert_eq!(field_error(&raw), "items[1].price");
    }

    #[test]
    fn test_item_description_pattern() {
        let mut raw = valid();
        raw["items"][0]["shortDescription"] = json!("Pepsi & Chips");
        assert_eq!(field_error(&raw), "items[0].shortDescription");

        let mut raw = valid();
        raw["items"][0]["shortDescription"] = json!("   Klarbrunn 12-PK 12 FL OZ  ");
        assert!(validate_receipt(&raw).is_ok());
    }

    #[test]
    fn test_item_not_an_object() {
        let mut raw = valid();
        raw["items"][0] = json!("Gatorade");
        assert_eq!(field_error(&raw), "items[0]");
    }

    #[test]
    fn test_total_format() {
        for bad in ["35", "35.3", "35.355", "-1.00", "$35.35"] {
            let mut raw = valid();
            raw["total"] = json!(bad);
            assert_eq!(field_error(&raw), "total", "total {bad:?} should fail");
        }

        let mut raw = valid();
        raw["total"] = json!(35.35);
        assert!(matches!(
            validate_receipt(&raw),
            Err(ValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut raw = valid();
        raw["loyaltyCard"] = json!("1234");
        assert!(validate_receipt(&raw).is_ok());
    }
}
