//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Binary floating point cannot represent most cent values exactly:      │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Points rules ask exact questions about totals and prices:             │
//! │    "is 35.35 a multiple of 0.25?"  "what is ceil(12.25 × 0.2)?"        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents → 3535 % 25 != 0                               │
//! │    "12.25" → 1225 cents → ceil(1225 × 2000 / 1_000_000) = 3            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "100.00".parse().unwrap();
//! assert_eq!(total.cents(), 10000);
//! assert!(total.is_whole_dollars());
//! assert!(total.is_multiple_of(Money::from_cents(25)));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// Receipt amounts arrive as decimal strings with exactly two fraction
/// digits (`"35.35"`). They are parsed once, at validation time, and every
/// rule afterwards works on the integer.
///
/// On the wire a `Money` is the same two-decimal string it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// True when the amount has no cents (`12.00`, `0.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step only divides zero.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        if step.0 == 0 {
            return self.0 == 0;
        }
        self.0 % step.0 == 0
    }

    /// Takes a percentage of the amount and rounds UP to whole dollars.
    ///
    /// ## Arguments
    /// * `bps` - Percentage in basis points (2000 = 20%)
    ///
    /// ## Implementation
    /// `cents × bps / 1_000_000` is the dollar amount (100 cents per dollar,
    /// 10_000 basis points per whole). The ceiling is taken on that exact
    /// rational, so any positive remainder rounds up.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // ceil(12.25 × 0.2) = ceil(2.45) = 3
    /// assert_eq!(Money::from_cents(1225).percentage_ceil_dollars(2000), 3);
    /// // ceil(5.00 × 0.2) = 1, exactly
    /// assert_eq!(Money::from_cents(500).percentage_ceil_dollars(2000), 1);
    /// ```
    pub fn percentage_ceil_dollars(&self, bps: u32) -> i64 {
        // i128 so that large cents × bps cannot overflow
        let numerator = self.0 as i128 * bps as i128;
        let denominator: i128 = 100 * 10_000;
        let quotient = numerator.div_euclid(denominator);
        let rounded = if numerator.rem_euclid(denominator) != 0 {
            quotient + 1
        } else {
            quotient
        };
        rounded as i64
    }

    /// Formats as a plain two-decimal string (`"35.35"`), no currency sign.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal string could not become `Money`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Not `<digits>.<two digits>`.
    #[error("must be a decimal with exactly two fraction digits")]
    InvalidFormat,

    /// Digits are well-formed but the amount does not fit in cents.
    #[error("amount is too large")]
    Overflow,
}

/// Parses `<digits>.<two digits>`, e.g. `"0.25"`, `"1200.00"`.
///
/// Signs, exponents, whitespace and any other fraction length are rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = s.split_once('.').ok_or(ParseMoneyError::InvalidFormat)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || fraction.len() != 2 || !all_digits(fraction) {
            return Err(ParseMoneyError::InvalidFormat);
        }

        let mut dollars: i64 = 0;
        for digit in whole.bytes() {
            dollars = dollars
                .checked_mul(10)
                .and_then(|d| d.checked_add((digit - b'0') as i64))
                .ok_or(ParseMoneyError::Overflow)?;
        }
        let cents_part = fraction
            .bytes()
            .fold(0i64, |acc, digit| acc * 10 + (digit - b'0') as i64);

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Money)
            .ok_or(ParseMoneyError::Overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a dollar sign, for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
