//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Order totals are exact sums of unit price × quantity                │
//! │    Floats only appear when an item is described for display            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! let total = price
//!     .checked_mul_quantity(3)
//!     .and_then(|line| line.checked_add(Money::from_cents(3)));
//! assert_eq!(total.map(|t| t.to_string()), Some("$33.00".to_string()));
//! ```
//!
//! Arithmetic is checked. A seed file can carry any `i64` price and
//! quantity, so a line total that does not fit returns `None` instead of
//! wrapping.

use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so that validation
///   can reject them with a proper error instead of a parse failure
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Item.price ──► Item::purchase(q) ──► line total ──► Catalog::place_order
///     │                                                      │
///     └──► Item::describe() "Price: 1450.0"                  └──► "$1100.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Parses a decimal amount such as `"1450"`, `"10.5"` or `"10.99"`.
    ///
    /// ## Rules
    /// - Optional leading `-` (so negative prices reach validation)
    /// - At most two fractional digits
    /// - Surrounding whitespace is ignored
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
    /// assert_eq!(Money::parse("-2").unwrap().cents(), -200);
    /// assert!(Money::parse("ten").is_err());
    /// assert!(Money::parse("1.999").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let text = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major_text, minor_text) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major_text.is_empty() || !major_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a number"));
        }
        if minor_text.len() > 2 || !minor_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must have at most two decimal places"));
        }
        if unsigned.ends_with('.') {
            return Err(invalid("must be a number"));
        }

        let major: i64 = major_text.parse().map_err(|_| invalid("is too large"))?;
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
            _ => minor_text.parse().map_err(|_| invalid("must be a number"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float.
    ///
    /// Display only. `Money::from_major(1450)` becomes `1450.0`.
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.checked_mul_quantity(3).unwrap();
    /// assert_eq!(line_total.cents(), 897); // $8.97
    ///
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1100.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Serde
// =============================================================================
// Seed catalogs write prices the way people type them: `1450`, `10.99`
// or `"10.99"`. All three go through `Money::parse`.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawPrice::deserialize(deserializer)? {
            RawPrice::Integer(major) => major
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: "is too large".to_string(),
                }),
            RawPrice::Float(value) if value.is_finite() => Money::parse(&value.to_string()),
            RawPrice::Float(_) => Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "must be a finite number".to_string(),
            }),
            RawPrice::Text(text) => Money::parse(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1450").unwrap(), Money::from_major(1450));
        assert_eq!(Money::parse(" 10.99 ").unwrap().cents(), 1099);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse("-3.25").unwrap().cents(), -325);

        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.").is_err());
        assert!(Money::parse(".5").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_major(1100)), "$1100.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_as_major_f64_renders_like_a_float() {
        assert_eq!(format!("{:?}", Money::from_major(1450).as_major_f64()), "1450.0");
        assert_eq!(format!("{:?}", Money::from_cents(1099).as_major_f64()), "10.99");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_cents(3000)));
        assert_eq!(a.checked_mul_quantity(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Money::parse("90000000000000000").unwrap();

        assert_eq!(huge.checked_mul_quantity(200), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serde_accepts_numbers_and_strings() {
        let from_int: Money = serde_json::from_str("1450").unwrap();
        let from_float: Money = serde_json::from_str("10.99").unwrap();
        let from_text: Money = serde_json::from_str("\"10.99\"").unwrap();

        assert_eq!(from_int.cents(), 145000);
        assert_eq!(from_float.cents(), 1099);
        assert_eq!(from_text, from_float);

        assert!(serde_json::from_str::<Money>("\"free\"").is_err());
    }
}
