//! # Validation Module
//!
//! Input validation utilities shared by `Item`, `Catalog` and the order
//! collection flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text input (CLI)                                             │
//! │  └── parse_quantity / Money::parse / ShoppingList::parse_selection     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain (THIS MODULE)                                         │
//! │  ├── names are non-blank                                               │
//! │  ├── prices and stock levels are non-negative                          │
//! │  └── ordered quantities are positive                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog state                                                │
//! │  └── active flag, stock on hand, membership                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_item_name;
///
/// assert!(validate_item_name("MacBook Air M2").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level or a direct purchase amount.
///
/// Zero passes: an empty shelf is a valid state and buying nothing is a
/// no-op.
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity on an order line. Must be positive (> 0).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_order_quantity;
///
/// assert!(validate_order_quantity(1).is_ok());
/// assert!(validate_order_quantity(0).is_err());
/// ```
pub fn validate_order_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a whole number typed by the user.
///
/// Only the integer shape is checked here; the sign is left to the
/// validator that applies to the context.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be an integer".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
