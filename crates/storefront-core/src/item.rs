//! # Item
//!
//! A single catalog entry: name, unit price, quantity on hand and an active
//! flag.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Item::new ──► active, quantity = n                                    │
//! │        │                                                                │
//! │        ├── purchase(q) ──────► quantity -= q, returns price × q         │
//! │        │                                                                │
//! │        ├── set_quantity(0) ──► quantity = 0, active = false             │
//! │        │                                                                │
//! │        └── activate() / deactivate() ──► flag only                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every item gets an [`ItemId`] when it is constructed. The catalog compares
//! ids, never field values, so two items that look identical are still two
//! entries. A clone keeps the id and therefore counts as the same item.

use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price, validate_stock_quantity};

// =============================================================================
// Item Id
// =============================================================================

/// Identity handle of an [`Item`] (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A product held in stock.
///
/// ## Invariants
/// - `quantity >= 0`
/// - `price >= 0`
/// - `name` is not blank
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
}

impl Item {
    /// Creates an active item after validating every field.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` for a blank name, a negative price or a
    /// negative quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Item, Money};
    ///
    /// let phone = Item::new("Phone", Money::from_major(500), 10).unwrap();
    /// assert!(phone.is_active());
    /// assert_eq!(phone.describe(), "Phone, Price: 500.0, Quantity: 10");
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        Ok(Item {
            id: ItemId::new(),
            name,
            price,
            quantity,
            active: true,
        })
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Overwrites the stock level.
    ///
    /// Reaching zero deactivates the item. A positive value does NOT
    /// reactivate it; call [`Item::activate`] for that.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_quantity(quantity)?;
        self.quantity = quantity;

        if self.quantity <= 0 {
            self.active = false;
            tracing::debug!(item = %self.name, "item deactivated: out of stock");
        }

        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Human-readable one-liner, e.g. `"MacBook Air M2, Price: 1450.0, Quantity: 100"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Fails with `InsufficientStock` if `requested` exceeds the stock on hand.
    pub fn check_stock(&self, requested: i64) -> CoreResult<()> {
        if requested > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested,
            });
        }

        Ok(())
    }

    /// Price of `quantity` units.
    ///
    /// Fails with `AmountOverflow` if the product does not fit in `Money`.
    pub fn cost_of(&self, quantity: i64) -> CoreResult<Money> {
        self.price
            .checked_mul_quantity(quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                name: self.name.clone(),
            })
    }

    /// Takes `quantity` units out of stock and returns what they cost.
    ///
    /// Only the non-negative rule applies here: buying zero units is a
    /// legal no-op. Positivity is enforced by order validation.
    ///
    /// ## Errors
    /// - `InvalidArgument` for a negative quantity
    /// - `InsufficientStock` when `quantity` exceeds stock
    /// - `AmountOverflow` when the cost does not fit in `Money`
    ///
    /// Stock is unchanged on every error.
    pub fn purchase(&mut self, quantity: i64) -> CoreResult<Money> {
        validate_stock_quantity(quantity)?;
        self.check_stock(quantity)?;
        let cost = self.cost_of(quantity)?;

        self.quantity -= quantity;
        tracing::debug!(
            item = %self.name,
            purchased = quantity,
            remaining = self.quantity,
            "stock decremented"
        );

        Ok(cost)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {:?}, Quantity: {}",
            self.name,
            self.price.as_major_f64(),
            self.quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
