//! # Catalog
//!
//! The ordered collection of items a store sells, and order settlement.
//!
//! ## Order Settlement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog::place_order(lines)                          │
//! │                                                                         │
//! │  lines empty? ─────────────────────────────────────► EmptyOrder         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 1: check EVERY line, mutate nothing                               │
//! │  ├── id in catalog?            ─── no ───► ItemNotFound                 │
//! │  ├── item active?              ─── no ───► InactiveItem                 │
//! │  └── quantity > 0?             ─── no ───► InvalidArgument              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 2: tally stock and price EVERY line, mutate nothing               │
//! │  ├── Σ requested ≤ stock?      ─── no ───► InsufficientStock            │
//! │  └── Σ price × qty fits?       ─── no ───► AmountOverflow               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 3: purchase each line (cannot fail)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(total)                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is tallied per item in pass 2, so an order that lists the same item
//! twice is checked against the combined quantity. A failed order leaves
//! every item exactly as it was.

use std::collections::HashMap;
use std::io;

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemId};
use crate::money::Money;
use crate::order::OrderLine;
use crate::validation::validate_order_quantity;

/// Ordered collection of items, keyed by identity.
///
/// ## Invariants
/// - No [`ItemId`] appears twice
/// - Insertion order is preserved
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from seed items. Every seed item must be active.
    pub fn new(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        let mut catalog = Catalog::default();
        for item in items {
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }

    /// Appends an item.
    ///
    /// ## Errors
    /// - `InactiveItem` if the item is deactivated
    /// - `DuplicateItem` if an item with the same id is already present
    pub fn add_item(&mut self, item: Item) -> CoreResult<ItemId> {
        ensure_active(&item)?;

        if self.contains(item.id()) {
            return Err(CoreError::DuplicateItem {
                name: item.name().to_string(),
            });
        }

        let id = item.id();
        debug!(item = %item.name(), %id, "item added to catalog");
        self.items.push(item);
        Ok(id)
    }

    /// Removes an item and hands it back to the caller.
    pub fn remove_item(&mut self, id: ItemId) -> CoreResult<Item> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(CoreError::ItemNotFound(id))?;

        let item = self.items.remove(position);
        debug!(item = %item.name(), %id, "item removed from catalog");
        Ok(item)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// All items in insertion order, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units in stock across ALL items, inactive ones included.
    ///
    /// This is an aggregate stock count, not the number of entries.
    /// Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .map(Item::quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// Active items, in insertion order.
    pub fn active_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_active()).collect()
    }

    /// Writes the numbered listing of active items.
    ///
    /// ```text
    ///
    /// Available products:
    /// 1. MacBook Air M2, Price: 1450.0, Quantity: 100
    /// 2. Bose QuietComfort Earbuds, Price: 250.0, Quantity: 500
    ///
    /// ```
    pub fn describe_all<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let active = self.active_items();
        if active.is_empty() {
            return writeln!(out, "No products available.");
        }

        writeln!(out)?;
        writeln!(out, "Available products:")?;
        for (idx, item) in active.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, item.describe())?;
        }
        writeln!(out)
    }

    /// Validates and settles an order, returning its total.
    ///
    /// Either every line is purchased or none is.
    pub fn place_order(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        if lines.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        for line in lines {
            let item = self
                .item(line.item_id)
                .ok_or(CoreError::ItemNotFound(line.item_id))?;
            ensure_active(item)?;
            validate_order_quantity(line.quantity)?;
        }

        let mut requested: HashMap<ItemId, i64> = HashMap::with_capacity(lines.len());
        let mut total = Money::zero();
        for line in lines {
            let item = self
                .item(line.item_id)
                .ok_or(CoreError::ItemNotFound(line.item_id))?;

            let tally = requested.entry(line.item_id).or_insert(0);
            *tally = tally.saturating_add(line.quantity);
            item.check_stock(*tally)?;

            total = total
                .checked_add(item.cost_of(line.quantity)?)
                .ok_or_else(|| CoreError::AmountOverflow {
                    name: item.name().to_string(),
                })?;
        }

        for line in lines {
            let item = self
                .item_mut(line.item_id)
                .ok_or(CoreError::ItemNotFound(line.item_id))?;
            item.purchase(line.quantity)?;
        }

        info!(lines = lines.len(), %total, "order placed");
        Ok(total)
    }
}

fn ensure_active(item: &Item) -> CoreResult<()> {
    if !item.is_active() {
        return Err(CoreError::InactiveItem {
            name: item.name().to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
