//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate holds the inventory and ordering rules. It has no I/O of its
//! own: the text menu in `storefront-cli` calls into it with values that are
//! already parsed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-cli (text menu)                      │   │
//! │  │   list products ── total quantity ── make an order ── quit      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Catalog                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │  catalog  │  │   order   │  │   money   │  │   │
//! │  │   │   Item    │  │  Catalog  │  │ OrderLine │  │   Money   │  │   │
//! │  │   │  ItemId   │  │ settle    │  │ Shopping  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO FILES • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - A single stocked product and its identity
//! - [`catalog`] - Ordered collection of items and order settlement
//! - [`order`] - Order lines and the shopping list that collects them
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Field and input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, Item, Money, OrderLine};
//!
//! let phone = Item::new("Phone", Money::from_major(500), 10).unwrap();
//! let tablet = Item::new("Tablet", Money::from_major(300), 5).unwrap();
//! let (phone_id, tablet_id) = (phone.id(), tablet.id());
//!
//! let mut catalog = Catalog::new(vec![phone, tablet]).unwrap();
//! assert_eq!(catalog.total_quantity(), 15);
//!
//! let total = catalog
//!     .place_order(&[OrderLine::new(phone_id, 1), OrderLine::new(tablet_id, 2)])
//!     .unwrap();
//! assert_eq!(total, Money::from_major(1100));
//! assert_eq!(catalog.item(phone_id).unwrap().quantity(), 9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Item, ItemId};
pub use money::Money;
pub use order::{OrderLine, Selection, ShoppingList};
