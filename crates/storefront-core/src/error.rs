//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Invalid arguments (wrapped by CoreError)       │
//! │                                                                         │
//! │  storefront-cli errors (app crate)                                     │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── SeedError        - Unreadable seed catalog                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → rendered as text by the menu      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::item::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Item and Catalog operations fail fast with one of these and never catch
/// their own errors. The order session in the CLI is the only place that
/// turns them into user-visible text.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Wrong or out-of-domain argument (empty name, negative price, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Purchase exceeds available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Tablet", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Menu shows: "Error processing order: Requested quantity (5) exceeds ..."
    /// ```
    #[error("Requested quantity ({requested}) exceeds available stock ({available}) for {name}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Operating on a deactivated item.
    #[error("Product is not active: {name}")]
    InactiveItem { name: String },

    /// The same item (by identity) is already in the catalog.
    #[error("Product already exists in the store: {name}")]
    DuplicateItem { name: String },

    /// An order was submitted without any lines.
    #[error("Shopping list is empty")]
    EmptyOrder,

    /// No catalog item carries this id.
    #[error("Product not found: {0}")]
    ItemNotFound(ItemId),

    /// A line or order total does not fit in `Money`.
    #[error("Order total is too large to compute for {name}")]
    AmountOverflow { name: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `InvalidArgument` family: raised before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing, empty or whitespace only.
    #[error("{field} cannot be empty or whitespace only")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Text could not be parsed into the expected type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
