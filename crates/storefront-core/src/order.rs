//! # Orders
//!
//! Order lines and the shopping list that collects them.
//!
//! ## Collection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog.active_items() ──► ShoppingList::new(ids)                      │
//! │                                   │                                     │
//! │        "2" ──► parse_selection ───┼──► Selection::Product(2)            │
//! │        "0" ──► parse_selection ───┼──► Selection::Finish                │
//! │        "x" ──► parse_selection ───┼──► InvalidFormat                    │
//! │        "9" ──► parse_selection ───┼──► OutOfRange                       │
//! │                                   │                                     │
//! │  push(2, qty) ──► OrderLine { item_id, qty } (qty ≤ 0 is skipped)       │
//! │                                   │                                     │
//! │  into_lines() ──► Catalog::place_order(&lines)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list does no I/O. The CLI prompts, feeds the text in, and decides
//! what to print for each error.

use crate::error::ValidationError;
use crate::item::ItemId;
use crate::validation::{parse_quantity, ValidationResult};

// =============================================================================
// Order Line
// =============================================================================

/// A requested (item, quantity) pair. Only lives for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(item_id: ItemId, quantity: i64) -> Self {
        OrderLine { item_id, quantity }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// What the shopper picked at the "product number" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0`: stop collecting and submit.
    Finish,
    /// 1-based position in the active listing.
    Product(usize),
}

// =============================================================================
// Shopping List
// =============================================================================

/// Lines collected against a snapshot of the active listing.
///
/// The snapshot is taken once when collection starts, so the numbers the
/// shopper sees stay valid for the whole session.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    choices: Vec<ItemId>,
    lines: Vec<OrderLine>,
}

impl ShoppingList {
    /// `choices` is the active listing, in the order it was shown.
    pub fn new(choices: Vec<ItemId>) -> Self {
        ShoppingList {
            choices,
            lines: Vec::new(),
        }
    }

    /// Interprets a product-number entry.
    ///
    /// ## Errors
    /// - `InvalidFormat` if the text is not an integer
    /// - `OutOfRange` if it is negative or past the last choice
    pub fn parse_selection(&self, input: &str) -> ValidationResult<Selection> {
        let number = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product number".to_string(),
                reason: "must be an integer".to_string(),
            })?;

        if number == 0 {
            return Ok(Selection::Finish);
        }

        match usize::try_from(number) {
            Ok(index) if index <= self.choices.len() => Ok(Selection::Product(index)),
            _ => Err(ValidationError::OutOfRange {
                field: "product number".to_string(),
                min: 0,
                max: self.choices.len() as i64,
            }),
        }
    }

    /// Item behind a 1-based product number.
    pub fn choice(&self, index: usize) -> Option<ItemId> {
        index
            .checked_sub(1)
            .and_then(|i| self.choices.get(i))
            .copied()
    }

    /// Parses a quantity entry and adds the line.
    ///
    /// Returns `Ok(false)` when the line was skipped because the quantity was
    /// not positive.
    pub fn push_text(&mut self, index: usize, quantity: &str) -> ValidationResult<bool> {
        let quantity = parse_quantity(quantity)?;
        self.push(index, quantity)
    }

    /// Adds a line for the product at `index` (1-based).
    ///
    /// Non-positive quantities are skipped silently, as the prompt never
    /// treated them as an error.
    pub fn push(&mut self, index: usize, quantity: i64) -> ValidationResult<bool> {
        let item_id = self.choice(index).ok_or_else(|| ValidationError::OutOfRange {
            field: "product number".to_string(),
            min: 1,
            max: self.choices.len() as i64,
        })?;

        if quantity <= 0 {
            return Ok(false);
        }

        self.lines.push(OrderLine::new(item_id, quantity));
        Ok(true)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<OrderLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CoreError;
    use crate::item::Item;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Phone", Money::from_major(500), 10).unwrap(),
            Item::new("Tablet", Money::from_major(300), 5).unwrap(),
        ])
        .unwrap()
    }

    fn list_for(catalog: &Catalog) -> ShoppingList {
        ShoppingList::new(catalog.active_items().into_iter().map(Item::id).collect())
    }

    #[test]
    fn test_parse_selection() {
        let list = list_for(&catalog());

        assert_eq!(list.parse_selection("0"), Ok(Selection::Finish));
        assert_eq!(list.parse_selection(" 2 "), Ok(Selection::Product(2)));
        assert!(matches!(
            list.parse_selection("3"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            list.parse_selection("-1"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            list.parse_selection("phone"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_push_skips_non_positive_quantities() {
        let mut list = list_for(&catalog());

        assert_eq!(list.push(1, 0), Ok(false));
        assert_eq!(list.push(1, -3), Ok(false));
        assert!(list.is_empty());

        assert_eq!(list.push(2, 4), Ok(true));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_text_rejects_malformed_quantity() {
        let mut list = list_for(&catalog());

        assert!(matches!(
            list.push_text(1, "lots"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_out_of_range_index() {
        let mut list = list_for(&catalog());
        assert!(list.push(0, 1).is_err());
        assert!(list.push(3, 1).is_err());
    }

    #[test]
    fn test_collected_list_settles_in_catalog() {
        let mut catalog = catalog();
        let mut list = list_for(&catalog);

        list.push_text(1, "1").unwrap();
        list.push_text(2, "2").unwrap();
        let total = catalog.place_order(list.lines()).unwrap();

        assert_eq!(total, Money::from_major(1100));
        assert_eq!(catalog.total_quantity(), 12);
    }

    #[test]
    fn test_empty_list_is_rejected_by_catalog() {
        let mut catalog = catalog();
        let list = list_for(&catalog);

        assert!(matches!(
            catalog.place_order(&list.into_lines()),
            Err(CoreError::EmptyOrder)
        ));
    }
}
