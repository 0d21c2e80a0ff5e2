//! # Checkout
//!
//! The interactive order session behind menu option 3.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Enter product number to buy (0 to finish): "                          │
//! │       │                                                                 │
//! │       ├── not a number ──► "Invalid input. Please enter a valid number."│
//! │       ├── out of range ──► "Invalid product number."                    │
//! │       ├── 0 / EOF ───────► submit                                       │
//! │       └── n ──► "Enter quantity for <name>: "                           │
//! │                    ├── not a number ──► "Invalid input. ..."            │
//! │                    ├── ≤ 0 ───────────► skipped                         │
//! │                    └── q ─────────────► line added                      │
//! │                                                                         │
//! │  submit ──► Catalog::place_order                                        │
//! │       ├── Ok(total) ──► "Order placed successfully. Total cost: $..."   │
//! │       └── Err(e) ─────► "Error processing order: <e>"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the one place where order failures are caught and rendered
//! instead of propagated.

use std::io::{self, BufRead, Write};

use storefront_core::{Catalog, Item, Selection, ShoppingList, ValidationError};
use tracing::{debug, warn};

use crate::console::Console;

const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// Collects a shopping list from the console and submits it.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &mut Catalog,
) -> io::Result<()> {
    let mut list = ShoppingList::new(catalog.active_items().into_iter().map(Item::id).collect());

    loop {
        let Some(entry) = console.prompt("Enter product number to buy (0 to finish): ")? else {
            break;
        };

        let index = match list.parse_selection(&entry) {
            Ok(Selection::Finish) => break,
            Ok(Selection::Product(index)) => index,
            Err(ValidationError::OutOfRange { .. }) => {
                console.say("Invalid product number.")?;
                continue;
            }
            Err(_) => {
                console.say(INVALID_NUMBER)?;
                continue;
            }
        };

        let name = list
            .choice(index)
            .and_then(|id| catalog.item(id))
            .map(|item| item.name().to_string())
            .unwrap_or_default();

        let Some(quantity) = console.prompt(&format!("Enter quantity for {name}: "))? else {
            break;
        };

        match list.push_text(index, &quantity) {
            Ok(true) => debug!(item = %name, quantity = %quantity.trim(), "line added"),
            Ok(false) => debug!(item = %name, "non-positive quantity skipped"),
            Err(_) => console.say(INVALID_NUMBER)?,
        }
    }

    match catalog.place_order(list.lines()) {
        Ok(total) => console.say(&format!("Order placed successfully. Total cost: {total}")),
        Err(err) => {
            warn!(error = %err, "order rejected");
            console.say(&format!("Error processing order: {err}"))
        }
    }
}
