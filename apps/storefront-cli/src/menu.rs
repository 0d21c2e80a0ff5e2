//! # Menu
//!
//! The main loop: print the options, read a choice, dispatch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input      MenuCommand            Handler                              │
//! │  ─────      ───────────            ───────                              │
//! │  "1"  ────► ListProducts ────────► Catalog::describe_all                │
//! │  "2"  ────► ShowTotalQuantity ───► Catalog::total_quantity              │
//! │  "3"  ────► MakeOrder ───────────► checkout::run                        │
//! │  "4"  ────► Quit ────────────────► "Goodbye!" and return                │
//! │  EOF  ────► Quit                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use storefront_core::Catalog;
use tracing::debug;

use crate::checkout;
use crate::console::Console;

/// A top-level menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListProducts,
    ShowTotalQuantity,
    MakeOrder,
    Quit,
}

impl MenuCommand {
    /// Maps the typed choice to a command. Unknown input gives `None`.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuCommand::ListProducts),
            "2" => Some(MenuCommand::ShowTotalQuantity),
            "3" => Some(MenuCommand::MakeOrder),
            "4" => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &mut Catalog,
    store_name: &str,
) -> io::Result<()> {
    console.say("Welcome to the Store Manager!")?;

    loop {
        print_menu(console, store_name)?;

        let command = match console.prompt("Enter your choice (1-4): ")? {
            Some(choice) => match MenuCommand::parse(&choice) {
                Some(command) => command,
                None => {
                    console.say("Invalid choice. Please enter a number between 1 and 4.")?;
                    continue;
                }
            },
            None => {
                console.say("")?;
                MenuCommand::Quit
            }
        };

        debug!(?command, "menu command");
        if dispatch(command, console, catalog)? == Flow::Quit {
            return Ok(());
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, store_name: &str) -> io::Result<()> {
    console.say("")?;
    console.say(&format!("{store_name} Menu:"))?;
    console.say("1. List all products in store")?;
    console.say("2. Show total quantity in store")?;
    console.say("3. Make an order")?;
    console.say("4. Quit")?;
    console.say("")
}

fn dispatch<R: BufRead, W: Write>(
    command: MenuCommand,
    console: &mut Console<R, W>,
    catalog: &mut Catalog,
) -> io::Result<Flow> {
    match command {
        MenuCommand::ListProducts => {
            if catalog.active_items().is_empty() {
                console.say("No products in store.")?;
            } else {
                catalog.describe_all(console.output())?;
            }
        }
        MenuCommand::ShowTotalQuantity => {
            console.say(&format!(
                "Total products in store: {}",
                catalog.total_quantity()
            ))?;
        }
        MenuCommand::MakeOrder => {
            if catalog.active_items().is_empty() {
                console.say("No products in store.")?;
            } else {
                checkout::run(console, catalog)?;
            }
        }
        MenuCommand::Quit => {
            console.say("Goodbye!")?;
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}
