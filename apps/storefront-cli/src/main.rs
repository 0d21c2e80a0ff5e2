//! Storefront - interactive inventory and ordering simulator.
//!
//! Menu:
//! 1. List all products in store
//! 2. Show total quantity in store
//! 3. Make an order
//! 4. Quit

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use storefront_cli::config::StoreConfig;

/// Storefront - simulate a store's stock and orders from a text menu
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON seed catalog (overrides STOREFRONT_CATALOG)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Store name shown in the menu header (overrides STOREFRONT_STORE_NAME)
    #[arg(long)]
    store_name: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StoreConfig::load()?.with_overrides(cli.catalog, cli.store_name, cli.verbose)?;

    storefront_cli::run(config)
}
