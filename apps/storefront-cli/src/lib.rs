//! # Storefront CLI
//!
//! Text-menu front end for `storefront-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • STOREFRONT_* environment variables, then command line flags       │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • RUST_LOG wins over STOREFRONT_LOG                                 │
//! │                                                                         │
//! │  3. Build Catalog ────────────────────────────────────────────────────► │
//! │     • JSON seed file if configured, built-in stock otherwise            │
//! │     • One Catalog, owned here and lent to every command                 │
//! │                                                                         │
//! │  4. Run Menu Loop ────────────────────────────────────────────────────► │
//! │     • stdin/stdout until "Quit" or end of input                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod config;
pub mod console;
pub mod menu;
pub mod seed;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::StoreConfig;
use console::Console;

/// Runs the application with an already-loaded configuration.
pub fn run(config: StoreConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_filter);

    info!(store = %config.store_name, "starting storefront");

    let mut catalog = seed::load_catalog(config.catalog_path.as_deref())
        .context("failed to build the startup catalog")?;

    info!(
        items = catalog.len(),
        total_quantity = catalog.total_quantity(),
        "catalog ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run(&mut console, &mut catalog, &config.store_name).context("terminal I/O failed")?;

    info!("storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Trace the core crate only
/// - Default: `config.log_filter`
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
