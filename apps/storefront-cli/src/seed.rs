//! # Seed Catalog
//!
//! Builds the startup catalog, either from the built-in stock list or from a
//! JSON file.
//!
//! ## File Format
//! ```json
//! [
//!   { "name": "MacBook Air M2", "price": 1450, "quantity": 100 },
//!   { "name": "USB-C Cable", "price": "10.99", "quantity": 40 }
//! ]
//! ```
//! Prices may be numbers or decimal strings; both go through `Money::parse`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use storefront_core::{Catalog, CoreError, Item, Money};
use thiserror::Error;
use tracing::info;

/// Built-in stock: (name, price in whole dollars, quantity).
const DEFAULT_STOCK: &[(&str, i64, i64)] = &[
    ("MacBook Air M2", 1450, 100),
    ("Bose QuietComfort Earbuds", 250, 500),
    ("Google Pixel 7", 500, 250),
    ("iPhone 15 Pro Max", 1200, 10),
    ("Samsung Galaxy S22 Ultra", 1000, 5),
    ("Apple Watch Series 7", 1000, 10),
];

/// One entry of a seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedItem {
    pub name: String,
    pub price: Money,
    pub quantity: i64,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed catalog is not valid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed item #{index} ({name}) is invalid: {source}")]
    Item {
        index: usize,
        name: String,
        #[source]
        source: CoreError,
    },

    #[error("seed catalog rejected: {0}")]
    Catalog(#[source] CoreError),
}

/// The built-in stock list.
pub fn default_items() -> Vec<SeedItem> {
    DEFAULT_STOCK
        .iter()
        .map(|(name, dollars, quantity)| SeedItem {
            name: name.to_string(),
            price: Money::from_major(*dollars),
            quantity: *quantity,
        })
        .collect()
}

/// Parses the JSON seed format.
pub fn parse_seed(json: &str) -> Result<Vec<SeedItem>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Validates every seed entry and builds the catalog.
pub fn build_catalog(seed: Vec<SeedItem>) -> Result<Catalog, SeedError> {
    let items = seed
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Item::new(entry.name.clone(), entry.price, entry.quantity).map_err(|source| {
                SeedError::Item {
                    index: index + 1,
                    name: entry.name,
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(items).map_err(SeedError::Catalog)
}

/// Builds the startup catalog from `path`, or from the built-in stock.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, SeedError> {
    let seed = match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let seed = parse_seed(&json)?;
            info!(path = %path.display(), items = seed.len(), "loaded seed catalog");
            seed
        }
        None => default_items(),
    };

    build_catalog(seed)
}
