//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--catalog`, `--store-name`, `--verbose`)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::env;
use std::path::PathBuf;

/// Menu header when nothing else is configured.
pub const DEFAULT_STORE_NAME: &str = "Bestbuy Store";

/// Log filter used when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
///
/// Logs go to stderr and share the terminal with the menu, so only warnings
/// show by default. `--verbose` or `RUST_LOG` turns on the rest.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Shown in the menu header ("<name> Menu:").
    pub store_name: String,

    /// JSON seed catalog. `None` uses the built-in seed.
    pub catalog_path: Option<PathBuf>,

    /// tracing-subscriber `EnvFilter` directives.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CATALOG`: Path to a JSON seed catalog
    /// - `STOREFRONT_LOG`: Log filter (when `RUST_LOG` is unset)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StoreConfig::load`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = non_blank("STOREFRONT_STORE_NAME", name)?;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG") {
            config.catalog_path = Some(PathBuf::from(non_blank("STOREFRONT_CATALOG", path)?));
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            config.log_filter = non_blank("STOREFRONT_LOG", filter)?;
        }

        Ok(config)
    }

    /// Applies command line flags on top of the loaded values.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        store_name: Option<String>,
        verbose: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = catalog_path {
            self.catalog_path = Some(path);
        }
        if let Some(name) = store_name {
            self.store_name = non_blank("--store-name", name)?;
        }
        if verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        Ok(self)
    }
}

fn non_blank(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(value)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = StoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.store_name, "Bestbuy Store");
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_CATALOG", "/tmp/seed.json"),
            ("STOREFRONT_LOG", "trace"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let err = StoreConfig::from_lookup(lookup_from(&[("STOREFRONT_STORE_NAME", "  ")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue("STOREFRONT_STORE_NAME".to_string())
        );
    }

    #[test]
    fn test_flags_override_environment() {
        let config = StoreConfig::from_lookup(lookup_from(&[("STOREFRONT_STORE_NAME", "Env")]))
            .unwrap()
            .with_overrides(
                Some(PathBuf::from("flag.json")),
                Some("Flag".to_string()),
                true,
            )
            .unwrap();

        assert_eq!(config.store_name, "Flag");
        assert_eq!(config.catalog_path, Some(PathBuf::from("flag.json")));
        assert_eq!(config.log_filter, VERBOSE_LOG_FILTER);
    }
}
