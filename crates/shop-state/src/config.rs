//! # Shop Configuration
//!
//! Settings loaded once at startup and handed to the stores.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOP_LOG_FILTER=debug                                              │
//! │     SHOP_CURRENCY_SYMBOL=$                                             │
//! │     SHOP_CURRENCY_CODE=USD                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHOP_CONFIG, or the platform config dir:                          │
//! │     ~/.config/widget-shop/shop.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     en-US / USD formatting, "info,shop=debug" logging                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! log_filter = "info,shop_state=debug"
//!
//! [currency]
//! code = "USD"
//! symbol = "$"
//! thousandsSeparator = ","
//! decimalSeparator = "."
//! ```
//!
//! Configuration is read-only after loading.

use serde::{Deserialize, Serialize};
use shop_core::CurrencyFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StateError, StateResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHOP_CONFIG";

fn default_log_filter() -> String {
    "info,shop=debug".to_string()
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// How totals are rendered.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            log_filter: default_log_filter(),
            currency: CurrencyFormat::usd(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from file (if present) and the environment.
    ///
    /// `config_path` wins over `$SHOP_CONFIG`, which wins over the platform
    /// default path. A missing file is not an error; an unreadable or
    /// malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> StateResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ShopConfig::load`] with environment variables read through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> StateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML file, or returns defaults if it does not exist.
    pub fn from_file(path: &Path) -> StateResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading shop config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StateResult<()> {
        if self.currency.decimal_separator.is_empty() {
            return Err(StateError::InvalidConfig(
                "currency.decimalSeparator must not be empty".into(),
            ));
        }

        if self.currency.decimal_separator == self.currency.thousands_separator {
            return Err(StateError::InvalidConfig(format!(
                "currency separators must differ, both are '{}'",
                self.currency.decimal_separator
            )));
        }

        Ok(())
    }

    /// Applies `SHOP_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("SHOP_LOG_FILTER") {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log_filter = filter;
        }

        if let Some(symbol) = lookup("SHOP_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(code) = lookup("SHOP_CURRENCY_CODE") {
            self.currency.code = code;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "widgetshop", "widget-shop")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }
}
