//! Merchant configuration.
//!
//! Settings come from a `config.json` next to the site so the phone number
//! and brand can be changed without touching code. The file is optional
//! and may be partial; anything missing or unreadable falls back to the
//! built-in defaults with a warning, never an error - a broken config must
//! not take the storefront down.
//!
//! # Environment Variables
//!
//! All optional, loaded via `dotenvy`:
//! - `HEBE_CONFIG_PATH` - path to config.json (default: `config.json`)
//! - `HEBE_PRODUCTS_PATH` - path to products.json (default: `products.json`)
//! - `HEBE_DATA_DIR` - directory for persisted cart state (default: `.hebe`)

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur reading `config.json`.
///
/// Only surfaced by [`MerchantConfig::try_load`]; the usual entry points
/// absorb these into defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Merchant settings: where checkout messages go and what the shop is
/// called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfig {
    /// WhatsApp phone number in international format, digits only.
    pub wa_phone: String,
    /// Brand name injected into the page title and header.
    pub brand: String,
}

/// On-disk shape of `config.json`. Keys are upper-case for continuity with
/// existing deployments; both fields are optional and merge over defaults.
#[derive(Debug, Deserialize)]
struct MerchantConfigFile {
    #[serde(rename = "WA_PHONE")]
    wa_phone: Option<String>,
    #[serde(rename = "BRAND")]
    brand: Option<String>,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            wa_phone: "919608018417".to_owned(),
            brand: "Hebe LivingSpace".to_owned(),
        }
    }
}

impl MerchantConfig {
    /// Read and parse `config.json`, merging present fields over the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let file: MerchantConfigFile = serde_json::from_str(&raw)?;
        let defaults = Self::default();
        Ok(Self {
            wa_phone: file.wa_phone.unwrap_or(defaults.wa_phone),
            brand: file.brand.unwrap_or(defaults.brand),
        })
    }

    /// Load `config.json`, falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("could not load {path:?}, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load config from the path named by `HEBE_CONFIG_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::load_or_default(&config_path())
    }
}

/// Path to `config.json` (`HEBE_CONFIG_PATH`).
#[must_use]
pub fn config_path() -> PathBuf {
    env_path("HEBE_CONFIG_PATH", "config.json")
}

/// Path to `products.json` (`HEBE_PRODUCTS_PATH`).
#[must_use]
pub fn products_path() -> PathBuf {
    env_path("HEBE_PRODUCTS_PATH", "products.json")
}

/// Directory for persisted cart state (`HEBE_DATA_DIR`).
#[must_use]
pub fn data_dir() -> PathBuf {
    env_path("HEBE_DATA_DIR", ".hebe")
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key).map_or_else(|| PathBuf::from(default), PathBuf::from)
}
