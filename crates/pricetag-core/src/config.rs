//! # Money Configuration
//!
//! Display locale and payload field names for embedding applications.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRICETAG_LOCALE=de-DE                                              │
//! │     PRICETAG_FALLBACK_CURRENCY=EUR                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pricetag/money.toml (Linux)                              │
//! │     ~/Library/Application Support/com.pricetag.pricetag/money.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     en-US, price / price_currency, USD                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # money.toml
//! [display]
//! locale = "en-US"
//!
//! [payload]
//! amount_field = "price"
//! currency_field = "price_currency"
//! fallback_currency = "USD"
//! ```
//!
//! Nothing here is needed to call [`crate::to_value`] or
//! [`crate::format_money`]; the config only supplies their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::registry::DEFAULT_CURRENCY;
use crate::types::PayloadFields;
use crate::validation::{validate_currency_code, validate_field_name, validate_locale_tag};
use crate::{DEFAULT_AMOUNT_FIELD, DEFAULT_CURRENCY_FIELD, DEFAULT_LOCALE};

const CONFIG_FILE_NAME: &str = "money.toml";

// =============================================================================
// Display Settings
// =============================================================================

/// How values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Locale tag handed to the Presenter, e.g. "en-US".
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            locale: default_locale(),
        }
    }
}

// =============================================================================
// Payload Settings
// =============================================================================

/// Which record fields hold the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadSettings {
    #[serde(default = "default_amount_field")]
    pub amount_field: String,

    #[serde(default = "default_currency_field")]
    pub currency_field: String,

    /// Written when a record has an amount but no usable currency.
    #[serde(default = "default_fallback_currency")]
    pub fallback_currency: String,
}

fn default_amount_field() -> String {
    DEFAULT_AMOUNT_FIELD.to_string()
}

fn default_currency_field() -> String {
    DEFAULT_CURRENCY_FIELD.to_string()
}

fn default_fallback_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for PayloadSettings {
    fn default() -> Self {
        PayloadSettings {
            amount_field: default_amount_field(),
            currency_field: default_currency_field(),
            fallback_currency: default_fallback_currency(),
        }
    }
}

// =============================================================================
// Money Config
// =============================================================================

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub payload: PayloadSettings,
}

impl MoneyConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (money.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading money config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load money config, using defaults");
            Self::default()
        })
    }

    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serializes the config as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml_string()?)?;

        info!(?path, "Money config saved");
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// ## Rules
    /// - `display.locale` is a well-formed locale tag (support is not
    ///   required; unsupported locales render through the fallback)
    /// - `payload.fallback_currency` is a three-letter code
    /// - Both field names are non-empty and differ from each other
    pub fn validate(&self) -> ConfigResult<()> {
        validate_locale_tag(&self.display.locale)?;
        validate_currency_code(&self.payload.fallback_currency)?;
        validate_field_name("amount_field", &self.payload.amount_field)?;
        validate_field_name("currency_field", &self.payload.currency_field)?;

        if self.payload.amount_field == self.payload.currency_field {
            return Err(ValidationError::Duplicate {
                field: "currency_field".to_string(),
                value: self.payload.currency_field.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var("PRICETAG_LOCALE") {
            debug!(locale = %locale, "Overriding display locale from environment");
            self.display.locale = locale;
        }

        if let Ok(field) = std::env::var("PRICETAG_AMOUNT_FIELD") {
            debug!(field = %field, "Overriding amount field from environment");
            self.payload.amount_field = field;
        }

        if let Ok(field) = std::env::var("PRICETAG_CURRENCY_FIELD") {
            debug!(field = %field, "Overriding currency field from environment");
            self.payload.currency_field = field;
        }

        if let Ok(code) = std::env::var("PRICETAG_FALLBACK_CURRENCY") {
            debug!(currency = %code, "Overriding fallback currency from environment");
            self.payload.fallback_currency = code.trim().to_ascii_uppercase();
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pricetag", "pricetag")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the display locale.
    pub fn locale(&self) -> &str {
        &self.display.locale
    }

    /// Returns the field names and fallback for payload normalization.
    pub fn payload_fields(&self) -> PayloadFields {
        PayloadFields::new(&self.payload.amount_field, &self.payload.currency_field)
            .with_fallback(&self.payload.fallback_currency)
    }
}
