//! # pricetag-core: Money Normalization & Display
//!
//! Turns loosely-typed price fields from external payloads into a canonical
//! [`MoneyValue`] and renders that value as locale-correct text.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Price Data Flow                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          API responses / form fields / stored records           │   │
//! │  │     {"price": "12.50", "price_currency": "", "name": "Inn"}     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricetag-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │ normalize │  │  format   │  │  config   │  │   │
//! │  │   │ 20 codes  │  │ to_value  │  │ Presenter │  │ money.toml│  │   │
//! │  │   │  labels   │  │ payloads  │  │ fallback  │  │ env vars  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO NETWORK • NO CONVERSION • NO PERSISTENCE • NO PANICS       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 UI: "$12.50", "12,50 €", "ZZZ 10"               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Supported currency codes, labels, preferred-currency choice
//! - [`types`] - `NumericLike` inputs and record payload types
//! - [`money`] - The `MoneyValue` canonical pair
//! - [`normalize`] - Coercion of raw values and record payloads
//! - [`format`] - Locale-aware rendering with a plain-text fallback
//! - [`locale`] / [`symbols`] - Formatting data behind the Presenter
//! - [`validation`] - Currency code, locale tag, field and amount checks
//! - [`config`] - TOML + environment configuration
//! - [`error`] - Typed errors
//!
//! ## Design Principles
//!
//! 1. **Absorb, Don't Raise**: bad numbers become the absent marker,
//!    unformattable values become `"CODE amount"`
//! 2. **One Coercion Rule**: payload normalization and value construction
//!    accept exactly the same inputs
//! 3. **Inputs Are Never Mutated**: payloads are copied, never edited in place
//! 4. **Explicit Errors**: validation and config errors are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use pricetag_core::{format_money, normalize_payload, to_value};
//! use serde_json::json;
//!
//! let raw = json!({"name": "Hostel", "price": "42.5", "price_currency": ""});
//! let normalized = normalize_payload(raw.as_object().unwrap());
//! assert_eq!(
//!     serde_json::to_value(&normalized).unwrap(),
//!     json!({"name": "Hostel", "price": 42.5, "price_currency": "USD"})
//! );
//!
//! let value = to_value("1234.5", Some("EUR"));
//! assert_eq!(format_money(&value, "de-DE").as_deref(), Some("1.234,50\u{a0}€"));
//!
//! assert_eq!(format_money(&to_value("abc", Some("USD")), "en-US"), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod money;
pub mod normalize;
pub mod registry;
pub mod symbols;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pricetag_core::MoneyValue` instead of
// `use pricetag_core::money::MoneyValue`

pub use config::MoneyConfig;
pub use error::{ConfigError, FormatError, ValidationError};
pub use format::{format_money, Presenter};
pub use money::MoneyValue;
pub use normalize::{normalize_payload, normalize_payload_with, to_value};
pub use registry::{resolve_preferred, DEFAULT_CURRENCY};
pub use types::{NormalizedPayload, NumericLike, PayloadFields};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Record field holding the amount.
pub const DEFAULT_AMOUNT_FIELD: &str = "price";

/// Record field holding the currency code.
pub const DEFAULT_CURRENCY_FIELD: &str = "price_currency";

// =============================================================================
// End-to-End Tests
// =============================================================================
