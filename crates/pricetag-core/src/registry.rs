//! # Currency Registry
//!
//! The static catalog of currencies offered to users, in display order.
//!
//! ## Where the Registry is Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Consumers                                   │
//! │                                                                         │
//! │  Form layer ──► list_codes() / descriptors() ──► <select> options      │
//! │                                                                         │
//! │  Detail page ──► label_of("EUR") ──► "Euro"                            │
//! │                                                                         │
//! │  Normalizer ──► default_code() ──► fallback when no usable currency    │
//! │                                                                         │
//! │  Settings ──► resolve_preferred(user.default_currency) ──► "USD"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is a display aid, NOT a validator: codes outside the catalog
//! flow through normalization untouched.
//!
//! ## Usage
//! ```rust
//! use pricetag_core::registry;
//!
//! assert_eq!(registry::list_codes()[0], "USD");
//! assert_eq!(registry::label_of("EUR"), Some("Euro"));
//! assert_eq!(registry::label_of("ZZZ"), None);
//! assert_eq!(registry::default_code(), "USD");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Currency Descriptor
// =============================================================================

/// An immutable `(code, label)` pair from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct CurrencyDescriptor {
    /// Three-letter uppercase code, e.g. "USD".
    pub code: &'static str,
    /// English display name, e.g. "US Dollar".
    pub label: &'static str,
}

impl CurrencyDescriptor {
    const fn new(code: &'static str, label: &'static str) -> Self {
        CurrencyDescriptor { code, label }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Fallback code used whenever no usable currency is supplied.
pub const DEFAULT_CURRENCY: &str = "USD";

/// The catalog, in display order.
static CATALOG: [CurrencyDescriptor; 20] = [
    CurrencyDescriptor::new("USD", "US Dollar"),
    CurrencyDescriptor::new("EUR", "Euro"),
    CurrencyDescriptor::new("GBP", "British Pound"),
    CurrencyDescriptor::new("JPY", "Japanese Yen"),
    CurrencyDescriptor::new("AUD", "Australian Dollar"),
    CurrencyDescriptor::new("CAD", "Canadian Dollar"),
    CurrencyDescriptor::new("CHF", "Swiss Franc"),
    CurrencyDescriptor::new("CNY", "Chinese Yuan"),
    CurrencyDescriptor::new("HKD", "Hong Kong Dollar"),
    CurrencyDescriptor::new("SGD", "Singapore Dollar"),
    CurrencyDescriptor::new("SEK", "Swedish Krona"),
    CurrencyDescriptor::new("NOK", "Norwegian Krone"),
    CurrencyDescriptor::new("DKK", "Danish Krone"),
    CurrencyDescriptor::new("NZD", "New Zealand Dollar"),
    CurrencyDescriptor::new("INR", "Indian Rupee"),
    CurrencyDescriptor::new("MXN", "Mexican Peso"),
    CurrencyDescriptor::new("BRL", "Brazilian Real"),
    CurrencyDescriptor::new("ZAR", "South African Rand"),
    CurrencyDescriptor::new("AED", "UAE Dirham"),
    CurrencyDescriptor::new("TRY", "Turkish Lira"),
];

static CODES: Lazy<Vec<&'static str>> = Lazy::new(|| CATALOG.iter().map(|d| d.code).collect());

static LABELS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CATALOG.iter().map(|d| (d.code, d.label)).collect());

// =============================================================================
// Accessors
// =============================================================================

/// Returns the supported currency codes in catalog order.
pub fn list_codes() -> &'static [&'static str] {
    &CODES
}

/// Returns the full descriptors in catalog order (for UI option builders).
pub fn descriptors() -> &'static [CurrencyDescriptor] {
    &CATALOG
}

/// Returns the code → label mapping.
pub fn labels() -> &'static HashMap<&'static str, &'static str> {
    &LABELS
}

/// Returns the human label for `code`, or `None` when the code is not in the
/// catalog. Lookup is exact: "eur" is not "EUR".
pub fn label_of(code: &str) -> Option<&'static str> {
    LABELS.get(code).copied()
}

/// Returns the designated fallback code.
#[inline]
pub const fn default_code() -> &'static str {
    DEFAULT_CURRENCY
}

/// Checks whether `code` is a catalog entry.
pub fn is_supported(code: &str) -> bool {
    LABELS.contains_key(code)
}

/// Resolves a stored per-user default-currency preference.
///
/// ## Rules
/// - Trimmed, case-insensitive match against the catalog
/// - Anything else (missing, blank, unknown) yields [`default_code`]
///
/// ## Example
/// ```rust
/// use pricetag_core::registry::resolve_preferred;
///
/// assert_eq!(resolve_preferred(Some(" eur ")), "EUR");
/// assert_eq!(resolve_preferred(Some("XYZ")), "USD");
/// assert_eq!(resolve_preferred(None), "USD");
/// ```
pub fn resolve_preferred(code: Option<&str>) -> &'static str {
    code.map(str::trim)
        .and_then(|code| {
            CATALOG
                .iter()
                .find(|d| d.code.eq_ignore_ascii_case(code))
                .map(|d| d.code)
        })
        .unwrap_or(DEFAULT_CURRENCY)
}

// =============================================================================
// Unit Tests
// =============================================================================
