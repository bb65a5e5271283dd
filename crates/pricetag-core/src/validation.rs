//! # Validation Module
//!
//! Input validation utilities for pricetag-core.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Config load                                                            │
//! │  ├── validate_locale_tag        (display.locale)                       │
//! │  ├── validate_currency_code     (payload.fallback_currency)            │
//! │  └── validate_field_name        (payload.amount_field, ...)            │
//! │                                                                         │
//! │  Presenter                                                              │
//! │  ├── validate_locale_tag        (before locale lookup)                 │
//! │  └── validate_currency_code     (before symbol lookup)                 │
//! │                                                                         │
//! │  Form layer (opt-in)                                                    │
//! │  └── validate_storable_amount   (upstream money column limits)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Normalization itself never validates: it absorbs bad input instead.
//!
//! ## Usage
//! ```rust
//! use pricetag_core::validation::{validate_currency_code, validate_locale_tag};
//!
//! assert!(validate_currency_code("USD").is_ok());
//! assert!(validate_currency_code("US").is_err());
//!
//! let tag = validate_locale_tag("pt-br").unwrap();
//! assert_eq!(tag.to_string(), "pt-BR");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

/// Digits the upstream money column holds in total.
pub const STORABLE_MAX_DIGITS: u32 = 12;

/// Decimal places the upstream money column holds.
pub const STORABLE_DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Currency Codes
// =============================================================================

/// Validates the shape of a currency code.
///
/// ## Rules
/// - Exactly three ASCII letters, either case
/// - No surrounding whitespace
///
/// Shape only: "ZZZ" passes here even though no such currency exists.
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be exactly three letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Locale Tags
// =============================================================================

/// A parsed locale tag (BCP 47 subset: language, script, region).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    /// Lowercase language subtag, e.g. "en".
    pub language: String,
    /// Titlecase script subtag, e.g. "Hans".
    pub script: Option<String>,
    /// Uppercase region subtag, e.g. "US", or a UN M.49 code like "419".
    pub region: Option<String>,
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

/// Validates and canonicalizes a locale tag.
///
/// ## Rules
/// - Subtags separated by `-` (underscores are rejected)
/// - Language: 2-3 or 5-8 letters
/// - Optional script (4 letters), then optional region (2 letters or 3 digits)
/// - Variants are skipped; parsing stops at the first singleton, so
///   extensions such as `-u-nu-latn` are ignored
///
/// ## Example
/// ```rust
/// use pricetag_core::validation::validate_locale_tag;
///
/// let tag = validate_locale_tag("zh-hans-cn").unwrap();
/// assert_eq!(tag.to_string(), "zh-Hans-CN");
///
/// assert!(validate_locale_tag("en_US").is_err());
/// assert!(validate_locale_tag("").is_err());
/// ```
pub fn validate_locale_tag(tag: &str) -> ValidationResult<LocaleTag> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(ValidationError::Required {
            field: "locale".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "locale".to_string(),
        reason: reason.to_string(),
    };

    let mut subtags = tag.split('-');
    let language = subtags.next().unwrap_or_default();
    let is_alpha = |s: &str| s.chars().all(|c| c.is_ascii_alphabetic());
    if !is_alpha(language) || !matches!(language.len(), 2 | 3 | 5..=8) {
        return Err(invalid("language must be 2-3 or 5-8 letters"));
    }

    let mut parsed = LocaleTag {
        language: language.to_ascii_lowercase(),
        script: None,
        region: None,
    };

    for subtag in subtags {
        if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("subtags must be non-empty and alphanumeric"));
        }
        match subtag.len() {
            // Extensions and private use start here
            1 => break,
            4 if is_alpha(subtag) && parsed.script.is_none() && parsed.region.is_none() => {
                let mut script = subtag.to_ascii_lowercase();
                script[..1].make_ascii_uppercase();
                parsed.script = Some(script);
            }
            2 if is_alpha(subtag) && parsed.region.is_none() => {
                parsed.region = Some(subtag.to_ascii_uppercase());
            }
            3 if subtag.chars().all(|c| c.is_ascii_digit()) && parsed.region.is_none() => {
                parsed.region = Some(subtag.to_string());
            }
            5..=8 => {}
            4 if subtag.starts_with(|c: char| c.is_ascii_digit()) => {}
            _ => return Err(invalid("unexpected subtag")),
        }
    }

    Ok(parsed)
}

// =============================================================================
// Field Names
// =============================================================================

/// Validates a payload field name setting.
pub fn validate_field_name(setting: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: setting.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Amounts
// =============================================================================

/// Validates an amount against the upstream money column
/// (12 digits, 2 of them decimal places).
///
/// ## Example
/// ```rust
/// use pricetag_core::validation::validate_storable_amount;
///
/// assert!(validate_storable_amount(19.99).is_ok());
/// assert!(validate_storable_amount(-250.0).is_ok());
/// assert!(validate_storable_amount(0.125).is_err());        // 3 places
/// assert!(validate_storable_amount(10_000_000_000.0).is_err()); // 11 integer digits
/// ```
pub fn validate_storable_amount(amount: f64) -> ValidationResult<()> {
    let field = || "price".to_string();

    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field(),
            reason: "must be a finite number".to_string(),
        });
    }

    let integer_digits = STORABLE_MAX_DIGITS - STORABLE_DECIMAL_PLACES;
    let limit = 10f64.powi(integer_digits as i32);
    if amount.abs() >= limit {
        return Err(ValidationError::OutOfRange {
            field: field(),
            limit: format!("{limit}"),
        });
    }

    // Shortest round-trip text, so 19.99 has scale 2 rather than the
    // binary expansion's 50-odd digits
    let decimal = Decimal::from_str(&amount.to_string()).map_err(|e| {
        ValidationError::InvalidFormat {
            field: field(),
            reason: e.to_string(),
        }
    })?;
    if decimal.normalize().scale() > STORABLE_DECIMAL_PLACES {
        return Err(ValidationError::TooPrecise {
            field: field(),
            max_places: STORABLE_DECIMAL_PLACES,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
