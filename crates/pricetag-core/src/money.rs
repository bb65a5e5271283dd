//! # Money Module
//!
//! Provides [`MoneyValue`], the canonical `(amount, currency)` pair every
//! normalization produces and every display consumes.
//!
//! ## Why Explicit Absent Markers?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE LOOSE PAYLOAD PROBLEM                                              │
//! │                                                                         │
//! │  Upstream sends any of:                                                 │
//! │    price: 19.99 | "19.99" | "" | null | "abc" | (missing)              │
//! │                                                                         │
//! │  Naive coercion turns "abc" into NaN, and NaN poisons every total,     │
//! │  comparison and serializer it touches.                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Option                                                   │
//! │    amount:   Some(19.99) | None                                        │
//! │    currency: Some("USD") | None                                        │
//! │    None is the only "no value" marker. Never NaN, never "".            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricetag_core::money::MoneyValue;
//!
//! let value = MoneyValue::new(Some(10.0), Some("USD".to_string()));
//! assert!(value.has_price());
//!
//! // A currency without an amount is still not a price
//! let no_amount = MoneyValue::new(None, Some("USD".to_string()));
//! assert!(!no_amount.has_price());
//!
//! // NaN never survives construction
//! let nan = MoneyValue::new(Some(f64::NAN), Some("USD".to_string()));
//! assert_eq!(nan.amount(), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::format::format_money;

// =============================================================================
// MoneyValue Type
// =============================================================================

/// A normalized monetary value.
///
/// ## Design Decisions
/// - **f64 amount**: Matches the numbers upstream payloads carry. This type
///   is for display and hand-off, not arithmetic.
/// - **Private fields**: The constructor is the only way in, so the
///   "finite or absent" and "non-empty or absent" rules always hold.
/// - **No registry check**: Unknown codes like "eur" or "XBT" are kept as-is.
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where MoneyValue is Used                             │
/// │                                                                         │
/// │  Lodging.price ──┬──► to_value() ──► MoneyValue ──► format_money()     │
/// │  Lodging.price_currency ┘                                 │            │
/// │                                                           ▼            │
/// │                                                    "$1,234.50"         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MoneyValue {
    amount: Option<f64>,
    currency: Option<String>,
}

/// Wire shape of [`MoneyValue`] before the constructor's rules run.
#[derive(Deserialize)]
struct RawMoneyValue {
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
}

impl<'de> Deserialize<'de> for MoneyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMoneyValue::deserialize(deserializer)?;
        Ok(MoneyValue::new(raw.amount, raw.currency))
    }
}

impl MoneyValue {
    /// Creates a value, mapping non-finite amounts and empty currency strings
    /// to the absent marker.
    pub fn new(amount: Option<f64>, currency: Option<String>) -> Self {
        MoneyValue {
            amount: amount.filter(|n| n.is_finite()),
            currency: currency.filter(|c| !c.is_empty()),
        }
    }

    /// A value with neither amount nor currency.
    #[inline]
    pub const fn absent() -> Self {
        MoneyValue {
            amount: None,
            currency: None,
        }
    }

    /// Returns the amount, or `None` when absent.
    #[inline]
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Returns the currency code, or `None` when absent.
    #[inline]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns true only when an amount is present.
    ///
    /// A currency on its own never counts as a price.
    #[inline]
    pub fn has_price(&self) -> bool {
        self.amount.is_some()
    }

    /// Returns the amount and currency when both are present, which is the
    /// precondition for display.
    pub fn displayable(&self) -> Option<(f64, &str)> {
        match (self.amount, self.currency.as_deref()) {
            (Some(amount), Some(currency)) if !currency.is_empty() => Some((amount, currency)),
            _ => None,
        }
    }

    /// Formats the value for `locale`. See [`format_money`].
    pub fn display(&self, locale: &str) -> Option<String> {
        format_money(self, locale)
    }

    /// Splits the value into its parts.
    pub fn into_parts(self) -> (Option<f64>, Option<String>) {
        (self.amount, self.currency)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usd(amount: Option<f64>) -> MoneyValue {
        MoneyValue::new(amount, Some("USD".to_string()))
    }

    #[test]
    fn test_new_filters_non_finite_amounts() {
        assert_eq!(usd(Some(f64::NAN)).amount(), None);
        assert_eq!(usd(Some(f64::INFINITY)).amount(), None);
        assert_eq!(usd(Some(-12.5)).amount(), Some(-12.5));
        assert_eq!(usd(Some(0.0)).amount(), Some(0.0));
    }

    #[test]
    fn test_new_filters_empty_currency() {
        let value = MoneyValue::new(Some(1.0), Some(String::new()));
        assert_eq!(value.currency(), None);
        // Whitespace is not empty; it is kept verbatim
        let value = MoneyValue::new(Some(1.0), Some(" ".to_string()));
        assert_eq!(value.currency(), Some(" "));
    }

    #[test]
    fn test_has_price() {
        assert!(usd(Some(0.0)).has_price());
        assert!(usd(Some(-1.0)).has_price());
        assert!(!usd(None).has_price());
        assert!(!MoneyValue::absent().has_price());
    }

    #[test]
    fn test_displayable() {
        assert_eq!(usd(Some(3.0)).displayable(), Some((3.0, "USD")));
        assert_eq!(usd(None).displayable(), None);
        assert_eq!(MoneyValue::new(Some(3.0), None).displayable(), None);
    }

    #[test]
    fn test_serde_shape() {
        let value = usd(Some(19.99));
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"amount": 19.99, "currency": "USD"})
        );

        let absent = MoneyValue::absent();
        assert_eq!(
            serde_json::to_value(&absent).unwrap(),
            json!({"amount": null, "currency": null})
        );

        let parsed: MoneyValue =
            serde_json::from_value(json!({"amount": 5, "currency": "EUR"})).unwrap();
        assert_eq!(parsed, MoneyValue::new(Some(5.0), Some("EUR".to_string())));
    }

    #[test]
    fn test_deserialize_applies_constructor_rules() {
        let parsed: MoneyValue = serde_json::from_str(r#"{"amount":1,"currency":""}"#).unwrap();
        assert_eq!(parsed.currency(), None);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"amount": 1.0, "currency": null})
        );

        // Missing keys are absent
        let parsed: MoneyValue = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, MoneyValue::absent());
    }

    #[test]
    fn test_into_parts() {
        let (amount, currency) = usd(Some(2.0)).into_parts();
        assert_eq!(amount, Some(2.0));
        assert_eq!(currency.as_deref(), Some("USD"));
    }
}
