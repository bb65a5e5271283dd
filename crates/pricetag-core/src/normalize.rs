//! # Value Normalizer
//!
//! Turns raw amount/currency input into [`MoneyValue`]s, and rewrites whole
//! record payloads so their price fields are either well-typed or gone.
//!
//! ## Normalization Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Normalization Paths                                  │
//! │                                                                         │
//! │  Detail page:                                                           │
//! │    record.price, record.price_currency                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    to_value() ──► MoneyValue { amount, currency }                      │
//! │                                                                         │
//! │  Form submit:                                                           │
//! │    { name, price: "19.99", price_currency: "" }                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    normalize_payload() ──► { name, price: 19.99, price_currency: USD } │
//! │                                                                         │
//! │    { name, price: "" }                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    normalize_payload() ──► { name }   (no nulls sent upstream)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both paths share one amount predicate, [`NumericLike::coerce`].
//! Neither path ever fails.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::money::MoneyValue;
use crate::registry::DEFAULT_CURRENCY;
use crate::types::{NormalizedPayload, NumericLike, PayloadFields};

/// Largest integer an IEEE double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// =============================================================================
// Single Values
// =============================================================================

/// Normalizes an amount/currency pair using the registry's default fallback.
///
/// ## Example
/// ```rust
/// use pricetag_core::normalize::to_value;
///
/// let value = to_value("19.99", Some("EUR"));
/// assert_eq!(value.amount(), Some(19.99));
/// assert_eq!(value.currency(), Some("EUR"));
///
/// let value = to_value("abc", None);
/// assert_eq!(value.amount(), None);
/// assert_eq!(value.currency(), Some("USD"));
/// ```
pub fn to_value(price: impl Into<NumericLike>, currency: Option<&str>) -> MoneyValue {
    to_value_with_fallback(price, currency, DEFAULT_CURRENCY)
}

/// Normalizes an amount/currency pair.
///
/// ## Rules
/// - Amount: see [`NumericLike::coerce`]; anything unusable is absent
/// - Currency: kept verbatim when non-blank, otherwise `fallback`
/// - An empty resolved currency is absent, never `""`
pub fn to_value_with_fallback(
    price: impl Into<NumericLike>,
    currency: Option<&str>,
    fallback: &str,
) -> MoneyValue {
    let price = price.into();
    let amount = price.coerce();
    if amount.is_none() && !price.is_absent() {
        debug!(raw = ?price, "Price is not a finite number, treating as absent");
    }
    MoneyValue::new(amount, resolve_currency(currency, fallback))
}

/// Normalizes raw JSON fields. A non-string currency counts as missing.
pub fn to_value_json(price: &Value, currency: &Value, fallback: &str) -> MoneyValue {
    to_value_with_fallback(price, currency.as_str(), fallback)
}

/// Reads the designated price fields of `record` into a MoneyValue.
///
/// ## Example
/// ```rust
/// use pricetag_core::normalize::value_from_record;
/// use pricetag_core::types::PayloadFields;
/// use serde_json::json;
///
/// let lodging = json!({"name": "Cabin", "price": "120", "price_currency": "CAD"});
/// let value = value_from_record(lodging.as_object().unwrap(), &PayloadFields::default());
/// assert_eq!(value.amount(), Some(120.0));
/// assert_eq!(value.currency(), Some("CAD"));
/// ```
pub fn value_from_record(record: &Map<String, Value>, fields: &PayloadFields) -> MoneyValue {
    to_value_with_fallback(
        record.get(&fields.amount_field),
        record.get(&fields.currency_field).and_then(Value::as_str),
        &fields.fallback,
    )
}

fn resolve_currency(currency: Option<&str>, fallback: &str) -> Option<String> {
    let resolved = match currency {
        Some(code) if !code.trim().is_empty() => code,
        _ => fallback,
    };
    (!resolved.is_empty()).then(|| resolved.to_owned())
}

// =============================================================================
// Record Payloads
// =============================================================================

/// Normalizes `payload` using the default `price` / `price_currency` fields.
///
/// ## Example
/// ```rust
/// use pricetag_core::normalize::normalize_payload;
/// use serde_json::json;
///
/// let raw = json!({"price": null, "price_currency": "USD", "note": "x"});
/// let normalized = normalize_payload(raw.as_object().unwrap());
/// assert_eq!(serde_json::to_value(&normalized).unwrap(), json!({"note": "x"}));
/// ```
pub fn normalize_payload(payload: &Map<String, Value>) -> NormalizedPayload {
    normalize_payload_with(payload, &PayloadFields::default())
}

/// Normalizes the designated price fields of `payload`.
///
/// ## Rules
/// - No usable amount: both price fields are removed, not nulled
/// - Usable amount: the amount field becomes a JSON number, the currency
///   field keeps its original value when truthy, else `fields.fallback`
/// - All other fields are copied unchanged; `payload` itself is untouched
pub fn normalize_payload_with(
    payload: &Map<String, Value>,
    fields: &PayloadFields,
) -> NormalizedPayload {
    let mut record = payload.clone();
    let amount = NumericLike::from(payload.get(&fields.amount_field)).coerce();

    match amount {
        None => {
            debug!(
                amount_field = %fields.amount_field,
                currency_field = %fields.currency_field,
                "No usable amount, dropping price fields"
            );
            record.remove(&fields.amount_field);
            record.remove(&fields.currency_field);
        }
        Some(amount) => {
            let currency = match payload.get(&fields.currency_field) {
                Some(value) if is_truthy(value) => value.clone(),
                _ => Value::String(fields.fallback.clone()),
            };
            record.insert(fields.amount_field.clone(), amount_to_json(amount));
            record.insert(fields.currency_field.clone(), currency);
        }
    }

    NormalizedPayload::new(record, fields.clone())
}

/// Writes integral amounts as JSON integers so `10` stays `10`, not `10.0`.
fn amount_to_json(amount: f64) -> Value {
    if amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
        Value::from(amount as i64)
    } else {
        Number::from_f64(amount).map_or(Value::Null, Value::Number)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    // -------------------------------------------------------------------------
    // to_value
    // -------------------------------------------------------------------------

    #[test]
    fn test_to_value_numeric_string() {
        let value = to_value("19.99", Some("USD"));
        assert_eq!(value.amount(), Some(19.99));
        assert_eq!(value.currency(), Some("USD"));
    }

    #[test]
    fn test_to_value_non_numeric_string_is_absent() {
        assert_eq!(to_value("abc", Some("USD")).amount(), None);
        assert_eq!(to_value("", Some("USD")).amount(), None);
        assert_eq!(to_value("12abc", Some("USD")).amount(), None);
    }

    #[test]
    fn test_to_value_number_passthrough() {
        assert_eq!(to_value(0, Some("USD")).amount(), Some(0.0));
        assert_eq!(to_value(-25.5, Some("USD")).amount(), Some(-25.5));
        assert_eq!(to_value(f64::NAN, Some("USD")).amount(), None);
    }

    #[test]
    fn test_to_value_absent_price() {
        let value = to_value(None::<f64>, Some("EUR"));
        assert_eq!(value.amount(), None);
        // Currency survives; the value still has no price
        assert_eq!(value.currency(), Some("EUR"));
        assert!(!value.has_price());
    }

    #[test]
    fn test_to_value_blank_currency_uses_fallback() {
        let value = to_value_with_fallback(1, Some(""), "GBP");
        assert_eq!(value, MoneyValue::new(Some(1.0), Some("GBP".to_string())));

        let value = to_value_with_fallback(1, Some("   "), "GBP");
        assert_eq!(value.currency(), Some("GBP"));

        let value = to_value_with_fallback(1, None, "GBP");
        assert_eq!(value.currency(), Some("GBP"));
    }

    #[test]
    fn test_to_value_keeps_currency_verbatim() {
        assert_eq!(to_value(1, Some("eur")).currency(), Some("eur"));
        assert_eq!(to_value(1, Some(" XBT ")).currency(), Some(" XBT "));
    }

    #[test]
    fn test_to_value_empty_fallback_is_absent() {
        let value = to_value_with_fallback(1, None, "");
        assert_eq!(value.currency(), None);
    }

    #[test]
    fn test_to_value_json() {
        let value = to_value_json(&json!("7.25"), &json!("JPY"), "USD");
        assert_eq!(value.amount(), Some(7.25));
        assert_eq!(value.currency(), Some("JPY"));

        let value = to_value_json(&json!(true), &json!(42), "USD");
        assert_eq!(value.amount(), None);
        assert_eq!(value.currency(), Some("USD"));
    }

    #[test]
    fn test_value_from_record_missing_fields() {
        let value = value_from_record(&object(json!({"name": "Hostel"})), &PayloadFields::default());
        assert_eq!(value.amount(), None);
        assert_eq!(value.currency(), Some("USD"));
    }

    // -------------------------------------------------------------------------
    // normalize_payload
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_strips_both_fields_without_amount() {
        let raw = object(json!({"price": null, "price_currency": "USD", "note": "x"}));
        let normalized = normalize_payload(&raw);
        assert_eq!(normalized.into_inner(), object(json!({"note": "x"})));
        // Input untouched
        assert_eq!(raw.get("price_currency"), Some(&json!("USD")));
    }

    #[test]
    fn test_normalize_strips_unparseable_amount() {
        for price in [json!("abc"), json!(""), json!(false), json!([]), json!({})] {
            let raw = object(json!({"price": price, "price_currency": "EUR", "id": 1}));
            assert_eq!(normalize_payload(&raw).into_inner(), object(json!({"id": 1})));
        }
    }

    #[test]
    fn test_normalize_missing_amount_field() {
        let raw = object(json!({"price_currency": "EUR", "id": 1}));
        let normalized = normalize_payload(&raw);
        assert!(!normalized.has_price());
        assert_eq!(normalized.into_inner(), object(json!({"id": 1})));
    }

    #[test]
    fn test_normalize_string_amount_gets_fallback_currency() {
        let raw = object(json!({"price": "19.99", "note": "x"}));
        let normalized = normalize_payload(&raw);
        assert_eq!(
            normalized.into_inner(),
            object(json!({"price": 19.99, "price_currency": "USD", "note": "x"}))
        );
    }

    #[test]
    fn test_normalize_integral_amount_written_as_integer() {
        let raw = object(json!({"price": "10", "price_currency": "EUR"}));
        let normalized = normalize_payload(&raw);
        assert_eq!(normalized.get("price"), Some(&json!(10)));
        assert_eq!(normalized.get("price_currency"), Some(&json!("EUR")));
    }

    #[test]
    fn test_normalize_keeps_zero_and_negative_amounts() {
        let raw = object(json!({"price": 0, "price_currency": "EUR"}));
        assert_eq!(normalize_payload(&raw).amount(), Some(0.0));

        let raw = object(json!({"price": "-15.5", "price_currency": "EUR"}));
        assert_eq!(normalize_payload(&raw).amount(), Some(-15.5));
    }

    #[test]
    fn test_normalize_currency_truthiness() {
        let raw = object(json!({"price": 1, "price_currency": ""}));
        assert_eq!(normalize_payload(&raw).currency(), Some(&json!("USD")));

        let raw = object(json!({"price": 1, "price_currency": null}));
        assert_eq!(normalize_payload(&raw).currency(), Some(&json!("USD")));

        let raw = object(json!({"price": 1, "price_currency": 0}));
        assert_eq!(normalize_payload(&raw).currency(), Some(&json!("USD")));

        // Truthy values are carried over as-is
        let raw = object(json!({"price": 1, "price_currency": " "}));
        assert_eq!(normalize_payload(&raw).currency(), Some(&json!(" ")));
    }

    #[test]
    fn test_normalize_custom_fields() {
        let fields = PayloadFields::new("cost", "cost_currency").with_fallback("EUR");
        let raw = object(json!({"cost": "3.5", "price": "ignored"}));
        let normalized = normalize_payload_with(&raw, &fields);
        assert_eq!(
            normalized.into_inner(),
            object(json!({"cost": 3.5, "cost_currency": "EUR", "price": "ignored"}))
        );
    }

    #[test]
    fn test_normalized_payload_round_trips_to_value() {
        let raw = object(json!({"price": "42.5", "price_currency": "CHF"}));
        let value = normalize_payload(&raw).to_value();
        assert_eq!(value, MoneyValue::new(Some(42.5), Some("CHF".to_string())));
    }

    #[test]
    fn test_check_storable() {
        let raw = object(json!({"price": "19.99"}));
        assert!(normalize_payload(&raw).check_storable().is_ok());

        let raw = object(json!({"price": "19.999"}));
        assert!(normalize_payload(&raw).check_storable().is_err());

        let raw = object(json!({"note": "no price"}));
        assert!(normalize_payload(&raw).check_storable().is_ok());
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Any finite number written as a string parses back to itself.
        #[test]
        fn prop_numeric_string_parses_to_number(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
            let value = to_value(n.to_string(), Some("USD"));
            prop_assert_eq!(value.amount(), Some(n));
        }

        /// No string ever yields a NaN or infinite amount.
        #[test]
        fn prop_amount_is_never_nan(s in ".*") {
            let value = to_value(s, Some("USD"));
            prop_assert!(value.amount().map_or(true, f64::is_finite));
        }

        /// Strings without any digit never parse.
        #[test]
        fn prop_digitless_strings_are_absent(s in "[a-zA-Z ,_#-]*") {
            prop_assert_eq!(to_value(s, Some("USD")).amount(), None);
        }

        /// Normalizing a normalized value changes nothing.
        #[test]
        fn prop_to_value_is_idempotent(
            amount in proptest::option::of(-1.0e12f64..1.0e12),
            currency in proptest::option::of("[A-Za-z ]{0,4}"),
        ) {
            let first = to_value(amount, currency.as_deref());
            let second = to_value(first.amount(), first.currency());
            prop_assert_eq!(first, second);
        }

        /// Unrelated fields always survive normalization.
        #[test]
        fn prop_unrelated_fields_survive(price in proptest::option::of("[0-9a-z.]{0,6}"), note in ".*") {
            let mut raw = Map::new();
            raw.insert("note".to_string(), Value::String(note.clone()));
            if let Some(price) = price {
                raw.insert("price".to_string(), Value::String(price));
            }
            let normalized = normalize_payload(&raw);
            prop_assert_eq!(normalized.get("note"), Some(&Value::String(note)));
            prop_assert_eq!(normalized.has_price(), normalized.get("price_currency").is_some());
        }
    }
}
