//! # Domain Types
//!
//! Input and record types that surround [`MoneyValue`](crate::money::MoneyValue).
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   NumericLike   │   │  PayloadFields  │   │ NormalizedPayload   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Number(f64)    │   │  amount_field   │   │  record (JSON map)  │   │
//! │  │  Text(String)   │   │  currency_field │   │  price fields set   │   │
//! │  │  Absent         │   │  fallback       │   │  or both removed    │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationResult;
use crate::money::MoneyValue;
use crate::registry::DEFAULT_CURRENCY;
use crate::validation::validate_storable_amount;
use crate::{DEFAULT_AMOUNT_FIELD, DEFAULT_CURRENCY_FIELD};

// =============================================================================
// Numeric Input
// =============================================================================

/// A raw amount as it arrives from a payload or form field.
///
/// Every shape an upstream amount can take maps onto exactly one variant,
/// and [`NumericLike::coerce`] is total over all of them.
///
/// ## Coercion Table
/// ```text
/// ┌───────────────────────┬──────────────────────────────────────┐
/// │  Input                │  coerce()                            │
/// ├───────────────────────┼──────────────────────────────────────┤
/// │  Number(19.99)        │  Some(19.99)                         │
/// │  Number(-5.0)         │  Some(-5.0)   refunds are allowed    │
/// │  Number(NaN / ±inf)   │  None                                │
/// │  Text(" 19.99 ")      │  Some(19.99)  whitespace trimmed     │
/// │  Text("1e3")          │  Some(1000.0)                        │
/// │  Text("abc" / "")     │  None                                │
/// │  Text("Infinity")     │  None                                │
/// │  Absent               │  None                                │
/// └───────────────────────┴──────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NumericLike {
    /// An already-numeric value.
    Number(f64),
    /// A string that may hold a decimal literal.
    Text(String),
    /// Missing, null, or a value of any other shape.
    Absent,
}

impl NumericLike {
    /// Coerces to a finite number, or `None` for the absent marker.
    ///
    /// This is the single numeric-validity predicate used by both
    /// [`to_value`](crate::normalize::to_value) and
    /// [`normalize_payload`](crate::normalize::normalize_payload).
    pub fn coerce(&self) -> Option<f64> {
        match self {
            NumericLike::Number(n) => Some(*n).filter(|n| n.is_finite()),
            NumericLike::Text(text) => parse_decimal(text),
            NumericLike::Absent => None,
        }
    }

    /// Checks if this is the `Absent` variant.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, NumericLike::Absent)
    }
}

/// Parses a decimal literal. Hex/octal/binary prefixes are not literals here.
fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<f64> for NumericLike {
    fn from(value: f64) -> Self {
        NumericLike::Number(value)
    }
}

impl From<f32> for NumericLike {
    fn from(value: f32) -> Self {
        NumericLike::Number(f64::from(value))
    }
}

impl From<i32> for NumericLike {
    fn from(value: i32) -> Self {
        NumericLike::Number(f64::from(value))
    }
}

impl From<i64> for NumericLike {
    fn from(value: i64) -> Self {
        NumericLike::Number(value as f64)
    }
}

impl From<u32> for NumericLike {
    fn from(value: u32) -> Self {
        NumericLike::Number(f64::from(value))
    }
}

impl From<&str> for NumericLike {
    fn from(value: &str) -> Self {
        NumericLike::Text(value.to_owned())
    }
}

impl From<String> for NumericLike {
    fn from(value: String) -> Self {
        NumericLike::Text(value)
    }
}

impl<T: Into<NumericLike>> From<Option<T>> for NumericLike {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericLike::Absent, Into::into)
    }
}

/// JSON strings become `Text`, JSON numbers become `Number`; null, booleans,
/// arrays and objects are `Absent`.
impl From<&Value> for NumericLike {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(NumericLike::Absent, NumericLike::Number),
            Value::String(s) => NumericLike::Text(s.clone()),
            _ => NumericLike::Absent,
        }
    }
}

// =============================================================================
// Payload Fields
// =============================================================================

/// Which two record fields carry the price, and the fallback currency.
///
/// ## Example
/// ```rust
/// use pricetag_core::types::PayloadFields;
///
/// let fields = PayloadFields::default();
/// assert_eq!(fields.amount_field, "price");
/// assert_eq!(fields.currency_field, "price_currency");
/// assert_eq!(fields.fallback, "USD");
///
/// let custom = PayloadFields::new("cost", "cost_currency").with_fallback("EUR");
/// assert_eq!(custom.fallback, "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadFields {
    /// Field holding the amount.
    pub amount_field: String,
    /// Field holding the currency code.
    pub currency_field: String,
    /// Currency written when the record has an amount but no usable code.
    pub fallback: String,
}

impl PayloadFields {
    /// Creates field names with the registry's default fallback.
    pub fn new(amount_field: impl Into<String>, currency_field: impl Into<String>) -> Self {
        PayloadFields {
            amount_field: amount_field.into(),
            currency_field: currency_field.into(),
            fallback: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Replaces the fallback currency.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

impl Default for PayloadFields {
    fn default() -> Self {
        PayloadFields::new(DEFAULT_AMOUNT_FIELD, DEFAULT_CURRENCY_FIELD)
    }
}

// =============================================================================
// Normalized Payload
// =============================================================================

/// A record whose two price fields have been rewritten or removed.
///
/// Serializes as the bare JSON object, so a record without a price simply
/// has no price keys rather than `null`s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedPayload {
    record: Map<String, Value>,
    #[serde(skip)]
    fields: PayloadFields,
}

impl NormalizedPayload {
    pub(crate) fn new(record: Map<String, Value>, fields: PayloadFields) -> Self {
        NormalizedPayload { record, fields }
    }

    /// Returns the field value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// Returns the numeric amount, if the record has one.
    pub fn amount(&self) -> Option<f64> {
        self.record
            .get(&self.fields.amount_field)
            .and_then(Value::as_f64)
    }

    /// Returns the currency field as written (may be a non-string value
    /// carried over from the input).
    pub fn currency(&self) -> Option<&Value> {
        self.record.get(&self.fields.currency_field)
    }

    /// Returns true if the record carries a price.
    pub fn has_price(&self) -> bool {
        self.amount().is_some()
    }

    /// Reads the price fields back into a MoneyValue.
    pub fn to_value(&self) -> MoneyValue {
        crate::normalize::value_from_record(&self.record, &self.fields)
    }

    /// Checks the amount against the upstream money column limits.
    /// Records without a price always pass.
    pub fn check_storable(&self) -> ValidationResult<()> {
        match self.amount() {
            Some(amount) => validate_storable_amount(amount),
            None => Ok(()),
        }
    }

    /// Returns the underlying record.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Consumes the payload and returns the underlying record.
    pub fn into_inner(self) -> Map<String, Value> {
        self.record
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
