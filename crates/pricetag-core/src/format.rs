//! # Presenter
//!
//! Renders a [`MoneyValue`] as locale-formatted text.
//!
//! ## Two-Step Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      format_money(value, locale)                        │
//! │                                                                         │
//! │  value.displayable()?  ── no amount / no currency ──► None             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Step 1: try_format(amount, currency, locale)                          │
//! │        │                                                                │
//! │        ├── Ok("$1,234.50") ─────────────────────────► Some(...)        │
//! │        │                                                                │
//! │        └── Err(FormatError)                                             │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  Step 2: fallback_render(amount, currency) ──────────► Some("ZZZ 10")  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 1 rounds to at most two fraction digits (half away from zero) and
//! shows at least as many as the currency's minor units allow, capped at two.
//! Step 2 never rounds and never groups.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::MoneyConfig;
use crate::error::FormatError;
use crate::locale;
use crate::money::MoneyValue;
use crate::symbols;
use crate::DEFAULT_LOCALE;

/// Most fraction digits ever shown.
pub const MAX_FRACTION_DIGITS: u32 = 2;

// =============================================================================
// Public Entry Points
// =============================================================================

/// Formats `value` for `locale`.
///
/// Returns `None` when the value has no amount or no currency. Otherwise
/// always returns a string, degrading to `"{currency} {amount}"` when the
/// locale or currency cannot be formatted.
///
/// ## Example
/// ```rust
/// use pricetag_core::format::format_money;
/// use pricetag_core::money::MoneyValue;
///
/// let usd = MoneyValue::new(Some(1234.5), Some("USD".to_string()));
/// assert_eq!(format_money(&usd, "en-US").as_deref(), Some("$1,234.50"));
///
/// let unknown = MoneyValue::new(Some(10.0), Some("ZZZ".to_string()));
/// assert_eq!(format_money(&unknown, "en-US").as_deref(), Some("ZZZ 10"));
///
/// let no_amount = MoneyValue::new(None, Some("USD".to_string()));
/// assert_eq!(format_money(&no_amount, "en-US"), None);
/// ```
pub fn format_money(value: &MoneyValue, locale: &str) -> Option<String> {
    let (amount, currency) = value.displayable()?;
    let rendered = try_format(amount, currency, locale).unwrap_or_else(|err| {
        debug!(error = %err, currency, locale, "Structured formatting unavailable, using plain rendering");
        fallback_render(amount, currency)
    });
    Some(rendered)
}

/// Step 1: locale- and currency-aware formatting.
///
/// Only the locale and the currency can make this fail. Amounts too large
/// for [`Decimal`] are integers already, so they skip rounding and are
/// grouped from their shortest digits.
pub fn try_format(amount: f64, currency: &str, locale: &str) -> Result<String, FormatError> {
    let locale = locale::resolve(locale)?;
    let currency = symbols::lookup(currency)?;
    let min_fraction = currency.minor_units.min(MAX_FRACTION_DIGITS) as usize;

    let (integer, fraction, negative) = match to_decimal(amount) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
            let (integer, fraction) = split_digits(rounded.abs(), min_fraction);
            (integer, fraction, rounded.is_sign_negative() && !rounded.is_zero())
        }
        None => oversized_digits(amount, min_fraction),
    };

    let mut number = locale.group_integer(&integer);
    if !fraction.is_empty() {
        number.push_str(locale.decimal_separator);
        number.push_str(&fraction);
    }

    Ok(locale.place_symbol(&number, locale.symbol_for(currency), negative))
}

/// Step 2: `"{currency} {amount}"`, with the amount written the way a
/// JavaScript `String(n)` writes it.
///
/// Shortest round-trip digits; magnitudes of `1e21` and above or below
/// `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
///
/// ## Example
/// ```rust
/// use pricetag_core::format::fallback_render;
///
/// assert_eq!(fallback_render(42.5, "XXX"), "XXX 42.5");
/// assert_eq!(fallback_render(1234567.891, "ZZZ"), "ZZZ 1234567.891");
/// assert_eq!(fallback_render(1e300, "ZZZ"), "ZZZ 1e+300");
/// ```
pub fn fallback_render(amount: f64, currency: &str) -> String {
    format!("{currency} {}", plain_number(amount))
}

// =============================================================================
// Presenter
// =============================================================================

/// A formatter bound to a default locale.
///
/// ## Usage
/// ```rust
/// use pricetag_core::format::Presenter;
/// use pricetag_core::money::MoneyValue;
///
/// let presenter = Presenter::new("de-DE");
/// let value = MoneyValue::new(Some(1234.5), Some("EUR".to_string()));
/// assert_eq!(presenter.format(&value).as_deref(), Some("1.234,50\u{a0}€"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presenter {
    locale: String,
}

impl Presenter {
    /// Creates a presenter for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Presenter {
            locale: locale.into(),
        }
    }

    /// Creates a presenter for the configured display locale.
    pub fn from_config(config: &MoneyConfig) -> Self {
        Presenter::new(config.locale())
    }

    /// Returns the locale this presenter formats for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Formats `value`. See [`format_money`].
    pub fn format(&self, value: &MoneyValue) -> Option<String> {
        format_money(value, &self.locale)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Presenter::new(DEFAULT_LOCALE)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Converts through the shortest round-trip text so 1.005 stays 1.005
/// instead of 1.00499999999999989...
///
/// `None` once the magnitude passes `Decimal::MAX`.
fn to_decimal(amount: f64) -> Option<Decimal> {
    Decimal::from_str(&amount.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(amount))
}

/// Digits for an amount [`Decimal`] cannot hold.
///
/// Past 2^53 every `f64` is integral, so there is nothing to round. Tiny
/// magnitudes that fail conversion round to zero.
fn oversized_digits(amount: f64, min_fraction: usize) -> (String, String, bool) {
    let fraction = "0".repeat(min_fraction);
    if amount.abs() < 1.0 {
        return ("0".to_string(), fraction, false);
    }
    (amount.abs().to_string(), fraction, amount.is_sign_negative())
}

/// Shortest text for `amount`, exponent form outside `[1e-6, 1e21)`.
fn plain_number(amount: f64) -> String {
    // Negative zero prints as "0"
    if amount == 0.0 {
        return "0".to_string();
    }

    let magnitude = amount.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return amount.to_string();
    }

    let text = format!("{amount:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Splits a non-negative decimal (scale <= 2) into integer digits and
/// fraction digits, trimming trailing zeros down to `min_fraction`.
fn split_digits(value: Decimal, min_fraction: usize) -> (String, String) {
    let mut scaled = value;
    scaled.rescale(MAX_FRACTION_DIGITS);
    let text = scaled.to_string();

    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }
    (integer.to_string(), fraction)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(amount: f64, currency: &str) -> MoneyValue {
        MoneyValue::new(Some(amount), Some(currency.to_string()))
    }

    fn fmt(amount: f64, currency: &str, locale: &str) -> String {
        format_money(&money(amount, currency), locale).unwrap()
    }

    // -------------------------------------------------------------------------
    // Precondition
    // -------------------------------------------------------------------------

    #[test]
    fn test_not_displayable_values() {
        assert_eq!(format_money(&MoneyValue::new(None, Some("USD".into())), "en-US"), None);
        assert_eq!(format_money(&MoneyValue::new(Some(10.0), None), "en-US"), None);
        assert_eq!(format_money(&MoneyValue::absent(), "en-US"), None);
    }

    // -------------------------------------------------------------------------
    // Structured formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_en_us_basics() {
        assert_eq!(fmt(10.0, "USD", "en-US"), "$10.00");
        assert_eq!(fmt(0.0, "USD", "en-US"), "$0.00");
        assert_eq!(fmt(1234567.891, "USD", "en-US"), "$1,234,567.89");
        assert_eq!(fmt(-5.5, "USD", "en-US"), "-$5.50");
        assert_eq!(fmt(19.99, "EUR", "en-US"), "€19.99");
        assert_eq!(fmt(19.99, "CHF", "en-US"), "CHF\u{a0}19.99");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(fmt(1.005, "USD", "en-US"), "$1.01");
        assert_eq!(fmt(2.675, "USD", "en-US"), "$2.68");
        assert_eq!(fmt(-1.005, "USD", "en-US"), "-$1.01");
        assert_eq!(fmt(0.004, "USD", "en-US"), "$0.00");
        assert_eq!(fmt(-0.004, "USD", "en-US"), "$0.00");
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(fmt(1234.0, "JPY", "en-US"), "¥1,234");
        // Fractions are still shown up to two digits
        assert_eq!(fmt(10.5, "JPY", "en-US"), "¥10.5");
        assert_eq!(fmt(10.567, "JPY", "en-US"), "¥10.57");
        // Three-digit currencies are capped at two
        assert_eq!(fmt(1.5, "KWD", "en-US"), "KWD\u{a0}1.50");
    }

    #[test]
    fn test_lowercase_currency_code() {
        assert_eq!(fmt(1.0, "eur", "en-US"), "€1.00");
    }

    #[test]
    fn test_other_locales() {
        assert_eq!(fmt(1234.5, "EUR", "de-DE"), "1.234,50\u{a0}€");
        assert_eq!(fmt(-1234.5, "EUR", "de-DE"), "-1.234,50\u{a0}€");
        assert_eq!(fmt(1234.5, "EUR", "fr-FR"), "1\u{202f}234,50\u{a0}€");
        assert_eq!(fmt(1234.5, "USD", "fr-FR"), "1\u{202f}234,50\u{a0}$US");
        assert_eq!(fmt(1234.5, "EUR", "es-ES"), "1234,50\u{a0}€");
        assert_eq!(fmt(1234567.0, "INR", "en-IN"), "₹12,34,567.00");
        assert_eq!(fmt(1234.5, "CHF", "de-CH"), "CHF\u{a0}1\u{2019}234.50");
        assert_eq!(fmt(99.0, "BRL", "pt-BR"), "R$\u{a0}99,00");
        assert_eq!(fmt(-5.0, "BRL", "pt-BR"), "-R$\u{a0}5,00");
        assert_eq!(fmt(-5.0, "CHF", "de-CH"), "CHF-5.00");
        assert_eq!(fmt(-3.0, "SEK", "sv-SE"), "\u{2212}3,00\u{a0}kr");
        assert_eq!(fmt(1500.0, "JPY", "ja-JP"), "￥1,500");
        assert_eq!(fmt(20.0, "CAD", "en-CA"), "$20.00");
    }

    #[test]
    fn test_language_only_locale() {
        assert_eq!(fmt(5.0, "EUR", "de"), "5,00\u{a0}€");
    }

    // -------------------------------------------------------------------------
    // Fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_unknown_currency_falls_back() {
        assert_eq!(fmt(10.0, "ZZZ", "en-US"), "ZZZ 10");
        assert_eq!(fmt(42.5, "XXX", "en-US"), "XXX 42.5");
        assert_eq!(fmt(1234.5678, "BTC", "en-US"), "BTC 1234.5678");
        assert_eq!(fmt(3.0, " usd ", "en-US"), " usd  3");
    }

    #[test]
    fn test_bad_locale_falls_back() {
        assert_eq!(fmt(10.0, "USD", "xx-YY"), "USD 10");
        assert_eq!(fmt(10.0, "USD", "en_US"), "USD 10");
        assert_eq!(fmt(10.0, "USD", ""), "USD 10");
    }

    #[test]
    fn test_try_format_reports_reason() {
        assert_eq!(
            try_format(10.0, "ZZZ", "en-US"),
            Err(FormatError::UnknownCurrency {
                code: "ZZZ".to_string()
            })
        );
        assert!(matches!(
            try_format(10.0, "USD", "xx"),
            Err(FormatError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn test_amounts_beyond_decimal_range_still_format() {
        assert_eq!(
            fmt(8.0e28, "USD", "en-US"),
            format!("$80{}.00", ",000".repeat(9))
        );
        assert_eq!(
            fmt(-1.0e30, "EUR", "de-DE"),
            format!("-1{},00\u{a0}€", ".000".repeat(10))
        );
        assert_eq!(fmt(1.0e30, "JPY", "en-US"), format!("¥1{}", ",000".repeat(10)));
        assert!(try_format(f64::MAX, "USD", "en-US").is_ok());
    }

    #[test]
    fn test_real_iso_codes_format_structurally() {
        assert_eq!(fmt(10.0, "RUB", "en-US"), "RUB\u{a0}10.00");
        assert_eq!(fmt(1234.5, "GEL", "en-US"), "GEL\u{a0}1,234.50");
        assert_eq!(fmt(-7.0, "KZT", "de-DE"), "-7,00\u{a0}KZT");
        assert_eq!(fmt(1500.0, "UGX", "en-US"), "UGX\u{a0}1,500");
        for code in ["BGN", "LKR", "IRR", "VES", "BDT"] {
            assert!(try_format(10.0, code, "en-US").is_ok(), "{code}");
        }
    }

    #[test]
    fn test_fallback_render() {
        assert_eq!(fallback_render(10.0, "ZZZ"), "ZZZ 10");
        assert_eq!(fallback_render(-0.0, "ZZZ"), "ZZZ 0");
        assert_eq!(fallback_render(-7.25, "ZZZ"), "ZZZ -7.25");
    }

    #[test]
    fn test_fallback_render_uses_exponent_form_at_extremes() {
        assert_eq!(fallback_render(1e300, "ZZZ"), "ZZZ 1e+300");
        assert_eq!(fallback_render(1e21, "ZZZ"), "ZZZ 1e+21");
        assert_eq!(fallback_render(-2.5e22, "ZZZ"), "ZZZ -2.5e+22");
        assert_eq!(fallback_render(1.5e-7, "ZZZ"), "ZZZ 1.5e-7");
        assert_eq!(fallback_render(1e20, "ZZZ"), "ZZZ 100000000000000000000");
        assert_eq!(fallback_render(0.000001, "ZZZ"), "ZZZ 0.000001");
    }

    // -------------------------------------------------------------------------
    // Presenter
    // -------------------------------------------------------------------------

    #[test]
    fn test_presenter_default_locale() {
        let presenter = Presenter::default();
        assert_eq!(presenter.locale(), "en-US");
        assert_eq!(
            presenter.format(&money(10.0, "USD")).as_deref(),
            Some("$10.00")
        );
    }

    #[test]
    fn test_presenter_from_config() {
        let mut config = MoneyConfig::default();
        config.display.locale = "nl-NL".to_string();
        let presenter = Presenter::from_config(&config);
        assert_eq!(
            presenter.format(&money(-5.0, "EUR")).as_deref(),
            Some("€\u{a0}-5,00")
        );
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    fn locale_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(
            locale::supported()
                .iter()
                .map(|l| l.language)
                .collect::<Vec<_>>(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Any displayable value formats, whatever the code or locale.
        #[test]
        fn prop_format_never_fails(
            amount in any::<f64>().prop_filter("finite", |n| n.is_finite()),
            currency in "[A-Za-z]{1,5}",
            locale in "[a-zA-Z_-]{0,8}",
        ) {
            let value = money(amount, &currency);
            prop_assert!(format_money(&value, &locale).is_some());
        }

        /// Dollar amounts in en-US always show the symbol and the integer part.
        #[test]
        fn prop_en_us_contains_magnitude(cents in 0i64..100_000_000) {
            let amount = cents as f64 / 100.0;
            let rendered = fmt(amount, "USD", "en-US");
            prop_assert!(rendered.starts_with('$'));
            let digits: String = rendered.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(digits, format!("{}{:02}", cents / 100, cents % 100));
        }

        /// Supported locales never hit the fallback for registry currencies.
        #[test]
        fn prop_registry_currencies_format_structurally(
            amount in -1.0e9f64..1.0e9,
            index in 0usize..20,
            locale in locale_strategy(),
        ) {
            let currency = crate::registry::list_codes()[index];
            prop_assert!(try_format(amount, currency, locale).is_ok());
        }
    }
}
