//! ISO 4217 display data: the default symbol and minor units per currency.
//!
//! The table covers the active ISO 4217 list, fund codes included. Codes
//! without defined minor units (precious metals, `XDR`, `XTS`, `XXX`) and
//! anything that is not ISO are left to the plain-text fallback.
//!
//! Symbols are the English CLDR ones; where CLDR has none, the code itself
//! is the symbol.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::FormatError;
use crate::validation::validate_currency_code;

/// Display data for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySymbol {
    /// Uppercase ISO code.
    pub code: &'static str,
    /// Symbol used when the locale has no override.
    pub symbol: &'static str,
    /// Digits after the decimal point in normal use.
    pub minor_units: u32,
}

const fn entry(code: &'static str, symbol: &'static str, minor_units: u32) -> CurrencySymbol {
    CurrencySymbol {
        code,
        symbol,
        minor_units,
    }
}

static ISO_TABLE: &[CurrencySymbol] = &[
    entry("AED", "AED", 2),
    entry("AFN", "AFN", 2),
    entry("ALL", "ALL", 2),
    entry("AMD", "AMD", 2),
    entry("ANG", "ANG", 2),
    entry("AOA", "AOA", 2),
    entry("ARS", "ARS", 2),
    entry("AUD", "A$", 2),
    entry("AWG", "AWG", 2),
    entry("AZN", "AZN", 2),
    entry("BAM", "BAM", 2),
    entry("BBD", "BBD", 2),
    entry("BDT", "BDT", 2),
    entry("BGN", "BGN", 2),
    entry("BHD", "BHD", 3),
    entry("BIF", "BIF", 0),
    entry("BMD", "BMD", 2),
    entry("BND", "BND", 2),
    entry("BOB", "BOB", 2),
    entry("BOV", "BOV", 2),
    entry("BRL", "R$", 2),
    entry("BSD", "BSD", 2),
    entry("BTN", "BTN", 2),
    entry("BWP", "BWP", 2),
    entry("BYN", "BYN", 2),
    entry("BZD", "BZD", 2),
    entry("CAD", "CA$", 2),
    entry("CDF", "CDF", 2),
    entry("CHE", "CHE", 2),
    entry("CHF", "CHF", 2),
    entry("CHW", "CHW", 2),
    entry("CLF", "CLF", 4),
    entry("CLP", "CLP", 0),
    entry("CNY", "CN¥", 2),
    entry("COP", "COP", 2),
    entry("COU", "COU", 2),
    entry("CRC", "CRC", 2),
    entry("CUP", "CUP", 2),
    entry("CVE", "CVE", 2),
    entry("CZK", "CZK", 2),
    entry("DJF", "DJF", 0),
    entry("DKK", "DKK", 2),
    entry("DOP", "DOP", 2),
    entry("DZD", "DZD", 2),
    entry("EGP", "EGP", 2),
    entry("ERN", "ERN", 2),
    entry("ETB", "ETB", 2),
    entry("EUR", "€", 2),
    entry("FJD", "FJD", 2),
    entry("FKP", "FKP", 2),
    entry("GBP", "£", 2),
    entry("GEL", "GEL", 2),
    entry("GHS", "GHS", 2),
    entry("GIP", "GIP", 2),
    entry("GMD", "GMD", 2),
    entry("GNF", "GNF", 0),
    entry("GTQ", "GTQ", 2),
    entry("GYD", "GYD", 2),
    entry("HKD", "HK$", 2),
    entry("HNL", "HNL", 2),
    entry("HTG", "HTG", 2),
    entry("HUF", "HUF", 2),
    entry("IDR", "IDR", 2),
    entry("ILS", "₪", 2),
    entry("INR", "₹", 2),
    entry("IQD", "IQD", 3),
    entry("IRR", "IRR", 2),
    entry("ISK", "ISK", 0),
    entry("JMD", "JMD", 2),
    entry("JOD", "JOD", 3),
    entry("JPY", "¥", 0),
    entry("KES", "KES", 2),
    entry("KGS", "KGS", 2),
    entry("KHR", "KHR", 2),
    entry("KMF", "KMF", 0),
    entry("KPW", "KPW", 2),
    entry("KRW", "₩", 0),
    entry("KWD", "KWD", 3),
    entry("KYD", "KYD", 2),
    entry("KZT", "KZT", 2),
    entry("LAK", "LAK", 2),
    entry("LBP", "LBP", 2),
    entry("LKR", "LKR", 2),
    entry("LRD", "LRD", 2),
    entry("LSL", "LSL", 2),
    entry("LYD", "LYD", 3),
    entry("MAD", "MAD", 2),
    entry("MDL", "MDL", 2),
    entry("MGA", "MGA", 2),
    entry("MKD", "MKD", 2),
    entry("MMK", "MMK", 2),
    entry("MNT", "MNT", 2),
    entry("MOP", "MOP", 2),
    entry("MRU", "MRU", 2),
    entry("MUR", "MUR", 2),
    entry("MVR", "MVR", 2),
    entry("MWK", "MWK", 2),
    entry("MXN", "MX$", 2),
    entry("MXV", "MXV", 2),
    entry("MYR", "MYR", 2),
    entry("MZN", "MZN", 2),
    entry("NAD", "NAD", 2),
    entry("NGN", "NGN", 2),
    entry("NIO", "NIO", 2),
    entry("NOK", "NOK", 2),
    entry("NPR", "NPR", 2),
    entry("NZD", "NZ$", 2),
    entry("OMR", "OMR", 3),
    entry("PAB", "PAB", 2),
    entry("PEN", "PEN", 2),
    entry("PGK", "PGK", 2),
    entry("PHP", "₱", 2),
    entry("PKR", "PKR", 2),
    entry("PLN", "PLN", 2),
    entry("PYG", "PYG", 0),
    entry("QAR", "QAR", 2),
    entry("RON", "RON", 2),
    entry("RSD", "RSD", 2),
    entry("RUB", "RUB", 2),
    entry("RWF", "RWF", 0),
    entry("SAR", "SAR", 2),
    entry("SBD", "SBD", 2),
    entry("SCR", "SCR", 2),
    entry("SDG", "SDG", 2),
    entry("SEK", "SEK", 2),
    entry("SGD", "SGD", 2),
    entry("SHP", "SHP", 2),
    entry("SLE", "SLE", 2),
    entry("SOS", "SOS", 2),
    entry("SRD", "SRD", 2),
    entry("SSP", "SSP", 2),
    entry("STN", "STN", 2),
    entry("SVC", "SVC", 2),
    entry("SYP", "SYP", 2),
    entry("SZL", "SZL", 2),
    entry("THB", "THB", 2),
    entry("TJS", "TJS", 2),
    entry("TMT", "TMT", 2),
    entry("TND", "TND", 3),
    entry("TOP", "TOP", 2),
    entry("TRY", "TRY", 2),
    entry("TTD", "TTD", 2),
    entry("TWD", "NT$", 2),
    entry("TZS", "TZS", 2),
    entry("UAH", "UAH", 2),
    entry("UGX", "UGX", 0),
    entry("USD", "$", 2),
    entry("USN", "USN", 2),
    entry("UYI", "UYI", 0),
    entry("UYU", "UYU", 2),
    entry("UYW", "UYW", 4),
    entry("UZS", "UZS", 2),
    entry("VED", "VED", 2),
    entry("VES", "VES", 2),
    entry("VND", "₫", 0),
    entry("VUV", "VUV", 0),
    entry("WST", "WST", 2),
    entry("XAF", "FCFA", 0),
    entry("XCD", "EC$", 2),
    entry("XCG", "XCG", 2),
    entry("XOF", "F\u{202f}CFA", 0),
    entry("XPF", "CFPF", 0),
    entry("YER", "YER", 2),
    entry("ZAR", "ZAR", 2),
    entry("ZMW", "ZMW", 2),
    entry("ZWG", "ZWG", 2),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static CurrencySymbol>> =
    Lazy::new(|| ISO_TABLE.iter().map(|c| (c.code, c)).collect());

/// Looks up display data for a currency code, case-insensitively.
///
/// Malformed codes and codes missing from the table are both
/// [`FormatError::UnknownCurrency`].
pub fn lookup(code: &str) -> Result<&'static CurrencySymbol, FormatError> {
    let unknown = || FormatError::UnknownCurrency {
        code: code.to_string(),
    };
    validate_currency_code(code).map_err(|_| unknown())?;
    BY_CODE
        .get(code.to_ascii_uppercase().as_str())
        .copied()
        .ok_or_else(unknown)
}
