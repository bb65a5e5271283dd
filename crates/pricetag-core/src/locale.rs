//! # Locale Data
//!
//! Number and currency layout for the locales the Presenter supports.
//!
//! ## What a Locale Decides
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1234567.5 USD                                                          │
//! │                                                                         │
//! │  en-US   $1,234,567.50        prefix, "," groups, "." decimal          │
//! │  de-DE   1.234.567,50 $       suffix after a no-break space            │
//! │  fr-FR   1 234 567,50 $US     narrow no-break space groups             │
//! │  en-IN   $12,34,567.50        secondary groups of two                  │
//! │  nl-NL   US$ 1.234.567,50     prefix with a space                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tags resolve exactly first (`de-CH`), then by language alone (`de` →
//! `de-DE`). Anything else is unsupported: there is no host default locale
//! to fall back on.

use crate::error::FormatError;
use crate::symbols::CurrencySymbol;
use crate::validation::validate_locale_tag;

use MinusPosition::{AfterSymbol, Leading, ReplacesGap};
use SymbolPlacement::{Prefix, PrefixSpaced, Suffix};

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";
const MINUS: &str = "-";
const MINUS_SIGN: &str = "\u{2212}";

// =============================================================================
// Layout Types
// =============================================================================

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`, `-$1.00`; alphabetic symbols get a no-break space: `CHF 1.00`.
    Prefix,
    /// `€ 1,00`, `€ -1,00`.
    PrefixSpaced,
    /// `1,00 €`, `-1,00 €`.
    Suffix,
}

/// Where the minus sign goes on a prefixed symbol. Suffixed layouts always
/// lead with the minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinusPosition {
    /// `-$5.00`, `-R$ 5,00`.
    Leading,
    /// `€ -5,00`.
    AfterSymbol,
    /// `CHF-5.00`: the minus takes the place of the gap.
    ReplacesGap,
}

/// Formatting conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub language: &'static str,
    pub region: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub minus: &'static str,
    pub placement: SymbolPlacement,
    pub minus_position: MinusPosition,
    /// Size of the group nearest the decimal point.
    pub primary_group: usize,
    /// Size of every further group.
    pub secondary_group: usize,
    /// Grouping only starts once the integer part has at least
    /// `primary_group + min_grouping` digits.
    pub min_grouping: usize,
    /// Per-locale symbol overrides, `(code, symbol)`.
    pub symbols: &'static [(&'static str, &'static str)],
}

impl LocaleFormat {
    /// Returns the canonical tag, e.g. "en-US".
    pub fn tag(&self) -> String {
        format!("{}-{}", self.language, self.region)
    }

    /// Returns the symbol this locale shows for `currency`.
    pub fn symbol_for(&self, currency: &CurrencySymbol) -> &'static str {
        self.symbols
            .iter()
            .find(|(code, _)| *code == currency.code)
            .map_or(currency.symbol, |(_, symbol)| *symbol)
    }

    /// Inserts group separators into a run of ASCII digits.
    pub fn group_integer(&self, digits: &str) -> String {
        if digits.len() < self.primary_group + self.min_grouping {
            return digits.to_string();
        }

        let (mut rest, tail) = digits.split_at(digits.len() - self.primary_group);
        let mut groups = vec![tail];
        while rest.len() > self.secondary_group {
            let (head, group) = rest.split_at(rest.len() - self.secondary_group);
            groups.push(group);
            rest = head;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }
        groups.reverse();
        groups.join(self.group_separator)
    }

    /// Combines formatted digits, sign and symbol.
    pub fn place_symbol(&self, number: &str, symbol: &str, negative: bool) -> String {
        let gap = match self.placement {
            Prefix if !symbol.ends_with(char::is_alphabetic) => "",
            _ => NBSP,
        };
        let minus = if negative { self.minus } else { "" };

        match (self.placement, self.minus_position) {
            (Suffix, _) => format!("{minus}{number}{gap}{symbol}"),
            (_, Leading) => format!("{minus}{symbol}{gap}{number}"),
            (_, AfterSymbol) => format!("{symbol}{gap}{minus}{number}"),
            (_, ReplacesGap) if negative => format!("{symbol}{minus}{number}"),
            (_, ReplacesGap) => format!("{symbol}{gap}{number}"),
        }
    }
}

// =============================================================================
// Locale Table
// =============================================================================

const fn western(
    language: &'static str,
    region: &'static str,
    placement: SymbolPlacement,
    symbols: &'static [(&'static str, &'static str)],
) -> LocaleFormat {
    LocaleFormat {
        language,
        region,
        group_separator: ",",
        decimal_separator: ".",
        minus: MINUS,
        placement,
        minus_position: Leading,
        primary_group: 3,
        secondary_group: 3,
        min_grouping: 1,
        symbols,
    }
}

const fn continental(
    language: &'static str,
    region: &'static str,
    group_separator: &'static str,
    placement: SymbolPlacement,
    symbols: &'static [(&'static str, &'static str)],
) -> LocaleFormat {
    LocaleFormat {
        language,
        region,
        group_separator,
        decimal_separator: ",",
        minus: MINUS,
        placement,
        minus_position: Leading,
        primary_group: 3,
        secondary_group: 3,
        min_grouping: 1,
        symbols,
    }
}

/// Supported locales. The first entry per language is its default region.
static LOCALES: &[LocaleFormat] = &[
    western("en", "US", Prefix, &[]),
    western("en", "GB", Prefix, &[("USD", "US$")]),
    western("en", "CA", Prefix, &[("CAD", "$"), ("USD", "US$")]),
    western("en", "AU", Prefix, &[("AUD", "$"), ("USD", "US$")]),
    LocaleFormat {
        secondary_group: 2,
        ..western("en", "IN", Prefix, &[])
    },
    continental("de", "DE", ".", Suffix, &[]),
    LocaleFormat {
        decimal_separator: ".",
        minus_position: ReplacesGap,
        ..continental("de", "CH", "\u{2019}", PrefixSpaced, &[])
    },
    continental("fr", "FR", NNBSP, Suffix, &[("USD", "$US"), ("CAD", "$CA"), ("AUD", "$AU")]),
    continental("fr", "CA", NBSP, Suffix, &[("CAD", "$"), ("USD", "$\u{a0}US")]),
    LocaleFormat {
        min_grouping: 2,
        ..continental("es", "ES", ".", Suffix, &[("USD", "US$")])
    },
    western("es", "MX", Prefix, &[("MXN", "$"), ("USD", "USD")]),
    continental("it", "IT", ".", Suffix, &[("USD", "USD")]),
    LocaleFormat {
        minus_position: AfterSymbol,
        ..continental("nl", "NL", ".", PrefixSpaced, &[("USD", "US$")])
    },
    continental("pt", "BR", ".", PrefixSpaced, &[("BRL", "R$"), ("USD", "US$")]),
    western("ja", "JP", Prefix, &[("JPY", "￥"), ("CNY", "元"), ("USD", "$")]),
    western("zh", "CN", Prefix, &[("CNY", "¥"), ("JPY", "JP¥"), ("USD", "US$")]),
    western("ko", "KR", Prefix, &[("USD", "US$")]),
    LocaleFormat {
        minus: MINUS_SIGN,
        ..continental("sv", "SE", NBSP, Suffix, &[("SEK", "kr"), ("USD", "US$")])
    },
    LocaleFormat {
        minus: MINUS_SIGN,
        ..continental("nb", "NO", NBSP, Suffix, &[("NOK", "kr"), ("USD", "USD")])
    },
    continental("da", "DK", ".", Suffix, &[("DKK", "kr."), ("USD", "US$")]),
    continental("tr", "TR", ".", Prefix, &[("TRY", "₺"), ("USD", "$")]),
];

/// Returns every supported locale.
pub fn supported() -> &'static [LocaleFormat] {
    LOCALES
}

/// Resolves a locale tag to its formatting data.
///
/// ## Example
/// ```rust
/// use pricetag_core::locale::resolve;
///
/// assert_eq!(resolve("en-us").unwrap().tag(), "en-US");
/// assert_eq!(resolve("de").unwrap().tag(), "de-DE");
/// assert!(resolve("xx-YY").is_err());
/// assert!(resolve("en_US").is_err());
/// ```
pub fn resolve(tag: &str) -> Result<&'static LocaleFormat, FormatError> {
    let parsed = validate_locale_tag(tag).map_err(|_| FormatError::InvalidLocale {
        tag: tag.to_string(),
    })?;

    let exact = parsed.region.as_deref().and_then(|region| {
        LOCALES
            .iter()
            .find(|l| l.language == parsed.language && l.region == region)
    });

    exact
        .or_else(|| LOCALES.iter().find(|l| l.language == parsed.language))
        .ok_or_else(|| FormatError::UnsupportedLocale {
            tag: tag.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
