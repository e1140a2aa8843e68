use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Shop Locale - explicit formatting configuration
// ============================================================================
//
// Currency and date labels are formatted for a locale chosen in
// configuration. Nothing here reads the process environment.
//
// ============================================================================

/// Locales the shop can format prices and pickup dates for.
///
/// Deserialized through `FromStr`, so `de_DE` and `de-de` are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ShopLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "id-ID")]
    IdId,
}

impl ShopLocale {
    pub const ALL: [ShopLocale; 5] = [
        ShopLocale::EnUs,
        ShopLocale::EnGb,
        ShopLocale::DeDe,
        ShopLocale::FrFr,
        ShopLocale::IdId,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ShopLocale::EnUs => "en-US",
            ShopLocale::EnGb => "en-GB",
            ShopLocale::DeDe => "de-DE",
            ShopLocale::FrFr => "fr-FR",
            ShopLocale::IdId => "id-ID",
        }
    }

    /// Locale used for weekday and month names.
    pub fn date_locale(&self) -> chrono::Locale {
        match self {
            ShopLocale::EnUs => chrono::Locale::en_US,
            ShopLocale::EnGb => chrono::Locale::en_GB,
            ShopLocale::DeDe => chrono::Locale::de_DE,
            ShopLocale::FrFr => chrono::Locale::fr_FR,
            ShopLocale::IdId => chrono::Locale::id_ID,
        }
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        match self {
            ShopLocale::EnUs => CurrencyFormat {
                symbol: "$",
                symbol_first: true,
                symbol_spacing: "",
                decimal_separator: '.',
                grouping_separator: ",",
                fraction_digits: 2,
            },
            ShopLocale::EnGb => CurrencyFormat {
                symbol: "£",
                symbol_first: true,
                symbol_spacing: "",
                decimal_separator: '.',
                grouping_separator: ",",
                fraction_digits: 2,
            },
            ShopLocale::DeDe => CurrencyFormat {
                symbol: "€",
                symbol_first: false,
                symbol_spacing: "\u{a0}",
                decimal_separator: ',',
                grouping_separator: ".",
                fraction_digits: 2,
            },
            ShopLocale::FrFr => CurrencyFormat {
                symbol: "€",
                symbol_first: false,
                symbol_spacing: "\u{a0}",
                decimal_separator: ',',
                grouping_separator: "\u{202f}",
                fraction_digits: 2,
            },
            ShopLocale::IdId => CurrencyFormat {
                symbol: "Rp",
                symbol_first: true,
                symbol_spacing: "",
                decimal_separator: ',',
                grouping_separator: ".",
                fraction_digits: 2,
            },
        }
    }

    /// Formats `amount` as a price in this locale.
    pub fn format_currency(&self, amount: Decimal) -> String {
        self.currency_format().format(amount)
    }
}

impl fmt::Display for ShopLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for ShopLocale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        ShopLocale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

impl TryFrom<String> for ShopLocale {
    type Error = UnsupportedLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Currency Format
// ============================================================================

/// Number/currency conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub symbol_first: bool,
    /// Text between the symbol and the number
    pub symbol_spacing: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: &'static str,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    pub fn format(&self, amount: Decimal) -> String {
        // Banker's rounding, same as the platform currency formatters
        let rounded =
            amount.round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let plain = format!("{:.*}", self.fraction_digits as usize, rounded.abs());
        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut number = group_thousands(integer, self.grouping_separator);
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let body = if self.symbol_first {
            format!("{}{}{}", self.symbol, self.symbol_spacing, number)
        } else {
            format!("{}{}{}", number, self.symbol_spacing, self.symbol)
        };

        if negative {
            format!("-{body}")
        } else {
            body
        }
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_en_us_currency() {
        let locale = ShopLocale::EnUs;
        assert_eq!(locale.format_currency(dec("15")), "$15.00");
        assert_eq!(locale.format_currency(dec("0")), "$0.00");
        assert_eq!(locale.format_currency(dec("1234")), "$1,234.00");
        assert_eq!(locale.format_currency(dec("1234567.5")), "$1,234,567.50");
    }

    #[test]
    fn test_de_de_currency() {
        assert_eq!(ShopLocale::DeDe.format_currency(dec("1234")), "1.234,00\u{a0}€");
        assert_eq!(ShopLocale::DeDe.format_currency(dec("24")), "24,00\u{a0}€");
    }

    #[test]
    fn test_fr_and_id_currency() {
        assert_eq!(ShopLocale::FrFr.format_currency(dec("2003")), "2\u{202f}003,00\u{a0}€");
        assert_eq!(ShopLocale::IdId.format_currency(dec("15")), "Rp15,00");
        assert_eq!(ShopLocale::EnGb.format_currency(dec("15")), "£15.00");
    }

    #[test]
    fn test_rounding_is_half_even() {
        assert_eq!(ShopLocale::EnUs.format_currency(dec("0.125")), "$0.12");
        assert_eq!(ShopLocale::EnUs.format_currency(dec("0.135")), "$0.14");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(ShopLocale::EnUs.format_currency(dec("-3")), "-$3.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("123456", ","), "123,456");
        assert_eq!(group_thousands("1234567", "."), "1.234.567");
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!("en-US".parse::<ShopLocale>().unwrap(), ShopLocale::EnUs);
        assert_eq!("de_DE".parse::<ShopLocale>().unwrap(), ShopLocale::DeDe);
        assert_eq!(" fr-fr ".parse::<ShopLocale>().unwrap(), ShopLocale::FrFr);
        assert!("xx-YY".parse::<ShopLocale>().is_err());
    }

    #[test]
    fn test_locale_serde_uses_tags() {
        let json = serde_json::to_string(&ShopLocale::IdId).unwrap();
        assert_eq!(json, "\"id-ID\"");
        let back: ShopLocale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShopLocale::IdId);
    }

    #[test]
    fn test_locale_deserializes_loose_tags() {
        let locale: ShopLocale = serde_json::from_str("\"fr_FR\"").unwrap();
        assert_eq!(locale, ShopLocale::FrFr);

        let err = serde_json::from_str::<ShopLocale>("\"xx-YY\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported locale: xx-YY"));
    }
}
