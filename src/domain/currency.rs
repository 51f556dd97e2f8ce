// ============================================================================
// Currency
// ISO 4217 currencies and the process default currency
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::locale::Locale;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ISO 4217 currency.
///
/// Identity, hashing and ordering go by the alphabetic code only.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    fraction_digits: u32,
    symbol: &'static str,
    name: &'static str,
}

macro_rules! currencies {
    ($($ident:ident => ($code:literal, $numeric:literal, $digits:literal, $symbol:literal, $name:literal)),+ $(,)?) => {
        impl Currency {
            $(
                #[doc = concat!($name, " (", $code, ")")]
                pub const $ident: Currency = Currency {
                    code: $code,
                    numeric_code: $numeric,
                    fraction_digits: $digits,
                    symbol: $symbol,
                    name: $name,
                };
            )+
        }

        /// All known currencies; the first entry is the last-resort default.
        static CURRENCIES: &[Currency] = &[$(Currency::$ident),+];
    };
}

currencies! {
    EUR => ("EUR", 978, 2, "€", "Euro"),
    USD => ("USD", 840, 2, "$", "US Dollar"),
    GBP => ("GBP", 826, 2, "£", "Pound Sterling"),
    CHF => ("CHF", 756, 2, "CHF", "Swiss Franc"),
    JPY => ("JPY", 392, 0, "¥", "Yen"),
    AUD => ("AUD", 36, 2, "A$", "Australian Dollar"),
    BHD => ("BHD", 48, 3, "BHD", "Bahraini Dinar"),
    BRL => ("BRL", 986, 2, "R$", "Brazilian Real"),
    CAD => ("CAD", 124, 2, "CA$", "Canadian Dollar"),
    CLP => ("CLP", 152, 0, "CLP", "Chilean Peso"),
    CNY => ("CNY", 156, 2, "CN¥", "Yuan Renminbi"),
    CZK => ("CZK", 203, 2, "Kč", "Czech Koruna"),
    DKK => ("DKK", 208, 2, "DKK", "Danish Krone"),
    HKD => ("HKD", 344, 2, "HK$", "Hong Kong Dollar"),
    HUF => ("HUF", 348, 2, "Ft", "Forint"),
    INR => ("INR", 356, 2, "₹", "Indian Rupee"),
    ISK => ("ISK", 352, 0, "ISK", "Iceland Krona"),
    KRW => ("KRW", 410, 0, "₩", "Won"),
    KWD => ("KWD", 414, 3, "KWD", "Kuwaiti Dinar"),
    MXN => ("MXN", 484, 2, "MX$", "Mexican Peso"),
    NOK => ("NOK", 578, 2, "NOK", "Norwegian Krone"),
    NZD => ("NZD", 554, 2, "NZ$", "New Zealand Dollar"),
    PLN => ("PLN", 985, 2, "zł", "Zloty"),
    RUB => ("RUB", 643, 2, "₽", "Russian Ruble"),
    SEK => ("SEK", 752, 2, "SEK", "Swedish Krona"),
    SGD => ("SGD", 702, 2, "SGD", "Singapore Dollar"),
    TND => ("TND", 788, 3, "TND", "Tunisian Dinar"),
    TRY => ("TRY", 949, 2, "₺", "Turkish Lira"),
    ZAR => ("ZAR", 710, 2, "ZAR", "Rand"),
}

/// ISO 3166 country to currency
static COUNTRY_CURRENCIES: &[(&str, Currency)] = &[
    ("DE", Currency::EUR),
    ("AT", Currency::EUR),
    ("BE", Currency::EUR),
    ("CY", Currency::EUR),
    ("EE", Currency::EUR),
    ("ES", Currency::EUR),
    ("FI", Currency::EUR),
    ("FR", Currency::EUR),
    ("GR", Currency::EUR),
    ("HR", Currency::EUR),
    ("IE", Currency::EUR),
    ("IT", Currency::EUR),
    ("LT", Currency::EUR),
    ("LU", Currency::EUR),
    ("LV", Currency::EUR),
    ("MT", Currency::EUR),
    ("NL", Currency::EUR),
    ("PT", Currency::EUR),
    ("SI", Currency::EUR),
    ("SK", Currency::EUR),
    ("US", Currency::USD),
    ("GB", Currency::GBP),
    ("CH", Currency::CHF),
    ("LI", Currency::CHF),
    ("JP", Currency::JPY),
    ("AU", Currency::AUD),
    ("BH", Currency::BHD),
    ("BR", Currency::BRL),
    ("CA", Currency::CAD),
    ("CL", Currency::CLP),
    ("CN", Currency::CNY),
    ("CZ", Currency::CZK),
    ("DK", Currency::DKK),
    ("HK", Currency::HKD),
    ("HU", Currency::HUF),
    ("IN", Currency::INR),
    ("IS", Currency::ISK),
    ("KR", Currency::KRW),
    ("KW", Currency::KWD),
    ("MX", Currency::MXN),
    ("NO", Currency::NOK),
    ("NZ", Currency::NZD),
    ("PL", Currency::PLN),
    ("RU", Currency::RUB),
    ("SE", Currency::SEK),
    ("SG", Currency::SGD),
    ("TN", Currency::TND),
    ("TR", Currency::TRY),
    ("ZA", Currency::ZAR),
];

/// Currency of the process default locale, derived once
static DEFAULT_CURRENCY: LazyLock<Currency> =
    LazyLock::new(|| Currency::for_locale(Locale::default_locale()));

/// The process-wide default currency.
///
/// Derived from the default locale on first use: the locale's country,
/// then the primary country of its language, then the first available
/// currency (EUR).
pub fn default_currency() -> Currency {
    *DEFAULT_CURRENCY
}

impl Currency {
    /// ISO 4217 alphabetic code
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 numeric code
    #[inline]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Default number of fraction digits (minor units)
    #[inline]
    pub const fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// Currency symbol, the code itself where no unambiguous symbol exists
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// English currency name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All known currencies.
    pub fn available() -> &'static [Currency] {
        CURRENCIES
    }

    /// Look up a currency by its alphabetic code, ignoring case.
    pub fn from_code(code: &str) -> Option<Currency> {
        CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .copied()
    }

    /// Look up a currency by its symbol (`€`, `$`, `£`, ...).
    pub fn from_symbol(symbol: &str) -> Option<Currency> {
        CURRENCIES.iter().find(|c| c.symbol == symbol).copied()
    }

    /// Look up a currency by code or symbol.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if neither matches.
    pub fn from_token(token: &str) -> MoneyResult<Currency> {
        Self::from_code(token)
            .or_else(|| Self::from_symbol(token))
            .ok_or_else(|| MoneyError::UnknownCurrency(token.to_string()))
    }

    /// Currency of an ISO 3166 country code, ignoring case.
    pub fn for_country(country: &str) -> Option<Currency> {
        COUNTRY_CURRENCIES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(country))
            .map(|(_, currency)| *currency)
    }

    /// Currency of a locale, falling back step by step instead of failing.
    pub fn for_locale(locale: &Locale) -> Currency {
        if let Some(currency) = locale.country().and_then(Self::for_country) {
            debug!(%locale, currency = currency.code, "currency from locale country");
            return currency;
        }
        if let Some(currency) = locale.primary_country().and_then(Self::for_country) {
            debug!(%locale, currency = currency.code, "currency from language's primary country");
            return currency;
        }
        let currency = CURRENCIES[0];
        debug!(%locale, currency = currency.code, "no currency for locale, using first available");
        currency
    }
}

impl Default for Currency {
    fn default() -> Self {
        default_currency()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.trim())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown currency '{code}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("chf"), Some(Currency::CHF));
        assert_eq!(Currency::from_code("XXX"), None);
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(Currency::from_symbol("€"), Some(Currency::EUR));
        assert_eq!(Currency::from_symbol("$"), Some(Currency::USD));
        assert_eq!(Currency::from_symbol("£"), Some(Currency::GBP));
        assert_eq!(Currency::from_token("¥").unwrap(), Currency::JPY);
        assert_eq!(
            Currency::from_token("Taler"),
            Err(MoneyError::UnknownCurrency("Taler".to_string()))
        );
    }

    #[test]
    fn test_attributes() {
        let eur = Currency::EUR;
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.numeric_code(), 978);
        assert_eq!(eur.fraction_digits(), 2);
        assert_eq!(Currency::JPY.fraction_digits(), 0);
        assert_eq!(Currency::KWD.fraction_digits(), 3);
        assert_eq!(eur.to_string(), "EUR");
    }

    #[test]
    fn test_ordering_by_code() {
        assert!(Currency::CHF < Currency::GBP);
        assert!(Currency::USD > Currency::EUR);
    }

    #[test]
    fn test_for_locale_fallback_chain() {
        let germany = Locale::parse("de_DE.UTF-8").unwrap();
        assert_eq!(Currency::for_locale(&germany), Currency::EUR);

        let swiss = Locale::parse("de_CH").unwrap();
        assert_eq!(Currency::for_locale(&swiss), Currency::CHF);

        // no country: language's primary country
        let english = Locale::parse("en").unwrap();
        assert_eq!(Currency::for_locale(&english), Currency::USD);

        // unmapped country and language: first available currency
        let unknown = Locale::parse("xx_QQ").unwrap();
        assert_eq!(Currency::for_locale(&unknown), Currency::available()[0]);
        assert_eq!(Currency::for_locale(&Locale::root()), Currency::EUR);
    }

    #[test]
    fn test_default_currency_is_stable() {
        assert_eq!(default_currency(), default_currency());
        assert_eq!(Currency::default(), default_currency());
    }

    #[test]
    fn test_table_is_consistent() {
        for currency in Currency::available() {
            assert_eq!(Currency::from_code(currency.code()), Some(*currency));
            assert_eq!(currency.code().len(), 3);
        }
    }
}
