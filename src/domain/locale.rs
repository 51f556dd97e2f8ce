// ============================================================================
// Locale
// Language and region used for currency defaults and number formatting
// ============================================================================

use crate::utils::detect_locale;
use arrayvec::ArrayString;
use std::fmt;
use std::sync::LazyLock;

/// Process default locale, detected once from the environment
static DEFAULT_LOCALE: LazyLock<Locale> = LazyLock::new(detect_locale);

/// Primary country of a language, used when a locale names no country
static LANGUAGE_COUNTRIES: &[(&str, &str)] = &[
    ("de", "DE"),
    ("en", "US"),
    ("fr", "FR"),
    ("it", "IT"),
    ("es", "ES"),
    ("nl", "NL"),
    ("pt", "PT"),
    ("pl", "PL"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("sv", "SE"),
    ("nb", "NO"),
    ("no", "NO"),
    ("fi", "FI"),
    ("hu", "HU"),
    ("ja", "JP"),
    ("zh", "CN"),
    ("ko", "KR"),
    ("ru", "RU"),
    ("tr", "TR"),
];

/// Languages writing `1.234,50`
const DOT_GROUPING: &[&str] = &["de", "it", "es", "nl", "pt", "da", "tr", "id"];

/// Languages writing `1 234,50`
const SPACE_GROUPING: &[&str] = &["fr", "pl", "cs", "sk", "sv", "nb", "no", "fi", "hu", "ru"];

/// A language with an optional region, as in `de_DE` or `en`.
///
/// The language is stored lowercase, the region uppercase. The root locale
/// has an empty language and no region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: ArrayString<3>,
    country: Option<ArrayString<3>>,
}

impl Locale {
    /// Locale without language or region (`C`/`POSIX`)
    pub fn root() -> Self {
        Self::default()
    }

    /// German as used in Germany
    pub fn germany() -> Self {
        Self::from_parts("de", Some("DE"))
    }

    /// English as used in the United States
    pub fn us() -> Self {
        Self::from_parts("en", Some("US"))
    }

    /// Build a locale from already validated parts.
    fn from_parts(language: &str, country: Option<&str>) -> Self {
        let mut locale = Self::default();
        for c in language.chars().take(3) {
            locale.language.push(c.to_ascii_lowercase());
        }
        locale.country = country.map(|country| {
            let mut region = ArrayString::new();
            for c in country.chars().take(3) {
                region.push(c.to_ascii_uppercase());
            }
            region
        });
        locale
    }

    /// Parse a POSIX locale name or BCP 47 tag.
    ///
    /// Accepts `de`, `de_DE`, `de-DE`, `de_DE.UTF-8` and `de_DE@euro`;
    /// `C` and `POSIX` give the root locale. Returns `None` for anything else.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag == "C" || tag == "POSIX" {
            return Some(Self::root());
        }

        let mut parts = tag.split(['_', '-']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        let country = match parts.next() {
            None => None,
            Some(region) => {
                let alpha = region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic());
                let numeric = region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit());
                if !alpha && !numeric {
                    return None;
                }
                Some(region)
            }
        };
        if parts.next().is_some() {
            return None;
        }

        Some(Self::from_parts(language, country))
    }

    /// The process default locale.
    pub fn default_locale() -> &'static Locale {
        &DEFAULT_LOCALE
    }

    /// ISO 639 language code, empty for the root locale
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 region code
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Primary country of the language, regardless of the locale's region.
    pub fn primary_country(&self) -> Option<&'static str> {
        LANGUAGE_COUNTRIES
            .iter()
            .find(|(language, _)| *language == self.language.as_str())
            .map(|(_, country)| *country)
    }

    /// Character between integer and fraction digits.
    pub fn decimal_separator(&self) -> char {
        self.separators().0
    }

    /// Character between groups of three integer digits.
    pub fn grouping_separator(&self) -> char {
        self.separators().1
    }

    fn separators(&self) -> (char, char) {
        let language = self.language.as_str();
        if matches!(self.country(), Some("CH" | "LI")) {
            ('.', '\'')
        } else if DOT_GROUPING.contains(&language) {
            (',', '.')
        } else if SPACE_GROUPING.contains(&language) {
            (',', ' ')
        } else {
            ('.', ',')
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.language.is_empty(), self.country()) {
            (true, _) => f.write_str("C"),
            (false, Some(country)) => write!(f, "{}_{}", self.language, country),
            (false, None) => f.write_str(&self.language),
        }
    }
}
