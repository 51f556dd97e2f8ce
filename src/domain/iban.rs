// ============================================================================
// IBAN
// International Bank Account Number validated with Mod97
// ============================================================================

use super::errors::IdentifierError;
use crate::checksum::Mod97;
use crate::interfaces::CheckDigitScheme;
use arrayvec::ArrayString;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shortest accepted IBAN
pub const IBAN_MIN_LENGTH: usize = 22;

/// Longest IBAN any country issues
pub const IBAN_MAX_LENGTH: usize = 34;

/// Length of the German bank code (Bankleitzahl) following the check digits
const GERMAN_BANK_CODE_LENGTH: usize = 8;

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]+$").expect("Invalid IBAN regex pattern")
});

/// A validated IBAN in compact uppercase form.
///
/// Input is case-insensitive and may contain whitespace, so the printed
/// form `DE68 2105 0170 0012 3456 78` is accepted. Country-specific exact
/// lengths are not checked, only the 22 to 34 character range.
///
/// # Example
/// ```
/// use fachwert::domain::Iban;
///
/// let iban: Iban = "de68 2105 0170 0012 3456 78".parse().unwrap();
/// assert_eq!(iban.as_str(), "DE68210501700012345678");
/// assert_eq!(iban.bank_code(), Some("21050170"));
/// assert!(!Iban::is_valid("DE68 2105 0180 0012 3456 78"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iban(ArrayString<IBAN_MAX_LENGTH>);

impl Iban {
    /// Normalize and validate an IBAN.
    ///
    /// # Errors
    /// - `Malformed` if the text does not have the shape of an IBAN
    /// - `Checksum` if the Mod97 check digits are wrong
    pub fn new(text: &str) -> Result<Self, IdentifierError> {
        let malformed = || IdentifierError::Malformed {
            value: text.to_string(),
            context: "iban",
        };

        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if !(IBAN_MIN_LENGTH..=IBAN_MAX_LENGTH).contains(&normalized.len())
            || !IBAN_PATTERN.is_match(&normalized)
        {
            return Err(malformed());
        }

        Mod97::new()
            .validate(&normalized)
            .map_err(|source| IdentifierError::Checksum {
                context: "iban",
                source,
            })?;

        ArrayString::from(&normalized)
            .map(Iban)
            .map_err(|_| malformed())
    }

    /// Check if `text` is a valid IBAN.
    pub fn is_valid(text: &str) -> bool {
        Self::new(text).is_ok()
    }

    /// Compact form, e.g. `DE68210501700012345678`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166 country code
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// The two Mod97 check digits
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number, everything after the check digits
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// German bank code (BLZ); `None` for other countries.
    pub fn bank_code(&self) -> Option<&str> {
        if self.country_code() == "DE" {
            self.bban().get(..GERMAN_BANK_CODE_LENGTH)
        } else {
            None
        }
    }

    /// Printed form in groups of four: `DE68 2105 0170 0012 3456 78`
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iban::new(s)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Iban::new(&text).map_err(serde::de::Error::custom)
    }
}
