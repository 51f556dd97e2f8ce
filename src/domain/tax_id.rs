// ============================================================================
// Tax Identification Number
// German Steuer-ID validated with Mod11, stored packed
// ============================================================================

use super::errors::IdentifierError;
use crate::checksum::{Mod11, MOD11_LENGTH};
use crate::interfaces::CheckDigitScheme;
use crate::numeric::PackedDecimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated German tax identification number.
///
/// Exactly eleven digits without separators; the last one is the Mod11
/// check digit. Held as packed decimal so the leading digit survives.
///
/// # Example
/// ```
/// use fachwert::domain::TaxId;
///
/// let id: TaxId = "86095742719".parse().unwrap();
/// assert_eq!(id.to_string(), "86095742719");
/// assert_eq!(id.check_digit(), '9');
/// assert!(!TaxId::is_valid("86095742718"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(PackedDecimal);

impl TaxId {
    /// Validate a tax identification number.
    ///
    /// # Errors
    /// - `Malformed` if the text is not exactly eleven digits
    /// - `Checksum` if the check digit is wrong
    pub fn new(text: &str) -> Result<Self, IdentifierError> {
        let malformed = || IdentifierError::Malformed {
            value: text.to_string(),
            context: "tax_id",
        };

        if text.len() != MOD11_LENGTH || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        Mod11::new()
            .validate(text)
            .map_err(|source| IdentifierError::Checksum {
                context: "tax_id",
                source,
            })?;

        text.parse::<PackedDecimal>()
            .map(TaxId)
            .map_err(|_| malformed())
    }

    /// Check if `text` is a valid tax identification number.
    pub fn is_valid(text: &str) -> bool {
        Self::new(text).is_ok()
    }

    /// Packed representation, six bytes
    pub fn packed(&self) -> &PackedDecimal {
        &self.0
    }

    /// The trailing Mod11 check digit
    pub fn check_digit(&self) -> char {
        self.0.symbols().last().unwrap_or('0')
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaxId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxId::new(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TaxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TaxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        TaxId::new(&text).map_err(serde::de::Error::custom)
    }
}
