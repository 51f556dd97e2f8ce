// ============================================================================
// Packed Decimal
// BCD-style nibble packing of digit strings, keeping leading zeros
// ============================================================================

use super::decimal::parse_decimal;
use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The 16 encodable symbols, indexed by their nibble code.
const ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '/', ',', '.', ' ',
];

/// Nibble used to pad an odd number of symbols.
const PADDING: u8 = 0xF;

#[inline]
fn encode_symbol(symbol: char) -> Option<u8> {
    match symbol {
        '0'..='9' => Some(symbol as u8 - b'0'),
        '+' => Some(0xA),
        '-' => Some(0xB),
        '/' => Some(0xC),
        ',' => Some(0xD),
        '.' => Some(0xE),
        ' ' => Some(0xF),
        _ => None,
    }
}

/// Compact representation of a digit string with two symbols per byte.
///
/// Besides the digits `0`-`9` the symbols `+ - / , .` and space can be
/// stored, which covers signed numbers, fractions and grouped numbers such
/// as `"0049 30 1234"`. Leading zeros are preserved, so identifiers like
/// tax numbers survive the packing unchanged.
///
/// # Example
/// ```
/// use fachwert::numeric::PackedDecimal;
///
/// let packed: PackedDecimal = "0815".parse().unwrap();
/// assert_eq!(packed.as_bytes(), &[0x08, 0x15]);
/// assert_eq!(packed.to_string(), "0815");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedDecimal {
    bytes: SmallVec<[u8; 12]>,
    len: usize,
}

impl PackedDecimal {
    /// Number of stored symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no symbol is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed nibbles, high nibble first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate over the decoded symbols.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.bytes
            .iter()
            .flat_map(|byte| [byte >> 4, byte & 0x0F])
            .take(self.len)
            .map(|nibble| ALPHABET[nibble as usize])
    }

    /// Check if the content consists of digits only.
    pub fn is_numeric(&self) -> bool {
        !self.is_empty() && self.symbols().all(|c| c.is_ascii_digit())
    }

    /// Interpret the content as a decimal number.
    ///
    /// A single `,` is accepted as decimal separator; spaces are ignored.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the content is not a plain number.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let text: String = self
            .symbols()
            .filter(|c| *c != ' ')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        parse_decimal(&text)
    }
}

impl PackedDecimal {
    fn pack(nibbles: impl IntoIterator<Item = u8>) -> Self {
        let mut bytes = SmallVec::new();
        let mut len = 0;
        let mut high: Option<u8> = None;

        for nibble in nibbles {
            len += 1;
            match high.take() {
                Some(h) => bytes.push((h << 4) | nibble),
                None => high = Some(nibble),
            }
        }
        if let Some(h) = high {
            bytes.push((h << 4) | PADDING);
        }

        Self { bytes, len }
    }
}

impl FromStr for PackedDecimal {
    type Err = NumericError;

    /// Pack a string of supported symbols.
    ///
    /// # Errors
    /// Returns `InvalidInput` on the first unsupported character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nibbles = s
            .chars()
            .map(|symbol| encode_symbol(symbol).ok_or(NumericError::InvalidInput))
            .collect::<NumericResult<SmallVec<[u8; 24]>>>()?;
        Ok(Self::pack(nibbles))
    }
}

impl From<u64> for PackedDecimal {
    fn from(value: u64) -> Self {
        Self::pack(value.to_string().bytes().map(|b| b - b'0'))
    }
}

impl From<i64> for PackedDecimal {
    fn from(value: i64) -> Self {
        let sign = (value < 0).then_some(0xB);
        let digits = value.unsigned_abs().to_string();
        Self::pack(sign.into_iter().chain(digits.bytes().map(|b| b - b'0')))
    }
}

impl fmt::Display for PackedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PackedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedDecimal(\"{}\", bytes={:02X?})", self, self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl Serialize for PackedDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PackedDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
