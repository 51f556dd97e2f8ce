// ============================================================================
// Mod10 Check Digit Family
// Luhn (credit cards) and weighted Mod10 variants (EAN, Code25, Leitcode)
// ============================================================================

use crate::domain::config::{CheckValue, Direction, Reduction};
use crate::domain::{CheckDigitError, CheckDigitResult};
use crate::interfaces::CheckDigitScheme;

/// Weighted modulo-10 check digit over a string of decimal digits.
///
/// Payload digits are numbered from the end selected by [`Direction`];
/// odd positions are multiplied by the first weight, even positions by the
/// second. Products are reduced per [`Reduction`], summed, and the check
/// digit derived per [`CheckValue`]. The check digit is always the last
/// character of a complete value.
///
/// # Example
/// ```text
/// Luhn, payload 7992739871 (weights 2/1 from the right):
///   1*2 7 8*2 9 3*2 7 2*2 9 9*2 7  -> 2+7+7+9+6+7+4+9+9+7 = 67
///   check = (10 - 67 mod 10) mod 10 = 3   -> 79927398713
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod10 {
    name: &'static str,
    weights: [u32; 2],
    direction: Direction,
    reduction: Reduction,
    check_value: CheckValue,
}

impl Mod10 {
    /// Create a weighted Mod10 scheme.
    pub const fn new(
        weights: (u8, u8),
        direction: Direction,
        reduction: Reduction,
        check_value: CheckValue,
    ) -> Self {
        Self {
            name: "Mod10",
            weights: [weights.0 as u32, weights.1 as u32],
            direction,
            reduction,
            check_value,
        }
    }

    const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Luhn algorithm (credit cards, IMEI): every second digit from the
    /// right doubled, 9 subtracted from two-digit products.
    pub const fn luhn() -> Self {
        Self::new(
            (2, 1),
            Direction::FromRight,
            Reduction::SubtractNine,
            CheckValue::Complement,
        )
        .named("Luhn")
    }

    /// EAN-13 / GTIN: weights 1 and 3 from the left.
    pub const fn ean13() -> Self {
        Self::new(
            (1, 3),
            Direction::FromLeft,
            Reduction::Plain,
            CheckValue::Complement,
        )
        .named("EAN13")
    }

    /// Code 2/5 (interleaved): weights 3 and 1 from the right.
    pub const fn code25() -> Self {
        Self::new(
            (3, 1),
            Direction::FromRight,
            Reduction::Plain,
            CheckValue::Complement,
        )
        .named("Code25")
    }

    /// Deutsche Post Leitcode / Identcode: weights 4 and 9 from the left.
    pub const fn leitcode() -> Self {
        Self::new(
            (4, 9),
            Direction::FromLeft,
            Reduction::Plain,
            CheckValue::Complement,
        )
        .named("Leitcode")
    }

    /// Weighted, reduced digit sum of the payload, modulo 10.
    fn weighted_sum(&self, payload: &str) -> CheckDigitResult<u32> {
        if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CheckDigitError::malformed(payload, "number"));
        }

        let len = payload.len();
        let sum = payload
            .bytes()
            .enumerate()
            .map(|(i, b)| {
                let position = match self.direction {
                    Direction::FromLeft => i,
                    Direction::FromRight => len - 1 - i,
                };
                let product = u32::from(b - b'0') * self.weights[position % 2];
                match self.reduction {
                    Reduction::SubtractNine if product > 9 => product - 9,
                    Reduction::DigitSum => product / 10 + product % 10,
                    _ => product,
                }
            })
            .fold(0, |acc, term| (acc + term) % 10);
        Ok(sum)
    }
}

impl CheckDigitScheme for Mod10 {
    fn name(&self) -> &str {
        self.name
    }

    fn check_digit(&self, value: &str) -> CheckDigitResult<String> {
        match value.chars().last() {
            Some(c) if c.is_ascii_digit() => Ok(c.to_string()),
            _ => Err(CheckDigitError::malformed(value, "number")),
        }
    }

    fn compute_check_digit(&self, payload: &str) -> CheckDigitResult<String> {
        let sum = self.weighted_sum(payload)?;
        let digit = match self.check_value {
            CheckValue::Complement => (10 - sum % 10) % 10,
            CheckValue::Remainder => sum % 10,
        };
        Ok(digit.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
