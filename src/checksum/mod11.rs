// ============================================================================
// Mod11 Check Digit
// ISO 7064 MOD 11,10 as used by the German tax identification number
// ============================================================================

use crate::domain::{CheckDigitError, CheckDigitResult};
use crate::interfaces::CheckDigitScheme;

/// Length of a complete value (payload plus check digit).
pub const MOD11_LENGTH: usize = 11;

/// Iterative Mod11 check digit over exactly ten payload digits.
///
/// Unlike the positional weights of [`Mod10`](super::Mod10), the check digit
/// is derived from a running product:
///
/// ```text
/// product = 10
/// for each payload digit d (left to right):
///     sum     = (d + product) mod 10, with 0 replaced by 10
///     product = (sum * 2) mod 11
/// check = 11 - product, with 10 replaced by 0
/// ```
///
/// Values of any other length violate the scheme's precondition and are
/// rejected with [`CheckDigitError::InvalidLength`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod11;

impl Mod11 {
    pub const fn new() -> Self {
        Self
    }

    fn digits(value: &str, expected: usize) -> CheckDigitResult<impl Iterator<Item = u32> + '_> {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CheckDigitError::malformed(value, "number"));
        }
        if value.len() != expected {
            return Err(CheckDigitError::InvalidLength {
                value: value.to_string(),
                expected,
            });
        }
        Ok(value.bytes().map(|b| u32::from(b - b'0')))
    }
}

impl CheckDigitScheme for Mod11 {
    fn name(&self) -> &str {
        "Mod11"
    }

    fn check_digit(&self, value: &str) -> CheckDigitResult<String> {
        let check = Self::digits(value, MOD11_LENGTH)?
            .last()
            .ok_or_else(|| CheckDigitError::malformed(value, "number"))?;
        Ok(check.to_string())
    }

    fn compute_check_digit(&self, payload: &str) -> CheckDigitResult<String> {
        let mut product = 10;
        for digit in Self::digits(payload, MOD11_LENGTH - 1)? {
            let mut sum = (digit + product) % 10;
            if sum == 0 {
                sum = 10;
            }
            product = (sum * 2) % 11;
        }

        let check = match 11 - product {
            10 => 0,
            other => other,
        };
        Ok(check.to_string())
    }
}
