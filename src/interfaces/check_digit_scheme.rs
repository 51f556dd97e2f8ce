// ============================================================================
// Check Digit Scheme Interface
// Defines the contract shared by all check-digit ("Pruefziffer") algorithms
// ============================================================================

use crate::domain::{CheckDigitError, CheckDigitResult};
use std::borrow::Cow;

/// Strategy pattern interface for check-digit algorithms
/// Implementations: Mod10 (Luhn, EAN, Code25, Leitcode), Mod11, Mod97
pub trait CheckDigitScheme: Send + Sync {
    /// Get the scheme name for logging
    fn name(&self) -> &str;

    /// Extract the check character(s) already present in `value`.
    ///
    /// No recomputation happens here; the position is scheme-specific.
    fn check_digit(&self, value: &str) -> CheckDigitResult<String>;

    /// Compute the expected check character(s) for `payload`.
    ///
    /// `payload` is what [`strip_check_digit`](Self::strip_check_digit)
    /// returns for a complete value.
    fn compute_check_digit(&self, payload: &str) -> CheckDigitResult<String>;

    /// The payload of a complete value.
    ///
    /// Default: everything but the last character.
    fn strip_check_digit<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match value.char_indices().last() {
            Some((pos, _)) => Cow::Borrowed(&value[..pos]),
            None => Cow::Borrowed(value),
        }
    }

    /// Check if the check digit of `value` is correct.
    ///
    /// Malformed input is simply not valid; this never panics.
    fn is_valid(&self, value: &str) -> bool {
        match (
            self.check_digit(value),
            self.compute_check_digit(&self.strip_check_digit(value)),
        ) {
            (Ok(actual), Ok(expected)) => actual == expected,
            _ => false,
        }
    }

    /// Return `value` unchanged if its check digit is correct.
    ///
    /// # Errors
    /// - `Mismatch` carrying value, expected and actual check digit
    /// - the scheme's shape error if `value` is malformed
    fn validate(&self, value: &str) -> CheckDigitResult<String> {
        let actual = self.check_digit(value)?;
        let expected = self.compute_check_digit(&self.strip_check_digit(value))?;
        if actual == expected {
            Ok(value.to_string())
        } else {
            tracing::debug!(
                scheme = self.name(),
                value,
                %expected,
                %actual,
                "check digit mismatch"
            );
            Err(CheckDigitError::Mismatch {
                value: value.to_string(),
                expected,
                actual,
            })
        }
    }
}
