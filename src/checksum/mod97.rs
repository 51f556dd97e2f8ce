// ============================================================================
// Mod97 Check Digits
// ISO 7064 MOD 97-10 as used by the IBAN
// ============================================================================

use crate::domain::{CheckDigitError, CheckDigitResult};
use crate::interfaces::CheckDigitScheme;
use std::borrow::Cow;

/// Position of the two check digits after the country code.
const CHECK_RANGE: std::ops::Range<usize> = 2..4;

/// Two-digit Mod97 check value stored at offsets 2-3.
///
/// The check is computed on the value rearranged as
/// `<rest><country><00>` with letters replaced by `A=10 .. Z=35`. The
/// resulting digit string is far longer than any machine integer (an IBAN
/// expands to 30+ digits), so its remainder modulo 97 is taken piecewise:
/// `r = (r * 10^k + chunk) mod 97` gives the exact remainder of the whole
/// number for strings of any length.
///
/// # Example
/// ```
/// use fachwert::checksum::Mod97;
/// use fachwert::interfaces::CheckDigitScheme;
///
/// let mod97 = Mod97::new();
/// assert_eq!(mod97.compute_check_digit("DE00210501700012345678").unwrap(), "68");
/// assert!(mod97.is_valid("DE68210501700012345678"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod97;

impl Mod97 {
    pub const fn new() -> Self {
        Self
    }

    /// Country code, two check characters and at least one more character,
    /// all ASCII alphanumeric.
    fn check_shape(value: &str) -> CheckDigitResult<()> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() > CHECK_RANGE.end
            && bytes.iter().all(u8::is_ascii_alphanumeric)
            && bytes[..CHECK_RANGE.start].iter().all(u8::is_ascii_alphabetic);
        if well_formed {
            Ok(())
        } else {
            Err(CheckDigitError::malformed(value, "iban"))
        }
    }

    /// Remainder modulo 97 of the value rearranged for checking.
    fn remainder(value: &str) -> u32 {
        let (head, rest) = value.split_at(CHECK_RANGE.end);
        rest.bytes()
            .chain(head[..CHECK_RANGE.start].bytes())
            .chain(*b"00")
            .fold(0u32, |acc, b| match b {
                b'0'..=b'9' => (acc * 10 + u32::from(b - b'0')) % 97,
                _ => (acc * 100 + u32::from(b.to_ascii_uppercase() - b'A') + 10) % 97,
            })
    }
}

impl CheckDigitScheme for Mod97 {
    fn name(&self) -> &str {
        "Mod97"
    }

    fn check_digit(&self, value: &str) -> CheckDigitResult<String> {
        Self::check_shape(value)?;
        let check = &value[CHECK_RANGE];
        if check.bytes().all(|b| b.is_ascii_digit()) {
            Ok(check.to_string())
        } else {
            Err(CheckDigitError::malformed(value, "iban"))
        }
    }

    /// Compute the check digits; the characters at offsets 2-3 are ignored.
    fn compute_check_digit(&self, value: &str) -> CheckDigitResult<String> {
        Self::check_shape(value)?;
        Ok(format!("{:02}", 98 - Self::remainder(value)))
    }

    /// Replace the check digits with the `00` placeholder.
    fn strip_check_digit<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match (value.get(..CHECK_RANGE.start), value.get(CHECK_RANGE.end..)) {
            (Some(country), Some(rest)) => Cow::Owned(format!("{country}00{rest}")),
            _ => Cow::Borrowed(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compute_check_digit() {
        assert_eq!(
            Mod97.compute_check_digit("DE00210501700012345678").unwrap(),
            "68"
        );
        assert_eq!(
            Mod97.compute_check_digit("GB00WEST12345698765432").unwrap(),
            "82"
        );
    }

    #[test]
    fn test_real_ibans() {
        for iban in [
            "DE68210501700012345678",
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "FR1420041010050500013M02606",
            "CH9300762011623852957",
            "NL91ABNA0417164300",
        ] {
            assert!(Mod97.is_valid(iban), "{iban} should be valid");
        }
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert!(Mod97.is_valid("gb82west12345698765432"));
    }

    #[test]
    fn test_mutated_bank_code_is_invalid() {
        assert!(!Mod97.is_valid("DE68210501800012345678"));
        assert_eq!(
            Mod97.validate("DE68210501800012345678"),
            Err(CheckDigitError::Mismatch {
                value: "DE68210501800012345678".to_string(),
                expected: Mod97
                    .compute_check_digit("DE00210501800012345678")
                    .unwrap(),
                actual: "68".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed() {
        for value in ["", "DE6", "DE68 2105", "12682105", "DEXX210501700012345678"] {
            assert!(
                matches!(Mod97.validate(value), Err(CheckDigitError::Malformed { .. })),
                "{value} should be malformed"
            );
            assert!(!Mod97.is_valid(value));
        }
    }

    #[test]
    fn test_strip_check_digit() {
        assert_eq!(
            Mod97.strip_check_digit("DE68210501700012345678"),
            "DE00210501700012345678"
        );
        assert_eq!(Mod97.strip_check_digit("D"), "D");
    }

    proptest! {
        #[test]
        fn prop_single_digit_mutation_rarely_survives(
            bban in "[0-9]{18}",
            index in 0usize..18,
            delta in 1u8..10,
        ) {
            let payload = format!("DE00{bban}");
            let check = Mod97.compute_check_digit(&payload).unwrap();
            let iban = format!("DE{check}{bban}");
            prop_assert!(Mod97.is_valid(&iban));

            // a single substituted digit changes the remainder by d * 10^k mod 97,
            // which is never zero for 0 < d < 10
            let mut bytes = iban.into_bytes();
            let i = 4 + index;
            bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
            let mutated = String::from_utf8(bytes).unwrap();
            prop_assert!(!Mod97.is_valid(&mutated));
        }
    }
}
