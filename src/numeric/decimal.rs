// ============================================================================
// Exact Decimal Operations
// Scale-aware arithmetic on rust_decimal with explicit precision errors
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of fractional digits the decimal storage can hold.
pub const MAX_SCALE: u32 = 28;

/// Maximum number of significant digits the decimal storage can hold.
pub const MAX_PRECISION: u32 = 28;

/// Largest magnitude an `f64` may have to be converted (just below 2^96).
const F64_LIMIT: f64 = 7.9e28;

// ============================================================================
// Rounding
// ============================================================================

/// Rounding policy for explicitly rounded operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero (commercial rounding)
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
}

impl RoundingMode {
    /// The equivalent rust_decimal strategy.
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Parse a plain decimal string (`-12.50`, `+3`, `0.001`) without rounding.
///
/// # Errors
/// - `PrecisionExceeded` if the fraction has more than [`MAX_SCALE`] digits
/// - `InvalidInput` if the text is not a decimal number or too large
pub fn parse_decimal(text: &str) -> NumericResult<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    if let Some(pos) = text.find('.') {
        let fraction_digits = text[pos + 1..].chars().filter(char::is_ascii_digit).count();
        let fraction_digits = u32::try_from(fraction_digits).unwrap_or(u32::MAX);
        if fraction_digits > MAX_SCALE {
            return Err(NumericError::PrecisionExceeded {
                scale: fraction_digits,
                max_scale: MAX_SCALE,
            });
        }
    }

    Decimal::from_str_exact(text).map_err(|_| NumericError::InvalidInput)
}

/// Convert a float using its shortest round-trip representation,
/// so `0.1` becomes exactly `0.1` rather than its binary expansion.
///
/// # Errors
/// - `InvalidInput` for NaN and infinities
/// - `Overflow` for magnitudes beyond the decimal storage
/// - `PrecisionExceeded` for values needing more than [`MAX_SCALE`] fractional digits
pub fn from_f64(value: f64) -> NumericResult<Decimal> {
    if !value.is_finite() {
        return Err(NumericError::InvalidInput);
    }
    if value.abs() >= F64_LIMIT {
        return Err(NumericError::Overflow);
    }
    parse_decimal(&value.to_string())
}

/// Build a decimal from a scaled integer, dropping trailing zeros
/// when the storage cannot hold the mantissa or scale as given.
fn from_scaled(mut mantissa: i128, mut scale: u32) -> NumericResult<Decimal> {
    loop {
        if scale <= MAX_SCALE {
            if let Ok(value) = Decimal::try_from_i128_with_scale(mantissa, scale) {
                return Ok(value);
            }
            if scale == 0 {
                return Err(NumericError::Overflow);
            }
        }
        if mantissa % 10 != 0 {
            return Err(if scale > MAX_SCALE {
                NumericError::PrecisionExceeded {
                    scale,
                    max_scale: MAX_SCALE,
                }
            } else {
                NumericError::Overflow
            });
        }
        mantissa /= 10;
        scale -= 1;
    }
}

// ============================================================================
// Inspection
// ============================================================================

/// Number of significant digits (trailing zeros of the fraction ignored).
pub fn significant_digits(value: Decimal) -> u32 {
    let mantissa = value.normalize().mantissa().unsigned_abs();
    if mantissa == 0 {
        1
    } else {
        mantissa.ilog10() + 1
    }
}

/// Round half-up (commercial rounding) to `dp` fractional digits.
#[inline]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

/// Exact multiplication; the result scale is `scale(a) + scale(b)`.
///
/// # Errors
/// - `Overflow` if the product is too large
/// - `PrecisionExceeded` if the product needs more than [`MAX_SCALE`] fractional digits
pub fn multiply(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let scale = lhs.scale() + rhs.scale();
    match lhs.mantissa().checked_mul(rhs.mantissa()) {
        Some(product) => from_scaled(product, scale),
        None => {
            // Trailing zeros may be all that overflowed
            let (lhs_n, rhs_n) = (lhs.normalize(), rhs.normalize());
            let product = lhs_n
                .mantissa()
                .checked_mul(rhs_n.mantissa())
                .ok_or(NumericError::Overflow)?;
            from_scaled(product, lhs_n.scale() + rhs_n.scale())
        }
    }
}

/// Whether `dividend / divisor` has a finite decimal expansion.
///
/// True iff the reduced denominator has no prime factors other than 2 and 5.
pub fn is_terminating(dividend: Decimal, divisor: Decimal) -> bool {
    let numerator = dividend.mantissa().unsigned_abs();
    let denominator = divisor.mantissa().unsigned_abs();
    if numerator == 0 || denominator == 0 {
        return true;
    }

    let mut rest = denominator / gcd(numerator, denominator);
    while rest % 2 == 0 {
        rest /= 2;
    }
    while rest % 5 == 0 {
        rest /= 5;
    }
    rest == 1
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Keep the preferred scale when it can be reached without rounding,
/// otherwise the smallest scale representing the value exactly.
fn with_preferred_scale(value: Decimal, preferred: i64) -> Decimal {
    let mut value = value.normalize();
    if preferred > i64::from(value.scale()) {
        value.rescale(preferred.min(i64::from(MAX_SCALE)) as u32);
    }
    value
}

/// Exact division with preferred result scale `scale(a) - scale(b)`.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `NonTerminating` if the quotient has no finite decimal expansion
/// - `PrecisionExceeded` if the finite expansion is longer than the storage
pub fn divide(dividend: Decimal, divisor: Decimal) -> NumericResult<Decimal> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if !is_terminating(dividend, divisor) {
        return Err(NumericError::NonTerminating);
    }

    let quotient = dividend
        .checked_div(divisor)
        .ok_or(NumericError::Overflow)?;
    if quotient.checked_mul(divisor) != Some(dividend) {
        return Err(NumericError::PrecisionExceeded {
            scale: MAX_SCALE + 1,
            max_scale: MAX_SCALE,
        });
    }

    Ok(with_preferred_scale(
        quotient,
        i64::from(dividend.scale()) - i64::from(divisor.scale()),
    ))
}

/// Division rounded to `scale` fractional digits.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `Overflow` if the quotient is too large
pub fn divide_rounded(
    dividend: Decimal,
    divisor: Decimal,
    scale: u32,
    rounding: RoundingMode,
) -> NumericResult<Decimal> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(NumericError::Overflow)?;
    Ok(quotient.round_dp_with_strategy(scale.min(MAX_SCALE), rounding.strategy()))
}

/// Integral quotient and remainder from a single division pass.
///
/// The remainder takes the sign of the dividend and
/// `dividend == quotient * divisor + remainder` holds exactly.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `Overflow` if the quotient is too large
pub fn divide_and_remainder(
    dividend: Decimal,
    divisor: Decimal,
) -> NumericResult<(Decimal, Decimal)> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let remainder = dividend
        .checked_rem(divisor)
        .ok_or(NumericError::Overflow)?;
    let whole = dividend
        .checked_sub(remainder)
        .ok_or(NumericError::Overflow)?;
    let quotient = whole
        .checked_div(divisor)
        .ok_or(NumericError::Overflow)?
        .trunc();

    let preferred = i64::from(dividend.scale()) - i64::from(divisor.scale());
    Ok((with_preferred_scale(quotient, preferred), remainder))
}

/// Integral part of the quotient, truncated towards zero.
pub fn divide_to_integral_value(dividend: Decimal, divisor: Decimal) -> NumericResult<Decimal> {
    divide_and_remainder(dividend, divisor).map(|(quotient, _)| quotient)
}

/// Remainder of the division, carrying the sign of the dividend.
pub fn remainder(dividend: Decimal, divisor: Decimal) -> NumericResult<Decimal> {
    divide_and_remainder(dividend, divisor).map(|(_, remainder)| remainder)
}

/// Multiply by `10^n`, adjusting the scale by `-n`.
///
/// Exact whenever the resulting scale lies within `0..=MAX_SCALE`. A
/// resulting scale above [`MAX_SCALE`] is rounded half-up to `MAX_SCALE`
/// fractional digits, so `scale_by_power_of_ten(-k)` followed by
/// `scale_by_power_of_ten(k)` does not restore the value in that case.
///
/// # Errors
/// Returns `Overflow` if the magnitude no longer fits the storage.
pub fn scale_by_power_of_ten(value: Decimal, n: i32) -> NumericResult<Decimal> {
    let target = i64::from(value.scale()) - i64::from(n);
    let mantissa = value.mantissa();

    if (0..=i64::from(MAX_SCALE)).contains(&target) {
        return Decimal::try_from_i128_with_scale(mantissa, target as u32)
            .map_err(|_| NumericError::Overflow);
    }

    if mantissa == 0 {
        return Ok(Decimal::ZERO);
    }

    if target < 0 {
        let shift = u32::try_from(-target).map_err(|_| NumericError::Overflow)?;
        let factor = 10i128.checked_pow(shift).ok_or(NumericError::Overflow)?;
        let scaled = mantissa
            .checked_mul(factor)
            .ok_or(NumericError::Overflow)?;
        return from_scaled(scaled, 0);
    }

    let excess = u32::try_from(target - i64::from(MAX_SCALE)).unwrap_or(u32::MAX);
    let rounded = shift_right_half_up(mantissa, excess);
    if rounded * 10i128.pow(excess.min(38)) != mantissa {
        debug!(
            value = %value,
            n,
            "scale_by_power_of_ten dropped digits beyond scale {}",
            MAX_SCALE
        );
    }
    Decimal::try_from_i128_with_scale(rounded, MAX_SCALE).map_err(|_| NumericError::Overflow)
}

/// Drop `digits` trailing decimal digits, rounding half away from zero.
fn shift_right_half_up(mantissa: i128, digits: u32) -> i128 {
    // |mantissa| < 2^96 < 10^29, so anything past 30 digits rounds to zero
    if digits > 30 {
        return 0;
    }
    let divisor = 10i128.pow(digits);
    let quotient = mantissa / divisor;
    let rest = mantissa % divisor;
    if rest.abs() * 2 >= divisor {
        quotient + mantissa.signum()
    } else {
        quotient
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("123.45").unwrap(), dec("123.45"));
        assert_eq!(parse_decimal("-0.001").unwrap().scale(), 3);
        assert_eq!(parse_decimal(" 42 ").unwrap(), dec("42"));
        assert_eq!(parse_decimal(""), Err(NumericError::InvalidInput));
        assert_eq!(parse_decimal("abc"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_parse_decimal_rejects_excess_scale() {
        let text = format!("0.{}", "1".repeat(29));
        assert_eq!(
            parse_decimal(&text),
            Err(NumericError::PrecisionExceeded {
                scale: 29,
                max_scale: MAX_SCALE
            })
        );
    }

    #[test]
    fn test_from_f64_uses_shortest_representation() {
        assert_eq!(from_f64(0.1).unwrap(), dec("0.1"));
        assert_eq!(from_f64(-2.5).unwrap(), dec("-2.5"));
        assert_eq!(from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
        assert_eq!(from_f64(1e30), Err(NumericError::Overflow));
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(significant_digits(dec("123.4500")), 5);
        assert_eq!(significant_digits(dec("0")), 1);
        assert_eq!(significant_digits(dec("-0.001")), 1);
    }

    #[test]
    fn test_multiply_scale_is_sum_of_scales() {
        let product = multiply(dec("1.50"), dec("2.0")).unwrap();
        assert_eq!(product, dec("3"));
        assert_eq!(product.scale(), 3);
    }

    #[test]
    fn test_multiply_overflow() {
        let large = dec("10000000000000000000");
        assert_eq!(multiply(large, large), Err(NumericError::Overflow));
    }

    #[test]
    fn test_multiply_precision_exceeded() {
        let tiny = dec("0.00000000000001");
        assert!(matches!(
            multiply(tiny, dec("0.000000000000003")),
            Err(NumericError::PrecisionExceeded { .. })
        ));
    }

    #[test]
    fn test_multiply_drops_redundant_trailing_zeros() {
        let one = dec("1.000000000000000000000000000");
        assert_eq!(multiply(one, one).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_is_terminating() {
        assert!(is_terminating(dec("1"), dec("4")));
        assert!(is_terminating(dec("1"), dec("80")));
        assert!(!is_terminating(dec("1"), dec("3")));
        assert!(is_terminating(dec("3"), dec("3")));
        assert!(is_terminating(dec("0.3"), dec("0.03")));
        assert!(!is_terminating(dec("10"), dec("7")));
    }

    #[test]
    fn test_divide_preferred_scale() {
        let quotient = divide(dec("10.00"), dec("2")).unwrap();
        assert_eq!(quotient, dec("5"));
        assert_eq!(quotient.scale(), 2);

        let quotient = divide(dec("1"), dec("8")).unwrap();
        assert_eq!(quotient, dec("0.125"));
        assert_eq!(quotient.scale(), 3);
    }

    #[test]
    fn test_divide_errors() {
        assert_eq!(divide(dec("1"), Decimal::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(divide(dec("1"), dec("3")), Err(NumericError::NonTerminating));
    }

    #[test]
    fn test_divide_rounded() {
        let third = divide_rounded(dec("1"), dec("3"), 4, RoundingMode::HalfUp).unwrap();
        assert_eq!(third, dec("0.3333"));
        let two_thirds = divide_rounded(dec("2"), dec("3"), 2, RoundingMode::Down).unwrap();
        assert_eq!(two_thirds, dec("0.66"));
        assert_eq!(
            divide_rounded(dec("2"), Decimal::ZERO, 2, RoundingMode::Down),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_and_remainder() {
        let (quotient, rest) = divide_and_remainder(dec("10.5"), dec("3")).unwrap();
        assert_eq!(quotient, dec("3"));
        assert_eq!(rest, dec("1.5"));

        let (quotient, rest) = divide_and_remainder(dec("-7"), dec("2")).unwrap();
        assert_eq!(quotient, dec("-3"));
        assert_eq!(rest, dec("-1"));

        assert_eq!(
            divide_and_remainder(dec("1"), Decimal::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_and_remainder_consistent_with_parts() {
        let (a, b) = (dec("123.456"), dec("7.1"));
        let (quotient, rest) = divide_and_remainder(a, b).unwrap();
        assert_eq!(divide_to_integral_value(a, b).unwrap(), quotient);
        assert_eq!(remainder(a, b).unwrap(), rest);
        assert_eq!(quotient * b + rest, a);
    }

    #[test]
    fn test_scale_by_power_of_ten() {
        let value = dec("1.5");
        let scaled = scale_by_power_of_ten(value, 6).unwrap();
        assert_eq!(scaled, dec("1500000"));
        assert_eq!(scale_by_power_of_ten(scaled, -6).unwrap(), value);

        assert_eq!(scale_by_power_of_ten(dec("12.34"), 1).unwrap(), dec("123.4"));
        assert_eq!(scale_by_power_of_ten(dec("12.34"), -2).unwrap(), dec("0.1234"));
        assert_eq!(scale_by_power_of_ten(dec("7"), 0).unwrap(), dec("7"));
    }

    #[test]
    fn test_scale_by_power_of_ten_lossy_round_trip() {
        let value = dec("0.123");
        let shrunk = scale_by_power_of_ten(value, -27).unwrap();
        assert_eq!(shrunk.scale(), MAX_SCALE);
        let restored = scale_by_power_of_ten(shrunk, 27).unwrap();
        assert_eq!(restored, dec("0.1"));
        assert_ne!(restored, value);
    }

    #[test]
    fn test_scale_by_power_of_ten_overflow() {
        assert_eq!(
            scale_by_power_of_ten(dec("1"), 40),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_scale_zero_by_any_power_of_ten() {
        for n in [39, 40, 1000, i32::MAX, -40, i32::MIN] {
            assert_eq!(scale_by_power_of_ten(Decimal::ZERO, n), Ok(Decimal::ZERO), "n = {n}");
        }
        assert_eq!(scale_by_power_of_ten(dec("0.00"), 50).unwrap().scale(), 0);
    }

    #[test]
    fn test_rounding_modes() {
        let value = dec("2.345");
        assert_eq!(round_half_up(value, 2), dec("2.35"));
        assert_eq!(
            value.round_dp_with_strategy(2, RoundingMode::HalfEven.strategy()),
            dec("2.34")
        );
        assert_eq!(
            dec("-2.341").round_dp_with_strategy(2, RoundingMode::Floor.strategy()),
            dec("-2.35")
        );
    }
}
