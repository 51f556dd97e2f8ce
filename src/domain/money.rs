// ============================================================================
// Money
// Immutable monetary amount with currency-safe exact arithmetic
// ============================================================================

use super::config::MonetaryContext;
use super::currency::{default_currency, Currency};
use super::errors::{MoneyError, MoneyResult};
use super::factory::MoneyFactory;
use super::formatter::MoneyFormatter;
use super::locale::Locale;
use super::parser;
use crate::interfaces::MonetaryOperator;
use crate::numeric::{self, round_half_up, significant_digits, RoundingMode, MAX_SCALE};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fractional digits compared by the relaxed equality
const EQUALITY_SCALE: u32 = 2;

/// Zero in the default currency, shared by every caller of [`Money::zero`]
static ZERO: LazyLock<Money> = LazyLock::new(|| Money::new(Decimal::ZERO, default_currency()));

#[derive(Debug)]
struct Amount {
    value: Decimal,
    currency: Currency,
}

/// A monetary amount: an exact decimal value and its currency.
///
/// Amounts are immutable and cheap to clone. Arithmetic returns new
/// amounts, except that adding or subtracting zero hands back the other
/// operand itself (see [`Money::ptr_eq`]).
///
/// Equality (`==`, [`Hash`]) is relaxed: two amounts are equal if they have
/// the same currency and agree after rounding both to two fractional
/// digits half-up. [`Money::compare_to`] orders exactly.
///
/// # Example
/// ```
/// use fachwert::domain::{Currency, Money};
///
/// let price = Money::of(19, "EUR").unwrap();
/// let total = price.multiply(3).unwrap();
/// assert_eq!(total, Money::of(57, "EUR").unwrap());
/// assert_eq!(total.to_string(), "57€");
/// assert_eq!("57,00 EUR".parse::<Money>().unwrap(), total);
/// ```
#[derive(Clone)]
pub struct Money(Arc<Amount>);

impl Money {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Create an amount from a decimal value.
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Money(Arc::new(Amount { value, currency }))
    }

    /// Create an amount from a number and a currency code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if `currency_code` is not known.
    pub fn of(value: impl Into<Decimal>, currency_code: &str) -> MoneyResult<Self> {
        let currency = Currency::from_code(currency_code)
            .ok_or_else(|| MoneyError::UnknownCurrency(currency_code.to_string()))?;
        Ok(Self::new(value.into(), currency))
    }

    /// Create an amount from an integer.
    pub fn from_i64(value: i64, currency: Currency) -> Self {
        Self::new(Decimal::from(value), currency)
    }

    /// Create an amount from a float via its shortest text form,
    /// so `0.1` becomes exactly `0.1`.
    ///
    /// # Errors
    /// Returns a numeric error for NaN, infinities and out-of-range values.
    pub fn from_f64(value: f64, currency: Currency) -> MoneyResult<Self> {
        Ok(Self::new(numeric::from_f64(value)?, currency))
    }

    /// The shared zero amount in the default currency.
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// Zero in `currency`; the shared instance for the default currency.
    pub fn zero_in(currency: Currency) -> Self {
        if currency == ZERO.currency() {
            Self::zero()
        } else {
            Self::new(Decimal::ZERO, currency)
        }
    }

    /// Parse text like `12,50 EUR`, `€ 1.234,56` or `USD 1,234.56`.
    ///
    /// Text without a currency token is in the default currency.
    ///
    /// # Errors
    /// - `Malformed` if the text is not an amount
    /// - `UnknownCurrency` if the currency token is not known
    pub fn parse(text: &str) -> MoneyResult<Self> {
        parser::parse_money(text)
    }

    /// Check if `text` parses as an amount.
    pub fn is_valid_text(text: &str) -> bool {
        parser::is_valid(text)
    }

    /// A factory primed with this amount's number and currency.
    pub fn factory(&self) -> MoneyFactory {
        MoneyFactory::from(self)
    }

    /// Same currency, new value.
    pub(crate) fn with_value(&self, value: Decimal) -> Self {
        Self::new(value, self.currency())
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The exact decimal value
    #[inline]
    pub fn value(&self) -> Decimal {
        self.0.value
    }

    /// The currency
    #[inline]
    pub fn currency(&self) -> Currency {
        self.0.currency
    }

    /// Number of fractional digits of the value as stored
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.value.scale()
    }

    /// Number of significant digits
    pub fn precision(&self) -> u32 {
        significant_digits(self.0.value)
    }

    /// Whether both handles refer to the same instance.
    pub fn ptr_eq(this: &Money, other: &Money) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency() == other.currency() {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency().code(),
                actual: other.currency().code(),
            })
        }
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// Sum of two amounts.
    ///
    /// A zero operand is neutral in any currency: the other operand is
    /// returned as is.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `Overflow` if the sum is too large
    pub fn add(&self, other: &Money) -> MoneyResult<Money> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(other.clone());
        }
        self.ensure_same_currency(other)?;
        let sum = self
            .value()
            .checked_add(other.value())
            .ok_or(numeric::NumericError::Overflow)?;
        Ok(self.with_value(sum))
    }

    /// Difference of two amounts; subtracting zero returns `self` as is.
    ///
    /// Unlike [`add`](Self::add), a zero minuend is not neutral: negating
    /// the subtrahend would change its meaning, so `zero - x` still requires
    /// `x` in the currency of the zero.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ, including a zero `self`
    /// - `Overflow` if the difference is too large
    pub fn subtract(&self, other: &Money) -> MoneyResult<Money> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        self.ensure_same_currency(other)?;
        let difference = self
            .value()
            .checked_sub(other.value())
            .ok_or(numeric::NumericError::Overflow)?;
        Ok(self.with_value(difference))
    }

    /// Exact product; the scale is `scale(self) + scale(factor)`.
    pub fn multiply(&self, factor: impl Into<Decimal>) -> MoneyResult<Money> {
        Ok(self.with_value(numeric::multiply(self.value(), factor.into())?))
    }

    /// Exact product with a float factor.
    pub fn multiply_f64(&self, factor: f64) -> MoneyResult<Money> {
        self.multiply(numeric::from_f64(factor)?)
    }

    /// Exact quotient with preferred scale `scale(self) - scale(divisor)`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `NonTerminating` if the quotient has no finite decimal expansion;
    ///   use [`divide_rounded`](Self::divide_rounded) for those
    pub fn divide(&self, divisor: impl Into<Decimal>) -> MoneyResult<Money> {
        Ok(self.with_value(numeric::divide(self.value(), divisor.into())?))
    }

    /// Exact quotient with a float divisor.
    pub fn divide_f64(&self, divisor: f64) -> MoneyResult<Money> {
        self.divide(numeric::from_f64(divisor)?)
    }

    /// Quotient rounded to `scale` fractional digits.
    pub fn divide_rounded(
        &self,
        divisor: impl Into<Decimal>,
        scale: u32,
        rounding: RoundingMode,
    ) -> MoneyResult<Money> {
        let quotient = numeric::divide_rounded(self.value(), divisor.into(), scale, rounding)?;
        Ok(self.with_value(quotient))
    }

    /// Quotient rounded to the context's scale bound with its rounding mode.
    ///
    /// A context without a scale bound rounds to the full decimal storage.
    ///
    /// # Errors
    /// - `InvalidContext` if the context bounds are out of range
    /// - `DivisionByZero` if `divisor` is zero
    /// - `PrecisionExceeded` if the rounded quotient breaks the precision bound
    pub fn divide_in(
        &self,
        divisor: impl Into<Decimal>,
        context: &MonetaryContext,
    ) -> MoneyResult<Money> {
        context.validate().map_err(MoneyError::InvalidContext)?;
        let scale = context.max_scale.unwrap_or(MAX_SCALE);
        let quotient =
            numeric::divide_rounded(self.value(), divisor.into(), scale, context.rounding)?;
        context.check(quotient)?;
        Ok(self.with_value(quotient))
    }

    /// `[divide_to_integral_value(d), remainder(d)]` from one division.
    pub fn divide_and_remainder(&self, divisor: impl Into<Decimal>) -> MoneyResult<[Money; 2]> {
        let (quotient, remainder) = numeric::divide_and_remainder(self.value(), divisor.into())?;
        Ok([self.with_value(quotient), self.with_value(remainder)])
    }

    /// Integral part of the quotient, truncated towards zero.
    pub fn divide_to_integral_value(&self, divisor: impl Into<Decimal>) -> MoneyResult<Money> {
        let quotient = numeric::divide_to_integral_value(self.value(), divisor.into())?;
        Ok(self.with_value(quotient))
    }

    /// Remainder of the division, carrying the sign of `self`.
    pub fn remainder(&self, divisor: impl Into<Decimal>) -> MoneyResult<Money> {
        let remainder = numeric::remainder(self.value(), divisor.into())?;
        Ok(self.with_value(remainder))
    }

    /// Multiply by `10^n`, adjusting the scale by `-n`.
    ///
    /// Exact while the resulting scale stays within the decimal storage.
    /// Beyond it the value is rounded, so scaling back does not restore it.
    pub fn scale_by_power_of_ten(&self, n: i32) -> MoneyResult<Money> {
        Ok(self.with_value(numeric::scale_by_power_of_ten(self.value(), n)?))
    }

    /// Amount with the sign flipped.
    pub fn negate(&self) -> Money {
        self.with_value(-self.value())
    }

    /// Absolute amount; `self` as is if not negative.
    pub fn abs(&self) -> Money {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Unary plus: `self` as is.
    pub fn plus(&self) -> Money {
        self.clone()
    }

    /// Same value without trailing fractional zeros.
    pub fn strip_trailing_zeros(&self) -> Money {
        self.with_value(self.value().normalize())
    }

    /// Commercially rounded to the currency's fraction digits.
    pub fn round_to_currency(&self) -> Money {
        self.with_value(round_half_up(
            self.value(),
            self.currency().fraction_digits(),
        ))
    }

    /// Apply a [`MonetaryOperator`].
    pub fn with<O>(&self, operator: &O) -> MoneyResult<Money>
    where
        O: MonetaryOperator + ?Sized,
    {
        operator.apply(self)
    }

    /// Evaluate a query against this amount.
    pub fn query<R>(&self, query: impl FnOnce(&Money) -> R) -> R {
        query(self)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// `-1`, `0` or `1` according to the sign of the value
    pub fn signum(&self) -> i32 {
        if self.value().is_zero() {
            0
        } else if self.value().is_sign_negative() {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    #[inline]
    pub fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    #[inline]
    pub fn is_negative_or_zero(&self) -> bool {
        self.signum() <= 0
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Total order over amounts.
    ///
    /// Same-currency amounts compare by value. Amounts in different
    /// currencies compare by currency code alone, ignoring the value, with
    /// the alphabetically earlier code ranking higher: `1 CHF` is greater
    /// than `1000 GBP`. Conformance suites depend on this ordering.
    pub fn compare_to(&self, other: &Money) -> Ordering {
        if self.currency() == other.currency() {
            self.value().cmp(&other.value())
        } else {
            other.currency().cmp(&self.currency())
        }
    }

    /// Value rounded for the relaxed equality
    fn equality_value(&self) -> Decimal {
        round_half_up(self.value(), EQUALITY_SCALE).normalize()
    }

    /// Relaxed equality of two amounts in the same currency.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_equal_to(&self, other: &Money) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.equality_value() == other.equality_value())
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_greater_than(&self, other: &Money) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.value() > other.value())
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_greater_than_or_equal_to(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.is_greater_than(other)? || self.is_equal_to(other)?)
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_less_than(&self, other: &Money) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.value() < other.value())
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_less_than_or_equal_to(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.is_less_than(other)? || self.is_equal_to(other)?)
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Locale-aware rendering such as `1.234,50 EUR`.
    pub fn format(&self, locale: &Locale) -> String {
        MoneyFormatter::new(*locale).format(self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency() == other.currency() && self.equality_value() == other.equality_value()
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency().hash(state);
        self.equality_value().hash(state);
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl fmt::Display for Money {
    /// Value immediately followed by the currency symbol: `12.50€`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.currency().symbol())
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({} {})", self.value(), self.currency().code())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    value: Decimal,
    currency: Currency,
}

#[cfg(feature = "serde")]
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRepr {
            value: self.value(),
            currency: self.currency(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MoneyRepr::deserialize(deserializer)?;
        Ok(Money::new(repr.value, repr.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn eur(s: &str) -> Money {
        Money::new(dec(s), Currency::EUR)
    }

    fn usd(s: &str) -> Money {
        Money::new(dec(s), Currency::USD)
    }

    #[test]
    fn test_construction() {
        let amount = Money::of(42, "EUR").unwrap();
        assert_eq!(amount.value(), Decimal::from(42));
        assert_eq!(amount.currency(), Currency::EUR);

        assert_eq!(
            Money::of(1, "XYZ").unwrap_err(),
            MoneyError::UnknownCurrency("XYZ".to_string())
        );

        assert_eq!(Money::from_f64(0.1, Currency::EUR).unwrap().value(), dec("0.1"));
        assert!(Money::from_f64(f64::NAN, Currency::EUR).is_err());
        assert_eq!(Money::from_i64(-7, Currency::USD).value(), Decimal::from(-7));
    }

    #[test]
    fn test_zero_is_shared() {
        assert!(Money::ptr_eq(&Money::zero(), &Money::zero()));
        assert!(Money::ptr_eq(&Money::zero_in(default_currency()), &Money::zero()));
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_zero_operand_identity() {
        let amount = eur("12.34");
        let zero = Money::zero();

        assert!(Money::ptr_eq(&amount.add(&zero).unwrap(), &amount));
        assert!(Money::ptr_eq(&zero.add(&amount).unwrap(), &amount));
        assert!(Money::ptr_eq(&amount.subtract(&zero).unwrap(), &amount));

        // a fresh result otherwise
        let sum = amount.add(&eur("1")).unwrap();
        assert!(!Money::ptr_eq(&sum, &amount));
    }

    #[test]
    fn test_add_subtract() {
        assert_eq!(eur("10.50").add(&eur("0.25")).unwrap().value(), dec("10.75"));
        assert_eq!(eur("10.50").subtract(&eur("0.75")).unwrap().value(), dec("9.75"));
        assert_eq!(Money::zero_in(Currency::USD).subtract(&usd("3")).unwrap().value(), dec("-3"));
    }

    #[test]
    fn test_zero_minuend_keeps_its_currency() {
        let zero = Money::zero_in(Currency::EUR);
        assert_eq!(zero.add(&usd("5")).unwrap(), usd("5"));
        assert_eq!(
            zero.subtract(&usd("5")).unwrap_err(),
            MoneyError::CurrencyMismatch {
                expected: "EUR",
                actual: "USD",
            }
        );
    }

    #[test]
    fn test_currency_mismatch() {
        let expected = MoneyError::CurrencyMismatch {
            expected: "EUR",
            actual: "USD",
        };
        assert_eq!(eur("1").add(&usd("1")).unwrap_err(), expected);
        assert_eq!(eur("1").subtract(&usd("1")).unwrap_err(), expected);
        assert_eq!(eur("1").is_equal_to(&usd("1")).unwrap_err(), expected);
        assert_eq!(eur("1").is_greater_than(&usd("1")).unwrap_err(), expected);
    }

    #[test]
    fn test_multiply_scale() {
        let product = eur("1.50").multiply(dec("2.0")).unwrap();
        assert_eq!(product.value(), dec("3.000"));
        assert_eq!(product.scale(), 3);
        assert_eq!(eur("0.1").multiply_f64(3.0).unwrap().value(), dec("0.3"));
    }

    #[test]
    fn test_divide() {
        let quotient = eur("10.00").divide(4).unwrap();
        assert_eq!(quotient.value(), dec("2.50"));
        assert_eq!(quotient.scale(), 2);

        assert_eq!(
            eur("10").divide(3).unwrap_err(),
            MoneyError::Numeric(NumericError::NonTerminating)
        );
        assert_eq!(
            eur("10").divide(0).unwrap_err(),
            MoneyError::Numeric(NumericError::DivisionByZero)
        );
        assert_eq!(eur("1").divide_f64(0.5).unwrap().value(), dec("2"));

        let third = eur("10").divide_rounded(3, 2, RoundingMode::HalfUp).unwrap();
        assert_eq!(third.value(), dec("3.33"));
    }

    #[test]
    fn test_divide_and_remainder() {
        let [quotient, remainder] = eur("10.50").divide_and_remainder(4).unwrap();
        assert_eq!(quotient.value(), dec("2"));
        assert_eq!(remainder.value(), dec("2.50"));
        assert_eq!(quotient, eur("10.50").divide_to_integral_value(4).unwrap());
        assert_eq!(remainder, eur("10.50").remainder(4).unwrap());

        let [quotient, remainder] = eur("-7").divide_and_remainder(2).unwrap();
        assert_eq!(quotient.value(), dec("-3"));
        assert_eq!(remainder.value(), dec("-1"));
    }

    #[test]
    fn test_scale_by_power_of_ten_round_trip() {
        let amount = eur("123.45");
        let scaled = amount.scale_by_power_of_ten(6).unwrap();
        assert_eq!(scaled.value(), dec("123450000"));
        let back = scaled.scale_by_power_of_ten(-6).unwrap();
        assert_eq!(back.value(), amount.value());
    }

    #[test]
    fn test_lossy_scale_by_power_of_ten_does_not_fail() {
        let amount = eur("0.123456789");
        let tiny = amount.scale_by_power_of_ten(-25).unwrap();
        let back = tiny.scale_by_power_of_ten(25).unwrap();
        assert_ne!(back.value(), amount.value());
    }

    #[test]
    fn test_divide_in_context() {
        let half_up = MonetaryContext::maximal().with_max_scale(2);
        let half_even = half_up.with_rounding(RoundingMode::HalfEven);

        // 4.69 / 2 = 2.345
        assert_eq!(eur("4.69").divide_in(2, &half_up).unwrap().value(), dec("2.35"));
        assert_eq!(eur("4.69").divide_in(2, &half_even).unwrap().value(), dec("2.34"));

        let third = eur("1").divide_in(3, &MonetaryContext::maximal()).unwrap();
        assert_eq!(third.scale(), MAX_SCALE);
        assert_eq!(third.currency(), Currency::EUR);

        assert_eq!(
            eur("1").divide_in(0, &half_up).unwrap_err(),
            MoneyError::Numeric(NumericError::DivisionByZero)
        );
        assert!(matches!(
            eur("1").divide_in(3, &half_up.with_precision(0)),
            Err(MoneyError::InvalidContext(_))
        ));
    }

    #[test]
    fn test_scale_zero_far_beyond_storage() {
        let zero = Money::zero_in(Currency::EUR);
        assert!(zero.scale_by_power_of_ten(40).unwrap().is_zero());
        assert!(zero.scale_by_power_of_ten(-40).unwrap().is_zero());
        assert!(eur("1").scale_by_power_of_ten(40).is_err());
    }

    #[test]
    fn test_sign_operations() {
        let amount = eur("-3.5");
        assert_eq!(amount.signum(), -1);
        assert!(amount.is_negative());
        assert!(amount.is_negative_or_zero());
        assert!(!amount.is_positive_or_zero());
        assert_eq!(amount.negate().value(), dec("3.5"));
        assert_eq!((-&amount).value(), dec("3.5"));
        assert_eq!(amount.abs().value(), dec("3.5"));
        assert!(Money::ptr_eq(&amount.plus(), &amount));

        let positive = eur("2");
        assert!(Money::ptr_eq(&positive.abs(), &positive));
        assert_eq!(Money::zero().signum(), 0);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(eur("1.2300").strip_trailing_zeros().scale(), 2);
        assert_eq!(eur("1.005").round_to_currency().value(), dec("1.01"));
        let yen = Money::new(dec("1234.5"), Currency::JPY);
        assert_eq!(yen.round_to_currency().value(), dec("1235"));
    }

    #[test]
    fn test_compare_to_same_currency() {
        assert_eq!(eur("1").compare_to(&eur("2")), Ordering::Less);
        assert_eq!(eur("2.0").compare_to(&eur("2.00")), Ordering::Equal);
    }

    #[test]
    fn test_compare_to_cross_currency_uses_code_only() {
        let chf = Money::of(1, "CHF").unwrap();
        let gbp = Money::of(1, "GBP").unwrap();
        assert_eq!(chf.compare_to(&gbp), Ordering::Greater);
        assert_eq!(gbp.compare_to(&chf), Ordering::Less);
        assert!(Money::of(1, "CHF").unwrap().compare_to(&Money::of(1000, "GBP").unwrap()).is_gt());
        assert!(Money::of(1000, "USD").unwrap().compare_to(&Money::of(1, "EUR").unwrap()).is_lt());
    }

    #[test]
    fn test_relaxed_equality() {
        assert_eq!(eur("1.001"), eur("1.00"));
        assert_eq!(eur("1.005"), eur("1.01"));
        assert_ne!(eur("1.01"), eur("1.02"));
        assert_ne!(eur("1"), usd("1"));
        assert!(eur("0.333333").is_equal_to(&eur("0.33")).unwrap());

        let set: HashSet<Money> = [eur("1.0"), eur("1.00"), eur("1.001")].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_predicates() {
        assert!(eur("2").is_greater_than(&eur("1")).unwrap());
        assert!(eur("1").is_less_than(&eur("2")).unwrap());
        assert!(eur("1.001").is_greater_than_or_equal_to(&eur("1.002")).unwrap());
        assert!(eur("1").is_less_than_or_equal_to(&eur("1")).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(eur("12.50").to_string(), "12.50€");
        assert_eq!(Money::of(5, "CHF").unwrap().to_string(), "5CHF");
        assert_eq!(format!("{:?}", usd("1.5")), "Money(1.5 USD)");
    }

    #[test]
    fn test_query_and_factory() {
        let amount = eur("12.34");
        assert_eq!(amount.query(|m| m.scale()), 2);
        let copy = amount.factory().create().unwrap();
        assert_eq!(copy, amount);
        assert!(!Money::ptr_eq(&copy, &amount));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let amount = eur("12.34");
        let json = serde_json::to_string(&amount).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), amount.value());
        assert_eq!(back.currency(), Currency::EUR);
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=4)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_restores(a in amount_strategy(), b in amount_strategy()) {
            let a = Money::new(a, Currency::EUR);
            let b = Money::new(b, Currency::EUR);
            let back = a.add(&b).unwrap().subtract(&b).unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn prop_compare_to_is_antisymmetric(a in amount_strategy(), b in amount_strategy()) {
            let a = Money::new(a, Currency::USD);
            let b = Money::new(b, Currency::USD);
            prop_assert_eq!(a.compare_to(&b), b.compare_to(&a).reverse());
        }
    }
}
