// ============================================================================
// Monetary Operator Interface
// Transformations of a monetary amount into another amount
// ============================================================================

use crate::domain::{Money, MoneyResult};
use crate::numeric::RoundingMode;
use rust_decimal::Decimal;

/// An operation mapping an amount to a new amount, applied via
/// [`Money::with`].
///
/// Any `Fn(&Money) -> MoneyResult<Money>` closure is an operator.
pub trait MonetaryOperator {
    /// Apply the operation to `amount`.
    fn apply(&self, amount: &Money) -> MoneyResult<Money>;
}

impl<F> MonetaryOperator for F
where
    F: Fn(&Money) -> MoneyResult<Money>,
{
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        self(amount)
    }
}

// ============================================================================
// Built-in Operators
// ============================================================================

/// Percentage of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(Decimal);

impl MonetaryOperator for Percent {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        amount.multiply(self.0)?.divide(100)
    }
}

/// Per-mille share of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permil(Decimal);

impl MonetaryOperator for Permil {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        amount.multiply(self.0)?.divide(1000)
    }
}

/// Integer part of an amount (`12.34 EUR` to `12 EUR`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MajorPart;

impl MonetaryOperator for MajorPart {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        Ok(amount.with_value(amount.value().trunc()))
    }
}

/// Fractional part of an amount (`12.34 EUR` to `0.34 EUR`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinorPart;

impl MonetaryOperator for MinorPart {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        Ok(amount.with_value(amount.value().fract()))
    }
}

/// Rounds to the fraction digits of the amount's currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyRounding(RoundingMode);

impl MonetaryOperator for CurrencyRounding {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        let digits = amount.currency().fraction_digits();
        let value = amount
            .value()
            .round_dp_with_strategy(digits, self.0.strategy());
        Ok(amount.with_value(value))
    }
}

/// `p` percent of an amount.
pub fn percent(p: impl Into<Decimal>) -> Percent {
    Percent(p.into())
}

/// `p` per mille of an amount.
pub fn permil(p: impl Into<Decimal>) -> Permil {
    Permil(p.into())
}

/// Integer part of an amount.
pub fn major_part() -> MajorPart {
    MajorPart
}

/// Fractional part of an amount.
pub fn minor_part() -> MinorPart {
    MinorPart
}

/// Commercial rounding to the currency's fraction digits.
pub fn rounding() -> CurrencyRounding {
    CurrencyRounding(RoundingMode::HalfUp)
}

/// Rounding to the currency's fraction digits with an explicit mode.
pub fn rounding_with(mode: RoundingMode) -> CurrencyRounding {
    CurrencyRounding(mode)
}
