// ============================================================================
// Money Factory
// Mutable builder creating monetary amounts under a monetary context
// ============================================================================

use super::config::MonetaryContext;
use super::currency::{default_currency, Currency};
use super::errors::{MoneyError, MoneyResult};
use super::money::Money;
use crate::numeric::{from_f64, parse_decimal, NumericError};
use rust_decimal::Decimal;
use tracing::trace;

/// Builder for monetary amounts.
///
/// Setters change the factory in place; [`create`](Self::create) checks the
/// number against the context and allocates a new amount on every call.
///
/// # Example
/// ```
/// use fachwert::domain::{Currency, MoneyFactory, MonetaryContext};
///
/// let mut factory = MoneyFactory::new();
/// factory
///     .set_number(1999)
///     .set_currency(Currency::EUR)
///     .set_context(MonetaryContext::maximal().with_max_scale(2));
/// let amount = factory.create().unwrap();
/// assert_eq!(amount.to_string(), "1999€");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFactory {
    number: Decimal,
    currency: Currency,
    context: MonetaryContext,
}

impl MoneyFactory {
    /// Zero in the default currency under the default context
    pub fn new() -> Self {
        Self {
            number: Decimal::ZERO,
            currency: default_currency(),
            context: MonetaryContext::default(),
        }
    }

    /// Context bounded to the decimal storage
    pub fn default_context() -> MonetaryContext {
        MonetaryContext::default()
    }

    /// Context without precision or scale bounds
    pub fn maximal_context() -> MonetaryContext {
        MonetaryContext::maximal()
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn set_number(&mut self, number: impl Into<Decimal>) -> &mut Self {
        self.number = number.into();
        self
    }

    /// Set the number from a float via its shortest text form.
    ///
    /// # Errors
    /// Returns a numeric error for NaN, infinities and out-of-range values.
    pub fn set_number_f64(&mut self, number: f64) -> MoneyResult<&mut Self> {
        self.number = from_f64(number)?;
        Ok(self)
    }

    /// Set the number from plain decimal text such as `-12.50`.
    ///
    /// # Errors
    /// Returns `Malformed` if the text is not a decimal number.
    pub fn set_number_str(&mut self, number: &str) -> MoneyResult<&mut Self> {
        self.number = parse_decimal(number).map_err(|err| match err {
            NumericError::InvalidInput => MoneyError::Malformed {
                value: number.to_string(),
                context: "number",
            },
            other => other.into(),
        })?;
        Ok(self)
    }

    pub fn set_currency(&mut self, currency: Currency) -> &mut Self {
        self.currency = currency;
        self
    }

    /// # Errors
    /// Returns `UnknownCurrency` if `code` is not known.
    pub fn set_currency_code(&mut self, code: &str) -> MoneyResult<&mut Self> {
        self.currency = Currency::from_code(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))?;
        Ok(self)
    }

    pub fn set_context(&mut self, context: MonetaryContext) -> &mut Self {
        self.context = context;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn number(&self) -> Decimal {
        self.number
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn context(&self) -> &MonetaryContext {
        &self.context
    }

    /// Create an amount from the current state.
    ///
    /// # Errors
    /// - `InvalidContext` if the context bounds are out of range
    /// - `PrecisionExceeded` if the number does not fit the context
    pub fn create(&self) -> MoneyResult<Money> {
        self.context.validate().map_err(MoneyError::InvalidContext)?;
        self.context.check(self.number)?;
        trace!(number = %self.number, currency = self.currency.code(), "creating amount");
        Ok(Money::new(self.number, self.currency))
    }

    /// Create an amount after rounding the number to the context's scale
    /// bound with the context's rounding mode.
    ///
    /// # Errors
    /// - `InvalidContext` if the context bounds are out of range
    /// - `PrecisionExceeded` if the rounded number breaks the precision bound
    pub fn create_rounded(&self) -> MoneyResult<Money> {
        self.context.validate().map_err(MoneyError::InvalidContext)?;
        let number = self.context.round(self.number);
        self.context.check(number)?;
        trace!(number = %number, currency = self.currency.code(), "creating rounded amount");
        Ok(Money::new(number, self.currency))
    }
}

impl Default for MoneyFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Money> for MoneyFactory {
    fn from(amount: &Money) -> Self {
        Self {
            number: amount.value(),
            currency: amount.currency(),
            context: MonetaryContext::default(),
        }
    }
}
