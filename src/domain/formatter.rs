// ============================================================================
// Money Formatter
// Locale-aware rendering and parsing of "amount currency-code" text
// ============================================================================

use super::currency::Currency;
use super::errors::{MoneyError, MoneyResult};
use super::locale::Locale;
use super::money::Money;
use crate::numeric::{parse_decimal, round_half_up, NumericError};

/// Renders amounts as `1.234,50 EUR` (German) or `1,234.50 EUR` (English).
///
/// The value is rounded half-up to the currency's fraction digits and
/// always shows exactly that many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneyFormatter {
    locale: Locale,
}

impl MoneyFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Formatter for the process default locale
    pub fn for_default_locale() -> Self {
        Self::new(*Locale::default_locale())
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Format an amount.
    pub fn format(&self, amount: &Money) -> String {
        let currency = amount.currency();
        let digits = currency.fraction_digits();
        let mut value = round_half_up(amount.value(), digits);
        value.rescale(digits);

        let negative = value.is_sign_negative() && !value.is_zero();
        let plain = value.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 5);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(integer));
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(fraction);
        }
        out.push(' ');
        out.push_str(currency.code());
        out
    }

    /// Insert the grouping separator between groups of three digits.
    fn group(&self, integer: &str) -> String {
        let separator = self.locale.grouping_separator();
        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }

    /// Parse text produced by [`format`](Self::format) for this locale.
    ///
    /// # Errors
    /// - `Malformed` if the text is not `<number> <currency>`
    /// - `UnknownCurrency` if the currency token is not known
    pub fn parse(&self, text: &str) -> MoneyResult<Money> {
        let malformed = || MoneyError::Malformed {
            value: text.to_string(),
            context: "amount",
        };

        let (number, token) = text.trim().rsplit_once(' ').ok_or_else(malformed)?;
        let currency = Currency::from_token(token)?;

        let grouping = self.locale.grouping_separator();
        let normalized: String = number
            .trim()
            .chars()
            .filter(|&c| c != grouping)
            .map(|c| if c == self.locale.decimal_separator() { '.' } else { c })
            .collect();

        let value = parse_decimal(&normalized).map_err(|err| match err {
            NumericError::InvalidInput => malformed(),
            other => other.into(),
        })?;
        Ok(Money::new(value, currency))
    }
}
