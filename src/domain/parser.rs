// ============================================================================
// Money Parser
// Text to monetary amount, with self-describing number style
// ============================================================================
//
// Accepted shapes (surrounding whitespace ignored):
//     <currency> <number>     EUR 1.234,56   € 12
//     <number> <currency>     1,234.56 USD   12,50€
//     <number>                12.50 (default currency)
//
// The number style is taken from the number itself: if it matches
// `\d+(\.\d{3})*(,\d+)?` it is German (`.` groups, `,` decimal), otherwise
// English (`,` groups, `.` decimal). Consequently "1,234" is 1.234 and
// "1.234" is 1234, while "1,234.5" and "1234.5" are English.
// ============================================================================

use super::currency::{default_currency, Currency};
use super::errors::{MoneyError, MoneyResult};
use super::money::Money;
use crate::numeric::{parse_decimal, NumericError};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use tracing::trace;

static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<lead>[^\d\s+\-.,]+)\s*)?(?P<number>[+-]?[\d.,]+)(?:\s*(?P<trail>[^\d\s+\-.,]+))?$",
    )
    .expect("Invalid amount regex pattern")
});

static GERMAN_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+(\.\d{3})*(,\d+)?$").expect("Invalid German number regex pattern")
});

fn malformed(text: &str) -> MoneyError {
    MoneyError::Malformed {
        value: text.to_string(),
        context: "amount",
    }
}

/// Parse a monetary amount.
///
/// # Errors
/// - `Malformed` if the text has no recognizable amount shape
/// - `UnknownCurrency` if the currency token is neither a code nor a symbol
/// - `PrecisionExceeded` if the number has too many fractional digits
pub fn parse_money(text: &str) -> MoneyResult<Money> {
    let trimmed = text.trim();
    let captures = AMOUNT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| malformed(text))?;

    let currency = match (captures.name("lead"), captures.name("trail")) {
        (Some(_), Some(_)) => return Err(malformed(text)),
        (Some(token), None) | (None, Some(token)) => Currency::from_token(token.as_str())?,
        (None, None) => default_currency(),
    };

    let number = captures
        .name("number")
        .map(|m| m.as_str())
        .ok_or_else(|| malformed(text))?;
    let value = parse_number(number).map_err(|err| match err {
        NumericError::InvalidInput => malformed(text),
        other => other.into(),
    })?;

    Ok(Money::new(value, currency))
}

/// Check if `text` parses as an amount.
pub fn is_valid(text: &str) -> bool {
    parse_money(text).is_ok()
}

/// Parse a number in German or English style, detected from its punctuation.
pub fn parse_number(number: &str) -> Result<Decimal, NumericError> {
    let normalized = if GERMAN_NUMBER_PATTERN.is_match(number) {
        trace!(number, "German number style");
        number.replace('.', "").replace(',', ".")
    } else {
        trace!(number, "English number style");
        number.replace(',', "")
    };
    parse_decimal(&normalized)
}
