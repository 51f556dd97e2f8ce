// ============================================================================
// Domain Errors
// Validation and arithmetic failures of the value types
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors raised by check-digit schemes.
///
/// `Malformed` and `InvalidLength` mean the value does not even have the
/// expected shape; `Mismatch` means it is well-formed but the check digit
/// disagrees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitError {
    /// Value contains characters the scheme cannot process
    #[error("invalid {context}: '{value}'")]
    Malformed { value: String, context: &'static str },

    /// Value does not have the fixed length the scheme requires
    #[error("'{value}' must have exactly {expected} characters")]
    InvalidLength { value: String, expected: usize },

    /// Check digit present in the value differs from the computed one
    #[error("check digit of '{value}' is '{actual}', expected '{expected}'")]
    Mismatch {
        value: String,
        expected: String,
        actual: String,
    },
}

impl CheckDigitError {
    pub(crate) fn malformed(value: &str, context: &'static str) -> Self {
        CheckDigitError::Malformed {
            value: value.to_string(),
            context,
        }
    }
}

/// Result type alias for check-digit operations
pub type CheckDigitResult<T> = Result<T, CheckDigitError>;

/// Errors raised by monetary amounts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Operands carry different currencies
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Currency code or symbol is not known
    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),

    /// Text is not a monetary amount
    #[error("invalid {context}: '{value}'")]
    Malformed { value: String, context: &'static str },

    /// Monetary context bounds are out of range
    #[error("invalid monetary context: {0}")]
    InvalidContext(String),

    /// Underlying arithmetic failed
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Validation failures of identifier value types (IBAN, tax id).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Value does not have the shape of the identifier
    #[error("invalid {context}: '{value}'")]
    Malformed { value: String, context: &'static str },

    /// Value has the right shape but fails its checksum
    #[error("invalid {context}: {source}")]
    Checksum {
        context: &'static str,
        #[source]
        source: CheckDigitError,
    },
}
