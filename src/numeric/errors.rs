// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur during decimal arithmetic and digit encoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable magnitude
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Quotient has no finite decimal expansion and no rounding was requested
    #[error("non-terminating decimal expansion; no exact representable decimal result")]
    NonTerminating,

    /// Value carries more fractional digits than the target representation allows
    #[error("precision exceeded: scale {scale} is larger than the maximum of {max_scale}")]
    PrecisionExceeded { scale: u32, max_scale: u32 },

    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
