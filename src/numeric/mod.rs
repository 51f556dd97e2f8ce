// ============================================================================
// Numeric Module
// Exact decimal arithmetic and compact digit encoding
// ============================================================================
//
// This module provides:
// - Scale-aware operations on rust_decimal::Decimal (multiply, divide,
//   divide-with-remainder, scale by powers of ten)
// - NumericError: Error types for arithmetic operations
// - PackedDecimal: BCD-style storage for digit strings
//
// Design principles:
// - No floating-point operations (f64 input goes through its shortest text form)
// - All arithmetic returns Result (no panics)
// - Never round silently: non-terminating or over-long results are errors
//   unless a rounding mode is passed explicitly

mod decimal;
mod errors;
mod packed_decimal;

pub use decimal::{
    divide, divide_and_remainder, divide_rounded, divide_to_integral_value, from_f64,
    is_terminating, multiply, parse_decimal, remainder, round_half_up, scale_by_power_of_ten,
    significant_digits, RoundingMode, MAX_PRECISION, MAX_SCALE,
};
pub use errors::{NumericError, NumericResult};
pub use packed_decimal::PackedDecimal;
