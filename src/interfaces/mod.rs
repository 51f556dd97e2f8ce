// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod check_digit_scheme;
mod monetary_operator;

pub use check_digit_scheme::CheckDigitScheme;
pub use monetary_operator::{
    major_part, minor_part, percent, permil, rounding, rounding_with, CurrencyRounding, MajorPart,
    MinorPart, MonetaryOperator, Percent, Permil,
};
