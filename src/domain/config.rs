// ============================================================================
// Configuration
// Monetary contexts and check-digit scheme descriptions
// ============================================================================

use crate::numeric::{significant_digits, NumericError, NumericResult, MAX_PRECISION, MAX_SCALE};
use rust_decimal::Decimal;

pub use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Mod10 Parameters
// ============================================================================

/// Which end of the payload counts as position 1 for weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Leftmost payload digit is position 1 (EAN, Leitcode)
    FromLeft,
    /// Rightmost payload digit is position 1 (Luhn, Code25)
    FromRight,
}

/// How a weighted digit is folded into the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reduction {
    /// Products of 10 or more have 9 subtracted (Luhn)
    SubtractNine,
    /// Products are replaced by their digit sum
    DigitSum,
    /// Products are summed as they are
    Plain,
}

/// How the check digit is derived from the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckValue {
    /// `(10 - sum mod 10) mod 10`
    Complement,
    /// `sum mod 10`
    Remainder,
}

// ============================================================================
// Check Digit Scheme Type
// ============================================================================

/// Defines the check-digit scheme to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckDigitType {
    /// Freely weighted Mod10
    Mod10 {
        /// Weights of odd and even positions
        weights: (u8, u8),
        /// End of the payload holding position 1
        direction: Direction,
        /// Folding of products into the sum
        reduction: Reduction,
        /// Derivation of the check digit from the sum
        check_value: CheckValue,
    },

    /// Luhn (credit cards, IMEI)
    Luhn,

    /// EAN-13 / GTIN barcodes
    Ean13,

    /// Interleaved 2 of 5 barcodes
    Code25,

    /// Deutsche Post Leitcode / Identcode
    Leitcode,

    /// ISO 7064 MOD 11,10 (German tax identification number)
    Mod11,

    /// ISO 7064 MOD 97-10 (IBAN)
    Mod97,
}

impl CheckDigitType {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let CheckDigitType::Mod10 { weights, .. } = self {
            let valid = |w: u8| (1..=9).contains(&w);
            if !valid(weights.0) || !valid(weights.1) {
                return Err("Mod10 weights must be between 1 and 9".to_string());
            }
        }
        Ok(())
    }

    /// Credit card numbers
    pub const fn luhn() -> Self {
        CheckDigitType::Luhn
    }

    /// EAN-13 barcodes
    pub const fn ean13() -> Self {
        CheckDigitType::Ean13
    }

    /// Interleaved 2 of 5 barcodes
    pub const fn code25() -> Self {
        CheckDigitType::Code25
    }

    /// Deutsche Post Leitcode
    pub const fn leitcode() -> Self {
        CheckDigitType::Leitcode
    }

    /// German tax identification number
    pub const fn tax_id() -> Self {
        CheckDigitType::Mod11
    }

    /// International Bank Account Number
    pub const fn iban() -> Self {
        CheckDigitType::Mod97
    }
}

// ============================================================================
// Monetary Context
// ============================================================================

/// Precision and rounding policy for creating monetary amounts
///
/// `None` bounds mean "no limit beyond the decimal storage itself".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonetaryContext {
    /// Maximum number of significant digits
    pub precision: Option<u32>,

    /// Maximum number of fractional digits
    pub max_scale: Option<u32>,

    /// Rounding applied by explicitly rounding operations
    pub rounding: RoundingMode,
}

impl MonetaryContext {
    /// Create a new context
    pub const fn new(precision: Option<u32>, max_scale: Option<u32>, rounding: RoundingMode) -> Self {
        Self {
            precision,
            max_scale,
            rounding,
        }
    }

    /// Context without precision or scale bounds
    pub const fn maximal() -> Self {
        Self::new(None, None, RoundingMode::HalfUp)
    }

    /// Builder method: Set the precision bound
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder method: Set the scale bound
    pub fn with_max_scale(mut self, max_scale: u32) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Builder method: Set the rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Check if the context imposes no bounds
    pub fn is_maximal(&self) -> bool {
        self.precision.is_none() && self.max_scale.is_none()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(precision) = self.precision {
            if precision == 0 || precision > MAX_PRECISION {
                return Err(format!("Precision must be between 1 and {}", MAX_PRECISION));
            }
        }
        if let Some(max_scale) = self.max_scale {
            if max_scale > MAX_SCALE {
                return Err(format!("Maximum scale cannot exceed {}", MAX_SCALE));
            }
        }
        Ok(())
    }

    /// Round `value` to the scale bound with this context's rounding mode.
    ///
    /// Values already within the bound, and every value under a context
    /// without a scale bound, are returned unchanged.
    pub fn round(&self, value: Decimal) -> Decimal {
        match self.max_scale {
            Some(max_scale) if value.scale() > max_scale => {
                value.round_dp_with_strategy(max_scale, self.rounding.strategy())
            }
            _ => value,
        }
    }

    /// Check `value` against the bounds of this context.
    ///
    /// Trailing fractional zeros do not count; nothing is rounded.
    ///
    /// # Errors
    /// Returns `PrecisionExceeded` if the value needs more digits than allowed.
    pub fn check(&self, value: Decimal) -> NumericResult<()> {
        let scale = value.normalize().scale();
        if let Some(max_scale) = self.max_scale {
            if scale > max_scale {
                return Err(NumericError::PrecisionExceeded { scale, max_scale });
            }
        }
        if let Some(precision) = self.precision {
            let digits = significant_digits(value);
            if digits > precision {
                let integer_digits = digits.saturating_sub(scale);
                return Err(NumericError::PrecisionExceeded {
                    scale,
                    max_scale: precision.saturating_sub(integer_digits),
                });
            }
        }
        Ok(())
    }
}

impl Default for MonetaryContext {
    /// Bounded to what the decimal storage can represent
    fn default() -> Self {
        Self::new(Some(MAX_PRECISION), Some(MAX_SCALE), RoundingMode::HalfUp)
    }
}
