// ============================================================================
// Fachwert Library
// Exact monetary amounts, check-digit schemes and validated identifiers
// ============================================================================

//! # Fachwert
//!
//! Value types ("Fachwerte") for business software.
//!
//! ## Features
//!
//! - **Monetary amounts** with exact decimal arithmetic that refuses to mix
//!   currencies and never rounds unless asked to
//! - **Check-digit schemes**: Luhn and other weighted Mod10 variants,
//!   Mod11 (German tax id) and Mod97 (IBAN)
//! - **Packed decimal** storage of digit strings, two digits per byte
//! - **Parsing and formatting** of amounts in German and English notation
//!
//! ## Example
//!
//! ```rust
//! use fachwert::prelude::*;
//!
//! let net = Money::parse("1.000,00 EUR").unwrap();
//! let vat = net.with(&percent(19)).unwrap();
//! let gross = net.add(&vat).unwrap();
//! assert_eq!(gross, Money::of(1190, "EUR").unwrap());
//! assert_eq!(gross.format(&Locale::germany()), "1.190,00 EUR");
//!
//! // thirds do not terminate and must be rounded explicitly
//! assert!(gross.divide(3).is_err());
//! let share = gross.divide_rounded(3, 2, RoundingMode::HalfUp).unwrap();
//! assert_eq!(share.to_string(), "396.67€");
//!
//! let luhn = create_from_config(&CheckDigitType::luhn()).unwrap();
//! assert!(luhn.is_valid("79927398713"));
//! assert!(Iban::is_valid("DE68 2105 0170 0012 3456 78"));
//! ```

pub mod checksum;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::checksum::{create_from_config, Mod10, Mod11, Mod97};
    pub use crate::domain::{
        default_currency, CheckDigitError, CheckDigitType, Currency, Iban, IdentifierError,
        Locale, MonetaryContext, Money, MoneyError, MoneyFactory, MoneyFormatter, MoneyResult,
        RoundingMode, TaxId,
    };
    pub use crate::interfaces::{
        major_part, minor_part, percent, permil, rounding, CheckDigitScheme, MonetaryOperator,
    };
    pub use crate::numeric::{NumericError, PackedDecimal};
}
