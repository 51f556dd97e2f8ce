// ============================================================================
// Domain Models Module
// Value types: monetary amounts, currencies and validated identifiers
// ============================================================================

pub mod config;
pub mod errors;

mod currency;
mod factory;
mod formatter;
mod iban;
mod locale;
mod money;
mod parser;
mod tax_id;

pub use config::{CheckDigitType, CheckValue, Direction, MonetaryContext, Reduction, RoundingMode};
pub use currency::{default_currency, Currency};
pub use errors::{
    CheckDigitError, CheckDigitResult, IdentifierError, MoneyError, MoneyResult,
};
pub use factory::MoneyFactory;
pub use formatter::MoneyFormatter;
pub use iban::{Iban, IBAN_MAX_LENGTH, IBAN_MIN_LENGTH};
pub use locale::Locale;
pub use money::Money;
pub use parser::parse_number;
pub use tax_id::TaxId;
