// ============================================================================
// Check Digit Scheme Factory
// Creates check-digit schemes from configuration
// ============================================================================

use crate::checksum::{Mod10, Mod11, Mod97};
use crate::domain::config::CheckDigitType;
use crate::interfaces::CheckDigitScheme;

/// Creates a check-digit scheme from configuration
///
/// # Arguments
/// * `config` - Scheme configuration
///
/// # Returns
/// * `Result<Box<dyn CheckDigitScheme>, String>` - Configured scheme or error
///
/// # Example
/// ```
/// use fachwert::checksum::factory::create_from_config;
/// use fachwert::domain::config::CheckDigitType;
///
/// let scheme = create_from_config(&CheckDigitType::luhn()).unwrap();
/// assert!(scheme.is_valid("79927398713"));
/// ```
pub fn create_from_config(config: &CheckDigitType) -> Result<Box<dyn CheckDigitScheme>, String> {
    // Validate configuration first
    config.validate()?;

    let scheme: Box<dyn CheckDigitScheme> = match *config {
        CheckDigitType::Mod10 {
            weights,
            direction,
            reduction,
            check_value,
        } => Box::new(Mod10::new(weights, direction, reduction, check_value)),
        CheckDigitType::Luhn => Box::new(Mod10::luhn()),
        CheckDigitType::Ean13 => Box::new(Mod10::ean13()),
        CheckDigitType::Code25 => Box::new(Mod10::code25()),
        CheckDigitType::Leitcode => Box::new(Mod10::leitcode()),
        CheckDigitType::Mod11 => Box::new(Mod11::new()),
        CheckDigitType::Mod97 => Box::new(Mod97::new()),
    };

    tracing::trace!(scheme = scheme.name(), "created check digit scheme");
    Ok(scheme)
}
