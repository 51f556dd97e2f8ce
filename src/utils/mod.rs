// ============================================================================
// Utilities Module
// Environment helpers
// ============================================================================

mod locale_detection;

pub use locale_detection::{detect_from, detect_locale, LOCALE_VARIABLES};
