// ============================================================================
// Checksum Module
// Check-digit ("Pruefziffer") algorithms for structured identifiers
// ============================================================================

mod mod10;
mod mod11;
mod mod97;

pub mod factory;

pub use factory::create_from_config;
pub use mod10::Mod10;
pub use mod11::{Mod11, MOD11_LENGTH};
pub use mod97::Mod97;
