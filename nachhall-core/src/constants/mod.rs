//! Constants for Nachhall Core
//!
//! Centralized, documented constants used throughout the acoustics engine.
//! Formula-internal coefficients (the ISO 9613-1 relaxation terms, the DIN
//! 18041 per-category target formulas) stay next to the formulas they belong
//! to; this module holds the values that are shared across modules or that
//! callers need for their own plausibility checks.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the defining standard where applicable
//! 3. Use descriptive names that include units

/// Physical constants for air acoustics and the Sabine model.
pub mod physics;

/// DIN 18041 band tables and geometry thresholds.
pub mod din18041;

// Re-export commonly used constants for convenience
pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, STANDARD_ATMOSPHERE_KPA, REFERENCE_AIR_TEMPERATURE_K,
    SABINE_COEFFICIENT, SPEED_OF_SOUND_0C_M_PER_S, SPEED_OF_SOUND_GRADIENT_M_PER_S_K,
    DEFAULT_TEMPERATURE_C, DEFAULT_REL_HUMIDITY_PCT,
};
