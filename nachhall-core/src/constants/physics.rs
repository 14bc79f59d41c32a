//! Physical Constants for Room Acoustics
//!
//! Values are taken from the defining standards (ISO 9613-1 for the
//! atmospheric model, DIN 18041 for the reverberation formula) so results
//! stay comparable with published tables.

// ===== TEMPERATURE AND PRESSURE REFERENCES =====

/// Absolute zero in Celsius (°C).
///
/// Lower validity bound for every temperature input; also the offset for
/// Celsius/Kelvin conversion inside the atmospheric model.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Triple-point temperature of water (K).
///
/// Reference temperature T01 in the water-vapour saturation term of the
/// molar humidity formula.
///
/// Source: ISO 9613-1:1993, Annex B
pub const TRIPLE_POINT_WATER_K: f64 = 273.16;

/// Reference air temperature (K).
///
/// T0 = 20°C, the temperature all ISO 9613-1 ratio terms normalize against.
///
/// Source: ISO 9613-1:1993, Section 6.2
pub const REFERENCE_AIR_TEMPERATURE_K: f64 = 293.15;

/// Standard atmospheric pressure at sea level (kPa).
///
/// Reference pressure for the ISO 9613-1 pressure ratios and the
/// normalization inside the molar humidity formula.
///
/// Source: ISO 2533 (International Standard Atmosphere)
pub const STANDARD_ATMOSPHERE_KPA: f64 = 101.325;

// ===== SPEED OF SOUND =====

/// Speed of sound in air at 0°C (m/s).
///
/// Base value of the linear temperature approximation
/// c = 331.6 + 0.6 * T(°C). The humidity influence on c is below 0.5% under
/// room conditions and is ignored throughout.
///
/// Source: DIN 18041:2016-03, Annex A
pub const SPEED_OF_SOUND_0C_M_PER_S: f64 = 331.6;

/// Temperature gradient of the speed of sound (m/s per K).
///
/// Slope of the linear approximation above, valid for room temperatures.
///
/// Source: DIN 18041:2016-03, Annex A
pub const SPEED_OF_SOUND_GRADIENT_M_PER_S_K: f64 = 0.6;

// ===== REVERBERATION MODEL =====

/// Sabine coefficient (dimensionless, carries s/m through the formula).
///
/// The 55.3 in T = 55.3 * V / (c * A), the rounded form of 24 * ln(10)
/// used by the standard.
///
/// Source: DIN 18041:2016-03, Annex A; W. C. Sabine (1900)
pub const SABINE_COEFFICIENT: f64 = 55.3;

// ===== DEFAULT ROOM CLIMATE =====

/// Default air temperature for new rooms (°C).
///
/// Standard indoor design temperature; matches the ISO 9613-1 reference.
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// Default relative humidity for new rooms (%).
///
/// Mid-range indoor humidity; air absorption tables are commonly quoted
/// at this value.
pub const DEFAULT_REL_HUMIDITY_PCT: f64 = 50.0;
