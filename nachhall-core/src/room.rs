//! Room Geometry and Climate
//!
//! [`Room`] carries everything the engine needs to know about the enclosure
//! itself: net volume, air climate, and (for the height-dependent DIN 18041
//! categories) the mean room height. The air climate feeds both the speed of
//! sound and the atmospheric absorption model.
//!
//! The speed of sound uses the linear approximation
//!
//! ```text
//! c = 331.6 + 0.6 * T(°C)   [m/s]
//! ```
//!
//! Humidity also raises c slightly, but the effect stays below 0.5% under
//! room conditions and is ignored, matching the DIN 18041 number work.

use crate::constants::physics::{
    ABSOLUTE_ZERO_CELSIUS, DEFAULT_REL_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C,
    SPEED_OF_SOUND_0C_M_PER_S, SPEED_OF_SOUND_GRADIENT_M_PER_S_K, STANDARD_ATMOSPHERE_KPA,
};
use crate::errors::AcousticsResult;
use crate::validate::{check_above, check_range};

/// Immutable room description.
///
/// Built with [`Room::new`] and refined through `with_*` methods, each of
/// which validates its input and returns a new value. `Room` is `Copy`, so a
/// rejected update leaves the original untouched.
///
/// ```rust
/// use nachhall_core::Room;
///
/// let room = Room::new(250.0)?
///     .with_temperature(22.0)?
///     .with_rel_humidity(40.0)?
///     .with_height(3.2)?;
/// assert!(room.speed_of_sound() > 344.0);
/// # Ok::<(), nachhall_core::AcousticsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    volume_m3: f64,
    temperature_c: f64,
    rel_humidity_pct: f64,
    pressure_kpa: f64,
    height_m: Option<f64>,
}

impl Room {
    /// Room with the given net volume and default climate
    /// (20°C, 50% relative humidity, standard atmosphere, no height set).
    pub fn new(volume_m3: f64) -> AcousticsResult<Self> {
        check_above("room volume", volume_m3, 0.0)?;
        Ok(Self {
            volume_m3,
            temperature_c: DEFAULT_TEMPERATURE_C,
            rel_humidity_pct: DEFAULT_REL_HUMIDITY_PCT,
            pressure_kpa: STANDARD_ATMOSPHERE_KPA,
            height_m: None,
        })
    }

    /// Replace the net volume (m³, must be positive).
    pub fn with_volume(self, volume_m3: f64) -> AcousticsResult<Self> {
        check_above("room volume", volume_m3, 0.0)?;
        Ok(Self { volume_m3, ..self })
    }

    /// Replace the air temperature (°C, above absolute zero).
    pub fn with_temperature(self, temperature_c: f64) -> AcousticsResult<Self> {
        check_above("air temperature", temperature_c, ABSOLUTE_ZERO_CELSIUS)?;
        Ok(Self { temperature_c, ..self })
    }

    /// Replace the relative humidity (%, 0 to 100).
    pub fn with_rel_humidity(self, rel_humidity_pct: f64) -> AcousticsResult<Self> {
        check_range("relative humidity", rel_humidity_pct, 0.0, 100.0)?;
        Ok(Self { rel_humidity_pct, ..self })
    }

    /// Replace the static air pressure (kPa, must be positive).
    pub fn with_pressure(self, pressure_kpa: f64) -> AcousticsResult<Self> {
        check_above("air pressure", pressure_kpa, 0.0)?;
        Ok(Self { pressure_kpa, ..self })
    }

    /// Set the mean room height (m, must be positive).
    ///
    /// Only the DIN 18041 group B categories need it; reverberation
    /// prediction works without.
    pub fn with_height(self, height_m: f64) -> AcousticsResult<Self> {
        check_above("room height", height_m, 0.0)?;
        Ok(Self { height_m: Some(height_m), ..self })
    }

    /// Net room volume (m³).
    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }

    /// Air temperature (°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Relative humidity (%).
    pub fn rel_humidity_pct(&self) -> f64 {
        self.rel_humidity_pct
    }

    /// Static air pressure (kPa).
    pub fn pressure_kpa(&self) -> f64 {
        self.pressure_kpa
    }

    /// Mean room height (m), if set.
    pub fn height_m(&self) -> Option<f64> {
        self.height_m
    }

    /// Speed of sound at the current temperature (m/s).
    pub fn speed_of_sound(&self) -> f64 {
        SPEED_OF_SOUND_0C_M_PER_S + SPEED_OF_SOUND_GRADIENT_M_PER_S_K * self.temperature_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AcousticsError;

    #[test]
    fn defaults_match_reference_climate() {
        let room = Room::new(100.0).unwrap();
        assert_eq!(room.volume_m3(), 100.0);
        assert_eq!(room.temperature_c(), 20.0);
        assert_eq!(room.rel_humidity_pct(), 50.0);
        assert_eq!(room.pressure_kpa(), 101.325);
        assert_eq!(room.height_m(), None);
        assert!((room.speed_of_sound() - 343.6).abs() < 1e-9);
    }

    #[test]
    fn speed_of_sound_tracks_temperature() {
        let room = Room::new(100.0).unwrap().with_temperature(25.0).unwrap();
        assert!((room.speed_of_sound() - 346.6).abs() < 1e-9);

        let cold = room.with_temperature(0.0).unwrap();
        assert!((cold.speed_of_sound() - 331.6).abs() < 1e-9);
    }

    #[test]
    fn rejects_empty_and_negative_volume() {
        assert!(Room::new(0.0).is_err());
        assert!(Room::new(-10.0).is_err());
        assert_eq!(
            Room::new(f64::NAN),
            Err(AcousticsError::NotFinite { field: "room volume" })
        );
    }

    #[test]
    fn rejects_out_of_domain_climate() {
        let room = Room::new(100.0).unwrap();
        assert!(room.with_temperature(-300.0).is_err());
        assert!(room.with_rel_humidity(150.0).is_err());
        assert!(room.with_rel_humidity(-1.0).is_err());
        assert!(room.with_pressure(0.0).is_err());
        assert!(room.with_height(-2.0).is_err());
        assert!(room.with_temperature(f64::INFINITY).is_err());
    }

    #[test]
    fn boundary_humidity_is_valid() {
        let room = Room::new(100.0).unwrap();
        assert!(room.with_rel_humidity(0.0).is_ok());
        assert!(room.with_rel_humidity(100.0).is_ok());
    }

    #[test]
    fn failed_update_leaves_original_intact() {
        let room = Room::new(100.0).unwrap();
        assert!(room.with_volume(-5.0).is_err());
        assert_eq!(room.volume_m3(), 100.0);
    }
}
