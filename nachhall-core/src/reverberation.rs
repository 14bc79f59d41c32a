//! Reverberation Time per the Extended Sabine Formula
//!
//! ## Physics Background
//!
//! A sound field in a room decays because every reflection loses energy to
//! the surfaces, and the traveling wave loses energy to the air. DIN EN ISO
//! 354 wraps both into the extended Sabine formula:
//!
//! ```text
//! T = (55.3 / c) * V / (A + 4*m*V)    [s]
//!
//! Where:
//! - c = speed of sound (m/s)
//! - V = room volume (m³)
//! - A = equivalent absorption area (m² Sabine), Σ areaᵢ * αᵢ
//! - m = air energy absorption coefficient (1/m), per band
//! ```
//!
//! The formula is evaluated per octave band: A varies with the materials'
//! spectra and m grows steeply with frequency.
//!
//! ## Measured Baselines
//!
//! When a measured reverberation time of the existing room is available, the
//! engine first inverts the formula to get the absorption the measurement
//! implies, then adds the planned surfaces on top:
//!
//! ```text
//! A_meas = (55.3 / c) * V / T_meas - 4*m*V
//! T_new  = (55.3 / c) * V / (A + A_meas + 4*m*V)
//! ```
//!
//! so a treatment plan can be previewed against the room as built instead of
//! against a bare geometric model. With a measured baseline the air term
//! cancels out of the result; it is already part of the measurement.
//!
//! A measured time of zero implies unbounded absorption in the existing
//! room, and the predicted time at that band stays zero no matter what the
//! planned surfaces add.
//!
//! ## Undefined Bands
//!
//! Materials with gaps in their spectra make A undefined in those bands. A
//! band stays defined as long as any surface contributes data there; only
//! bands where every surface is silent become undefined, and the output time
//! is undefined in exactly those bands.

use crate::air::AirAttenuation;
use crate::bands::{BandSpectrum, OCTAVE_BAND_COUNT};
use crate::constants::physics::SABINE_COEFFICIENT;
use crate::errors::{AcousticsError, AcousticsResult};
use crate::room::Room;
use crate::surface::Surface;
use crate::validate::check_range;

/// Switches of the reverberation computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverberationConfig {
    /// Include the 4mV air absorption term. On by default; the term is
    /// what makes large halls dull at 8 kHz.
    pub air_damping: bool,
    /// Measured reverberation time of the room as built (s, per band).
    /// When set, the computed surfaces extend the measured baseline.
    /// Entries must be finite and non-negative.
    pub measured_reverberation_s: Option<[f64; OCTAVE_BAND_COUNT]>,
}

impl Default for ReverberationConfig {
    fn default() -> Self {
        Self { air_damping: true, measured_reverberation_s: None }
    }
}

/// Sum of the surfaces' equivalent absorption areas per band (m² Sabine).
///
/// A band is undefined only when every surface lacks data there; otherwise
/// it is the sum over the surfaces that do have data.
pub fn equivalent_absorption_area(surfaces: &[Surface]) -> AcousticsResult<BandSpectrum> {
    if surfaces.is_empty() {
        return Err(AcousticsError::EmptyInput { what: "surface list" });
    }
    let mut totals = [None; OCTAVE_BAND_COUNT];
    for surface in surfaces {
        let contribution = surface.absorption_area();
        for (total, value) in totals.iter_mut().zip(contribution.iter()) {
            if let Some(value) = value {
                *total = Some(total.unwrap_or(0.0) + value);
            }
        }
    }
    Ok(BandSpectrum::from_raw(totals))
}

/// One reverberation-time computation over a room and its surfaces.
///
/// All results are fixed at construction; borrowed inputs stay untouched.
///
/// ```rust
/// use nachhall_core::{Material, ReverberationAnalysis, Room, Surface};
///
/// let room = Room::new(100.0)?;
/// let surfaces = [Surface::new(
///     "all boundaries",
///     50.0,
///     Material::new("mixed finish", [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8])?,
/// )?];
///
/// let analysis = ReverberationAnalysis::new(&room, &surfaces)?;
/// let t_mid = analysis.reverberation_time_s().value_at(4).unwrap();
/// assert!(t_mid > 0.6 && t_mid < 0.65);
/// # Ok::<(), nachhall_core::AcousticsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReverberationAnalysis<'a> {
    room: &'a Room,
    surfaces: &'a [Surface],
    config: ReverberationConfig,
    air: AirAttenuation,
    equivalent_absorption_m2: BandSpectrum,
    reverberation_time_s: BandSpectrum,
}

impl<'a> ReverberationAnalysis<'a> {
    /// Analysis with default configuration (air damping on, no baseline).
    pub fn new(room: &'a Room, surfaces: &'a [Surface]) -> AcousticsResult<Self> {
        Self::with_config(room, surfaces, ReverberationConfig::default())
    }

    /// Analysis with explicit configuration.
    pub fn with_config(
        room: &'a Room,
        surfaces: &'a [Surface],
        config: ReverberationConfig,
    ) -> AcousticsResult<Self> {
        if let Some(measured) = &config.measured_reverberation_s {
            for &time in measured {
                check_range("measured reverberation time", time, 0.0, f64::INFINITY)?;
            }
        }

        let equivalent_absorption_m2 = equivalent_absorption_area(surfaces)?;
        let air = AirAttenuation::for_room(room)?;
        let reverberation_time_s =
            compute_band_times(room, &equivalent_absorption_m2, &air, &config);

        Ok(Self {
            room,
            surfaces,
            config,
            air,
            equivalent_absorption_m2,
            reverberation_time_s,
        })
    }

    /// The analyzed room.
    pub fn room(&self) -> &Room {
        self.room
    }

    /// The analyzed surfaces.
    pub fn surfaces(&self) -> &[Surface] {
        self.surfaces
    }

    /// Configuration the analysis ran with.
    pub fn config(&self) -> &ReverberationConfig {
        &self.config
    }

    /// Air absorption state used for the 4mV term.
    ///
    /// Present regardless of the `air_damping` switch, so the applied
    /// climate model can always be inspected.
    pub fn air(&self) -> &AirAttenuation {
        &self.air
    }

    /// Total equivalent absorption area per band (m² Sabine).
    pub fn equivalent_absorption_m2(&self) -> &BandSpectrum {
        &self.equivalent_absorption_m2
    }

    /// Reverberation time per band (s).
    ///
    /// Undefined where no surface carries absorption data. A band of a room
    /// without any absorption comes out infinite with air damping off.
    pub fn reverberation_time_s(&self) -> &BandSpectrum {
        &self.reverberation_time_s
    }
}

fn compute_band_times(
    room: &Room,
    absorption: &BandSpectrum,
    air: &AirAttenuation,
    config: &ReverberationConfig,
) -> BandSpectrum {
    let c = room.speed_of_sound();
    let volume = room.volume_m3();
    let m = air.absorption_per_m();

    let mut times = [None; OCTAVE_BAND_COUNT];
    for (band, slot) in times.iter_mut().enumerate() {
        let Some(a) = absorption.value_at(band) else {
            continue;
        };

        let time = if config.air_damping {
            let air_term = 4.0 * volume * m[band];
            match config.measured_reverberation_s {
                Some(measured) => {
                    let a_meas =
                        (SABINE_COEFFICIENT / c) * (volume / measured[band]) - air_term;
                    (SABINE_COEFFICIENT / c) * (volume / (a + a_meas + air_term))
                }
                None => (SABINE_COEFFICIENT / c) * (volume / (a + air_term)),
            }
        } else {
            match config.measured_reverberation_s {
                Some(measured) => {
                    let a_meas = (SABINE_COEFFICIENT * volume) / (measured[band] * c);
                    (SABINE_COEFFICIENT * volume) / ((a + a_meas) * c)
                }
                None => (SABINE_COEFFICIENT * volume) / (a * c),
            }
        };
        *slot = Some(time);
    }
    BandSpectrum::from_raw(times)
}
