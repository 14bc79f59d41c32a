//! Atmospheric Absorption per ISO 9613-1
//!
//! ## Physics Background
//!
//! Sound traveling through air loses energy to two mechanisms:
//!
//! 1. **Classical absorption**: viscosity and heat conduction, growing with
//!    the square of frequency.
//! 2. **Molecular relaxation**: oxygen and nitrogen molecules absorb energy
//!    into vibration modes and release it too late to rejoin the wave. The
//!    effect peaks near the relaxation frequencies of the two gases, which
//!    shift with humidity and pressure.
//!
//! ISO 9613-1 combines both into a closed form. With the pressure ratio
//! pr = p/p_ref and temperature ratio tr = T/T0 (T0 = 293.15 K):
//!
//! ```text
//! f_rO = pr * (24 + 4.04e4 * h * (0.02 + h) / (0.391 + h))
//! f_rN = pr * tr^(-1/2) * (9 + 280 * h * exp(-4.17 * (tr^(-1/3) - 1)))
//!
//! α(f) = 8.686 * f² * [ 1.84e-11 * pr⁻¹ * tr^(1/2)
//!        + tr^(-5/2) * ( 0.01275 * e^(-2239.1/T) / (f_rO + f²/f_rO)
//!                      + 0.1068  * e^(-3352.0/T) / (f_rN + f²/f_rN) ) ]
//! ```
//!
//! where h is the molar concentration of water vapour in percent, derived
//! from relative humidity via the saturation pressure term of Annex B:
//!
//! ```text
//! h = rh * 10^(-6.8346 * (273.16/T)^1.261 + 4.6151) / (p / 101.325)
//! ```
//!
//! α is the attenuation in dB/m. Reverberation formulas want the energy
//! absorption coefficient m in 1/m instead; DIN EN ISO 354 converts with
//! m = α/(10 * lg e), rounded to α * 1000 / 4350 in the number work here.
//!
//! ## Magnitudes
//!
//! Under room conditions air absorption is negligible below 1 kHz and
//! decisive at the top of the spectrum:
//!
//! ```text
//! Band     m (1/m) at 20°C, 50% rh      4mV for V = 1000 m³
//! 63 Hz    0.000028                     0.11 m² Sabine
//! 1 kHz    0.00107                      4.3 m² Sabine
//! 8 kHz    0.0242                       96.8 m² Sabine
//! ```
//!
//! Large halls therefore lose their treble reverberance to the air itself,
//! no matter the surface finish.

use heapless::Vec;

use crate::bands::OCTAVE_BANDS_HZ;
use crate::constants::physics::{
    ABSOLUTE_ZERO_CELSIUS, REFERENCE_AIR_TEMPERATURE_K, STANDARD_ATMOSPHERE_KPA,
    TRIPLE_POINT_WATER_K,
};
use crate::errors::{AcousticsError, AcousticsResult};
use crate::room::Room;
use crate::validate::{check_above, check_range};

/// Capacity of the evaluated frequency list.
///
/// Sized for a full third-octave series (50 Hz to 10 kHz); the octave-band
/// engine uses 8 of the 24 slots.
pub const MAX_FREQUENCY_BANDS: usize = 24;

/// Atmospheric absorption state for a fixed frequency list and climate.
///
/// All derived quantities are computed once at construction; `with_*`
/// methods return a fully recomputed copy. Identical inputs always produce
/// identical coefficient arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct AirAttenuation {
    frequencies_hz: Vec<f64, MAX_FREQUENCY_BANDS>,
    temperature_k: f64,
    rel_humidity_pct: f64,
    pressure_kpa: f64,
    ref_pressure_kpa: f64,
    ref_temperature_k: f64,
    molar_humidity_pct: f64,
    f_r_oxygen_hz: f64,
    f_r_nitrogen_hz: f64,
    attenuation_db_per_m: Vec<f64, MAX_FREQUENCY_BANDS>,
    absorption_per_m: Vec<f64, MAX_FREQUENCY_BANDS>,
}

impl AirAttenuation {
    /// Evaluate the ISO 9613-1 model on an arbitrary frequency list.
    ///
    /// Frequencies must be finite, non-negative, non-empty and fit within
    /// [`MAX_FREQUENCY_BANDS`]. Temperature is taken in °C, pressure in kPa;
    /// the reference pressure starts at the standard atmosphere and can be
    /// changed with [`with_ref_pressure`](Self::with_ref_pressure).
    pub fn new(
        frequencies_hz: &[f64],
        temperature_c: f64,
        rel_humidity_pct: f64,
        pressure_kpa: f64,
    ) -> AcousticsResult<Self> {
        let frequencies = Self::checked_frequencies(frequencies_hz)?;
        Self::checked_climate(temperature_c, rel_humidity_pct, pressure_kpa)?;
        Ok(Self::build(
            frequencies,
            temperature_c - ABSOLUTE_ZERO_CELSIUS,
            rel_humidity_pct,
            pressure_kpa,
            STANDARD_ATMOSPHERE_KPA,
        ))
    }

    /// Evaluate the model on the eight standard octave bands.
    pub fn for_octave_bands(
        temperature_c: f64,
        rel_humidity_pct: f64,
        pressure_kpa: f64,
    ) -> AcousticsResult<Self> {
        Self::new(&OCTAVE_BANDS_HZ, temperature_c, rel_humidity_pct, pressure_kpa)
    }

    /// Evaluate the model on the octave bands with a room's climate.
    pub fn for_room(room: &Room) -> AcousticsResult<Self> {
        Self::for_octave_bands(
            room.temperature_c(),
            room.rel_humidity_pct(),
            room.pressure_kpa(),
        )
    }

    /// Recompute with a different air temperature (°C).
    pub fn with_temperature(&self, temperature_c: f64) -> AcousticsResult<Self> {
        check_above("air temperature", temperature_c, ABSOLUTE_ZERO_CELSIUS)?;
        Ok(Self::build(
            self.frequencies_hz.clone(),
            temperature_c - ABSOLUTE_ZERO_CELSIUS,
            self.rel_humidity_pct,
            self.pressure_kpa,
            self.ref_pressure_kpa,
        ))
    }

    /// Recompute with a different relative humidity (%).
    pub fn with_rel_humidity(&self, rel_humidity_pct: f64) -> AcousticsResult<Self> {
        check_range("relative humidity", rel_humidity_pct, 0.0, 100.0)?;
        Ok(Self::build(
            self.frequencies_hz.clone(),
            self.temperature_k,
            rel_humidity_pct,
            self.pressure_kpa,
            self.ref_pressure_kpa,
        ))
    }

    /// Recompute with a different static pressure (kPa).
    pub fn with_pressure(&self, pressure_kpa: f64) -> AcousticsResult<Self> {
        check_above("air pressure", pressure_kpa, 0.0)?;
        Ok(Self::build(
            self.frequencies_hz.clone(),
            self.temperature_k,
            self.rel_humidity_pct,
            pressure_kpa,
            self.ref_pressure_kpa,
        ))
    }

    /// Recompute against a different reference pressure (kPa).
    ///
    /// Only the pressure ratios change; the molar humidity keeps its
    /// standard-atmosphere normalization per ISO 9613-1 Annex B.
    pub fn with_ref_pressure(&self, ref_pressure_kpa: f64) -> AcousticsResult<Self> {
        check_above("reference pressure", ref_pressure_kpa, 0.0)?;
        Ok(Self::build(
            self.frequencies_hz.clone(),
            self.temperature_k,
            self.rel_humidity_pct,
            self.pressure_kpa,
            ref_pressure_kpa,
        ))
    }

    /// Evaluated frequencies (Hz), in input order.
    pub fn frequencies_hz(&self) -> &[f64] {
        &self.frequencies_hz
    }

    /// Air temperature (°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_k + ABSOLUTE_ZERO_CELSIUS
    }

    /// Relative humidity (%).
    pub fn rel_humidity_pct(&self) -> f64 {
        self.rel_humidity_pct
    }

    /// Static air pressure (kPa).
    pub fn pressure_kpa(&self) -> f64 {
        self.pressure_kpa
    }

    /// Reference pressure of the ISO ratio terms (kPa).
    pub fn ref_pressure_kpa(&self) -> f64 {
        self.ref_pressure_kpa
    }

    /// Reference temperature of the ISO ratio terms (K), fixed at 293.15.
    pub fn ref_temperature_k(&self) -> f64 {
        self.ref_temperature_k
    }

    /// Molar concentration of water vapour (%).
    pub fn molar_humidity_pct(&self) -> f64 {
        self.molar_humidity_pct
    }

    /// Oxygen relaxation frequency (Hz).
    pub fn oxygen_relaxation_hz(&self) -> f64 {
        self.f_r_oxygen_hz
    }

    /// Nitrogen relaxation frequency (Hz).
    pub fn nitrogen_relaxation_hz(&self) -> f64 {
        self.f_r_nitrogen_hz
    }

    /// Attenuation α per frequency (dB/m), aligned with `frequencies_hz`.
    pub fn attenuation_db_per_m(&self) -> &[f64] {
        &self.attenuation_db_per_m
    }

    /// Energy absorption coefficient m per frequency (1/m), aligned with
    /// `frequencies_hz`. This is the m of the 4mV air term.
    pub fn absorption_per_m(&self) -> &[f64] {
        &self.absorption_per_m
    }

    fn checked_frequencies(
        frequencies_hz: &[f64],
    ) -> AcousticsResult<Vec<f64, MAX_FREQUENCY_BANDS>> {
        if frequencies_hz.is_empty() {
            return Err(AcousticsError::EmptyInput { what: "frequency list" });
        }
        if frequencies_hz.len() > MAX_FREQUENCY_BANDS {
            return Err(AcousticsError::CapacityExceeded {
                what: "frequency list",
                limit: MAX_FREQUENCY_BANDS,
            });
        }
        let mut checked = Vec::new();
        for &frequency in frequencies_hz {
            check_range("frequency", frequency, 0.0, f64::INFINITY)?;
            // Length is pre-checked against the capacity
            let _ = checked.push(frequency);
        }
        Ok(checked)
    }

    fn checked_climate(
        temperature_c: f64,
        rel_humidity_pct: f64,
        pressure_kpa: f64,
    ) -> AcousticsResult<()> {
        check_above("air temperature", temperature_c, ABSOLUTE_ZERO_CELSIUS)?;
        check_range("relative humidity", rel_humidity_pct, 0.0, 100.0)?;
        check_above("air pressure", pressure_kpa, 0.0)?;
        Ok(())
    }

    /// Compute every derived quantity. Inputs are already validated, with
    /// temperature converted to Kelvin.
    fn build(
        frequencies_hz: Vec<f64, MAX_FREQUENCY_BANDS>,
        temperature_k: f64,
        rel_humidity_pct: f64,
        pressure_kpa: f64,
        ref_pressure_kpa: f64,
    ) -> Self {
        let t = temperature_k;

        // ISO 9613-1 Annex B: molar water vapour concentration. The
        // normalization pressure is the standard atmosphere, independent of
        // the configurable reference pressure.
        let saturation_exponent =
            -6.8346 * libm::pow(TRIPLE_POINT_WATER_K / t, 1.261) + 4.6151;
        let molar_humidity_pct = rel_humidity_pct * libm::pow(10.0, saturation_exponent)
            / (pressure_kpa / STANDARD_ATMOSPHERE_KPA);

        let pressure_ratio = pressure_kpa / ref_pressure_kpa;
        let temperature_ratio = t / REFERENCE_AIR_TEMPERATURE_K;
        let h = molar_humidity_pct;

        // Relaxation frequencies of oxygen and nitrogen, ISO 9613-1 eq. (3)/(4)
        let f_r_oxygen_hz =
            pressure_ratio * (24.0 + 4.04e4 * h * ((0.02 + h) / (0.391 + h)));
        let f_r_nitrogen_hz = pressure_ratio
            * libm::pow(temperature_ratio, -0.5)
            * (9.0
                + 280.0
                    * h
                    * libm::exp(-4.170 * (libm::pow(temperature_ratio, -1.0 / 3.0) - 1.0)));

        let mut attenuation_db_per_m = Vec::new();
        let mut absorption_per_m = Vec::new();
        for &frequency in &frequencies_hz {
            let f2 = frequency * frequency;

            // ISO 9613-1 eq. (5): classical term plus the two relaxation terms
            let alpha = 8.686
                * f2
                * (1.84e-11
                    * libm::pow(pressure_ratio, -1.0)
                    * libm::pow(temperature_ratio, 0.5)
                    + libm::pow(temperature_ratio, -2.5)
                        * (0.01275 * libm::exp(-2239.1 / t) / (f_r_oxygen_hz + f2 / f_r_oxygen_hz)
                            + 0.1068
                                * libm::exp(-3352.0 / t)
                                / (f_r_nitrogen_hz + f2 / f_r_nitrogen_hz)));

            // DIN EN ISO 354: dB/m to energy coefficient, rounded conversion
            let m = alpha * 1000.0 / 4350.0;

            // Capacity matches frequencies_hz, checked at construction
            let _ = attenuation_db_per_m.push(alpha);
            let _ = absorption_per_m.push(m);
        }

        Self {
            frequencies_hz,
            temperature_k: t,
            rel_humidity_pct,
            pressure_kpa,
            ref_pressure_kpa,
            ref_temperature_k: REFERENCE_AIR_TEMPERATURE_K,
            molar_humidity_pct,
            f_r_oxygen_hz,
            f_r_nitrogen_hz,
            attenuation_db_per_m,
            absorption_per_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        let scale = expected.abs().max(1e-30);
        assert!(
            (actual - expected).abs() / scale < rel_tol,
            "actual {actual}, expected {expected}"
        );
    }

    #[test]
    fn reference_climate_matches_standard_worked_values() {
        let air = AirAttenuation::for_octave_bands(20.0, 50.0, 101.325).unwrap();

        assert_close(air.molar_humidity_pct(), 1.15303747987967, 1e-9);
        assert_close(air.oxygen_relaxation_hz(), 35413.8596168108, 1e-9);
        assert_close(air.nitrogen_relaxation_hz(), 331.850494366307, 1e-9);

        let m = air.absorption_per_m();
        assert_close(m[0], 2.81496370117264e-5, 1e-9); // 63 Hz
        assert_close(m[4], 1.07235215490149e-3, 1e-9); // 1 kHz
        assert_close(m[7], 2.4204810511174e-2, 1e-9); // 8 kHz

        let alpha = air.attenuation_db_per_m();
        assert_close(alpha[4], 4.66473187382148e-3, 1e-9);
        assert_close(alpha[7], 1.05290925723607e-1, 1e-9);
    }

    #[test]
    fn altitude_climate_matches_reference_values() {
        let air = AirAttenuation::for_octave_bands(25.0, 30.0, 95.0).unwrap();

        assert_close(air.molar_humidity_pct(), 0.9998006592343, 1e-9);
        assert_close(air.oxygen_relaxation_hz(), 27790.986289202, 1e-9);
        assert_close(air.nitrogen_relaxation_hz(), 274.799329821707, 1e-9);
        assert_close(air.absorption_per_m()[4], 1.20417679741214e-3, 1e-9);
        assert_close(air.absorption_per_m()[7], 3.16853921427978e-2, 1e-9);
    }

    #[test]
    fn temperature_round_trips_through_kelvin() {
        let air = AirAttenuation::for_octave_bands(20.0, 50.0, 101.325).unwrap();
        let warmer = air.with_temperature(25.0).unwrap();
        assert_close(warmer.temperature_c(), 25.0, 1e-12);
        assert_close(air.temperature_c(), 20.0, 1e-12);
    }

    #[test]
    fn identical_inputs_yield_identical_coefficients() {
        let a = AirAttenuation::for_octave_bands(18.5, 42.0, 99.1).unwrap();
        let b = AirAttenuation::for_octave_bands(18.5, 42.0, 99.1).unwrap();
        assert_eq!(a, b);

        let rebuilt = a.with_rel_humidity(42.0).unwrap();
        assert_eq!(a, rebuilt);
    }

    #[test]
    fn ref_pressure_scales_ratios_but_not_humidity() {
        let air = AirAttenuation::for_octave_bands(20.0, 50.0, 101.325).unwrap();
        let shifted = air.with_ref_pressure(95.0).unwrap();

        assert_eq!(shifted.molar_humidity_pct(), air.molar_humidity_pct());
        assert_close(shifted.oxygen_relaxation_hz(), 37771.67711235115, 1e-9);
        assert_close(shifted.absorption_per_m()[4], 1.084494454477111e-3, 1e-9);
    }

    #[test]
    fn dry_air_stays_finite() {
        let air = AirAttenuation::for_octave_bands(20.0, 0.0, 101.325).unwrap();
        assert_eq!(air.molar_humidity_pct(), 0.0);
        assert_close(air.oxygen_relaxation_hz(), 24.0, 1e-12);
        assert_close(air.nitrogen_relaxation_hz(), 9.0, 1e-12);
        for &m in air.absorption_per_m() {
            assert!(m.is_finite() && m >= 0.0);
        }
    }

    #[test]
    fn humid_rooms_lose_less_treble() {
        let m_at = |rh: f64| {
            AirAttenuation::for_octave_bands(20.0, rh, 101.325)
                .unwrap()
                .absorption_per_m()[7]
        };
        assert!(m_at(30.0) > m_at(60.0));
        assert!(m_at(60.0) > m_at(100.0));
    }

    #[test]
    fn rejects_unusable_frequency_lists() {
        assert_eq!(
            AirAttenuation::new(&[], 20.0, 50.0, 101.325),
            Err(AcousticsError::EmptyInput { what: "frequency list" })
        );
        assert!(AirAttenuation::new(&[-100.0], 20.0, 50.0, 101.325).is_err());
        assert_eq!(
            AirAttenuation::new(&[1000.0, f64::NAN], 20.0, 50.0, 101.325),
            Err(AcousticsError::NotFinite { field: "frequency" })
        );

        let too_many = [1000.0; MAX_FREQUENCY_BANDS + 1];
        assert_eq!(
            AirAttenuation::new(&too_many, 20.0, 50.0, 101.325),
            Err(AcousticsError::CapacityExceeded {
                what: "frequency list",
                limit: MAX_FREQUENCY_BANDS,
            })
        );
    }

    #[test]
    fn rejects_out_of_domain_climate() {
        assert!(AirAttenuation::for_octave_bands(-280.0, 50.0, 101.325).is_err());
        assert!(AirAttenuation::for_octave_bands(20.0, 101.0, 101.325).is_err());
        assert!(AirAttenuation::for_octave_bands(20.0, 50.0, 0.0).is_err());

        let air = AirAttenuation::for_octave_bands(20.0, 50.0, 101.325).unwrap();
        assert!(air.with_ref_pressure(-1.0).is_err());
        assert!(air.with_temperature(f64::NAN).is_err());
    }

    #[test]
    fn zero_frequency_contributes_nothing() {
        let air = AirAttenuation::new(&[0.0, 1000.0], 20.0, 50.0, 101.325).unwrap();
        assert_eq!(air.attenuation_db_per_m()[0], 0.0);
        assert_close(air.absorption_per_m()[1], 1.07235215490149e-3, 1e-9);
    }
}
