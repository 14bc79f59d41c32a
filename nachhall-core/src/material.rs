//! Absorber Materials
//!
//! A [`Material`] is an entry from an absorption catalog: a name, the Sabine
//! absorption coefficient α_S for each octave band, and optionally a price
//! for cost estimates. Coefficients come from reverberation-room
//! measurements per DIN EN ISO 354.
//!
//! Measured α_S values can exceed 1.0 (edge diffraction makes small test
//! specimens absorb "more than their area"), so only negative values are
//! rejected. Bands without published data stay undefined rather than being
//! guessed at zero; the analysis keeps them undefined per band.

use crate::bands::{BandSpectrum, OCTAVE_BAND_COUNT};
use crate::errors::{AcousticsError, AcousticsResult};
use crate::validate::check_range;

/// Capacity of material and surface names.
pub const MAX_NAME_LEN: usize = 64;

pub(crate) fn checked_name(
    what: &'static str,
    name: &str,
) -> AcousticsResult<heapless::String<MAX_NAME_LEN>> {
    if name.is_empty() {
        return Err(AcousticsError::EmptyInput { what });
    }
    heapless::String::try_from(name)
        .map_err(|_| AcousticsError::CapacityExceeded { what, limit: MAX_NAME_LEN })
}

/// Absorption data of one material, immutable after construction.
///
/// ```rust
/// use nachhall_core::Material;
///
/// let carpet = Material::new(
///     "needle felt 5mm",
///     [0.02, 0.03, 0.05, 0.1, 0.2, 0.45, 0.65, 0.7],
/// )?
/// .with_price(12.5)?;
/// assert_eq!(carpet.absorption().value_at(5), Some(0.45));
/// # Ok::<(), nachhall_core::AcousticsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    name: heapless::String<MAX_NAME_LEN>,
    absorption: BandSpectrum,
    price_eur_per_m2: Option<f64>,
}

impl Material {
    /// Material with a fully measured 8-band spectrum.
    ///
    /// Every coefficient must be finite and non-negative.
    pub fn new(name: &str, absorption: [f64; OCTAVE_BAND_COUNT]) -> AcousticsResult<Self> {
        let mut slots = [None; OCTAVE_BAND_COUNT];
        for (slot, &coefficient) in slots.iter_mut().zip(absorption.iter()) {
            *slot = Some(coefficient);
        }
        Self::from_partial(name, slots)
    }

    /// Material where some bands carry no measurement.
    pub fn from_partial(
        name: &str,
        absorption: [Option<f64>; OCTAVE_BAND_COUNT],
    ) -> AcousticsResult<Self> {
        let name = checked_name("material name", name)?;
        for coefficient in absorption.iter().flatten() {
            check_range("absorption coefficient", *coefficient, 0.0, f64::INFINITY)?;
        }
        Ok(Self {
            name,
            absorption: BandSpectrum::from_partial(absorption)?,
            price_eur_per_m2: None,
        })
    }

    /// Material from runtime data, e.g. a parsed catalog row.
    ///
    /// The slice must hold exactly one coefficient per octave band.
    pub fn from_slice(name: &str, absorption: &[f64]) -> AcousticsResult<Self> {
        if absorption.len() != OCTAVE_BAND_COUNT {
            return Err(AcousticsError::SpectrumLength {
                expected: OCTAVE_BAND_COUNT,
                actual: absorption.len(),
            });
        }
        let mut values = [0.0; OCTAVE_BAND_COUNT];
        values.copy_from_slice(absorption);
        Self::new(name, values)
    }

    /// Attach a price (€/m², non-negative).
    pub fn with_price(self, price_eur_per_m2: f64) -> AcousticsResult<Self> {
        check_range("material price", price_eur_per_m2, 0.0, f64::INFINITY)?;
        Ok(Self { price_eur_per_m2: Some(price_eur_per_m2), ..self })
    }

    /// Catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absorption coefficients per octave band.
    pub fn absorption(&self) -> &BandSpectrum {
        &self.absorption
    }

    /// Price (€/m²), if known.
    pub fn price_eur_per_m2(&self) -> Option<f64> {
        self.price_eur_per_m2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_spectrum_material() {
        let material =
            Material::new("acoustic plaster", [0.1, 0.15, 0.3, 0.5, 0.7, 0.8, 0.85, 0.9]).unwrap();
        assert_eq!(material.name(), "acoustic plaster");
        assert!(material.absorption().is_fully_defined());
        assert_eq!(material.price_eur_per_m2(), None);
    }

    #[test]
    fn partial_spectrum_keeps_unmeasured_bands() {
        let mut slots = [Some(0.6); OCTAVE_BAND_COUNT];
        slots[0] = None; // no 63 Hz data published
        let material = Material::from_partial("baffle", slots).unwrap();
        assert_eq!(material.absorption().value_at(0), None);
        assert_eq!(material.absorption().defined_bands(), 7);
    }

    #[test]
    fn rejects_negative_and_non_finite_coefficients() {
        assert!(Material::new("broken", [0.1, -0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]).is_err());
        assert_eq!(
            Material::new("nan", [0.1, f64::NAN, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]),
            Err(AcousticsError::NotFinite { field: "absorption coefficient" })
        );
    }

    #[test]
    fn coefficients_above_one_are_measured_reality() {
        assert!(Material::new("resonator", [0.2, 0.5, 1.05, 0.9, 0.7, 0.6, 0.5, 0.4]).is_ok());
    }

    #[test]
    fn slice_constructor_checks_shape() {
        let material = Material::from_slice("row", &[0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]);
        assert!(material.is_ok());

        assert_eq!(
            Material::from_slice("short row", &[0.1, 0.2, 0.3]),
            Err(AcousticsError::SpectrumLength { expected: OCTAVE_BAND_COUNT, actual: 3 })
        );
    }

    #[test]
    fn name_rules() {
        assert_eq!(
            Material::new("", [0.1; 8]),
            Err(AcousticsError::EmptyInput { what: "material name" })
        );

        let overlong = [b'x'; MAX_NAME_LEN + 1];
        let overlong = core::str::from_utf8(&overlong).unwrap();
        assert_eq!(
            Material::new(overlong, [0.1; 8]),
            Err(AcousticsError::CapacityExceeded { what: "material name", limit: MAX_NAME_LEN })
        );
    }

    #[test]
    fn price_must_be_non_negative() {
        let material = Material::new("panel", [0.3; 8]).unwrap();
        assert!(material.clone().with_price(-1.0).is_err());
        let priced = material.with_price(49.9).unwrap();
        assert_eq!(priced.price_eur_per_m2(), Some(49.9));
    }
}
