//! Room Surfaces
//!
//! A [`Surface`] pairs an area with the [`Material`] covering it. The product
//! of area and absorption coefficient is the surface's equivalent absorption
//! area in m² Sabine, the quantity the reverberation formula sums over all
//! surfaces of the room.

use crate::bands::{BandSpectrum, OCTAVE_BAND_COUNT};
use crate::errors::AcousticsResult;
use crate::material::{checked_name, Material, MAX_NAME_LEN};
use crate::validate::check_above;

/// One bounded surface of the room, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    name: heapless::String<MAX_NAME_LEN>,
    area_m2: f64,
    material: Material,
}

impl Surface {
    /// Surface with a positive area, covered by the given material.
    pub fn new(name: &str, area_m2: f64, material: Material) -> AcousticsResult<Self> {
        let name = checked_name("surface name", name)?;
        check_above("surface area", area_m2, 0.0)?;
        Ok(Self { name, area_m2, material })
    }

    /// Surface label ("ceiling", "back wall", ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surface area (m²).
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Covering material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Equivalent absorption area per band (m² Sabine).
    ///
    /// Bands without absorption data stay undefined.
    pub fn absorption_area(&self) -> BandSpectrum {
        let mut slots = [None; OCTAVE_BAND_COUNT];
        for (slot, coefficient) in slots.iter_mut().zip(self.material.absorption().iter()) {
            *slot = coefficient.map(|a| self.area_m2 * a);
        }
        BandSpectrum::from_raw(slots)
    }
}
