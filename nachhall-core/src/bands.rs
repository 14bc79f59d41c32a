//! Octave Bands and Per-Band Spectra
//!
//! All acoustic quantities in this crate are evaluated per octave band on the
//! fixed eight-band grid from 63 Hz to 8 kHz. [`BandSpectrum`] is the shared
//! container for such quantities: one slot per band, each slot explicitly
//! present or absent.
//!
//! Absent slots are normal data, not errors. Manufacturer absorption tables
//! often start at 125 Hz, and some DIN 18041 categories define no numeric
//! limits at all. An undefined band stays undefined through the computation
//! chain without affecting its neighbours.

use crate::errors::AcousticsResult;
use crate::validate::check_finite;

/// Number of octave bands the engine evaluates.
pub const OCTAVE_BAND_COUNT: usize = 8;

/// Center frequencies of the evaluated octave bands in Hz.
///
/// Order is fixed and significant: every per-band array in the crate lines
/// up index-for-index with this table.
pub const OCTAVE_BANDS_HZ: [f64; OCTAVE_BAND_COUNT] =
    [63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0];

/// Per-octave-band values with explicit empty slots.
///
/// Constructed from input data via [`from_values`](Self::from_values) or
/// [`from_partial`](Self::from_partial), both of which reject NaN and
/// infinities. Spectra produced by the engine itself may carry infinite
/// values where the physics saturates (a room with no absorption at a band
/// never stops ringing), but never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandSpectrum {
    values: [Option<f64>; OCTAVE_BAND_COUNT],
}

impl BandSpectrum {
    /// Spectrum with every band undefined.
    pub const fn undefined() -> Self {
        Self { values: [None; OCTAVE_BAND_COUNT] }
    }

    /// Build a fully-defined spectrum; every entry must be finite.
    pub fn from_values(values: [f64; OCTAVE_BAND_COUNT]) -> AcousticsResult<Self> {
        let mut slots = [None; OCTAVE_BAND_COUNT];
        for (slot, &value) in slots.iter_mut().zip(values.iter()) {
            check_finite("band value", value)?;
            *slot = Some(value);
        }
        Ok(Self { values: slots })
    }

    /// Build a spectrum where individual bands may be undefined.
    ///
    /// Defined entries must be finite; `None` marks a band without data.
    pub fn from_partial(values: [Option<f64>; OCTAVE_BAND_COUNT]) -> AcousticsResult<Self> {
        for value in values.iter().flatten() {
            check_finite("band value", *value)?;
        }
        Ok(Self { values })
    }

    /// Unchecked constructor for spectra computed inside the engine.
    pub(crate) const fn from_raw(values: [Option<f64>; OCTAVE_BAND_COUNT]) -> Self {
        Self { values }
    }

    /// All band slots in table order.
    pub const fn values(&self) -> &[Option<f64>; OCTAVE_BAND_COUNT] {
        &self.values
    }

    /// Value at a band index, `None` when undefined or out of range.
    pub fn value_at(&self, band: usize) -> Option<f64> {
        self.values.get(band).copied().flatten()
    }

    /// Iterate over the band slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// True when every band carries a value.
    pub fn is_fully_defined(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Number of bands carrying a value.
    pub fn defined_bands(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}
