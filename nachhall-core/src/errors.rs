//! Error Types for Acoustic Input Validation
//!
//! ## Design Philosophy
//!
//! Nachhall validates eagerly: every constructor and `with_*` method checks
//! its inputs before any physics runs, so the computation modules can assume
//! well-formed values throughout. The error type follows from that:
//!
//! 1. **Small and Inline**: No heap allocation - only `&'static str` field
//!    names and plain numbers, so errors stay `Copy` and work without `std`.
//!
//! 2. **Two Classes of Failure**: Values that are not usable numbers at all
//!    (NaN, infinity, wrong spectrum shape) versus numbers outside their
//!    physical domain (negative area, humidity above 100%). UI callers
//!    typically reject the first class outright and re-prompt on the second.
//!
//! 3. **Fail the Call, Keep the Value**: All records are immutable, so a
//!    failed update never leaves a half-modified room or material behind.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use nachhall_core::{AcousticsError, Room};
//!
//! fn room_from_form_input(volume_m3: f64) {
//!     match Room::new(volume_m3) {
//!         Ok(room) => {
//!             // Proceed with surface setup and analysis
//!             let _ = room;
//!         }
//!         Err(AcousticsError::NotFinite { field }) => {
//!             // Not a usable number - reject the input outright
//!             let _ = field;
//!         }
//!         Err(AcousticsError::OutOfRange { field, min, max, .. }) => {
//!             // Physically impossible - show the permitted interval
//!             let _ = (field, min, max);
//!         }
//!         Err(_) => {
//!             // Remaining variants concern spectra, capacities and usage codes
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for acoustic construction and computation.
pub type AcousticsResult<T> = Result<T, AcousticsError>;

/// Validation errors - kept small and allocation-free
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AcousticsError {
    /// Input is NaN or infinite where a finite number is required
    #[error("{field} is not a finite number")]
    NotFinite {
        /// Name of the offending parameter
        field: &'static str,
    },

    /// Value outside its physical domain
    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower domain bound (inclusive unless documented otherwise)
        min: f64,
        /// Upper domain bound
        max: f64,
    },

    /// Per-band data has the wrong number of entries
    #[error("Spectrum length {actual} does not match the {expected} octave bands")]
    SpectrumLength {
        /// Number of bands the engine works on
        expected: usize,
        /// Number of entries actually supplied
        actual: usize,
    },

    /// A required collection or name was empty
    #[error("Empty input: {what}")]
    EmptyInput {
        /// What was expected to be non-empty
        what: &'static str,
    },

    /// Fixed-capacity storage cannot hold the input
    #[error("Capacity exceeded for {what} (limit {limit})")]
    CapacityExceeded {
        /// Which bounded container overflowed
        what: &'static str,
        /// Its compile-time capacity
        limit: usize,
    },

    /// Usage code is not one of the DIN 18041 categories
    #[error("Unknown DIN 18041 usage code")]
    UnknownUsageCode,

    /// Category needs the room height, but none was set
    #[error("Room height required for DIN 18041 type {category}")]
    HeightRequired {
        /// The height-dependent category code
        category: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AcousticsError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite { field } =>
                defmt::write!(fmt, "{} not finite", field),
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", field, value, min, max),
            Self::SpectrumLength { expected, actual } =>
                defmt::write!(fmt, "Spectrum length {} != {}", actual, expected),
            Self::EmptyInput { what } =>
                defmt::write!(fmt, "Empty: {}", what),
            Self::CapacityExceeded { what, limit } =>
                defmt::write!(fmt, "Capacity {} > {}", what, limit),
            Self::UnknownUsageCode =>
                defmt::write!(fmt, "Unknown usage code"),
            Self::HeightRequired { category } =>
                defmt::write!(fmt, "Height required for {}", category),
        }
    }
}
