//! Room acoustics engine for Nachhall
//!
//! Predicts the reverberation time of a room from its geometry, air climate
//! and surface finishes, and derives the DIN 18041 target ranges the
//! prediction is judged against.
//!
//! Everything is computed per octave band (63 Hz to 8 kHz) on plain value
//! types: build a [`Room`], describe its [`Surface`]s, run a
//! [`ReverberationAnalysis`], compare against [`Din18041Limits`]. All inputs
//! are validated at construction; the computation itself cannot fail.
//!
//! ```rust
//! use nachhall_core::{
//!     Din18041Limits, Material, ReverberationAnalysis, Room, Surface, UsageCategory,
//! };
//!
//! let room = Room::new(180.0)?.with_height(3.0)?;
//! let surfaces = [
//!     Surface::new(
//!         "acoustic ceiling",
//!         60.0,
//!         Material::new("mineral wool panel", [0.35, 0.5, 0.65, 0.8, 0.85, 0.85, 0.8, 0.75])?,
//!     )?,
//!     Surface::new(
//!         "walls and floor",
//!         180.0,
//!         Material::new("plaster on brick", [0.02, 0.02, 0.03, 0.04, 0.05, 0.05, 0.06, 0.06])?,
//!     )?,
//! ];
//!
//! let analysis = ReverberationAnalysis::new(&room, &surfaces)?;
//! let limits = Din18041Limits::derive(&room, UsageCategory::A3)?;
//!
//! let t_mid = analysis.reverberation_time_s().value_at(4).unwrap();
//! let t_cap = limits.upper_limit_s().value_at(4).unwrap();
//! println!("T(1 kHz) = {t_mid:.2} s, permitted up to {t_cap:.2} s");
//! # Ok::<(), nachhall_core::AcousticsError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod air;
pub mod bands;
pub mod constants;
pub mod din18041;
pub mod errors;
pub mod material;
pub mod reverberation;
pub mod room;
pub mod surface;

mod validate;

// Public API
pub use air::{AirAttenuation, MAX_FREQUENCY_BANDS};
pub use bands::{BandSpectrum, OCTAVE_BANDS_HZ, OCTAVE_BAND_COUNT};
pub use din18041::{Din18041Limits, UsageCategory};
pub use errors::{AcousticsError, AcousticsResult};
pub use material::{Material, MAX_NAME_LEN};
pub use reverberation::{equivalent_absorption_area, ReverberationAnalysis, ReverberationConfig};
pub use room::Room;
pub use surface::Surface;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
