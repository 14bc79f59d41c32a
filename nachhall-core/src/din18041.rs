//! DIN 18041 Target Ranges
//!
//! DIN 18041 ("Acoustic quality in rooms") sorts occupied rooms into two
//! groups and derives a target reverberation time T_soll for each:
//!
//! - **Group A** - rooms where speech or music must carry over distance
//!   (classrooms, lecture halls, music rooms). The target follows
//!   `T_soll = slope * log10(V) + offset` with per-category coefficients,
//!   and a tolerance band around it applies across all eight octave bands:
//!
//!   ```text
//!   Category  Use                 T_soll formula          advisory volume
//!   A1        Music               0.45*lg(V) + 0.07       30 .. 1000 m³
//!   A2        Speech/lecture      0.37*lg(V) + 0.14       50 .. 5000 m³
//!   A3        Teaching/meeting    0.32*lg(V) + 0.17       30 .. 5000 m³
//!   A4        Inclusive teaching  0.26*lg(V) + 0.14       30 .. 500 m³
//!   A5        Sport               0.75*lg(V) + 1.00       from 200 m³
//!   ```
//!
//! - **Group B** - rooms without acoustic communication over distance
//!   (offices, corridors, restaurants). The standard asks for a minimum
//!   ratio of absorption area to volume, graded by occupancy B1 to B5 and
//!   dependent on room height h:
//!
//!   ```text
//!   Category  A/V for h <= 2.5 m   A/V for h > 2.5 m
//!   B1        no requirement       no requirement
//!   B2        0.15                 1/(4.80 + 4.69*lg(h))
//!   B3        0.20                 1/(3.13 + 4.69*lg(h))
//!   B4        0.25                 1/(2.13 + 4.69*lg(h))
//!   B5        0.30                 1/(1.47 + 4.69*lg(h))
//!   ```
//!
//!   The equivalent target time is T_soll = 55.3 / (c * A/V), and the upper
//!   limit applies in the 250 Hz to 2 kHz bands only.
//!
//! Volumes outside the advisory ranges of group A are design smells, not
//! input errors: the engine logs a warning and computes anyway, matching
//! how the standard itself treats them (the formulas extrapolate).

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

use core::fmt;
use core::str::FromStr;

use crate::bands::{BandSpectrum, OCTAVE_BAND_COUNT};
use crate::constants::din18041::{
    GROUP_A_LOWER_TOLERANCE, GROUP_A_UPPER_TOLERANCE, GROUP_B_HEIGHT_LOG_COEFFICIENT,
    GROUP_B_HEIGHT_PIVOT_M, GROUP_B_UPPER_BANDS,
};
use crate::constants::physics::SABINE_COEFFICIENT;
use crate::errors::{AcousticsError, AcousticsResult};
use crate::room::Room;

/// DIN 18041 usage categories, plus the explicit "no requirements" choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsageCategory {
    /// Music performance
    A1,
    /// Speech and lectures
    A2,
    /// Teaching and meetings
    A3,
    /// Teaching and meetings with inclusion needs
    A4,
    /// Sport
    A5,
    /// Rooms without qualified requirements
    B1,
    /// Short-stay rooms
    B2,
    /// Longer-stay rooms
    B3,
    /// Rooms with a need for noise reduction
    B4,
    /// Rooms with extended need for noise reduction
    B5,
    /// Explicitly no regulatory evaluation
    NoRequirement,
}

impl UsageCategory {
    /// Every category, in standard order.
    pub const ALL: [UsageCategory; 11] = [
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::B1,
        Self::B2,
        Self::B3,
        Self::B4,
        Self::B5,
        Self::NoRequirement,
    ];

    /// Parse the exact wire code used by catalogs and UI dropdowns.
    ///
    /// Codes are case-sensitive: `"A1"` through `"B5"` plus the sentinel
    /// `"no requirements"`.
    pub fn parse(code: &str) -> AcousticsResult<Self> {
        match code {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "A3" => Ok(Self::A3),
            "A4" => Ok(Self::A4),
            "A5" => Ok(Self::A5),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "B3" => Ok(Self::B3),
            "B4" => Ok(Self::B4),
            "B5" => Ok(Self::B5),
            "no requirements" => Ok(Self::NoRequirement),
            _ => Err(AcousticsError::UnknownUsageCode),
        }
    }

    /// The wire code this category parses from.
    pub fn code(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
            Self::B5 => "B5",
            Self::NoRequirement => "no requirements",
        }
    }

    /// True for the categories whose targets need the room height.
    pub fn requires_height(&self) -> bool {
        matches!(self, Self::B2 | Self::B3 | Self::B4 | Self::B5)
    }

    /// Advisory volume range of the group A categories, `(min, max)` in m³.
    ///
    /// `None` for group B and the sentinel; an open upper end (A5) is
    /// `(min, None)`. Outside these ranges the formulas still compute but a
    /// warning is logged.
    pub fn recommended_volume_range(&self) -> Option<(f64, Option<f64>)> {
        match self {
            Self::A1 => Some((30.0, Some(1000.0))),
            Self::A2 => Some((50.0, Some(5000.0))),
            Self::A3 => Some((30.0, Some(5000.0))),
            Self::A4 => Some((30.0, Some(500.0))),
            Self::A5 => Some((200.0, None)),
            _ => None,
        }
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UsageCategory {
    type Err = AcousticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Derived DIN 18041 limits for one room and category.
///
/// The target time is `None` for [`UsageCategory::NoRequirement`]; the band
/// limits are then undefined across the board. Group B categories carry
/// upper limits only in the 250 Hz to 2 kHz bands (zero elsewhere) and an
/// all-zero lower limit: the standard only caps reverberation there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Din18041Limits {
    category: UsageCategory,
    target_time_s: Option<f64>,
    upper_limit_s: BandSpectrum,
    lower_limit_s: BandSpectrum,
}

impl Din18041Limits {
    /// Derive the limits for a room and category.
    ///
    /// Group B categories beyond B1 fail with
    /// [`AcousticsError::HeightRequired`] when the room has no height set.
    pub fn derive(room: &Room, category: UsageCategory) -> AcousticsResult<Self> {
        let volume = room.volume_m3();

        match category {
            UsageCategory::NoRequirement => Ok(Self {
                category,
                target_time_s: None,
                upper_limit_s: BandSpectrum::undefined(),
                lower_limit_s: BandSpectrum::undefined(),
            }),

            UsageCategory::A1
            | UsageCategory::A2
            | UsageCategory::A3
            | UsageCategory::A4
            | UsageCategory::A5 => {
                warn_outside_advisory(category, volume);
                let target = group_a_target(category, volume);
                Ok(Self {
                    category,
                    target_time_s: Some(target),
                    upper_limit_s: scaled_spectrum(&GROUP_A_UPPER_TOLERANCE, target),
                    lower_limit_s: scaled_spectrum(&GROUP_A_LOWER_TOLERANCE, target),
                })
            }

            UsageCategory::B1 => {
                log_warn!("DIN 18041 sets no numeric requirement for type B1 rooms");
                Ok(Self {
                    category,
                    target_time_s: Some(0.0),
                    upper_limit_s: scaled_spectrum(&GROUP_B_UPPER_BANDS, 0.0),
                    lower_limit_s: scaled_spectrum(&GROUP_B_UPPER_BANDS, 0.0),
                })
            }

            UsageCategory::B2 | UsageCategory::B3 | UsageCategory::B4 | UsageCategory::B5 => {
                let height = room.height_m().ok_or(AcousticsError::HeightRequired {
                    category: category.code(),
                })?;
                let absorption_ratio = group_b_absorption_ratio(category, height);
                let c = room.speed_of_sound();
                let target =
                    (SABINE_COEFFICIENT / c) * (volume / (absorption_ratio * volume));
                Ok(Self {
                    category,
                    target_time_s: Some(target),
                    upper_limit_s: scaled_spectrum(&GROUP_B_UPPER_BANDS, target),
                    lower_limit_s: scaled_spectrum(&GROUP_B_UPPER_BANDS, 0.0),
                })
            }
        }
    }

    /// Parse a wire code and derive in one step.
    pub fn derive_from_code(room: &Room, code: &str) -> AcousticsResult<Self> {
        Self::derive(room, UsageCategory::parse(code)?)
    }

    /// The evaluated category.
    pub fn category(&self) -> UsageCategory {
        self.category
    }

    /// Target reverberation time T_soll (s); `None` without requirements.
    pub fn target_time_s(&self) -> Option<f64> {
        self.target_time_s
    }

    /// Upper limit per band (s).
    pub fn upper_limit_s(&self) -> &BandSpectrum {
        &self.upper_limit_s
    }

    /// Lower limit per band (s).
    pub fn lower_limit_s(&self) -> &BandSpectrum {
        &self.lower_limit_s
    }
}

/// T_soll of the group A categories (s).
fn group_a_target(category: UsageCategory, volume: f64) -> f64 {
    match category {
        UsageCategory::A1 => 0.45 * libm::log10(volume) + 0.07,
        UsageCategory::A2 => 0.37 * libm::log10(volume) + 0.14,
        UsageCategory::A3 => 0.32 * libm::log10(volume) + 0.17,
        UsageCategory::A4 => 0.26 * libm::log10(volume) + 0.14,
        UsageCategory::A5 => 0.75 * libm::log10(volume) + 1.0,
        _ => unreachable!("group A targets are only derived for A categories"),
    }
}

/// Required absorption-to-volume ratio of the group B categories (1/m).
fn group_b_absorption_ratio(category: UsageCategory, height: f64) -> f64 {
    let low_height = height <= GROUP_B_HEIGHT_PIVOT_M;
    let log_height = libm::log10(height);
    match category {
        UsageCategory::B2 if low_height => 0.15,
        UsageCategory::B2 => 1.0 / (4.8 + GROUP_B_HEIGHT_LOG_COEFFICIENT * log_height),
        UsageCategory::B3 if low_height => 0.20,
        UsageCategory::B3 => 1.0 / (3.13 + GROUP_B_HEIGHT_LOG_COEFFICIENT * log_height),
        UsageCategory::B4 if low_height => 0.25,
        UsageCategory::B4 => 1.0 / (2.13 + GROUP_B_HEIGHT_LOG_COEFFICIENT * log_height),
        UsageCategory::B5 if low_height => 0.30,
        UsageCategory::B5 => 1.0 / (1.47 + GROUP_B_HEIGHT_LOG_COEFFICIENT * log_height),
        _ => unreachable!("absorption ratios are only derived for B2 to B5"),
    }
}

fn scaled_spectrum(shape: &[f64; OCTAVE_BAND_COUNT], target: f64) -> BandSpectrum {
    let mut values = [None; OCTAVE_BAND_COUNT];
    for (slot, factor) in values.iter_mut().zip(shape.iter()) {
        *slot = Some(factor * target);
    }
    BandSpectrum::from_raw(values)
}

fn warn_outside_advisory(category: UsageCategory, volume: f64) {
    let Some((min, max)) = category.recommended_volume_range() else {
        return;
    };
    if volume < min {
        log_warn!(
            "DIN 18041 recommends at least {} m³ for a type {} room, got {} m³",
            min,
            category.code(),
            volume
        );
    }
    if let Some(max) = max {
        if volume > max {
            log_warn!(
                "DIN 18041 recommends at most {} m³ for a type {} room, got {} m³",
                max,
                category.code(),
                volume
            );
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
    fn codes_round_trip() {
        for category in UsageCategory::ALL {
            assert_eq!(UsageCategory::parse(category.code()), Ok(category));
        }
        assert_eq!("B4".parse::<UsageCategory>(), Ok(UsageCategory::B4));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["A6", "B0", "C1", "", "a1", "No Requirements"] {
            assert_eq!(UsageCategory::parse(code), Err(AcousticsError::UnknownUsageCode));
        }
    }

    #[test]
    fn music_room_targets() {
        let room = Room::new(100.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::A1).unwrap();

        assert_close(limits.target_time_s().unwrap(), 0.97, 1e-9);
        assert_close(limits.upper_limit_s().value_at(0).unwrap(), 1.649, 1e-9);
        assert_close(limits.upper_limit_s().value_at(2).unwrap(), 1.164, 1e-9);
        assert_close(limits.lower_limit_s().value_at(0).unwrap(), 0.485, 1e-9);
        assert_close(limits.lower_limit_s().value_at(4).unwrap(), 0.776, 1e-9);
    }

    #[test]
    fn group_a_reference_targets() {
        let target = |category, volume: f64| {
            let room = Room::new(volume).unwrap();
            Din18041Limits::derive(&room, category).unwrap().target_time_s().unwrap()
        };

        assert_close(target(UsageCategory::A2, 1000.0), 1.25, 1e-9);
        assert_close(target(UsageCategory::A3, 100.0), 0.81, 1e-9);
        assert_close(target(UsageCategory::A4, 250.0), 0.76346440225473, 1e-9);
        assert_close(target(UsageCategory::A5, 5000.0), 3.77422750325201, 1e-9);
    }

    #[test]
    fn sport_hall_target_follows_formula_for_large_volumes() {
        let room = Room::new(20_000.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::A5).unwrap();
        assert_close(limits.target_time_s().unwrap(), 4.22577249674799, 1e-9);
    }

    #[test]
    fn group_b_requires_height() {
        let room = Room::new(100.0).unwrap();
        assert_eq!(
            Din18041Limits::derive(&room, UsageCategory::B2),
            Err(AcousticsError::HeightRequired { category: "B2" })
        );
        assert!(Din18041Limits::derive(&room, UsageCategory::B1).is_ok());
        assert!(Din18041Limits::derive(&room, UsageCategory::A2).is_ok());
    }

    #[test]
    fn low_rooms_use_tabulated_ratios() {
        let room = Room::new(100.0).unwrap().with_height(2.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::B2).unwrap();
        assert_close(limits.target_time_s().unwrap(), 1.07295304617773, 1e-9);

        // The pivot itself still belongs to the tabulated branch
        let at_pivot = Room::new(100.0).unwrap().with_height(2.5).unwrap();
        let limits = Din18041Limits::derive(&at_pivot, UsageCategory::B3).unwrap();
        assert_close(limits.target_time_s().unwrap(), 0.804714784633294, 1e-9);
    }

    #[test]
    fn tall_rooms_use_height_formula() {
        let target = |category, height: f64| {
            let room = Room::new(100.0).unwrap().with_height(height).unwrap();
            Din18041Limits::derive(&room, category).unwrap().target_time_s().unwrap()
        };

        assert_close(target(UsageCategory::B2, 4.0), 1.22697460177778, 1e-9);
        assert_close(target(UsageCategory::B3, 6.0), 1.09111750246144, 1e-9);
        assert_close(target(UsageCategory::B4, 3.2), 0.724107051592305, 1e-9);
        assert_close(target(UsageCategory::B5, 10.0), 0.991408614668219, 1e-9);
    }

    #[test]
    fn group_b_limits_cover_central_bands_only() {
        let room = Room::new(100.0).unwrap().with_height(3.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::B4).unwrap();
        let target = limits.target_time_s().unwrap();

        let upper = limits.upper_limit_s();
        assert_eq!(upper.value_at(0), Some(0.0));
        assert_eq!(upper.value_at(1), Some(0.0));
        assert_close(upper.value_at(2).unwrap(), target, 1e-12);
        assert_close(upper.value_at(5).unwrap(), target, 1e-12);
        assert_eq!(upper.value_at(6), Some(0.0));
        assert_eq!(upper.value_at(7), Some(0.0));

        for band in 0..OCTAVE_BAND_COUNT {
            assert_eq!(limits.lower_limit_s().value_at(band), Some(0.0));
        }
    }

    #[test]
    fn b1_has_zero_valued_limits() {
        let room = Room::new(100.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::B1).unwrap();
        assert_eq!(limits.target_time_s(), Some(0.0));
        for band in 0..OCTAVE_BAND_COUNT {
            assert_eq!(limits.upper_limit_s().value_at(band), Some(0.0));
            assert_eq!(limits.lower_limit_s().value_at(band), Some(0.0));
        }
    }

    #[test]
    fn no_requirement_yields_undefined_limits() {
        let room = Room::new(100.0).unwrap();
        let limits = Din18041Limits::derive(&room, UsageCategory::NoRequirement).unwrap();
        assert_eq!(limits.target_time_s(), None);
        assert_eq!(limits.upper_limit_s().defined_bands(), 0);
        assert_eq!(limits.lower_limit_s().defined_bands(), 0);
    }

    #[test]
    fn derive_from_code_combines_parse_and_derive() {
        let room = Room::new(400.0).unwrap();
        let limits = Din18041Limits::derive_from_code(&room, "A3").unwrap();
        assert_eq!(limits.category(), UsageCategory::A3);
        assert_eq!(
            Din18041Limits::derive_from_code(&room, "Z9"),
            Err(AcousticsError::UnknownUsageCode)
        );
    }

    #[test]
    fn advisory_ranges_expose_standard_table() {
        assert_eq!(UsageCategory::A1.recommended_volume_range(), Some((30.0, Some(1000.0))));
        assert_eq!(UsageCategory::A5.recommended_volume_range(), Some((200.0, None)));
        assert_eq!(UsageCategory::B3.recommended_volume_range(), None);
        assert!(UsageCategory::B5.requires_height());
        assert!(!UsageCategory::A1.requires_height());
    }
}
