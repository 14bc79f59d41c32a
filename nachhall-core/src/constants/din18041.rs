//! DIN 18041 Band Tables
//!
//! Per-band shapes of the DIN 18041 tolerance ranges. The per-category
//! target formulas (slope, offset, A/V ratios) live with the category enum;
//! these tables describe how a scalar target time fans out over the eight
//! octave bands.

/// Upper tolerance of group A targets, as multiples of the target time.
///
/// The permitted band widens towards low frequencies: 170% of the target
/// at 63 Hz, 120% from 250 Hz up.
///
/// Source: DIN 18041:2016-03, Figure 2
pub const GROUP_A_UPPER_TOLERANCE: [f64; 8] = [1.7, 1.45, 1.2, 1.2, 1.2, 1.2, 1.2, 1.2];

/// Lower tolerance of group A targets, as multiples of the target time.
///
/// Narrows symmetrically at both spectrum ends: 50% of the target at 63 Hz
/// and 8 kHz, 80% across the mid bands.
///
/// Source: DIN 18041:2016-03, Figure 2
pub const GROUP_A_LOWER_TOLERANCE: [f64; 8] = [0.5, 0.65, 0.8, 0.8, 0.8, 0.8, 0.65, 0.5];

/// Bands where group B upper limits apply, as multiples of the target time.
///
/// Group B requirements cover 250 Hz to 2 kHz only; the outer bands carry
/// no requirement and the table zeroes them out.
///
/// Source: DIN 18041:2016-03, Section 5.2
pub const GROUP_B_UPPER_BANDS: [f64; 8] = [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0];

/// Room height below which group B uses fixed A/V ratios (m).
///
/// At or below this height the standard tabulates the required
/// absorption-to-volume ratio directly; above it the ratio follows a
/// logarithmic height formula.
///
/// Source: DIN 18041:2016-03, Table 3
pub const GROUP_B_HEIGHT_PIVOT_M: f64 = 2.5;

/// Height coefficient of the group B A/V formula (per decade of height).
///
/// The 4.69 in A/V = 1 / (d + 4.69 * log10(h)) for rooms taller than the
/// pivot height.
///
/// Source: DIN 18041:2016-03, Table 3
pub const GROUP_B_HEIGHT_LOG_COEFFICIENT: f64 = 4.69;
