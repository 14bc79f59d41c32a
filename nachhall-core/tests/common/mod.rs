//! Common fixtures and assertion helpers for integration tests
//!
//! This module provides:
//! - Rooms at realistic sizes with the default indoor climate
//! - Materials with typical laboratory absorption spectra
//! - Surface kits assembling those materials into complete room finishes
//! - Float comparison against hand-computed reference values
//!
//! All spectra run over the octave bands 63 Hz through 8 kHz.

#![allow(dead_code)]

use nachhall_core::{Material, Room, Surface};

/// Relative-tolerance comparison against a reference value.
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = if expected.abs() > 1.0 { expected.abs() } else { 1.0 };
    assert!(
        (actual - expected).abs() <= rel_tol * scale,
        "expected {expected}, got {actual} (tolerance {rel_tol})"
    );
}

/// Classroom of 10 x 6 x 3 m at the default indoor climate.
pub fn classroom() -> Room {
    Room::new(180.0).and_then(|r| r.with_height(3.0)).unwrap()
}

/// Office of 120 m³ with a 2.7 m ceiling.
pub fn office() -> Room {
    Room::new(120.0).and_then(|r| r.with_height(2.7)).unwrap()
}

pub fn linoleum_floor() -> Material {
    Material::new("linoleum on screed", [0.02, 0.02, 0.03, 0.03, 0.04, 0.05, 0.05, 0.06])
        .unwrap()
}

pub fn smooth_plaster() -> Material {
    Material::new("smooth plaster", [0.02, 0.02, 0.03, 0.04, 0.05, 0.05, 0.06, 0.06]).unwrap()
}

pub fn window_glass() -> Material {
    Material::new("insulating glazing", [0.35, 0.25, 0.18, 0.12, 0.07, 0.05, 0.04, 0.04])
        .unwrap()
}

pub fn mineral_wool_absorber() -> Material {
    Material::new("mineral wool absorber 40mm", [0.35, 0.5, 0.65, 0.8, 0.85, 0.85, 0.8, 0.75])
        .unwrap()
}

pub fn perforated_panel() -> Material {
    Material::new("perforated wood panel", [0.45, 0.6, 0.5, 0.35, 0.25, 0.2, 0.15, 0.12])
        .unwrap()
}

/// Curtain measured only from 125 Hz upward.
pub fn curtain_partial() -> Material {
    Material::from_partial(
        "heavy curtain, draped",
        [
            None,
            Some(0.1),
            Some(0.25),
            Some(0.55),
            Some(0.65),
            Some(0.7),
            Some(0.7),
            Some(0.65),
        ],
    )
    .unwrap()
}

/// The classroom as built: hard finishes everywhere.
pub fn bare_classroom_surfaces() -> [Surface; 4] {
    [
        Surface::new("floor", 60.0, linoleum_floor()).unwrap(),
        Surface::new("ceiling", 60.0, smooth_plaster()).unwrap(),
        Surface::new("walls", 84.0, smooth_plaster()).unwrap(),
        Surface::new("window front", 12.0, window_glass()).unwrap(),
    ]
}

/// The classroom after treatment: half the ceiling carries an absorber and
/// part of the rear wall a perforated bass panel.
pub fn treated_classroom_surfaces() -> [Surface; 6] {
    [
        Surface::new("floor", 60.0, linoleum_floor()).unwrap(),
        Surface::new("absorber ceiling", 30.0, mineral_wool_absorber()).unwrap(),
        Surface::new("plaster ceiling", 30.0, smooth_plaster()).unwrap(),
        Surface::new("walls", 72.0, smooth_plaster()).unwrap(),
        Surface::new("bass panels", 12.0, perforated_panel()).unwrap(),
        Surface::new("window front", 12.0, window_glass()).unwrap(),
    ]
}
