//! Basic Reverberation Prediction Example
//!
//! This example demonstrates the simplest use case of Nachhall:
//! predicting the reverberation time of a classroom from its geometry
//! and surface finishes.
//!
//! ## What You'll Learn
//!
//! - Describing a room and its climate
//! - Assigning absorption spectra to surfaces
//! - Reading the per-band prediction
//! - Extending a measured baseline with planned treatment
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_reverberation_time
//! ```

use nachhall_core::{
    AcousticsResult, Material, ReverberationAnalysis, ReverberationConfig, Room, Surface,
    OCTAVE_BANDS_HZ, OCTAVE_BAND_COUNT,
};

fn main() -> AcousticsResult<()> {
    println!("Nachhall Reverberation Prediction Example");
    println!("=========================================\n");

    // A 10 x 6 x 3 m classroom at the default indoor climate
    // (20°C, 50% relative humidity, standard pressure).
    let room = Room::new(180.0)?.with_height(3.0)?;
    println!("Room: {} m³ at {}°C, c = {:.1} m/s", room.volume_m3(), room.temperature_c(),
        room.speed_of_sound());
    println!();

    // Absorption coefficients per octave band, 63 Hz .. 8 kHz.
    let linoleum = Material::new("linoleum", [0.02, 0.02, 0.03, 0.03, 0.04, 0.05, 0.05, 0.06])?;
    let plaster = Material::new("plaster", [0.02, 0.02, 0.03, 0.04, 0.05, 0.05, 0.06, 0.06])?;
    let absorber =
        Material::new("mineral wool", [0.35, 0.5, 0.65, 0.8, 0.85, 0.85, 0.8, 0.75])?;
    let glazing = Material::new("glazing", [0.35, 0.25, 0.18, 0.12, 0.07, 0.05, 0.04, 0.04])?;

    let surfaces = [
        Surface::new("floor", 60.0, linoleum)?,
        Surface::new("absorber ceiling", 30.0, absorber)?,
        Surface::new("plaster ceiling", 30.0, plaster.clone())?,
        Surface::new("walls", 84.0, plaster)?,
        Surface::new("window front", 12.0, glazing)?,
    ];
    for surface in &surfaces {
        println!("  {:<18} {:>6.1} m²  ({})", surface.name(), surface.area_m2(),
            surface.material().name());
    }
    println!();

    // Predict with and without the air absorption term.
    let with_air = ReverberationAnalysis::new(&room, &surfaces)?;
    let no_air = ReverberationAnalysis::with_config(
        &room,
        &surfaces,
        ReverberationConfig { air_damping: false, measured_reverberation_s: None },
    )?;

    println!("{:>8} {:>12} {:>10} {:>12}", "Band", "A [m²]", "T [s]", "T no-air [s]");
    for band in 0..OCTAVE_BAND_COUNT {
        println!(
            "{:>6.0}Hz {:>12.2} {:>10.2} {:>12.2}",
            OCTAVE_BANDS_HZ[band],
            with_air.equivalent_absorption_m2().value_at(band).unwrap_or(f64::NAN),
            with_air.reverberation_time_s().value_at(band).unwrap_or(f64::NAN),
            no_air.reverberation_time_s().value_at(band).unwrap_or(f64::NAN),
        );
    }
    println!();

    // A site measurement of the untreated room replaces the geometric
    // baseline: the surfaces then act as additional treatment.
    let measured = [1.8, 1.9, 1.7, 1.5, 1.4, 1.3, 1.1, 0.9];
    let refurbishment = ReverberationAnalysis::with_config(
        &room,
        &surfaces,
        ReverberationConfig { air_damping: true, measured_reverberation_s: Some(measured) },
    )?;

    println!("With the measured baseline of the untreated room:");
    println!("{:>8} {:>14} {:>12}", "Band", "measured [s]", "planned [s]");
    for band in 0..OCTAVE_BAND_COUNT {
        println!(
            "{:>6.0}Hz {:>14.2} {:>12.2}",
            OCTAVE_BANDS_HZ[band],
            measured[band],
            refurbishment.reverberation_time_s().value_at(band).unwrap_or(f64::NAN),
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Absorption, and with it the decay, varies strongly over frequency");
    println!("- Air damping dominates the 4 and 8 kHz bands in dry rooms");
    println!("- A measured baseline folds the as-built room into the prediction");

    Ok(())
}
