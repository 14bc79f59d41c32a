//! DIN 18041 Target Derivation Example
//!
//! This example demonstrates deriving regulatory reverberation targets
//! and checking a prediction against them.
//!
//! ## What You'll Learn
//!
//! - The group A categories and their volume-driven targets
//! - The group B categories and their height-driven caps
//! - Why group B needs the room height
//! - Judging a prediction band by band
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_din18041_targets
//! ```

use nachhall_core::{
    AcousticsError, AcousticsResult, Din18041Limits, Material, ReverberationAnalysis, Room,
    Surface, UsageCategory, OCTAVE_BANDS_HZ, OCTAVE_BAND_COUNT,
};

fn main() -> AcousticsResult<()> {
    println!("Nachhall DIN 18041 Example");
    println!("==========================\n");

    let room = Room::new(180.0)?.with_height(3.0)?;
    println!("Room: {} m³, height {} m\n", room.volume_m3(), room.height_m().unwrap_or(0.0));

    // Every category the standard defines, against the same room.
    println!("{:<16} {:>12} {:>12} {:>12}", "Category", "T_soll [s]", "upper@500", "lower@500");
    for category in UsageCategory::ALL {
        let limits = Din18041Limits::derive(&room, category)?;
        match limits.target_time_s() {
            Some(target) => println!(
                "{:<16} {:>12.2} {:>12.2} {:>12.2}",
                category.code(),
                target,
                limits.upper_limit_s().value_at(3).unwrap_or(f64::NAN),
                limits.lower_limit_s().value_at(3).unwrap_or(f64::NAN),
            ),
            None => println!("{:<16} {:>12}", category.code(), "-"),
        }
    }
    println!();

    // Group B categories refuse rooms without a height.
    let hall = Room::new(2500.0)?;
    match Din18041Limits::derive(&hall, UsageCategory::B3) {
        Err(AcousticsError::HeightRequired { category }) => {
            println!("As expected, {category} needs the room height to derive a cap.");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }
    let hall = hall.with_height(6.5)?;
    let limits = Din18041Limits::derive(&hall, UsageCategory::B3)?;
    println!(
        "With height 6.5 m the B3 cap is {:.2} s over 250 Hz .. 2 kHz.\n",
        limits.target_time_s().unwrap_or(f64::NAN)
    );

    // Judge a treated classroom against the teaching category A3.
    let surfaces = [
        Surface::new(
            "floor",
            60.0,
            Material::new("linoleum", [0.02, 0.02, 0.03, 0.03, 0.04, 0.05, 0.05, 0.06])?,
        )?,
        Surface::new(
            "absorber ceiling",
            30.0,
            Material::new("mineral wool", [0.35, 0.5, 0.65, 0.8, 0.85, 0.85, 0.8, 0.75])?,
        )?,
        Surface::new(
            "plaster ceiling and walls",
            102.0,
            Material::new("plaster", [0.02, 0.02, 0.03, 0.04, 0.05, 0.05, 0.06, 0.06])?,
        )?,
        Surface::new(
            "bass panels",
            12.0,
            Material::new("perforated panel", [0.45, 0.6, 0.5, 0.35, 0.25, 0.2, 0.15, 0.12])?,
        )?,
        Surface::new(
            "window front",
            12.0,
            Material::new("glazing", [0.35, 0.25, 0.18, 0.12, 0.07, 0.05, 0.04, 0.04])?,
        )?,
    ];
    let analysis = ReverberationAnalysis::new(&room, &surfaces)?;
    let limits = Din18041Limits::derive(&room, UsageCategory::A3)?;

    println!("Checking the treated classroom against A3:");
    for band in 0..OCTAVE_BAND_COUNT {
        let time = analysis.reverberation_time_s().value_at(band).unwrap_or(f64::NAN);
        let upper = limits.upper_limit_s().value_at(band).unwrap_or(f64::NAN);
        let lower = limits.lower_limit_s().value_at(band).unwrap_or(f64::NAN);
        let verdict = if lower <= time && time <= upper { "ok" } else { "outside" };
        println!(
            "{:>6.0}Hz  {:.2} s in [{:.2}, {:.2}] .. {}",
            OCTAVE_BANDS_HZ[band], time, lower, upper, verdict
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Group A windows scale with volume and widen at the spectrum edges");
    println!("- Group B caps depend on ceiling height, not on volume");
    println!("- B1 and 'no requirements' rooms carry no numeric target");

    Ok(())
}
