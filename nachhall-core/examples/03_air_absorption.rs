//! Air Absorption Example
//!
//! This example demonstrates the ISO 9613-1 air attenuation model on its
//! own, outside any room.
//!
//! ## What You'll Learn
//!
//! - How temperature, humidity and pressure shape air absorption
//! - The relaxation frequencies behind the band values
//! - Evaluating custom frequency lists such as third octaves
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_air_absorption
//! ```

use nachhall_core::{AcousticsResult, AirAttenuation, OCTAVE_BANDS_HZ};

fn main() -> AcousticsResult<()> {
    println!("Nachhall Air Absorption Example");
    println!("===============================\n");

    let climates = [
        ("winter, dry indoor air", 22.0, 25.0),
        ("standard indoor climate", 20.0, 50.0),
        ("summer, humid", 28.0, 75.0),
    ];

    for (label, temperature_c, humidity_pct) in climates {
        let air = AirAttenuation::for_octave_bands(temperature_c, humidity_pct, 101.325)?;
        println!("{label} ({temperature_c}°C, {humidity_pct}% rh):");
        println!(
            "  molar humidity {:.3}%, relaxation O₂ {:.0} Hz / N₂ {:.0} Hz",
            air.molar_humidity_pct(),
            air.oxygen_relaxation_hz(),
            air.nitrogen_relaxation_hz(),
        );
        print!("  α [dB/km]:");
        for band in 0..OCTAVE_BANDS_HZ.len() {
            print!(" {:>7.2}", air.attenuation_db_per_m()[band] * 1000.0);
        }
        println!("\n");
    }

    // Dry winter air eats the treble: compare the 8 kHz figures above.
    // The energy coefficient m is what the Sabine formula consumes.
    let air = AirAttenuation::for_octave_bands(20.0, 50.0, 101.325)?;
    println!("Energy absorption coefficient m at 20°C / 50% rh:");
    for (frequency, m) in air.frequencies_hz().iter().zip(air.absorption_per_m()) {
        println!("  {:>6.0} Hz  {:.3e} 1/m", frequency, m);
    }
    println!();

    // Any frequency list works, not just the octave mids.
    let thirds: Vec<f64> = (0..10).map(|i| 500.0 * (i as f64 / 3.0).exp2()).collect();
    let air = AirAttenuation::new(&thirds, 20.0, 50.0, 101.325)?;
    println!("Third octaves 500 Hz .. 4 kHz, α in dB/km:");
    for (frequency, alpha) in air.frequencies_hz().iter().zip(air.attenuation_db_per_m()) {
        println!("  {:>7.1} Hz  {:>7.2}", frequency, alpha * 1000.0);
    }

    // Mountain observatory at 80 kPa, still referenced to sea level.
    let mountain = AirAttenuation::for_octave_bands(10.0, 40.0, 80.0)?;
    println!(
        "\nAt 80 kPa and 10°C the 4 kHz band runs {:.2} dB/km (vs {:.2} at sea level).",
        mountain.attenuation_db_per_m()[6] * 1000.0,
        air_at_sea_level_4k()? * 1000.0,
    );

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Absorption rises roughly with the square of frequency");
    println!("- Dry air absorbs far more treble than humid air");
    println!("- The model degrades gracefully to zero at 0 Hz");

    Ok(())
}

fn air_at_sea_level_4k() -> AcousticsResult<f64> {
    let air = AirAttenuation::for_octave_bands(10.0, 40.0, 101.325)?;
    Ok(air.attenuation_db_per_m()[6])
}
