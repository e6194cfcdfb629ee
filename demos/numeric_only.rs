//! The engine without chrono: Julian dates from calendar fields or Unix time.
//!
//! ```bash
//! cargo run --example numeric_only --no-default-features --features std
//! ```

use daylighting::illuminance::{
    energy_efficiency_percent, recommended_artificial_fraction, total_illuminance_lux,
};
use daylighting::time::JulianDate;
use daylighting::{LightModel, compute_light_intensity, solar};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 2026-03-20 12:00 UTC, equator at the prime meridian
    let jd = JulianDate::from_utc(2026, 3, 20, 12, 0, 0.0)?;
    let position = solar::compute_sun_position_from_julian(jd, 0.0, 0.0);
    println!("Equinox noon: azimuth {:.2}°, elevation {:.2}°", position.azimuth(), position.elevation());

    // Same instant from Unix milliseconds
    let from_millis = JulianDate::from_unix_millis(1_774_008_000_000);
    println!("JD from calendar {:.6}, from millis {:.6}", jd.julian_date(), from_millis.julian_date());

    let parts = solar::time_dependent_parts(jd);
    println!("Declination {:.4}°", parts.declination());
    for latitude in [-60.0, -30.0, 0.0, 30.0, 60.0] {
        let position = solar::sun_position_with_time_dependent_parts(latitude, 0.0, &parts);
        let light = compute_light_intensity(&position, 4.0, 0.9, 0.2, LightModel::CloudCover);
        let natural = light.direct;
        let artificial = recommended_artificial_fraction(natural, 500.0);
        println!(
            "  lat {latitude:6.1}: elev {:5.1}°  direct {:.3}  {:9.1} lx  efficiency {:5.1}%",
            position.elevation(),
            natural,
            total_illuminance_lux(natural, artificial, 0.9),
            energy_efficiency_percent(natural, artificial, 500.0, None)
        );
    }

    Ok(())
}
