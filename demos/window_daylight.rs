//! Daylight through one window over a summer day, for each standard glazing.
//!
//! Run with `RUST_LOG=daylighting=debug` to see the engine's trace events.

use chrono::{DateTime, Duration, FixedOffset};
use daylighting::light::WindowGeometry;
use daylighting::simulation::{LightingInputs, compare_lighting, simulate_lighting};
use daylighting::{GeoCoordinate, IlluminanceConfig, LightModel, MaterialCatalog, solar};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let location = GeoCoordinate::default_location();
    let catalog = MaterialCatalog::standard();
    let config = IlluminanceConfig::standard();
    let window = WindowGeometry::new(2.0, 1.5)?;
    let morning = "2026-06-21T06:00:00-04:00".parse::<DateTime<FixedOffset>>()?;

    println!("=== Window daylight, {:.2} m² at {:.4}, {:.4} ===\n", window.area_m2(), location.latitude(), location.longitude());

    for (id, entry) in catalog.iter() {
        println!("{} ({id}, transmittance {:.2})", entry.name, entry.spec.transmittance());
        for step in 0..=6 {
            let time = morning + Duration::hours(2 * step);
            let sun = solar::compute_sun_position(time, location.latitude(), location.longitude());
            let inputs = LightingInputs::for_window(sun, &window, 0.3, 0.2, entry.spec)?;
            let report = simulate_lighting(&inputs, LightModel::AreaTransmittance, &config);
            println!(
                "  {}  elev {:6.2}°  direct {:.3}  {:9.1} lx  efficiency {:5.1}%  natural share {:5.1}%",
                time.format("%H:%M"),
                sun.elevation(),
                report.intensity.direct,
                report.illuminance.total_lux,
                report.illuminance.efficiency_percent,
                report.natural_share_percent()
            );
        }
    }

    let noon = morning + Duration::hours(6);
    let sun = solar::compute_sun_position(noon, location.latitude(), location.longitude());
    let before = simulate_lighting(
        &LightingInputs::for_window(sun, &window, 0.3, 0.2, catalog.require("glass-reflective")?)?,
        LightModel::CloudCover,
        &config,
    );
    let after = simulate_lighting(
        &LightingInputs::for_window(sun, &window, 0.3, 0.2, catalog.require("glass-clear")?)?,
        LightModel::CloudCover,
        &config,
    );
    let comparison = compare_lighting(&before, &after);
    println!(
        "\nReflective -> clear at noon: {:+.1} lx, {:+.1} efficiency points",
        comparison.total_lux_delta, comparison.efficiency_delta_percent
    );

    Ok(())
}
