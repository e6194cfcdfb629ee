//! Energy statistics per facade orientation from a small export.

use daylighting::energy::{aggregate_by_material, primary_material};
use daylighting::{EnergyRecord, aggregate_energy_metrics};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    fmt().with_env_filter(filter).init();

    let records = vec![
        EnergyRecord::new(10.0, 0.0, "glass-clear", 5.0),
        EnergyRecord::new(20.0, 0.0, "glass-clear", 15.0),
        EnergyRecord::new(5.0, 90.0, "glass-tinted", 2.0),
        EnergyRecord::new(8.0, 180.0, "glass-low-e", 24.0),
        EnergyRecord::new(6.0, 270.0, "glass-reflective", 3.0),
        EnergyRecord::new(3.0, 360.0, "glass-tinted", 1.5),
    ];

    let metrics = aggregate_energy_metrics(&records);
    println!("{:>8} {:>4} {:>10} {:>8} {:>10} {:>8} {:>5}", "deg", "dir", "kWh", "m²", "kWh/rec", "kWh/m²", "n");
    for group in &metrics.by_orientation {
        println!(
            "{:>8.1} {:>4} {:>10.2} {:>8.2} {:>10.2} {:>8.3} {:>5}",
            group.orientation_degrees,
            group.cardinal_direction(),
            group.total_energy_kwh,
            group.total_area_m2,
            group.average_energy_kwh_per_record,
            group.energy_density_kwh_per_m2,
            group.record_count
        );
    }
    println!(
        "\nOverall: {:.2} kWh over {:.2} m², {} orientations, {} records, mean of averages {:.2}",
        metrics.overall.total_energy_kwh,
        metrics.overall.total_area_m2,
        metrics.overall.orientation_count,
        metrics.overall.record_count,
        metrics.overall.average_energy_kwh_per_record
    );

    let normalized: Vec<EnergyRecord> = records
        .iter()
        .cloned()
        .map(EnergyRecord::with_normalized_orientation)
        .collect();
    println!(
        "After normalizing orientations: {} groups",
        aggregate_energy_metrics(&normalized).overall.orientation_count
    );

    println!("\nPrimary material: {}", primary_material(&records).unwrap_or("none"));
    for material in aggregate_by_material(&records) {
        println!(
            "  {:<18} {:>8.2} kWh  {:>6.3} kWh/m²",
            material.material, material.total_energy_kwh, material.energy_density_kwh_per_m2
        );
    }
}
