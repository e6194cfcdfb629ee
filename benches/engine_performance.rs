use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use daylighting::illuminance::IlluminanceConfig;
use daylighting::simulation::{LightingInputs, simulate_lighting};
use daylighting::time::JulianDate;
use daylighting::{
    EnergyRecord, LightModel, MaterialSpec, SunPosition, aggregate_energy_metrics,
    compute_light_intensity, solar,
};
use std::hint::black_box;

fn benchmark_single_sun_position(c: &mut Criterion) {
    let jd = JulianDate::from_utc(2023, 6, 21, 12, 0, 0.0).unwrap();

    c.bench_function("sun_position_single", |b| {
        b.iter(|| {
            solar::compute_sun_position_from_julian(
                black_box(jd),
                black_box(37.7749),
                black_box(-122.4194),
            )
        })
    });
}

/// Geographic grid at a fixed instant, with and without reusing the
/// time-dependent parts.
fn benchmark_coordinate_sweep(c: &mut Criterion) {
    let jd = JulianDate::from_utc(2023, 6, 21, 12, 0, 0.0).unwrap();
    let coordinates: Vec<(f64, f64)> = (-60..=60)
        .step_by(5)
        .flat_map(|lat| (-180..=180).step_by(10).map(move |lon| (f64::from(lat), f64::from(lon))))
        .collect();

    let mut group = c.benchmark_group("coordinate_sweep");
    group.throughput(Throughput::Elements(coordinates.len() as u64));

    group.bench_function("direct", |b| {
        b.iter(|| {
            for &(lat, lon) in &coordinates {
                black_box(solar::compute_sun_position_from_julian(jd, lat, lon));
            }
        })
    });

    group.bench_function("time_dependent_parts", |b| {
        b.iter(|| {
            let parts = solar::time_dependent_parts(jd);
            for &(lat, lon) in &coordinates {
                black_box(solar::sun_position_with_time_dependent_parts(lat, lon, &parts));
            }
        })
    });

    group.finish();
}

fn benchmark_light_models(c: &mut Criterion) {
    let sun = SunPosition::new(180.0, 42.0).unwrap();
    let mut group = c.benchmark_group("light_intensity");

    for model in [LightModel::AreaTransmittance, LightModel::CloudCover] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{model:?}")), &model, |b, &model| {
            b.iter(|| {
                compute_light_intensity(
                    black_box(&sun),
                    black_box(3.0),
                    black_box(0.7),
                    black_box(0.4),
                    model,
                )
            })
        });
    }

    group.finish();
}

fn benchmark_simulation(c: &mut Criterion) {
    let sun = SunPosition::new(135.0, 30.0).unwrap();
    let material = MaterialSpec::new(0.7, 200.0, 0.9).unwrap();
    let inputs = LightingInputs::new(sun, 4.0, 0.3, 0.2, material).unwrap();
    let config = IlluminanceConfig::standard();

    c.bench_function("simulate_lighting", |b| {
        b.iter(|| simulate_lighting(black_box(&inputs), LightModel::CloudCover, &config))
    });
}

fn benchmark_energy_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_aggregation");

    for size in [100_usize, 10_000] {
        let records: Vec<EnergyRecord> = (0..size)
            .map(|i| {
                let orientation = ((i % 8) * 45) as f64;
                EnergyRecord::new(2.0 + (i % 5) as f64, orientation, "glass-clear", (i % 17) as f64)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| aggregate_energy_metrics(black_box(records)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_sun_position,
    benchmark_coordinate_sweep,
    benchmark_light_models,
    benchmark_simulation,
    benchmark_energy_aggregation
);
criterion_main!(benches);
