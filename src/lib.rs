//! # Daylighting
//!
//! Sun position, window daylight and energy statistics for building projects.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate is a pure computation engine in four stages:
//! - **Solar position**: date/time and location to sun azimuth and elevation
//! - **Light intensity**: sun position plus window and sky to direct/ambient light
//! - **Illuminance**: natural and artificial light to lux, efficiency and
//!   a recommended artificial light level
//! - **Energy metrics**: per-window energy records grouped by facade orientation
//!
//! All functions are stateless and operate on caller-owned values, so they
//! can be called from any number of threads.
//!
//! ## Features
//!
//! - `std` (default): native float math and `std::error::Error`
//! - `chrono` (default): `DateTime<Tz>` based convenience API
//! - `libm`: pure Rust math for `no_std` targets (an allocator is still required)
//! - `serde`: `Serialize`/`Deserialize` for value types and metrics
//!
//! ```toml
//! # Default: std + chrono
//! daylighting = "0.1"
//!
//! # no_std, numeric API only
//! daylighting = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Input ranges
//!
//! Validating constructors (`GeoCoordinate::new`, `SunPosition::new`,
//! `MaterialSpec::new`, `LightingInputs::new`, ...) reject out-of-range
//! values with [`Error`]. The engine functions themselves never fail: they
//! clamp fractions to `[0, 1]`, areas to `>= 0`, and return `0` where a
//! denominator would be zero.
//!
//! ## Quick Start
//!
//! ### Sun position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use daylighting::solar;
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T13:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = solar::compute_sun_position(datetime, 40.7128, -74.0060);
//!
//! println!("Azimuth: {:.1}°", position.azimuth());
//! println!("Elevation: {:.1}°", position.elevation());
//! # }
//! ```
//!
//! ### Window daylight (numeric API)
//! ```rust
//! use daylighting::{GeoCoordinate, IlluminanceConfig, MaterialCatalog, LightModel};
//! use daylighting::simulation::{LightingInputs, simulate_lighting_at};
//! use daylighting::time::JulianDate;
//!
//! let catalog = MaterialCatalog::standard();
//! let glazing = catalog.require("glass-low-e").unwrap();
//!
//! let jd = JulianDate::from_utc(2026, 6, 21, 17, 0, 0.0).unwrap();
//! let location = GeoCoordinate::default_location();
//! let sun = daylighting::solar::sun_position_at(jd, location);
//!
//! let inputs = LightingInputs::new(sun, 3.0, 0.25, 0.1, glazing).unwrap();
//! let report = simulate_lighting_at(jd, location, &inputs, LightModel::CloudCover, &IlluminanceConfig::standard());
//!
//! assert!(report.illuminance.total_lux > 0.0);
//! assert!((0.0..=100.0).contains(&report.illuminance.efficiency_percent));
//! ```
//!
//! ### Energy by orientation
//! ```rust
//! use daylighting::{EnergyRecord, aggregate_energy_metrics};
//!
//! let records = [
//!     EnergyRecord::new(10.0, 0.0, "glass-clear", 5.0),
//!     EnergyRecord::new(5.0, 90.0, "glass-tinted", 2.0),
//! ];
//! let metrics = aggregate_energy_metrics(&records);
//! assert_eq!(metrics.overall.orientation_count, 2);
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth / orientation**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]

extern crate alloc;

// Public API exports
pub use crate::catalog::MaterialCatalog;
pub use crate::energy::{
    BuildingSummary, EnergyMetrics, EnergyMetricsAccumulator, EnergyRecord, OrientationMetrics,
    OverallMetrics, aggregate_energy_metrics, estimate_building,
};
pub use crate::error::{Error, Result};
pub use crate::illuminance::IlluminanceConfig;
pub use crate::light::{LightModel, compute_light_intensity};
pub use crate::orientation::CardinalDirection;
pub use crate::simulation::{LightingInputs, LightingReport, simulate_lighting};
#[cfg(feature = "chrono")]
pub use crate::solar::compute_sun_position;
pub use crate::solar::compute_sun_position_from_julian;
pub use crate::types::{GeoCoordinate, IlluminanceResult, LightIntensity, MaterialSpec, SunPosition};

// Engine stages
pub mod energy;
pub mod illuminance;
pub mod light;
pub mod simulation;
pub mod solar;

// Core modules
pub mod catalog;
pub mod error;
pub mod orientation;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
