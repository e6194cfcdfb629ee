//! Energy metrics per facade orientation.
//!
//! Records are grouped by their exact orientation value. There is no binning:
//! `0.0` and `360.0` are different groups unless the caller normalizes first
//! (see [`EnergyRecord::with_normalized_orientation`]). `-0.0` and `0.0` are
//! the same group. Groups keep the order in which their orientation first
//! appears.
//!
//! The overall average is the mean of the group averages, not a
//! record-weighted mean.
//!
//! ```
//! use daylighting::energy::{EnergyRecord, aggregate_energy_metrics};
//!
//! let records = [
//!     EnergyRecord::new(10.0, 0.0, "glass-clear", 5.0),
//!     EnergyRecord::new(20.0, 0.0, "glass-clear", 15.0),
//!     EnergyRecord::new(5.0, 90.0, "glass-tinted", 2.0),
//! ];
//! let metrics = aggregate_energy_metrics(&records);
//!
//! assert_eq!(metrics.by_orientation.len(), 2);
//! assert_eq!(metrics.overall.total_energy_kwh, 22.0);
//! assert_eq!(metrics.overall.average_energy_kwh_per_record, 6.0);
//! ```

use crate::GeoCoordinate;
use crate::math::{ratio_or_zero, sqrt};
use crate::orientation::{CardinalDirection, normalize_orientation};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::debug;

/// One window record from a building-analysis export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyRecord {
    /// Window area in m²
    #[cfg_attr(feature = "serde", serde(alias = "area"))]
    pub area_m2: f64,
    /// Facade orientation in degrees (0° = North, clockwise)
    #[cfg_attr(feature = "serde", serde(alias = "orientacion", alias = "orientation"))]
    pub orientation_degrees: f64,
    /// Material identifier, e.g. `glass-clear`
    pub material: String,
    /// Energy in kWh/m²
    #[cfg_attr(feature = "serde", serde(alias = "energia", alias = "energy"))]
    pub energy_kwh_per_m2: f64,
}

impl EnergyRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        area_m2: f64,
        orientation_degrees: f64,
        material: impl Into<String>,
        energy_kwh_per_m2: f64,
    ) -> Self {
        Self {
            area_m2,
            orientation_degrees,
            material: material.into(),
            energy_kwh_per_m2,
        }
    }

    /// Same record with its orientation wrapped into `[0, 360)`.
    #[must_use]
    pub fn with_normalized_orientation(mut self) -> Self {
        self.orientation_degrees = normalize_orientation(self.orientation_degrees);
        self
    }

    /// Compass direction the window faces.
    #[must_use]
    pub fn cardinal_direction(&self) -> CardinalDirection {
        CardinalDirection::from_degrees(self.orientation_degrees)
    }
}

/// Statistics of all records sharing one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationMetrics {
    /// Orientation value shared by the group
    pub orientation_degrees: f64,
    /// Sum of record energies
    pub total_energy_kwh: f64,
    /// Sum of record areas
    pub total_area_m2: f64,
    /// `total_energy_kwh / record_count`
    pub average_energy_kwh_per_record: f64,
    /// `total_energy_kwh / total_area_m2`, 0 for zero area
    pub energy_density_kwh_per_m2: f64,
    /// Number of records in the group
    pub record_count: usize,
}

impl OrientationMetrics {
    /// Compass direction of the group.
    #[must_use]
    pub fn cardinal_direction(&self) -> CardinalDirection {
        CardinalDirection::from_degrees(self.orientation_degrees)
    }
}

/// Statistics of records sharing one material.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialMetrics {
    /// Material identifier shared by the group
    pub material: String,
    /// Sum of record energies
    pub total_energy_kwh: f64,
    /// Sum of record areas
    pub total_area_m2: f64,
    /// `total_energy_kwh / record_count`
    pub average_energy_kwh_per_record: f64,
    /// `total_energy_kwh / total_area_m2`, 0 for zero area
    pub energy_density_kwh_per_m2: f64,
    /// Number of records in the group
    pub record_count: usize,
}

/// Totals across all orientation groups.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverallMetrics {
    /// Sum of group energies
    pub total_energy_kwh: f64,
    /// Sum of group areas
    pub total_area_m2: f64,
    /// Mean of the group averages
    pub average_energy_kwh_per_record: f64,
    /// Number of orientation groups
    pub orientation_count: usize,
    /// Number of records
    pub record_count: usize,
}

/// Per-orientation and overall energy statistics.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyMetrics {
    /// One entry per distinct orientation, in first-appearance order
    pub by_orientation: Vec<OrientationMetrics>,
    /// Totals across all groups
    pub overall: OverallMetrics,
}

#[derive(Debug, Clone, Copy, Default)]
struct GroupTotals {
    energy_kwh: f64,
    area_m2: f64,
    record_count: usize,
}

impl GroupTotals {
    fn add(&mut self, record: &EnergyRecord) {
        self.energy_kwh += record.energy_kwh_per_m2;
        self.area_m2 += record.area_m2;
        self.record_count += 1;
    }

    fn average(&self) -> f64 {
        ratio_or_zero(self.energy_kwh, self.record_count as f64)
    }

    fn density(&self) -> f64 {
        ratio_or_zero(self.energy_kwh, self.area_m2)
    }
}

/// Grouping key for an orientation: the bit pattern with `-0.0` folded into `0.0`.
fn orientation_key(orientation_degrees: f64) -> u64 {
    if orientation_degrees == 0.0 {
        0.0_f64.to_bits()
    } else {
        orientation_degrees.to_bits()
    }
}

/// Single-pass aggregation of energy records.
///
/// Records can be pushed one at a time as they are read; memory grows with
/// the number of distinct orientations, not with the number of records.
///
/// ```
/// use daylighting::energy::{EnergyMetricsAccumulator, EnergyRecord};
///
/// let mut accumulator = EnergyMetricsAccumulator::new();
/// accumulator.push(&EnergyRecord::new(4.0, 180.0, "glass-low-e", 12.0));
/// accumulator.push(&EnergyRecord::new(2.0, 180.0, "glass-low-e", 6.0));
///
/// let metrics = accumulator.finish();
/// assert_eq!(metrics.by_orientation[0].energy_density_kwh_per_m2, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnergyMetricsAccumulator {
    orientations: Vec<f64>,
    totals: Vec<GroupTotals>,
    index: BTreeMap<u64, usize>,
}

impl EnergyMetricsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orientations: Vec::new(),
            totals: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Adds one record.
    pub fn push(&mut self, record: &EnergyRecord) {
        let key = orientation_key(record.orientation_degrees);
        let slot = *self.index.entry(key).or_insert_with(|| {
            self.orientations.push(f64::from_bits(key));
            self.totals.push(GroupTotals::default());
            self.totals.len() - 1
        });
        self.totals[slot].add(record);
    }

    /// Number of records pushed so far.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.totals.iter().map(|group| group.record_count).sum()
    }

    /// Number of distinct orientations seen so far.
    #[must_use]
    pub fn orientation_count(&self) -> usize {
        self.totals.len()
    }

    /// Metrics of everything pushed so far.
    #[must_use]
    pub fn finish(&self) -> EnergyMetrics {
        let by_orientation: Vec<OrientationMetrics> = self
            .orientations
            .iter()
            .zip(&self.totals)
            .map(|(&orientation_degrees, group)| OrientationMetrics {
                orientation_degrees,
                total_energy_kwh: group.energy_kwh,
                total_area_m2: group.area_m2,
                average_energy_kwh_per_record: group.average(),
                energy_density_kwh_per_m2: group.density(),
                record_count: group.record_count,
            })
            .collect();

        let orientation_count = by_orientation.len();
        let average_sum: f64 = by_orientation
            .iter()
            .map(|group| group.average_energy_kwh_per_record)
            .sum();
        let overall = OverallMetrics {
            total_energy_kwh: by_orientation.iter().map(|g| g.total_energy_kwh).sum(),
            total_area_m2: by_orientation.iter().map(|g| g.total_area_m2).sum(),
            average_energy_kwh_per_record: ratio_or_zero(average_sum, orientation_count as f64),
            orientation_count,
            record_count: by_orientation.iter().map(|g| g.record_count).sum(),
        };

        debug!(
            records = overall.record_count,
            orientations = orientation_count,
            total_energy_kwh = overall.total_energy_kwh,
            "aggregated energy metrics"
        );

        EnergyMetrics {
            by_orientation,
            overall,
        }
    }
}

impl<'a> Extend<&'a EnergyRecord> for EnergyMetricsAccumulator {
    fn extend<I: IntoIterator<Item = &'a EnergyRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl Extend<EnergyRecord> for EnergyMetricsAccumulator {
    fn extend<I: IntoIterator<Item = EnergyRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(&record);
        }
    }
}

impl<'a> FromIterator<&'a EnergyRecord> for EnergyMetricsAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a EnergyRecord>>(iter: I) -> Self {
        let mut accumulator = Self::new();
        accumulator.extend(iter);
        accumulator
    }
}

impl FromIterator<EnergyRecord> for EnergyMetricsAccumulator {
    fn from_iter<I: IntoIterator<Item = EnergyRecord>>(iter: I) -> Self {
        let mut accumulator = Self::new();
        accumulator.extend(iter);
        accumulator
    }
}

/// Groups records by orientation and computes per-group and overall metrics.
///
/// An empty slice yields no groups and an all-zero overall summary.
#[must_use]
pub fn aggregate_energy_metrics(records: &[EnergyRecord]) -> EnergyMetrics {
    records
        .iter()
        .collect::<EnergyMetricsAccumulator>()
        .finish()
}

/// Groups records by material identifier, in first-appearance order.
#[must_use]
pub fn aggregate_by_material(records: &[EnergyRecord]) -> Vec<MaterialMetrics> {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut groups: Vec<(&str, GroupTotals)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.material.as_str()).or_insert_with(|| {
            groups.push((record.material.as_str(), GroupTotals::default()));
            groups.len() - 1
        });
        groups[slot].1.add(record);
    }

    groups
        .into_iter()
        .map(|(material, group)| MaterialMetrics {
            material: material.into(),
            total_energy_kwh: group.energy_kwh,
            total_area_m2: group.area_m2,
            average_energy_kwh_per_record: group.average(),
            energy_density_kwh_per_m2: group.density(),
            record_count: group.record_count,
        })
        .collect()
}

/// Most frequent material identifier. Ties go to the one seen first.
///
/// ```
/// use daylighting::energy::{EnergyRecord, primary_material};
///
/// let records = [
///     EnergyRecord::new(2.0, 0.0, "glass-tinted", 1.0),
///     EnergyRecord::new(2.0, 90.0, "glass-clear", 1.0),
///     EnergyRecord::new(2.0, 180.0, "glass-clear", 1.0),
/// ];
/// assert_eq!(primary_material(&records), Some("glass-clear"));
/// assert_eq!(primary_material(&[]), None);
/// ```
#[must_use]
pub fn primary_material(records: &[EnergyRecord]) -> Option<&str> {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.material.as_str()).or_insert_with(|| {
            counts.push((record.material.as_str(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (material, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((material, count));
        }
    }
    best.map(|(material, _)| material)
}

/// Storey height assumed when estimating a building from its window export.
pub const FLOOR_HEIGHT_M: f64 = 3.0;

/// Rough building description derived from a window export.
///
/// The footprint is taken to be square with half the total window area as
/// its surface, one storey high.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSummary {
    /// Site of the building
    pub location: GeoCoordinate,
    /// Sum of all window areas in m²
    pub total_area_m2: f64,
    /// Estimated footprint width in m
    pub width_m: f64,
    /// Estimated footprint length in m
    pub length_m: f64,
    /// Estimated height in m
    pub height_m: f64,
    /// Orientation of the first record, 0 without records
    pub primary_orientation_degrees: f64,
    /// Most frequent material, if any
    pub primary_material: Option<String>,
}

/// Estimates building dimensions from a window export.
///
/// Exports carry no site information, so the location is
/// [`GeoCoordinate::default_location`].
///
/// ```
/// use daylighting::energy::{EnergyRecord, estimate_building};
///
/// let records = [
///     EnergyRecord::new(30.0, 180.0, "glass-low-e", 10.0),
///     EnergyRecord::new(20.0, 90.0, "glass-clear", 4.0),
///     EnergyRecord::new(22.0, 180.0, "glass-low-e", 8.0),
/// ];
/// let building = estimate_building(&records);
///
/// assert_eq!(building.total_area_m2, 72.0);
/// assert_eq!(building.width_m, 6.0);
/// assert_eq!(building.primary_orientation_degrees, 180.0);
/// assert_eq!(building.primary_material.as_deref(), Some("glass-low-e"));
/// ```
#[must_use]
pub fn estimate_building(records: &[EnergyRecord]) -> BuildingSummary {
    let metrics = aggregate_energy_metrics(records);
    let total_area_m2 = metrics.overall.total_area_m2;
    let side_m = sqrt(total_area_m2 / 2.0);
    let primary_orientation_degrees = metrics
        .by_orientation
        .first()
        .map_or(0.0, |group| group.orientation_degrees);

    debug!(total_area_m2, side_m, primary_orientation_degrees, "estimated building");

    BuildingSummary {
        location: GeoCoordinate::default_location(),
        total_area_m2,
        width_m: side_m,
        length_m: side_m,
        height_m: FLOOR_HEIGHT_M,
        primary_orientation_degrees,
        primary_material: primary_material(records).map(String::from),
    }
}
