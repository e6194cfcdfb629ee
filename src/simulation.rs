//! End-to-end lighting simulation for one window.
//!
//! Chains the three engine stages: sun position → light intensity →
//! illuminance and efficiency. The natural-light fraction handed to the
//! illuminance stage is the direct component of the light intensity.

use crate::error::{check_area, check_fraction};
use crate::illuminance::IlluminanceConfig;
use crate::light::{LightModel, WindowGeometry, compute_light_intensity};
use crate::math::ratio_or_zero;
use crate::solar::sun_position_at;
use crate::time::JulianDate;
use crate::{GeoCoordinate, IlluminanceResult, LightIntensity, MaterialSpec, Result, SunPosition};
use tracing::debug;

/// Everything the light stages need to know about one window at one instant.
///
/// # Example
/// ```
/// # use daylighting::{MaterialSpec, SunPosition, simulation::LightingInputs};
/// let sun = SunPosition::new(180.0, 40.0).unwrap();
/// let glazing = MaterialSpec::new(0.9, 100.0, 0.7).unwrap();
///
/// let inputs = LightingInputs::new(sun, 4.0, 0.3, 0.5, glazing).unwrap();
/// assert_eq!(inputs.window_area_m2(), 4.0);
///
/// assert!(LightingInputs::new(sun, 4.0, 1.3, 0.5, glazing).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLightingInputs"))]
pub struct LightingInputs {
    sun_position: SunPosition,
    window_area_m2: f64,
    cloud_cover: f64,
    artificial_light_fraction: f64,
    material: MaterialSpec,
}

impl LightingInputs {
    /// Creates validated lighting inputs.
    ///
    /// # Errors
    /// Returns `InvalidArea` for a non-positive window area and
    /// `InvalidFraction` for cloud cover or artificial light outside `[0, 1]`.
    pub fn new(
        sun_position: SunPosition,
        window_area_m2: f64,
        cloud_cover: f64,
        artificial_light_fraction: f64,
        material: MaterialSpec,
    ) -> Result<Self> {
        check_area(window_area_m2)?;
        check_fraction("cloud cover", cloud_cover)?;
        check_fraction("artificial light", artificial_light_fraction)?;
        Ok(Self {
            sun_position,
            window_area_m2,
            cloud_cover,
            artificial_light_fraction,
            material,
        })
    }

    /// Like [`new`](Self::new), taking the area from a window's dimensions.
    ///
    /// # Errors
    /// Returns `InvalidFraction` for cloud cover or artificial light outside `[0, 1]`.
    pub fn for_window(
        sun_position: SunPosition,
        window: &WindowGeometry,
        cloud_cover: f64,
        artificial_light_fraction: f64,
        material: MaterialSpec,
    ) -> Result<Self> {
        Self::new(
            sun_position,
            window.area_m2(),
            cloud_cover,
            artificial_light_fraction,
            material,
        )
    }

    /// Same inputs with another sun position.
    #[must_use]
    pub const fn with_sun_position(mut self, sun_position: SunPosition) -> Self {
        self.sun_position = sun_position;
        self
    }

    /// Sun position the simulation runs for.
    #[must_use]
    pub const fn sun_position(&self) -> SunPosition {
        self.sun_position
    }

    /// Glazed area in m².
    #[must_use]
    pub const fn window_area_m2(&self) -> f64 {
        self.window_area_m2
    }

    /// Cloud cover (0 = clear, 1 = overcast).
    #[must_use]
    pub const fn cloud_cover(&self) -> f64 {
        self.cloud_cover
    }

    /// Artificial light level (0 = off, 1 = full output).
    #[must_use]
    pub const fn artificial_light_fraction(&self) -> f64 {
        self.artificial_light_fraction
    }

    /// Glazing material.
    #[must_use]
    pub const fn material(&self) -> MaterialSpec {
        self.material
    }
}

/// Outcome of one lighting simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightingReport {
    /// Sun position used
    pub sun_position: SunPosition,
    /// Interior light fractions
    pub intensity: LightIntensity,
    /// Natural light fraction fed into the illuminance stage
    pub natural_light_fraction: f64,
    /// Artificial light fraction fed into the illuminance stage
    pub artificial_light_fraction: f64,
    /// Illuminance and efficiency scores
    pub illuminance: IlluminanceResult,
}

impl LightingReport {
    /// Natural share of the combined light, in percent.
    ///
    /// Zero when there is neither natural nor artificial light.
    #[must_use]
    pub fn natural_share_percent(&self) -> f64 {
        let total = self.natural_light_fraction + self.artificial_light_fraction;
        ratio_or_zero(self.natural_light_fraction, total) * 100.0
    }

    /// Artificial share of the combined light, in percent.
    ///
    /// Zero when there is neither natural nor artificial light.
    #[must_use]
    pub fn artificial_share_percent(&self) -> f64 {
        let total = self.natural_light_fraction + self.artificial_light_fraction;
        ratio_or_zero(self.artificial_light_fraction, total) * 100.0
    }
}

/// Differences between two simulated situations (`after - before`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightingComparison {
    /// Change in total illuminance (lux)
    pub total_lux_delta: f64,
    /// Change in efficiency (percentage points)
    pub efficiency_delta_percent: f64,
    /// Change in natural light fraction
    pub natural_light_delta: f64,
    /// Change in recommended artificial light fraction
    pub recommended_artificial_delta: f64,
}

impl LightingComparison {
    /// Whether the second situation is more efficient than the first.
    #[must_use]
    pub fn improves_efficiency(&self) -> bool {
        self.efficiency_delta_percent > 0.0
    }
}

/// Runs the light and illuminance stages for the given inputs.
///
/// # Example
/// ```
/// use daylighting::{MaterialSpec, SunPosition, IlluminanceConfig, light::LightModel};
/// use daylighting::simulation::{LightingInputs, simulate_lighting};
///
/// let sun = SunPosition::new(180.0, -5.0).unwrap();
/// let glazing = MaterialSpec::new(0.9, 100.0, 0.7).unwrap();
/// let inputs = LightingInputs::new(sun, 4.0, 0.0, 1.0, glazing).unwrap();
///
/// // At night only the fixtures contribute
/// let report = simulate_lighting(&inputs, LightModel::CloudCover, &IlluminanceConfig::standard());
/// assert_eq!(report.natural_light_fraction, 0.0);
/// assert_eq!(report.illuminance.total_lux, 500.0);
/// assert_eq!(report.artificial_share_percent(), 100.0);
/// ```
#[must_use]
pub fn simulate_lighting(
    inputs: &LightingInputs,
    model: LightModel,
    config: &IlluminanceConfig,
) -> LightingReport {
    let material = inputs.material();
    let intensity = compute_light_intensity(
        &inputs.sun_position(),
        inputs.window_area_m2(),
        material.transmittance(),
        inputs.cloud_cover(),
        model,
    );

    let natural_light_fraction = intensity.direct;
    let illuminance = config.evaluate(
        natural_light_fraction,
        inputs.artificial_light_fraction(),
        material.transmittance(),
    );

    debug!(
        ?model,
        elevation = inputs.sun_position().elevation(),
        total_lux = illuminance.total_lux,
        efficiency = illuminance.efficiency_percent,
        "simulated lighting"
    );

    LightingReport {
        sun_position: inputs.sun_position(),
        intensity,
        natural_light_fraction,
        artificial_light_fraction: inputs.artificial_light_fraction(),
        illuminance,
    }
}

/// Computes the sun position for an instant and location, then simulates.
///
/// The sun position stored in `inputs` is replaced by the computed one.
#[must_use]
pub fn simulate_lighting_at(
    jd: JulianDate,
    location: GeoCoordinate,
    inputs: &LightingInputs,
    model: LightModel,
    config: &IlluminanceConfig,
) -> LightingReport {
    let inputs = inputs.with_sun_position(sun_position_at(jd, location));
    simulate_lighting(&inputs, model, config)
}

/// Compares two reports, e.g. before and after changing the glazing.
#[must_use]
pub fn compare_lighting(before: &LightingReport, after: &LightingReport) -> LightingComparison {
    LightingComparison {
        total_lux_delta: after.illuminance.total_lux - before.illuminance.total_lux,
        efficiency_delta_percent: after.illuminance.efficiency_percent
            - before.illuminance.efficiency_percent,
        natural_light_delta: after.natural_light_fraction - before.natural_light_fraction,
        recommended_artificial_delta: after.illuminance.recommended_artificial_fraction
            - before.illuminance.recommended_artificial_fraction,
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLightingInputs {
    sun_position: SunPosition,
    window_area_m2: f64,
    cloud_cover: f64,
    artificial_light_fraction: f64,
    material: MaterialSpec,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLightingInputs> for LightingInputs {
    type Error = crate::Error;

    fn try_from(raw: RawLightingInputs) -> Result<Self> {
        Self::new(
            raw.sun_position,
            raw.window_area_m2,
            raw.cloud_cover,
            raw.artificial_light_fraction,
            raw.material,
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Error;

    const EPSILON: f64 = 1e-9;

    fn clear_glass() -> MaterialSpec {
        MaterialSpec::new(0.9, 100.0, 0.7).unwrap()
    }

    fn sun(elevation: f64) -> SunPosition {
        SunPosition::new(180.0, elevation).unwrap()
    }

    #[test]
    fn test_inputs_validation() {
        assert_eq!(
            LightingInputs::new(sun(30.0), 0.0, 0.5, 0.5, clear_glass()),
            Err(Error::invalid_area(0.0))
        );
        assert_eq!(
            LightingInputs::new(sun(30.0), 4.0, -0.1, 0.5, clear_glass()),
            Err(Error::invalid_fraction("cloud cover", -0.1))
        );
        assert_eq!(
            LightingInputs::new(sun(30.0), 4.0, 0.5, 1.1, clear_glass()),
            Err(Error::invalid_fraction("artificial light", 1.1))
        );

        let window = WindowGeometry::new(2.5, 1.2).unwrap();
        let inputs = LightingInputs::for_window(sun(30.0), &window, 0.2, 0.4, clear_glass()).unwrap();
        assert!((inputs.window_area_m2() - 3.0).abs() < EPSILON);
        assert_eq!(inputs.cloud_cover(), 0.2);
        assert_eq!(inputs.artificial_light_fraction(), 0.4);
    }

    #[test]
    fn test_simulation_uses_direct_light_as_natural_fraction() {
        let inputs = LightingInputs::new(sun(30.0), 2.0, 0.0, 0.0, clear_glass()).unwrap();
        let report = simulate_lighting(&inputs, LightModel::AreaTransmittance, &IlluminanceConfig::standard());

        // sin(30°) × 0.5 × 0.9 × 1.5
        assert!((report.intensity.direct - 0.3375).abs() < EPSILON);
        assert_eq!(report.natural_light_fraction, report.intensity.direct);
        // 0.3375 × 0.9 × 100000
        assert!((report.illuminance.total_lux - 30_375.0).abs() < 1e-6);
        assert_eq!(report.illuminance.recommended_artificial_fraction, 0.0);
        assert!((report.natural_share_percent() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_night_simulation() {
        let inputs = LightingInputs::new(sun(-20.0), 4.0, 0.5, 0.6, clear_glass()).unwrap();
        let config = IlluminanceConfig::standard();

        for model in [LightModel::AreaTransmittance, LightModel::CloudCover] {
            let report = simulate_lighting(&inputs, model, &config);
            assert_eq!(report.natural_light_fraction, 0.0);
            assert!((report.illuminance.total_lux - 300.0).abs() < EPSILON);
            assert_eq!(report.illuminance.recommended_artificial_fraction, 1.0);
            assert_eq!(report.natural_share_percent(), 0.0);
            assert_eq!(report.artificial_share_percent(), 100.0);
            assert!(report.intensity.ambient > 0.0);
        }
    }

    #[test]
    fn test_shares_when_dark() {
        let inputs = LightingInputs::new(sun(-1.0), 4.0, 0.0, 0.0, clear_glass()).unwrap();
        let report = simulate_lighting(&inputs, LightModel::CloudCover, &IlluminanceConfig::standard());
        assert_eq!(report.natural_share_percent(), 0.0);
        assert_eq!(report.artificial_share_percent(), 0.0);
        assert_eq!(report.illuminance.efficiency_percent, 0.0);
        assert_eq!(report.illuminance.total_lux, 0.0);
    }

    #[test]
    fn test_simulate_at_replaces_sun_position() {
        let inputs = LightingInputs::new(sun(10.0), 4.0, 0.0, 0.0, clear_glass()).unwrap();
        // 2024-03-20 12:00 UTC over the Gulf of Guinea
        let jd = JulianDate::from_utc(2024, 3, 20, 12, 0, 0.0).unwrap();
        let location = GeoCoordinate::new(0.0, 0.0).unwrap();

        let report = simulate_lighting_at(
            jd,
            location,
            &inputs,
            LightModel::CloudCover,
            &IlluminanceConfig::standard(),
        );
        assert!(report.sun_position.elevation() > 85.0);
        assert!(report.intensity.direct > 0.99);
        assert_eq!(inputs.sun_position().elevation(), 10.0);
    }

    #[test]
    fn test_compare_lighting() {
        let config = IlluminanceConfig::standard();
        let reflective = MaterialSpec::new(0.4, 250.0, 0.85).unwrap();

        let before = simulate_lighting(
            &LightingInputs::new(sun(60.0), 4.0, 0.0, 0.2, reflective).unwrap(),
            LightModel::AreaTransmittance,
            &config,
        );
        let after = simulate_lighting(
            &LightingInputs::new(sun(60.0), 4.0, 0.0, 0.2, clear_glass()).unwrap(),
            LightModel::AreaTransmittance,
            &config,
        );
        let comparison = compare_lighting(&before, &after);

        assert!(comparison.total_lux_delta > 0.0);
        assert!(comparison.natural_light_delta > 0.0);
        assert!(
            (comparison.total_lux_delta
                - (after.illuminance.total_lux - before.illuminance.total_lux))
                .abs()
                < EPSILON
        );
        assert_eq!(compare_lighting(&after, &after).efficiency_delta_percent, 0.0);
        assert!(!compare_lighting(&after, &after).improves_efficiency());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_inputs() {
        let valid = r#"{
            "sun_position": {"azimuth": 180, "elevation": 40},
            "window_area_m2": 4.0,
            "cloud_cover": 0.3,
            "artificial_light_fraction": 0.5,
            "material": {"transmittance": 0.9, "cost": 100, "sustainability": 0.7}
        }"#;
        let inputs: LightingInputs = serde_json::from_str(valid).unwrap();
        assert_eq!(inputs.window_area_m2(), 4.0);
        assert_eq!(inputs.material(), clear_glass());

        let overcast = valid.replace("0.3", "1.5");
        assert!(serde_json::from_str::<LightingInputs>(&overcast).is_err());

        let bad_sun = valid.replace(r#""elevation": 40"#, r#""elevation": 250"#);
        assert!(serde_json::from_str::<LightingInputs>(&bad_sun).is_err());

        let no_area = valid.replace("4.0", "0.0");
        assert!(serde_json::from_str::<LightingInputs>(&no_area).is_err());
    }
}
