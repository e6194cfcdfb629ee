//! Natural light reaching a room through a window.
//!
//! Two models are in use and they are not interchangeable:
//!
//! - [`LightModel::AreaTransmittance`] scales direct sunlight by the window
//!   size and the glazing transmittance, ignoring the sky condition.
//! - [`LightModel::CloudCover`] attenuates direct sunlight by cloud cover and
//!   raises the diffuse component, ignoring window size and glazing.
//!
//! Callers choose one explicitly; there is no default.
//!
//! Out-of-range inputs are clamped: transmittance and cloud cover to `[0, 1]`,
//! window area to `>= 0`.

use crate::error::check_area;
use crate::math::{clamp_non_negative, clamp_unit, degrees_to_radians, sin};
use crate::{LightIntensity, Result, SunPosition};
use tracing::trace;

/// Window area in m² at which the area factor is 1.
pub const REFERENCE_WINDOW_AREA_M2: f64 = 4.0;

/// Upper bound of the window area factor.
pub const MAX_AREA_FACTOR: f64 = 1.5;

/// Diffuse light present even with the sun below the horizon.
pub const AMBIENT_BASELINE: f64 = 0.2;

/// Gain applied to direct light in the area-transmittance model.
const AREA_MODEL_DIRECT_GAIN: f64 = 1.5;

/// Ambient gain per unit of transmittance × area factor.
const AREA_MODEL_AMBIENT_GAIN: f64 = 0.3;

/// Share of direct light a fully overcast sky removes.
const MAX_CLOUD_ATTENUATION: f64 = 0.8;

/// Ambient gain per unit of cloud cover.
const CLOUD_AMBIENT_GAIN: f64 = 0.3;

/// Strategy used to turn a sun position into interior light fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LightModel {
    /// Direct light scaled by window area factor and transmittance
    AreaTransmittance,
    /// Direct light attenuated by cloud cover; ambient rises with clouds
    CloudCover,
}

/// Rectangular window opening.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWindowGeometry"))]
pub struct WindowGeometry {
    width_m: f64,
    height_m: f64,
}

impl WindowGeometry {
    /// Creates a window from its width and height in meters.
    ///
    /// # Errors
    /// Returns `InvalidArea` if either side is not finite and positive.
    ///
    /// # Example
    /// ```
    /// # use daylighting::light::WindowGeometry;
    /// let window = WindowGeometry::new(2.0, 1.5).unwrap();
    /// assert_eq!(window.area_m2(), 3.0);
    /// assert_eq!(window.area_factor(), 0.75);
    /// ```
    pub fn new(width_m: f64, height_m: f64) -> Result<Self> {
        check_area(width_m)?;
        check_area(height_m)?;
        Ok(Self { width_m, height_m })
    }

    /// Width in meters.
    #[must_use]
    pub const fn width_m(&self) -> f64 {
        self.width_m
    }

    /// Height in meters.
    #[must_use]
    pub const fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Glazed area in m².
    #[must_use]
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }

    /// Area factor of this window, see [`window_area_factor`].
    #[must_use]
    pub fn area_factor(&self) -> f64 {
        window_area_factor(self.area_m2())
    }
}

/// Window size relative to the 4 m² reference, capped at 1.5.
///
/// Negative areas count as zero.
#[must_use]
pub fn window_area_factor(window_area_m2: f64) -> f64 {
    (clamp_non_negative(window_area_m2) / REFERENCE_WINDOW_AREA_M2).min(MAX_AREA_FACTOR)
}

/// Direct and ambient light fractions for a sun position.
///
/// Below the horizon (`elevation <= 0`) the direct component is zero under
/// both models; the ambient component never drops below 0.2.
///
/// # Example
/// ```
/// use daylighting::{SunPosition, light::{self, LightModel}};
///
/// let sun = SunPosition::new(180.0, 45.0).unwrap();
/// let clear = light::compute_light_intensity(&sun, 4.0, 0.9, 0.0, LightModel::CloudCover);
/// assert!((clear.direct - 45f64.to_radians().sin()).abs() < 1e-12);
/// assert_eq!(clear.ambient, 0.2);
///
/// let big_window = light::compute_light_intensity(&sun, 8.0, 0.9, 0.0, LightModel::AreaTransmittance);
/// assert_eq!(big_window.direct, 1.0);
/// ```
#[must_use]
pub fn compute_light_intensity(
    sun_position: &SunPosition,
    window_area_m2: f64,
    material_transmittance: f64,
    cloud_cover: f64,
    model: LightModel,
) -> LightIntensity {
    let direct_raw = if sun_position.is_sun_up() {
        sin(degrees_to_radians(sun_position.elevation()))
    } else {
        0.0
    };

    let intensity = match model {
        LightModel::AreaTransmittance => {
            let transmittance = clamp_unit(material_transmittance);
            let area_factor = window_area_factor(window_area_m2);
            LightIntensity {
                direct: clamp_unit(
                    direct_raw * area_factor * transmittance * AREA_MODEL_DIRECT_GAIN,
                ),
                ambient: clamp_unit(
                    AMBIENT_BASELINE + AREA_MODEL_AMBIENT_GAIN * transmittance * area_factor,
                ),
            }
        }
        LightModel::CloudCover => {
            let cloud_cover = clamp_unit(cloud_cover);
            LightIntensity {
                direct: clamp_unit(direct_raw * (1.0 - cloud_cover * MAX_CLOUD_ATTENUATION)),
                ambient: clamp_unit(AMBIENT_BASELINE + cloud_cover * CLOUD_AMBIENT_GAIN),
            }
        }
    };

    trace!(
        ?model,
        elevation = sun_position.elevation(),
        direct = intensity.direct,
        ambient = intensity.ambient,
        "computed light intensity"
    );
    intensity
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindowGeometry {
    width_m: f64,
    height_m: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindowGeometry> for WindowGeometry {
    type Error = crate::Error;

    fn try_from(raw: RawWindowGeometry) -> Result<Self> {
        Self::new(raw.width_m, raw.height_m)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Error;

    const EPSILON: f64 = 1e-12;

    fn sun(elevation: f64) -> SunPosition {
        SunPosition::new(180.0, elevation).unwrap()
    }

    #[test]
    fn test_area_factor() {
        assert_eq!(window_area_factor(4.0), 1.0);
        assert_eq!(window_area_factor(2.0), 0.5);
        assert_eq!(window_area_factor(6.0), 1.5);
        assert_eq!(window_area_factor(100.0), 1.5);
        assert_eq!(window_area_factor(-3.0), 0.0);
    }

    #[test]
    fn test_window_geometry_validation() {
        assert!(WindowGeometry::new(0.0, 1.0).is_err());
        assert_eq!(
            WindowGeometry::new(1.0, -2.0),
            Err(Error::invalid_area(-2.0))
        );
        let window = WindowGeometry::new(3.0, 2.0).unwrap();
        assert_eq!(window.width_m(), 3.0);
        assert_eq!(window.height_m(), 2.0);
        assert_eq!(window.area_factor(), 1.5);
    }

    #[test]
    fn test_area_transmittance_model() {
        let result = compute_light_intensity(&sun(30.0), 2.0, 0.6, 0.9, LightModel::AreaTransmittance);
        // sin(30°) × 0.5 × 0.6 × 1.5
        assert!((result.direct - 0.225).abs() < EPSILON);
        // 0.2 + 0.3 × 0.6 × 0.5
        assert!((result.ambient - 0.29).abs() < EPSILON);
    }

    #[test]
    fn test_area_transmittance_ignores_cloud_cover() {
        let clear = compute_light_intensity(&sun(50.0), 3.0, 0.7, 0.0, LightModel::AreaTransmittance);
        let overcast =
            compute_light_intensity(&sun(50.0), 3.0, 0.7, 1.0, LightModel::AreaTransmittance);
        assert_eq!(clear, overcast);
    }

    #[test]
    fn test_cloud_cover_model() {
        let result = compute_light_intensity(&sun(90.0), 4.0, 0.9, 0.5, LightModel::CloudCover);
        assert!((result.direct - 0.6).abs() < EPSILON);
        assert!((result.ambient - 0.35).abs() < EPSILON);

        let overcast = compute_light_intensity(&sun(90.0), 4.0, 0.9, 1.0, LightModel::CloudCover);
        assert!((overcast.direct - 0.2).abs() < EPSILON);
        assert!((overcast.ambient - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_cloud_cover_model_ignores_window_and_glazing() {
        let small = compute_light_intensity(&sun(40.0), 0.5, 0.4, 0.3, LightModel::CloudCover);
        let large = compute_light_intensity(&sun(40.0), 12.0, 0.9, 0.3, LightModel::CloudCover);
        assert_eq!(small, large);
    }

    #[test]
    fn test_zero_cloud_cover_is_unattenuated() {
        let result = compute_light_intensity(&sun(45.0), 4.0, 0.9, 0.0, LightModel::CloudCover);
        assert_eq!(result.direct, 45f64.to_radians().sin());
    }

    #[test]
    fn test_below_horizon_has_no_direct_light() {
        for model in [LightModel::AreaTransmittance, LightModel::CloudCover] {
            for elevation in [0.0, -0.1, -45.0, -90.0] {
                let result = compute_light_intensity(&sun(elevation), 10.0, 1.0, 0.0, model);
                assert_eq!(result.direct, 0.0);
                assert!(result.ambient >= AMBIENT_BASELINE);
            }
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let result = compute_light_intensity(&sun(60.0), 4.0, 0.9, 2.5, LightModel::CloudCover);
        let capped = compute_light_intensity(&sun(60.0), 4.0, 0.9, 1.0, LightModel::CloudCover);
        assert_eq!(result, capped);

        let result =
            compute_light_intensity(&sun(60.0), 4.0, 1.7, 0.0, LightModel::AreaTransmittance);
        let capped =
            compute_light_intensity(&sun(60.0), 4.0, 1.0, 0.0, LightModel::AreaTransmittance);
        assert_eq!(result, capped);

        let result =
            compute_light_intensity(&sun(60.0), -4.0, 0.9, 0.0, LightModel::AreaTransmittance);
        assert_eq!(result.direct, 0.0);
        assert_eq!(result.ambient, AMBIENT_BASELINE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_window_geometry() {
        let window: WindowGeometry =
            serde_json::from_str(r#"{"width_m":2.0,"height_m":1.5}"#).unwrap();
        assert_eq!(window.area_m2(), 3.0);

        assert!(
            serde_json::from_str::<WindowGeometry>(r#"{"width_m":-2.0,"height_m":1.5}"#).is_err()
        );
        assert!(
            serde_json::from_str::<WindowGeometry>(r#"{"width_m":2.0,"height_m":0.0}"#).is_err()
        );
    }
}
