//! Value objects exchanged between the engine components.

use crate::error::{check_azimuth, check_coordinates, check_elevation_angle, check_fraction};
use crate::{Error, Result};

/// A geographic position in degrees.
///
/// # Example
/// ```
/// # use daylighting::GeoCoordinate;
/// let madrid = GeoCoordinate::new(40.4168, -3.7038).unwrap();
/// assert_eq!(madrid.latitude(), 40.4168);
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoCoordinate"))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting out-of-range values.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// New York City, the location building projects start from when the
    /// export carries no site information.
    #[must_use]
    pub const fn default_location() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.0060,
        }
    }

    /// Latitude in degrees (-90 to +90).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to +180, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::default_location()
    }
}

/// Position of the sun in the local sky.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Elevation: 90° = directly overhead, 0° = horizon, -90° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSunPosition"))]
pub struct SunPosition {
    azimuth: f64,
    elevation: f64,
}

impl SunPosition {
    /// Creates a sun position, normalizing the azimuth into [0, 360).
    ///
    /// # Errors
    /// Returns error for a non-finite azimuth or an elevation outside ±90°.
    ///
    /// # Example
    /// ```
    /// # use daylighting::SunPosition;
    /// let position = SunPosition::new(-90.0, 30.0).unwrap();
    /// assert_eq!(position.azimuth(), 270.0);
    /// assert_eq!(position.zenith_angle(), 60.0);
    /// ```
    pub fn new(azimuth: f64, elevation: f64) -> Result<Self> {
        Ok(Self {
            azimuth: check_azimuth(azimuth)?,
            elevation: check_elevation_angle(elevation)?,
        })
    }

    /// Builds a position from values the solar calculator already bounded.
    pub(crate) const fn from_parts(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }

    /// Azimuth in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Elevation above the horizon in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Zenith angle in degrees: `90° - elevation`.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Optical and commercial properties of a glazing type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMaterialSpec"))]
pub struct MaterialSpec {
    transmittance: f64,
    cost: f64,
    sustainability: f64,
}

impl MaterialSpec {
    /// Creates a material record.
    ///
    /// # Errors
    /// Returns `InvalidFraction` for transmittance or sustainability outside
    /// `[0, 1]`, and `InvalidCost` for a negative or non-finite cost.
    ///
    /// # Example
    /// ```
    /// # use daylighting::MaterialSpec;
    /// let glazing = MaterialSpec::new(0.9, 100.0, 0.7).unwrap();
    /// assert_eq!(glazing.transmittance(), 0.9);
    /// assert!(MaterialSpec::new(1.2, 100.0, 0.7).is_err());
    /// ```
    pub fn new(transmittance: f64, cost: f64, sustainability: f64) -> Result<Self> {
        check_fraction("transmittance", transmittance)?;
        check_fraction("sustainability", sustainability)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::invalid_cost(cost));
        }
        Ok(Self {
            transmittance,
            cost,
            sustainability,
        })
    }

    pub(crate) const fn from_parts(transmittance: f64, cost: f64, sustainability: f64) -> Self {
        Self {
            transmittance,
            cost,
            sustainability,
        }
    }

    /// Share of incident visible light passed through (0 to 1).
    #[must_use]
    pub const fn transmittance(&self) -> f64 {
        self.transmittance
    }

    /// Cost per unit as listed in the material catalog.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Sustainability score (0 to 1).
    #[must_use]
    pub const fn sustainability(&self) -> f64 {
        self.sustainability
    }
}

/// Direct and ambient light reaching the interior, as fractions of full daylight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightIntensity {
    /// Direct sunlight component (0 to 1)
    pub direct: f64,
    /// Diffuse/ambient component (0 to 1, never zero)
    pub ambient: f64,
}

/// Interior illuminance and the scores derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlluminanceResult {
    /// Combined natural and artificial illuminance in lux
    pub total_lux: f64,
    /// Daylight efficiency score (0 to 100)
    pub efficiency_percent: f64,
    /// Artificial light level needed to reach the target (0 to 1)
    pub recommended_artificial_fraction: f64,
}

// Deserialization goes through the validating constructors.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = Error;

    fn try_from(raw: RawGeoCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSunPosition {
    azimuth: f64,
    elevation: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSunPosition> for SunPosition {
    type Error = Error;

    fn try_from(raw: RawSunPosition) -> Result<Self> {
        Self::new(raw.azimuth, raw.elevation)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMaterialSpec {
    transmittance: f64,
    cost: f64,
    sustainability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMaterialSpec> for MaterialSpec {
    type Error = Error;

    fn try_from(raw: RawMaterialSpec) -> Result<Self> {
        Self::new(raw.transmittance, raw.cost, raw.sustainability)
    }
}
