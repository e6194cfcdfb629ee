//! Error types for the daylighting engine.

use crate::math::normalize_degrees_0_to_360;
use alloc::string::String;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the validating constructors of this crate.
///
/// The numeric engine functions never return these; they clamp instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid solar elevation angle (must be between -90 and +90 degrees).
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// A fractional quantity outside `[0, 1]`.
    InvalidFraction {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value provided.
        value: f64,
    },
    /// Non-positive or non-finite area or length.
    InvalidArea {
        /// The invalid value provided.
        value: f64,
    },
    /// Negative or non-finite material cost.
    InvalidCost {
        /// The invalid value provided.
        value: f64,
    },
    /// Non-positive or non-finite illuminance setting.
    InvalidIlluminance {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value provided.
        value: f64,
    },
    /// Invalid date/time components.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Text that names no compass direction.
    InvalidDirection {
        /// The text that failed to parse.
        value: String,
    },
    /// Material identifier not present in the catalog.
    UnknownMaterial {
        /// The identifier that was looked up.
        id: String,
    },
    /// Numerical computation error (e.g. a non-finite intermediate).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidFraction { name, value } => {
                write!(f, "invalid {name} {value} (must be between 0 and 1)")
            }
            Self::InvalidArea { value } => {
                write!(f, "invalid area {value} m² (must be positive)")
            }
            Self::InvalidCost { value } => {
                write!(f, "invalid cost {value} (must not be negative)")
            }
            Self::InvalidIlluminance { name, value } => {
                write!(f, "invalid {name} {value} lx (must be positive)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidDirection { value } => {
                write!(f, "invalid compass direction '{value}'")
            }
            Self::UnknownMaterial { id } => {
                write!(f, "unknown material '{id}'")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid fraction error for the named parameter.
    #[must_use]
    pub const fn invalid_fraction(name: &'static str, value: f64) -> Self {
        Self::InvalidFraction { name, value }
    }

    /// Creates an invalid area error.
    #[must_use]
    pub const fn invalid_area(value: f64) -> Self {
        Self::InvalidArea { value }
    }

    /// Creates an invalid cost error.
    #[must_use]
    pub const fn invalid_cost(value: f64) -> Self {
        Self::InvalidCost { value }
    }

    /// Creates an invalid illuminance error for the named setting.
    #[must_use]
    pub const fn invalid_illuminance(name: &'static str, value: f64) -> Self {
        Self::InvalidIlluminance { name, value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid compass direction error.
    #[must_use]
    pub fn invalid_direction(value: &str) -> Self {
        Self::InvalidDirection {
            value: value.into(),
        }
    }

    /// Creates an unknown material error.
    #[must_use]
    pub fn unknown_material(id: &str) -> Self {
        Self::UnknownMaterial { id: id.into() }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a fractional parameter lies in `[0, 1]`.
///
/// # Errors
/// Returns `InvalidFraction` naming the parameter (NaN is rejected too).
pub fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_fraction(name, value));
    }
    Ok(())
}

/// Validates an area or length is finite and strictly positive.
///
/// # Errors
/// Returns `InvalidArea` otherwise.
pub fn check_area(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_area(value));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates a solar elevation angle to be within [-90, 90] degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` for NaN or out-of-range values.
pub fn check_elevation_angle(elevation: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(elevation)
}
