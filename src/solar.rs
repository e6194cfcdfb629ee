//! Approximate sun position from date, time and location.
//!
//! This is the low-precision solar coordinate approximation found in most
//! almanacs: the sun's mean longitude and mean anomaly as polynomials in
//! Julian centuries, a three-term equation of center, and the mean obliquity
//! of the ecliptic. The hour angle is taken directly from UTC clock time and
//! longitude, without equation-of-time, nutation, aberration, parallax or
//! refraction corrections.
//!
//! Declination is good to a few hundredths of a degree for dates within a
//! few centuries of J2000.0. Because the equation of time (up to ±16 minutes)
//! is ignored, azimuth and elevation can be off by up to about 4° of hour
//! angle. This is an approximation for daylight studies, not an ephemeris;
//! use an SPA implementation where real accuracy matters.
//!
//! Positions are computed for any input, including out-of-range coordinates;
//! validating them is the caller's job (see [`GeoCoordinate::new`]). NaN
//! inputs propagate to NaN outputs.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::JulianDate;
use crate::{GeoCoordinate, SunPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Geometric mean longitude of the sun, degrees: L0(T)
const MEAN_LONGITUDE_COEFFS: [f64; 3] = [280.46646, 36000.76983, 0.0003032];

/// Mean anomaly of the sun, degrees: M(T)
const MEAN_ANOMALY_COEFFS: [f64; 3] = [357.52911, 35999.05029, -0.0001537];

/// Equation of center, coefficient of sin(M)
const CENTER_SIN_M_COEFFS: [f64; 3] = [1.914602, -0.004817, -0.000014];

/// Equation of center, coefficient of sin(2M)
const CENTER_SIN_2M_COEFFS: [f64; 2] = [0.019993, -0.000101];

/// Equation of center, coefficient of sin(3M)
const CENTER_SIN_3M: f64 = 0.000289;

/// Mean obliquity of the ecliptic; the correction terms are in arcseconds
const OBLIQUITY_COEFFS: [f64; 4] = [
    23.43929111,
    -46.815 / 3600.0,
    -0.00059 / 3600.0,
    0.001813 / 3600.0,
];

/// Degrees of hour angle per hour of clock time
const DEGREES_PER_HOUR: f64 = 15.0;

/// Time-dependent intermediate values of the sun position calculation.
///
/// These depend only on the instant, not on the observer, so a coordinate
/// sweep at a fixed time can compute them once with [`time_dependent_parts`]
/// and reuse them through [`sun_position_with_time_dependent_parts`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimeDependent {
    /// Julian centuries since J2000.0
    pub(crate) julian_century: f64,
    /// Fractional UTC hour of the instant
    pub(crate) utc_hours: f64,
    /// True longitude of the sun (degrees)
    pub(crate) true_longitude_degrees: f64,
    /// Mean obliquity of the ecliptic (degrees)
    pub(crate) obliquity_degrees: f64,
    /// Sun declination (degrees)
    pub(crate) declination_degrees: f64,
}

impl SunTimeDependent {
    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// True (geometric) longitude of the sun in degrees.
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.true_longitude_degrees
    }

    /// Mean obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity_degrees
    }

    /// Declination of the sun in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination_degrees
    }
}

/// Compute the sun position for a timezone-aware date and time.
///
/// # Arguments
/// * `datetime` - Instant to evaluate; any timezone, converted to UTC internally
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
///
/// # Example
/// ```rust
/// use daylighting::solar;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = solar::compute_sun_position(datetime, 40.4168, -3.7038);
///
/// assert!(position.is_sun_up());
/// println!("Azimuth: {:.1}°", position.azimuth());
/// println!("Elevation: {:.1}°", position.elevation());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn compute_sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    compute_sun_position_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
}

/// Compute the sun position from a Julian date.
///
/// Core implementation, available without the `chrono` feature.
///
/// # Example
/// ```
/// use daylighting::{solar, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2024, 3, 20, 12, 0, 0.0).unwrap();
/// let position = solar::compute_sun_position_from_julian(jd, 0.0, 0.0);
/// assert!(position.elevation() > 85.0);
/// ```
#[must_use]
pub fn compute_sun_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    let parts = time_dependent_parts(jd);
    sun_position_with_time_dependent_parts(latitude, longitude, &parts)
}

/// Compute the sun position for a validated coordinate.
#[must_use]
pub fn sun_position_at(jd: JulianDate, location: GeoCoordinate) -> SunPosition {
    compute_sun_position_from_julian(jd, location.latitude(), location.longitude())
}

/// Calculate the observer-independent part of the sun position.
#[must_use]
pub fn time_dependent_parts(jd: JulianDate) -> SunTimeDependent {
    let t = jd.julian_century();

    let l0 = normalize_degrees_0_to_360(polynomial(&MEAN_LONGITUDE_COEFFS, t));
    let m = degrees_to_radians(polynomial(&MEAN_ANOMALY_COEFFS, t));

    let c = polynomial(&CENTER_SIN_M_COEFFS, t) * sin(m)
        + polynomial(&CENTER_SIN_2M_COEFFS, t) * sin(2.0 * m)
        + CENTER_SIN_3M * sin(3.0 * m);

    let true_longitude_degrees = l0 + c;
    let obliquity_degrees = polynomial(&OBLIQUITY_COEFFS, t);

    let declination = asin(
        sin(degrees_to_radians(obliquity_degrees)) * sin(degrees_to_radians(true_longitude_degrees)),
    );

    SunTimeDependent {
        julian_century: t,
        utc_hours: jd.utc_hours(),
        true_longitude_degrees,
        obliquity_degrees,
        declination_degrees: radians_to_degrees(declination),
    }
}

/// Complete the sun position from pre-computed time-dependent parts.
///
/// # Example
/// ```
/// use daylighting::{solar, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2024, 6, 21, 10, 0, 0.0).unwrap();
/// let parts = solar::time_dependent_parts(jd);
///
/// for latitude in [-60.0, -30.0, 0.0, 30.0, 60.0] {
///     let position = solar::sun_position_with_time_dependent_parts(latitude, 15.0, &parts);
///     assert!((0.0..360.0).contains(&position.azimuth()));
/// }
/// ```
#[must_use]
pub fn sun_position_with_time_dependent_parts(
    latitude: f64,
    longitude: f64,
    time_dependent: &SunTimeDependent,
) -> SunPosition {
    let h = degrees_to_radians((time_dependent.utc_hours - 12.0) * DEGREES_PER_HOUR + longitude);
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(time_dependent.declination_degrees);

    let elevation = asin(sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h));
    let azimuth = atan2(sin(h), cos(h) * sin(phi) - tan(delta) * cos(phi));

    SunPosition::from_parts(
        normalize_degrees_0_to_360(radians_to_degrees(azimuth) + 180.0),
        radians_to_degrees(elevation),
    )
}
