//! Julian date handling for the sun position approximation.
//!
//! Timestamps enter the engine either as calendar components in UTC, as Unix
//! milliseconds, or (with the `chrono` feature) as any timezone-aware
//! `DateTime`. All of them end up as a [`JulianDate`] on the UTC scale; the
//! approximation used here makes no distinction between UT1 and TT.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A Julian date on the UTC time scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Wraps a raw Julian date value.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates a Julian date from milliseconds since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use daylighting::time::JulianDate;
    /// let epoch = JulianDate::from_unix_millis(0);
    /// assert_eq!(epoch.julian_date(), 2_440_587.5);
    /// ```
    #[must_use]
    pub fn from_unix_millis(millis: i64) -> Self {
        Self {
            jd: millis as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD,
        }
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is taken as-is; the timezone only affects how the caller
    /// wrote it down. Sub-second precision is kept to the nanosecond.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let seconds = datetime.timestamp() as f64;
        let nanos = f64::from(datetime.timestamp_subsec_nanos());
        Self {
            jd: (seconds + nanos / 1e9) * 1000.0 / MILLIS_PER_DAY + UNIX_EPOCH_JD,
        }
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Errors
    /// Returns error if any component is outside its valid range (month 1-12,
    /// day within the month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use daylighting::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self {
            jd: calculate_julian_date(year, month, day, hour, minute, second),
        })
    }

    /// Gets the Julian Date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0: `(JD - 2451545) / 36525`.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Fractional hours since the preceding UTC midnight, in `[0, 24)`.
    #[must_use]
    pub fn utc_hours(&self) -> f64 {
        let shifted = self.jd + 0.5;
        let hours = (shifted - floor(shifted)) * 24.0;
        if hours >= 24.0 { 0.0 } else { hours }
    }
}

/// Julian Date from UTC calendar components (Meeus, "Astronomical Algorithms").
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = year;
    // validated to 1..=12 by the caller
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian calendar correction from JDN 2299161 (1582-10-15) onwards
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian) => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((jd.julian_date() - J2000_JDN).abs() < EPSILON);
        assert!(jd.julian_century().abs() < EPSILON);
        assert!((jd.utc_hours() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_unix_millis_matches_calendar() {
        // 2024-03-20T12:00:00Z
        let from_millis = JulianDate::from_unix_millis(1_710_936_000_000);
        let from_calendar = JulianDate::from_utc(2024, 3, 20, 12, 0, 0.0).unwrap();
        assert!((from_millis.julian_date() - from_calendar.julian_date()).abs() < 1e-8);

        let before_epoch = JulianDate::from_unix_millis(-86_400_000);
        assert!((before_epoch.julian_date() - (UNIX_EPOCH_JD - 1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_utc_hours() {
        let jd = JulianDate::from_utc(2023, 6, 21, 18, 30, 0.0).unwrap();
        assert!((jd.utc_hours() - 18.5).abs() < 1e-6);

        let midnight = JulianDate::from_utc(2023, 6, 21, 0, 0, 0.0).unwrap();
        let hours = midnight.utc_hours();
        assert!(hours < 1e-6 || hours > 24.0 - 1e-6);

        // millisecond resolution survives the conversion
        let a = JulianDate::from_unix_millis(1_687_370_400_000);
        let b = JulianDate::from_unix_millis(1_687_370_400_250);
        let delta_seconds = (b.utc_hours() - a.utc_hours()) * 3600.0;
        assert!((delta_seconds - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_calendar_validation() {
        assert!(JulianDate::from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 32, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(JulianDate::from_utc(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2023, 4, 31, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(1582, 10, 10, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_specific_julian_dates() {
        let unix_epoch = JulianDate::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix_epoch.julian_date() - UNIX_EPOCH_JD).abs() < 1e-6);

        let y2k = JulianDate::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k.julian_date() - 2_451_544.5).abs() < 1e-6);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_ignores_timezone_notation() {
        use chrono::{DateTime, FixedOffset, TimeZone, Utc};

        let local = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let a = JulianDate::from_datetime(&local);
        let b = JulianDate::from_datetime(&utc);
        assert_eq!(a, b);
        assert!((a.utc_hours() - 19.0).abs() < 1e-6);

        let calendar = JulianDate::from_utc(2023, 6, 21, 19, 0, 0.0).unwrap();
        assert!((a.julian_date() - calendar.julian_date()).abs() < 1e-8);
    }
}
