//! Facade orientations and compass directions.
//!
//! Orientation angles follow the azimuth convention: 0° = North, increasing
//! clockwise. Building exports use Spanish abbreviations for the western
//! directions (`SO`, `O`, `NO`); parsing accepts both those and English.

use crate::math::{floor, normalize_degrees_0_to_360};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Normalizes an orientation angle to `[0, 360)` degrees.
///
/// # Example
/// ```
/// # use daylighting::orientation::normalize_orientation;
/// assert_eq!(normalize_orientation(360.0), 0.0);
/// assert_eq!(normalize_orientation(-90.0), 270.0);
/// assert_eq!(normalize_orientation(725.0), 5.0);
/// ```
#[must_use]
pub fn normalize_orientation(degrees: f64) -> f64 {
    normalize_degrees_0_to_360(degrees)
}

/// One of the eight principal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    /// North (0°)
    North,
    /// North-east (45°)
    NorthEast,
    /// East (90°)
    East,
    /// South-east (135°)
    SouthEast,
    /// South (180°)
    South,
    /// South-west (225°)
    SouthWest,
    /// West (270°)
    West,
    /// North-west (315°)
    NorthWest,
}

impl CardinalDirection {
    /// All directions, clockwise from North.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Nearest direction to an orientation angle.
    ///
    /// Sector boundaries round up: 22.5° is North-east. Non-finite angles map
    /// to North.
    ///
    /// # Example
    /// ```
    /// # use daylighting::orientation::CardinalDirection;
    /// assert_eq!(CardinalDirection::from_degrees(170.0), CardinalDirection::South);
    /// assert_eq!(CardinalDirection::from_degrees(-30.0), CardinalDirection::NorthWest);
    /// assert_eq!(CardinalDirection::from_degrees(350.0), CardinalDirection::North);
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::North;
        }
        let sector = floor(normalize_orientation(degrees) / 45.0 + 0.5) as usize % 8;
        Self::ALL[sector]
    }

    /// Center angle of the direction in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }

    /// English abbreviation (`N`, `NE`, ..., `NW`).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl FromStr for CardinalDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let direction = match trimmed.to_ascii_uppercase().as_str() {
            "N" => Self::North,
            "NE" => Self::NorthEast,
            "E" => Self::East,
            "SE" => Self::SouthEast,
            "S" => Self::South,
            "SW" | "SO" => Self::SouthWest,
            "W" | "O" => Self::West,
            "NW" | "NO" => Self::NorthWest,
            _ => return Err(Error::invalid_direction(trimmed)),
        };
        Ok(direction)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orientation() {
        assert_eq!(normalize_orientation(0.0), 0.0);
        assert_eq!(normalize_orientation(359.5), 359.5);
        assert_eq!(normalize_orientation(360.0), 0.0);
        assert_eq!(normalize_orientation(-360.0), 0.0);
        assert_eq!(normalize_orientation(-45.0), 315.0);
        assert_eq!(normalize_orientation(1080.0 + 90.0), 90.0);
    }

    #[test]
    fn test_from_degrees_sectors() {
        for direction in CardinalDirection::ALL {
            assert_eq!(CardinalDirection::from_degrees(direction.degrees()), direction);
            assert_eq!(
                CardinalDirection::from_degrees(direction.degrees() + 360.0),
                direction
            );
        }

        assert_eq!(CardinalDirection::from_degrees(22.4), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_degrees(22.5), CardinalDirection::NorthEast);
        assert_eq!(CardinalDirection::from_degrees(337.5), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_degrees(337.4), CardinalDirection::NorthWest);
        assert_eq!(CardinalDirection::from_degrees(-90.0), CardinalDirection::West);
        assert_eq!(CardinalDirection::from_degrees(f64::NAN), CardinalDirection::North);
    }

    #[test]
    fn test_parse_english_and_spanish() {
        assert_eq!("N".parse(), Ok(CardinalDirection::North));
        assert_eq!("se".parse(), Ok(CardinalDirection::SouthEast));
        assert_eq!(" SW ".parse(), Ok(CardinalDirection::SouthWest));
        assert_eq!("SO".parse(), Ok(CardinalDirection::SouthWest));
        assert_eq!("O".parse(), Ok(CardinalDirection::West));
        assert_eq!("W".parse(), Ok(CardinalDirection::West));
        assert_eq!("NO".parse(), Ok(CardinalDirection::NorthWest));

        assert_eq!(
            "NNE".parse::<CardinalDirection>(),
            Err(Error::invalid_direction("NNE"))
        );
        assert!("".parse::<CardinalDirection>().is_err());
    }

    #[test]
    fn test_abbreviation_round_trip() {
        for direction in CardinalDirection::ALL {
            assert_eq!(direction.abbreviation().parse(), Ok(direction));
        }
    }
}
