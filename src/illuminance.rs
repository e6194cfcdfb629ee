//! Interior illuminance, daylight efficiency and artificial light sizing.
//!
//! Natural and artificial light enter every function here as fractions in
//! `[0, 1]`. They are turned into lux with the scales of an
//! [`IlluminanceConfig`]: a natural fraction of 1 is full daylight
//! (100 000 lx by default) and an artificial fraction of 1 is one typical
//! interior fixture (500 lx by default). Fractions outside `[0, 1]` are
//! clamped.
//!
//! The free functions use [`IlluminanceConfig::standard`].

use crate::light::window_area_factor;
use crate::math::{clamp_unit, ratio_or_zero};
use crate::{Error, IlluminanceResult, Result};

/// Illuminance of full daylight in lux.
pub const DAYLIGHT_LUX: f64 = 100_000.0;

/// Illuminance of one interior fixture at full output in lux.
pub const FIXTURE_LUX: f64 = 500.0;

/// Default task illuminance target in lux.
pub const DEFAULT_TARGET_LUX: f64 = 500.0;

/// Illuminance ratio above which lighting counts as excessive.
const MAX_EFFICIENT_RATIO: f64 = 1.5;

/// Lux scales and target used to evaluate a lighting situation.
///
/// # Example
/// ```
/// # use daylighting::illuminance::IlluminanceConfig;
/// let office = IlluminanceConfig::standard().with_target_lux(300.0).unwrap();
/// assert_eq!(office.target_lux(), 300.0);
/// assert_eq!(office.daylight_lux(), 100_000.0);
///
/// assert!(IlluminanceConfig::new(100_000.0, 0.0, 500.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawIlluminanceConfig"))]
pub struct IlluminanceConfig {
    daylight_lux: f64,
    fixture_lux: f64,
    target_lux: f64,
}

impl IlluminanceConfig {
    /// Creates a configuration with custom scales.
    ///
    /// # Errors
    /// Returns `InvalidIlluminance` if any value is not finite and positive.
    pub fn new(daylight_lux: f64, fixture_lux: f64, target_lux: f64) -> Result<Self> {
        check_lux("daylight illuminance", daylight_lux)?;
        check_lux("fixture illuminance", fixture_lux)?;
        check_lux("target illuminance", target_lux)?;
        Ok(Self {
            daylight_lux,
            fixture_lux,
            target_lux,
        })
    }

    /// Full daylight 100 000 lx, fixture 500 lx, target 500 lx.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            daylight_lux: DAYLIGHT_LUX,
            fixture_lux: FIXTURE_LUX,
            target_lux: DEFAULT_TARGET_LUX,
        }
    }

    /// Returns a copy with a different illuminance target.
    ///
    /// # Errors
    /// Returns `InvalidIlluminance` if the target is not finite and positive.
    pub fn with_target_lux(self, target_lux: f64) -> Result<Self> {
        check_lux("target illuminance", target_lux)?;
        Ok(Self { target_lux, ..self })
    }

    /// Illuminance of full daylight in lux.
    #[must_use]
    pub const fn daylight_lux(&self) -> f64 {
        self.daylight_lux
    }

    /// Illuminance of a fixture at full output in lux.
    #[must_use]
    pub const fn fixture_lux(&self) -> f64 {
        self.fixture_lux
    }

    /// Illuminance target in lux.
    #[must_use]
    pub const fn target_lux(&self) -> f64 {
        self.target_lux
    }

    /// Total interior illuminance in lux.
    ///
    /// Natural light is scaled by daylight and glazing transmittance,
    /// artificial light by fixture output.
    #[must_use]
    pub fn total_illuminance_lux(
        &self,
        natural_light_fraction: f64,
        artificial_light_fraction: f64,
        material_transmittance: f64,
    ) -> f64 {
        let natural = clamp_unit(natural_light_fraction)
            * clamp_unit(material_transmittance)
            * self.daylight_lux;
        let artificial = clamp_unit(artificial_light_fraction) * self.fixture_lux;
        natural + artificial
    }

    /// Share of light that is natural, as a percentage in `[0, 100]`.
    ///
    /// With a window area the share is scaled by the window area factor.
    /// Without one, it is penalized when the combined illuminance misses
    /// `target_lux`: multiplied by `lux / target` below the target, and by
    /// `1.5 / (lux / target)` above 1.5 times the target.
    #[must_use]
    pub fn energy_efficiency_percent(
        &self,
        natural_light_fraction: f64,
        artificial_light_fraction: f64,
        window_area_m2: Option<f64>,
    ) -> f64 {
        let natural = clamp_unit(natural_light_fraction);
        let artificial = clamp_unit(artificial_light_fraction);
        let total = natural + artificial;
        if total == 0.0 {
            return 0.0;
        }

        let mut efficiency = natural / total * 100.0;

        if let Some(area) = window_area_m2 {
            efficiency *= window_area_factor(area);
        } else {
            let lux = natural * self.daylight_lux + artificial * self.fixture_lux;
            let ratio = ratio_or_zero(lux, self.target_lux);
            if ratio < 1.0 {
                efficiency *= ratio;
            } else if ratio > MAX_EFFICIENT_RATIO {
                efficiency *= MAX_EFFICIENT_RATIO / ratio;
            }
        }

        efficiency.clamp(0.0, 100.0)
    }

    /// Artificial light fraction needed to top natural light up to the target.
    #[must_use]
    pub fn recommended_artificial_fraction(&self, natural_light_fraction: f64) -> f64 {
        let natural_lux = clamp_unit(natural_light_fraction) * self.daylight_lux;
        let required = (self.target_lux - natural_lux).max(0.0);
        (required / self.fixture_lux).min(1.0)
    }

    /// All three scores for one lighting situation.
    ///
    /// Efficiency uses the target-illuminance penalty.
    #[must_use]
    pub fn evaluate(
        &self,
        natural_light_fraction: f64,
        artificial_light_fraction: f64,
        material_transmittance: f64,
    ) -> IlluminanceResult {
        IlluminanceResult {
            total_lux: self.total_illuminance_lux(
                natural_light_fraction,
                artificial_light_fraction,
                material_transmittance,
            ),
            efficiency_percent: self.energy_efficiency_percent(
                natural_light_fraction,
                artificial_light_fraction,
                None,
            ),
            recommended_artificial_fraction: self
                .recommended_artificial_fraction(natural_light_fraction),
        }
    }
}

impl Default for IlluminanceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_lux(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_illuminance(name, value));
    }
    Ok(())
}

/// Total interior illuminance in lux with the standard scales.
///
/// # Example
/// ```
/// # use daylighting::illuminance::total_illuminance_lux;
/// assert_eq!(total_illuminance_lux(0.0, 0.0, 0.9), 0.0);
/// assert_eq!(total_illuminance_lux(0.0, 1.0, 0.9), 500.0);
/// assert_eq!(total_illuminance_lux(0.01, 0.0, 0.5), 500.0);
/// ```
#[must_use]
pub fn total_illuminance_lux(
    natural_light_fraction: f64,
    artificial_light_fraction: f64,
    material_transmittance: f64,
) -> f64 {
    IlluminanceConfig::standard().total_illuminance_lux(
        natural_light_fraction,
        artificial_light_fraction,
        material_transmittance,
    )
}

/// Daylight efficiency in percent against a target illuminance.
///
/// See [`IlluminanceConfig::energy_efficiency_percent`]. A non-positive or
/// non-finite target falls back to the 500 lx default.
#[must_use]
pub fn energy_efficiency_percent(
    natural_light_fraction: f64,
    artificial_light_fraction: f64,
    target_illuminance_lux: f64,
    window_area_m2: Option<f64>,
) -> f64 {
    standard_with_target(target_illuminance_lux).energy_efficiency_percent(
        natural_light_fraction,
        artificial_light_fraction,
        window_area_m2,
    )
}

/// Artificial light fraction needed to reach the target illuminance.
///
/// A non-positive or non-finite target falls back to the 500 lx default.
///
/// # Example
/// ```
/// # use daylighting::illuminance::recommended_artificial_fraction;
/// assert_eq!(recommended_artificial_fraction(0.0, 500.0), 1.0);
/// assert_eq!(recommended_artificial_fraction(0.0, 250.0), 0.5);
/// assert_eq!(recommended_artificial_fraction(0.2, 500.0), 0.0);
/// ```
#[must_use]
pub fn recommended_artificial_fraction(
    natural_light_fraction: f64,
    target_illuminance_lux: f64,
) -> f64 {
    standard_with_target(target_illuminance_lux)
        .recommended_artificial_fraction(natural_light_fraction)
}

fn standard_with_target(target_lux: f64) -> IlluminanceConfig {
    IlluminanceConfig::standard()
        .with_target_lux(target_lux)
        .unwrap_or_else(|_| IlluminanceConfig::standard())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIlluminanceConfig {
    daylight_lux: f64,
    fixture_lux: f64,
    target_lux: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIlluminanceConfig> for IlluminanceConfig {
    type Error = Error;

    fn try_from(raw: RawIlluminanceConfig) -> Result<Self> {
        Self::new(raw.daylight_lux, raw.fixture_lux, raw.target_lux)
    }
}
