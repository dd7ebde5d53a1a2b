//! # Unit Normalization Module
//!
//! Conversions between the units an ephemeris source may declare and the
//! fixed internal units of an [`EphemerisTable`](crate::ephemeris::EphemerisTable):
//! astronomical units for distance, days for time and au/day for velocity.
//!
//! ## Recognized Units
//!
//! | Quantity | Tag   | Internal factor |
//! |----------|-------|-----------------|
//! | distance | `au`  | 1               |
//! | distance | `km`  | 1 / [`AU_KM`]   |
//! | time     | `day` | 1               |
//! | time     | `sec` | 1 / [`DAY_S`]   |
//!
//! Unit tags are parsed into the closed [`DistanceUnit`] and [`TimeUnit`]
//! enums at the boundary. The string-keyed functions ([`distance_to_au`],
//! [`time_to_day`] and their inverses) are thin wrappers for callers that
//! still hold the raw tag.
//!
//! ## Examples
//!
//! ```rust
//! use ephemtable::units::{distance_to_au, time_to_day, DistanceUnit, TimeUnit};
//!
//! assert_eq!(distance_to_au(1.5, "au").unwrap(), 1.5);
//! assert_eq!(time_to_day(86_400.0, "sec").unwrap(), 1.0);
//! assert!(distance_to_au(1.0, "parsec").is_err());
//!
//! let km: DistanceUnit = "km".parse().unwrap();
//! assert!((km.to_au(149_597_870.7) - 1.0).abs() < 1e-15);
//! assert_eq!(TimeUnit::Sec.days_to_unit(1.0), 86_400.0);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{AU_KM, DAY_S};

/// Error raised when a unit tag is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Distance units an ephemeris source may be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    /// Astronomical units (internal unit)
    #[default]
    Au,
    /// Kilometers
    Km,
}

impl DistanceUnit {
    /// All recognized distance units
    pub const ALL: [DistanceUnit; 2] = [DistanceUnit::Au, DistanceUnit::Km];

    /// Tag used for this unit in ephemeris structures
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Au => "au",
            DistanceUnit::Km => "km",
        }
    }

    /// Astronomical units per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Au => 1.0,
            DistanceUnit::Km => 1.0 / AU_KM,
        }
    }

    /// Convert a distance in this unit to astronomical units
    pub fn to_au(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Au => value,
            DistanceUnit::Km => km_to_au(value),
        }
    }

    /// Convert a distance in astronomical units to this unit
    pub fn au_to_unit(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Au => value,
            DistanceUnit::Km => au_to_km(value),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "au" => Ok(DistanceUnit::Au),
            "km" => Ok(DistanceUnit::Km),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time units an ephemeris source may be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Days (internal unit)
    #[default]
    Day,
    /// SI seconds
    Sec,
}

impl TimeUnit {
    /// All recognized time units
    pub const ALL: [TimeUnit; 2] = [TimeUnit::Day, TimeUnit::Sec];

    /// Tag used for this unit in ephemeris structures
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Sec => "sec",
        }
    }

    /// Days per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            TimeUnit::Day => 1.0,
            TimeUnit::Sec => 1.0 / DAY_S,
        }
    }

    /// Convert a time in this unit to days
    pub fn to_days(&self, value: f64) -> f64 {
        match self {
            TimeUnit::Day => value,
            TimeUnit::Sec => value / DAY_S,
        }
    }

    /// Convert a time in days to this unit
    pub fn days_to_unit(&self, value: f64) -> f64 {
        match self {
            TimeUnit::Day => value,
            TimeUnit::Sec => value * DAY_S,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeUnit::Day),
            "sec" => Ok(TimeUnit::Sec),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert kilometers to astronomical units
pub fn km_to_au(km: f64) -> f64 {
    km / AU_KM
}

/// Convert astronomical units to kilometers
pub fn au_to_km(au: f64) -> f64 {
    au * AU_KM
}

/// Convert a distance expressed in `unit_name` to astronomical units
///
/// # Arguments
///
/// * `value` - The distance in the declared unit
/// * `unit_name` - Unit tag, `au` or `km`
///
/// # Errors
///
/// Returns [`UnitError::UnknownUnit`] for any other tag
pub fn distance_to_au(value: f64, unit_name: &str) -> Result<f64, UnitError> {
    Ok(unit_name.parse::<DistanceUnit>()?.to_au(value))
}

/// Convert a distance in astronomical units to `unit_name`
pub fn au_to_distance(value: f64, unit_name: &str) -> Result<f64, UnitError> {
    Ok(unit_name.parse::<DistanceUnit>()?.au_to_unit(value))
}

/// Convert a time expressed in `unit_name` to days
///
/// # Arguments
///
/// * `value` - The time in the declared unit
/// * `unit_name` - Unit tag, `day` or `sec`
///
/// # Errors
///
/// Returns [`UnitError::UnknownUnit`] for any other tag
pub fn time_to_day(value: f64, unit_name: &str) -> Result<f64, UnitError> {
    Ok(unit_name.parse::<TimeUnit>()?.to_days(value))
}

/// Convert a time in days to `unit_name`
pub fn day_to_time(value: f64, unit_name: &str) -> Result<f64, UnitError> {
    Ok(unit_name.parse::<TimeUnit>()?.days_to_unit(value))
}

/// Convert a velocity in `distance`/`time` units to au/day
///
/// The velocity scales by the distance factor over the time factor, so
/// km/sec is multiplied by `86400 / AU_KM`.
pub fn velocity_to_au_per_day(value: f64, distance: DistanceUnit, time: TimeUnit) -> f64 {
    distance.to_au(value) / time.to_days(1.0)
}

/// Convert a velocity in au/day to `distance`/`time` units
pub fn velocity_from_au_per_day(value: f64, distance: DistanceUnit, time: TimeUnit) -> f64 {
    distance.au_to_unit(value) * time.to_days(1.0)
}
