//! Construction structure and declared settings for ephemeris tables
//!
//! [`EphemerisData`] is the raw, unvalidated description of a table. It can be
//! deserialized from JSON using the camelCase field names exported by
//! ephemeris tooling, or assembled in code with the `with_*` builders:
//!
//! ```rust
//! use ephemtable::ephemeris::{EphemerisData, EphemerisTable};
//!
//! let data = EphemerisData::from_rows([
//!     [2458849.0, 1.0, 1.0, 1.0, 0.1, 0.1, 0.1],
//!     [2458849.1, 1.1, 1.1, 1.1, 0.11, 0.11, 0.11],
//! ])
//! .with_distance_units("km")
//! .with_interpolation_order(3);
//!
//! let table = EphemerisTable::new(&data).unwrap();
//! assert_eq!(table.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::units::{DistanceUnit, TimeUnit};

/// Layout of the samples held in an ephemeris table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EphemerisType {
    /// Cartesian position and velocity: `(t, x, y, z, vx, vy, vz)`
    #[default]
    CartesianPosVel,
}

impl EphemerisType {
    /// Tag used for this type in ephemeris structures
    pub fn as_str(&self) -> &'static str {
        match self {
            EphemerisType::CartesianPosVel => "cartesianposvel",
        }
    }
}

impl FromStr for EphemerisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesianposvel" => Ok(EphemerisType::CartesianPosVel),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for EphemerisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpolation method used between samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationType {
    /// Lagrange polynomial through a window of neighbouring samples
    #[default]
    Lagrange,
}

impl InterpolationType {
    /// Tag used for this method in ephemeris structures
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationType::Lagrange => "lagrange",
        }
    }
}

impl FromStr for InterpolationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lagrange" => Ok(InterpolationType::Lagrange),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for InterpolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Units the source data was declared in
///
/// Kept for reference only. Table records are always stored in au and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeclaredUnits {
    /// Distance unit of the position and velocity columns
    pub distance: DistanceUnit,
    /// Time unit of the time column and of the velocity denominator
    pub time: TimeUnit,
}

/// Raw ephemeris construction structure
///
/// Only `data` is required. Missing optional fields fall back to
/// `cartesianposvel`, `au`, `day`, `lagrange` and order 5 when the table is
/// built. Every field is held as raw JSON and nothing here is validated until
/// it is handed to [`EphemerisTable::new`](super::EphemerisTable::new), so a
/// mistyped field is reported by the check that owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemerisData {
    /// Rows of `[t, x, y, z, vx, vy, vz]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeris_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_units: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_units: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation_type: Option<Value>,
    /// Integral number, `6` and `6.0` alike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation_order: Option<Value>,
}

impl EphemerisData {
    /// Create a construction structure from numeric rows
    ///
    /// Non-finite values cannot be represented in JSON and become `null`,
    /// which the table rejects as non-numeric.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let data = rows
            .into_iter()
            .map(|row| Value::Array(row.as_ref().iter().map(|&v| Value::from(v)).collect()))
            .collect();

        Self {
            data: Some(Value::Array(data)),
            ..Self::default()
        }
    }

    /// Set the declared ephemeris type tag
    pub fn with_ephemeris_type(mut self, tag: impl Into<String>) -> Self {
        self.ephemeris_type = Some(Value::String(tag.into()));
        self
    }

    /// Set the declared distance unit tag
    pub fn with_distance_units(mut self, tag: impl Into<String>) -> Self {
        self.distance_units = Some(Value::String(tag.into()));
        self
    }

    /// Set the declared time unit tag
    pub fn with_time_units(mut self, tag: impl Into<String>) -> Self {
        self.time_units = Some(Value::String(tag.into()));
        self
    }

    /// Set the declared interpolation type tag
    pub fn with_interpolation_type(mut self, tag: impl Into<String>) -> Self {
        self.interpolation_type = Some(Value::String(tag.into()));
        self
    }

    /// Set the interpolation order
    pub fn with_interpolation_order(mut self, order: i64) -> Self {
        self.interpolation_order = Some(Value::from(order));
        self
    }
}
