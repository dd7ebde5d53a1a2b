//! Sample records held by an ephemeris table

use nalgebra::Vector3;

use super::input::DeclaredUnits;
use crate::constants::ROW_WIDTH;
use crate::units::velocity_to_au_per_day;

/// One tabulated sample: time, position and velocity
///
/// Records inside an [`EphemerisTable`](super::EphemerisTable) are always
/// normalized: time in days, position in au, velocity in au/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRecord {
    /// Sample time
    pub time: f64,
    /// Position vector
    pub position: Vector3<f64>,
    /// Velocity vector
    pub velocity: Vector3<f64>,
}

impl StateRecord {
    /// Create a record from its components
    pub fn new(time: f64, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            time,
            position,
            velocity,
        }
    }

    /// Create a record from a `[t, x, y, z, vx, vy, vz]` row without conversion
    pub fn from_row(row: &[f64; ROW_WIDTH]) -> Self {
        Self {
            time: row[0],
            position: Vector3::new(row[1], row[2], row[3]),
            velocity: Vector3::new(row[4], row[5], row[6]),
        }
    }

    /// Create a record from a row declared in `units`, normalizing to au and days
    pub fn from_row_in(row: &[f64; ROW_WIDTH], units: DeclaredUnits) -> Self {
        let distance = units.distance;
        let time = units.time;
        Self {
            time: time.to_days(row[0]),
            position: Vector3::new(
                distance.to_au(row[1]),
                distance.to_au(row[2]),
                distance.to_au(row[3]),
            ),
            velocity: Vector3::new(
                velocity_to_au_per_day(row[4], distance, time),
                velocity_to_au_per_day(row[5], distance, time),
                velocity_to_au_per_day(row[6], distance, time),
            ),
        }
    }

    /// The record as a `[t, x, y, z, vx, vy, vz]` row
    pub fn to_row(&self) -> [f64; ROW_WIDTH] {
        [
            self.time,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        ]
    }
}

/// Interpolated state of a body at a query time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// Query time in days
    pub time: f64,
    /// Position in au
    pub position: Vector3<f64>,
    /// Velocity in au/day
    pub velocity: Vector3<f64>,
}

impl From<StateRecord> for StateVector {
    fn from(record: StateRecord) -> Self {
        Self {
            time: record.time,
            position: record.position,
            velocity: record.velocity,
        }
    }
}
