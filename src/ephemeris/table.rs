//! Tabulated ephemeris with interpolated state queries
//!
//! An [`EphemerisTable`] is built once from an [`EphemerisData`] structure,
//! validated and normalized to au and days, and then queried any number of
//! times. Query times outside the tabulated span are clamped to the first or
//! last sample instead of extrapolated.

use std::str::FromStr;

use nalgebra::Vector3;
use serde::Deserialize;
use serde_json::Value;

use super::errors::{EphemerisError, Result};
use super::input::{DeclaredUnits, EphemerisData, EphemerisType, InterpolationType};
use super::lagrange;
use super::record::{StateRecord, StateVector};
use crate::constants::{DEFAULT_INTERPOLATION_ORDER, MAX_INTERPOLATION_ORDER, ROW_WIDTH};
use crate::units::{DistanceUnit, TimeUnit};

/// A validated, normalized table of state vectors
///
/// Records are stored in au, days and au/day whatever units the source was
/// declared in. The table is immutable after construction, so shared
/// references can be queried from any number of threads.
///
/// # Examples
///
/// ```rust
/// use ephemtable::ephemeris::EphemerisTable;
///
/// let table: EphemerisTable = r#"{
///     "data": [
///         [2458849.0, 1.0, 1.0, 1.0, 0.1, 0.1, 0.1],
///         [2458849.1, 1.1, 1.1, 1.1, 0.11, 0.11, 0.11]
///     ]
/// }"#
/// .parse()
/// .unwrap();
///
/// let p = table.position_at_time(2458849.05);
/// assert!((p.x - 1.05).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct EphemerisTable {
    records: Vec<StateRecord>,
    ephemeris_type: EphemerisType,
    units: DeclaredUnits,
    interpolation_type: InterpolationType,
    interpolation_order: usize,
}

impl EphemerisTable {
    /// Build a table from a construction structure
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. `data` is a non-empty array of arrays
    /// 2. the ephemeris type is recognized
    /// 3. the time units are recognized
    /// 4. the distance units are recognized
    /// 5. the interpolation type is recognized
    /// 6. the interpolation order is an integer strictly between 0 and 20
    /// 7. every row holds exactly seven numbers
    /// 8. normalized times are strictly increasing
    pub fn new(input: &EphemerisData) -> Result<Self> {
        let rows = match &input.data {
            Some(Value::Array(rows)) if !rows.is_empty() && rows.iter().all(Value::is_array) => {
                rows
            }
            _ => return Err(EphemerisError::InvalidDataShape),
        };

        let ephemeris_type = match &input.ephemeris_type {
            Some(tag) => tag_text(tag)
                .and_then(|tag| tag.parse::<EphemerisType>())
                .map_err(EphemerisError::UnknownEphemerisType)?,
            None => EphemerisType::default(),
        };

        let time = match &input.time_units {
            Some(tag) => tag_text(tag)
                .and_then(|tag| tag.parse::<TimeUnit>().map_err(|_| tag.to_string()))
                .map_err(EphemerisError::UnknownTimeUnits)?,
            None => TimeUnit::default(),
        };

        let distance = match &input.distance_units {
            Some(tag) => tag_text(tag)
                .and_then(|tag| tag.parse::<DistanceUnit>().map_err(|_| tag.to_string()))
                .map_err(EphemerisError::UnknownDistanceUnits)?,
            None => DistanceUnit::default(),
        };

        let interpolation_type = match &input.interpolation_type {
            Some(tag) => tag_text(tag)
                .and_then(|tag| tag.parse::<InterpolationType>())
                .map_err(EphemerisError::UnknownInterpolationType)?,
            None => InterpolationType::default(),
        };

        let interpolation_order = match &input.interpolation_order {
            Some(order) => resolve_order(order)?,
            None => DEFAULT_INTERPOLATION_ORDER,
        };

        let units = DeclaredUnits { distance, time };
        let records = normalize_rows(rows, units)?;

        let table = Self {
            records,
            ephemeris_type,
            units,
            interpolation_type,
            interpolation_order,
        };

        log::debug!(
            "built {} ephemeris table: {} records over [{}, {}] days, declared {}/{}, {} order {}",
            table.ephemeris_type,
            table.len(),
            table.start_time(),
            table.end_time(),
            table.units.distance,
            table.units.time,
            table.interpolation_type,
            table.interpolation_order
        );

        Ok(table)
    }

    /// Build a table from a JSON value
    ///
    /// `null` means no structure was supplied. Any other non-object value
    /// cannot carry a `data` field.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(EphemerisError::MissingArgument),
            Value::Object(_) => {
                let input = EphemerisData::deserialize(value)?;
                Self::new(&input)
            }
            _ => Err(EphemerisError::InvalidDataShape),
        }
    }

    /// Build a table from JSON text
    ///
    /// Blank text means no structure was supplied.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(EphemerisError::MissingArgument);
        }
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Interpolated position at `t` (days), in au
    ///
    /// Times at or before the first sample return the first position, times
    /// at or after the last sample return the last position.
    pub fn position_at_time(&self, t: f64) -> Vector3<f64> {
        self.interpolate(t, |r| r.position)
    }

    /// Interpolated velocity at `t` (days), in au/day
    ///
    /// Uses the same window and clamping as [`position_at_time`](Self::position_at_time).
    pub fn velocity_at_time(&self, t: f64) -> Vector3<f64> {
        self.interpolate(t, |r| r.velocity)
    }

    /// Interpolated position and velocity at `t` (days)
    pub fn state_at_time(&self, t: f64) -> StateVector {
        StateVector {
            time: t,
            position: self.position_at_time(t),
            velocity: self.velocity_at_time(t),
        }
    }

    /// Interpolated positions at each of `times`
    pub fn positions_at_times(&self, times: &[f64]) -> Vec<Vector3<f64>> {
        times.iter().map(|&t| self.position_at_time(t)).collect()
    }

    fn interpolate<F>(&self, t: f64, column: F) -> Vector3<f64>
    where
        F: Fn(&StateRecord) -> Vector3<f64>,
    {
        // Construction guarantees at least one record
        let first = &self.records[0];
        let last = &self.records[self.records.len() - 1];

        if t <= first.time {
            return column(first);
        }
        if t >= last.time {
            return column(last);
        }

        let window = lagrange::select_window(&self.records, t, self.interpolation_order);
        lagrange::interpolate(window, t, column)
    }

    /// Normalized records in time order
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a table holds at least one record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time of the first record, in days
    pub fn start_time(&self) -> f64 {
        self.records[0].time
    }

    /// Time of the last record, in days
    pub fn end_time(&self) -> f64 {
        self.records[self.records.len() - 1].time
    }

    /// Whether `t` lies within the tabulated span (no clamping needed)
    pub fn contains_time(&self, t: f64) -> bool {
        t >= self.start_time() && t <= self.end_time()
    }

    pub fn ephemeris_type(&self) -> EphemerisType {
        self.ephemeris_type
    }

    /// Units the source data was declared in
    pub fn units(&self) -> DeclaredUnits {
        self.units
    }

    pub fn interpolation_type(&self) -> InterpolationType {
        self.interpolation_type
    }

    /// Maximum polynomial degree used per query
    pub fn interpolation_order(&self) -> usize {
        self.interpolation_order
    }
}

impl FromStr for EphemerisTable {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl TryFrom<&EphemerisData> for EphemerisTable {
    type Error = EphemerisError;

    fn try_from(input: &EphemerisData) -> Result<Self> {
        Self::new(input)
    }
}

/// Text of a declared tag, or the JSON rendering of a tag that is not a string
fn tag_text(tag: &Value) -> std::result::Result<&str, String> {
    tag.as_str().ok_or_else(|| tag.to_string())
}

/// Integral order strictly between 0 and the maximum
fn resolve_order(order: &Value) -> Result<usize> {
    match order.as_f64() {
        Some(o) if o.fract() == 0.0 && o > 0.0 && o < MAX_INTERPOLATION_ORDER as f64 => {
            Ok(o as usize)
        }
        _ => Err(EphemerisError::InterpolationOrderOutOfRange(order.to_string())),
    }
}

/// Convert raw rows to normalized records, checking shape and time order
fn normalize_rows(rows: &[Value], units: DeclaredUnits) -> Result<Vec<StateRecord>> {
    let mut records: Vec<StateRecord> = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let values = row.as_array().ok_or(EphemerisError::InvalidDataShape)?;
        if values.len() != ROW_WIDTH {
            return Err(EphemerisError::RecordLength {
                row: index,
                len: values.len(),
            });
        }

        let mut raw = [0.0; ROW_WIDTH];
        for (column, value) in values.iter().enumerate() {
            raw[column] = value.as_f64().ok_or(EphemerisError::NonNumericValue {
                row: index,
                column,
            })?;
        }

        let record = StateRecord::from_row_in(&raw, units);
        if let Some(previous) = records.last() {
            if record.time <= previous.time {
                return Err(EphemerisError::TimesNotIncreasing {
                    row: index,
                    time: record.time,
                    previous: previous.time,
                });
            }
        }
        records.push(record);
    }

    Ok(records)
}
