//! Error types for the ephemeris module
//!
//! Every error is raised while building an [`EphemerisTable`](super::EphemerisTable).
//! Queries against a built table never fail.

use thiserror::Error;

/// Main error type for ephemeris table construction
#[derive(Error, Debug)]
pub enum EphemerisError {
    /// No construction structure was supplied at all
    #[error("EphemerisTable must be initialized with an ephemeris data structure")]
    MissingArgument,

    /// `data` is absent, not an array, empty, or holds a non-array row
    #[error(
        "EphemerisTable must be initialized with a structure containing an array of arrays of ephemeris data"
    )]
    InvalidDataShape,

    /// The declared ephemeris type is not recognized
    #[error("Unknown ephemeris type: {0}")]
    UnknownEphemerisType(String),

    /// The declared time units are not recognized
    #[error("Unknown time units: {0}")]
    UnknownTimeUnits(String),

    /// The declared distance units are not recognized
    #[error("Unknown distance units: {0}")]
    UnknownDistanceUnits(String),

    /// The declared interpolation type is not recognized
    #[error("Unknown interpolation type: {0}")]
    UnknownInterpolationType(String),

    /// The interpolation order is not an integer strictly between 0 and 20
    #[error("Interpolation order must be >0 and <20, got {0}")]
    InterpolationOrderOutOfRange(String),

    /// A row does not hold exactly seven values
    #[error("Ephemeris row {row} has {len} values, expected 7 (t, x, y, z, vx, vy, vz)")]
    RecordLength {
        /// Index of the offending row
        row: usize,
        /// Number of values found in the row
        len: usize,
    },

    /// A row value is not a number
    #[error("Ephemeris row {row} column {column} is not a number")]
    NonNumericValue {
        /// Index of the offending row
        row: usize,
        /// Index of the offending column
        column: usize,
    },

    /// Row times are not strictly increasing
    #[error("Ephemeris row {row} time {time} does not follow previous time {previous}")]
    TimesNotIncreasing {
        /// Index of the offending row
        row: usize,
        /// Normalized time of the offending row
        time: f64,
        /// Normalized time of the row before it
        previous: f64,
    },

    /// The construction text is not valid JSON
    #[error("Invalid ephemeris JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extension of the Result type for ephemeris operations
pub type Result<T> = std::result::Result<T, EphemerisError>;
