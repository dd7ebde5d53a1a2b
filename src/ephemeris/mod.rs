//! Tabulated ephemeris module
//!
//! This module provides a time-indexed table of state vectors (position and
//! velocity) for a single body, as exported by ephemeris services such as JPL
//! Horizons, and interpolates the body's state at arbitrary times.
//!
//! # Overview
//!
//! Source tables come in whatever units the exporter chose. An
//! [`EphemerisTable`] validates the declared layout and units once, stores
//! every sample in au and days, and answers position and velocity queries
//! with a Lagrange polynomial fitted through the samples nearest the query.
//!
//! # Main Components
//!
//! - `input`: the raw construction structure and the declared tags
//! - `record`: normalized samples and interpolated state vectors
//! - `lagrange`: window selection and polynomial evaluation
//! - `table`: validation, normalization and the query API
//! - Error types for proper error handling

pub mod errors;
pub mod input;
pub mod lagrange;
pub mod record;
pub mod table;


// Re-export primary types for convenience
pub use self::errors::{EphemerisError, Result};
pub use self::input::{DeclaredUnits, EphemerisData, EphemerisType, InterpolationType};
pub use self::record::{StateRecord, StateVector};
pub use self::table::EphemerisTable;
