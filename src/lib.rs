//! Ephemtable: tabulated state-vector ephemerides with Lagrange interpolation
//!
//! This crate turns a table of `(t, x, y, z, vx, vy, vz)` samples, such as a
//! JPL Horizons vector export, into a queryable ephemeris that returns the
//! body's position and velocity at any time within the tabulated span.
//!
//! ```rust
//! use ephemtable::{EphemerisData, EphemerisTable};
//!
//! let data = EphemerisData::from_rows([
//!     [2458849.5, -206989202.337052, -230690377.049615, -3593501.66181472,
//!      16.687770516701, -13.3316722546911, 2.11151638406883],
//!     [2458879.5, -160853957.991521, -261594772.804662, 1906010.76870765,
//!      18.8299943771761, -10.4417066788293, 2.12128819944011],
//! ])
//! .with_distance_units("km");
//!
//! let table = EphemerisTable::new(&data).unwrap();
//! let position_au = table.position_at_time(2458864.5);
//! assert!(position_au.norm() > 1.0);
//! ```

pub mod constants;
pub mod ephemeris;
pub mod units;

// Re-export commonly used types
pub use ephemeris::{EphemerisData, EphemerisError, EphemerisTable, StateRecord, StateVector};
pub use units::{DistanceUnit, TimeUnit, UnitError};
