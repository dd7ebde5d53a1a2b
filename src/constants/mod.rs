//! Constants module for unit normalization

// Astronomical distances
/// Astronomical Unit in kilometers (per IAU 2012 Resolution B2)
pub const AU_KM: f64 = 149_597_870.700;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;

// Ephemeris table limits
/// Interpolation order used when none is declared
pub const DEFAULT_INTERPOLATION_ORDER: usize = 5;
/// Exclusive upper bound on the interpolation order
pub const MAX_INTERPOLATION_ORDER: usize = 20;
/// Number of columns in a raw ephemeris row (t, x, y, z, vx, vy, vz)
pub const ROW_WIDTH: usize = 7;
