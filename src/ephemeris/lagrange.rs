//! Lagrange polynomial interpolation over tabulated samples
//!
//! This module holds the pure pieces of the interpolation engine so they can
//! be exercised without building a full table:
//!
//! - [`bracket`] finds the consecutive pair of records surrounding a time
//! - [`select_window`] picks the records the polynomial is fitted through
//! - [`lagrange_weights`] evaluates the Lagrange basis at a time
//! - [`interpolate`] combines the above for any vector-valued column
//!
//! For a window of `n` samples `(t_j, y_j)` the interpolating polynomial is
//!
//! ```text
//! P(t) = Σ_j y_j · L_j(t),    L_j(t) = Π_{k≠j} (t - t_k) / (t_j - t_k)
//! ```
//!
//! The window is centered on the bracketing pair rather than starting at it,
//! which keeps the query time near the middle of the fitted interval where
//! the polynomial error is smallest.

use std::ops::Range;

use nalgebra::Vector3;

use super::record::StateRecord;

/// Index `i` of the pair `(i, i + 1)` with `records[i].time <= t <= records[i + 1].time`
///
/// Uses a binary search over the ordered times. Times outside the table are
/// pinned to the first or last pair. Requires at least two records.
pub fn bracket(records: &[StateRecord], t: f64) -> usize {
    debug_assert!(records.len() >= 2, "bracketing needs two records");
    let upper = records.partition_point(|r| r.time <= t);
    upper.saturating_sub(1).min(records.len() - 2)
}

/// Range of record indices used to interpolate at `t`
///
/// The window holds `order + 1` records, or the whole table when it is
/// shorter. It extends outward from the bracketing pair on both sides and is
/// shifted inward where it would run past either end of the table.
pub fn window_range(records: &[StateRecord], t: f64, order: usize) -> Range<usize> {
    let len = records.len();
    if len < 2 {
        return 0..len;
    }

    let n = (order + 1).min(len);
    let i = bracket(records, t);
    let start = (i + 1).saturating_sub(n / 2).min(len - n);

    log::trace!(
        "interpolation window for t={} is records {}..{} (bracket {})",
        t,
        start,
        start + n,
        i
    );

    start..start + n
}

/// Records used to interpolate at `t`, see [`window_range`]
pub fn select_window(records: &[StateRecord], t: f64, order: usize) -> &[StateRecord] {
    &records[window_range(records, t, order)]
}

/// Lagrange basis values `L_j(t)` for the sample times `times`
///
/// Sample times must be distinct. At `t == times[j]` the result is the unit
/// vector `e_j` exactly.
pub fn lagrange_weights(times: &[f64], t: f64) -> Vec<f64> {
    times
        .iter()
        .enumerate()
        .map(|(j, &tj)| {
            times
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != j)
                .fold(1.0, |acc, (_, &tk)| acc * ((t - tk) / (tj - tk)))
        })
        .collect()
}

/// Evaluate the polynomial through `(times[j], values[j])` at `t`
pub fn evaluate(times: &[f64], values: &[f64], t: f64) -> f64 {
    debug_assert_eq!(times.len(), values.len());
    lagrange_weights(times, t)
        .iter()
        .zip(values)
        .map(|(w, y)| w * y)
        .sum()
}

/// Interpolate a vector column of `window` at `t`
///
/// `column` picks the vector from each record, for example
/// `|r| r.position`. Each component is interpolated independently with the
/// same basis.
pub fn interpolate<F>(window: &[StateRecord], t: f64, column: F) -> Vector3<f64>
where
    F: Fn(&StateRecord) -> Vector3<f64>,
{
    let times: Vec<f64> = window.iter().map(|r| r.time).collect();
    let weights = lagrange_weights(&times, t);

    window
        .iter()
        .zip(&weights)
        .fold(Vector3::zeros(), |acc, (record, &w)| acc + column(record) * w)
}
