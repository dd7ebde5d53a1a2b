//! Integration tests for building and querying ephemeris tables
//!
//! The reference dataset is a heliocentric Horizons vector table (km, km/s)
//! sampled every 30 days. Reference interpolants were computed independently
//! in double precision from the same six-point windows.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ephemtable::units::km_to_au;
use ephemtable::{EphemerisData, EphemerisError, EphemerisTable};
use rstest::{fixture, rstest};

const HORIZONS_ROWS: [[f64; 7]; 10] = [
    [
        2458849.5,
        -206989202.337052,
        -230690377.049615,
        -3593501.66181472,
        16.687770516701,
        -13.3316722546911,
        2.11151638406883,
    ],
    [
        2458879.5,
        -160853957.991521,
        -261594772.804662,
        1906010.76870765,
        18.8299943771761,
        -10.4417066788293,
        2.12128819944011,
    ],
    [
        2458909.5,
        -109834966.269488,
        -284485383.998363,
        7346888.19219363,
        20.4400085636901,
        -7.16522928027641,
        2.06593395876294,
    ],
    [
        2458939.5,
        -55426045.8429041,
        -298504783.14858,
        12559236.8059003,
        21.4340764623436,
        -3.61803347469132,
        1.94522656297565,
    ],
    [
        2458969.5,
        700740.271922723,
        -303125826.314767,
        17377436.5936175,
        21.7598103326871,
        0.062420209034819,
        1.76271498092491,
    ],
    [
        2458999.5,
        56785592.2271133,
        -298193955.729898,
        21649894.2145173,
        21.4025956485371,
        3.72819502541183,
        1.52561090543872,
    ],
    [
        2459029.5,
        111082034.625081,
        -283937581.264955,
        25247839.7778396,
        20.3871405446663,
        7.23392852255661,
        1.2441732813624,
    ],
    [
        2459059.5,
        161955146.28136,
        -260944905.356428,
        28071991.3194814,
        18.7737951408013,
        10.449253410829,
        0.930707156640917,
    ],
    [
        2459089.5,
        207964370.049318,
        -230111867.649376,
        30056334.6223833,
        16.6505912540206,
        13.2683522928012,
        0.59837489420997,
    ],
    [
        2459119.5,
        247922172.439639,
        -192570599.701394,
        31168822.6597849,
        14.1229350083109,
        15.6153080046127,
        0.260047428292031,
    ],
];

const SHORT_ROWS: [[f64; 7]; 2] = [
    [2458849.0, 1.0, 1.0, 1.0, 0.1, 0.1, 0.1],
    [2458849.1, 1.1, 1.1, 1.1, 0.11, 0.11, 0.11],
];

/// Horizons table declared in km with times already in days
#[fixture]
fn horizons_table() -> EphemerisTable {
    let data = EphemerisData::from_rows(HORIZONS_ROWS).with_distance_units("km");
    EphemerisTable::new(&data).unwrap()
}

fn assert_position_matches_row(table: &EphemerisTable, t: f64, row: &[f64; 7]) {
    let position = table.position_at_time(t);
    assert_abs_diff_eq!(position.x, km_to_au(row[1]), epsilon = 1e-12);
    assert_abs_diff_eq!(position.y, km_to_au(row[2]), epsilon = 1e-12);
    assert_abs_diff_eq!(position.z, km_to_au(row[3]), epsilon = 1e-12);
}

#[rstest]
#[case::au_day("au", "day", [2458849.0, 1.0, 2.0, 3.0, 0.1, 0.2, 0.3])]
#[case::km_day("km", "day", [
    2458849.0,
    km_to_au(1.0), km_to_au(2.0), km_to_au(3.0),
    km_to_au(0.1), km_to_au(0.2), km_to_au(0.3),
])]
#[case::km_sec("km", "sec", [
    2458849.0 / 86_400.0,
    km_to_au(1.0), km_to_au(2.0), km_to_au(3.0),
    km_to_au(0.1) * 86_400.0, km_to_au(0.2) * 86_400.0, km_to_au(0.3) * 86_400.0,
])]
#[case::au_sec("au", "sec", [
    2458849.0 / 86_400.0,
    1.0, 2.0, 3.0,
    0.1 * 86_400.0, 0.2 * 86_400.0, 0.3 * 86_400.0,
])]
fn test_rows_normalized_to_internal_units(
    #[case] distance_units: &str,
    #[case] time_units: &str,
    #[case] expected: [f64; 7],
) {
    let data = EphemerisData::from_rows([[2458849.0, 1.0, 2.0, 3.0, 0.1, 0.2, 0.3]])
        .with_distance_units(distance_units)
        .with_time_units(time_units);
    let table = EphemerisTable::new(&data).unwrap();

    let row = table.records()[0].to_row();
    for (actual, expected) in row.iter().zip(expected.iter()) {
        assert_relative_eq!(*actual, *expected, max_relative = 1e-10);
    }
}

#[test]
fn test_default_units_leave_values_unchanged() {
    let table = EphemerisTable::new(&EphemerisData::from_rows(SHORT_ROWS)).unwrap();
    for (record, row) in table.records().iter().zip(SHORT_ROWS.iter()) {
        assert_eq!(&record.to_row(), row);
    }

    let table =
        EphemerisTable::new(&EphemerisData::from_rows(SHORT_ROWS).with_distance_units("km"))
            .unwrap();
    assert_eq!(table.records()[0].position.x, km_to_au(1.0));
    assert_eq!(table.records()[1].position.z, km_to_au(1.1));
}

#[rstest]
#[case(-1)]
#[case(0)]
#[case(20)]
#[case(21)]
fn test_out_of_range_order_rejected(#[case] order: i64) {
    let data = EphemerisData::from_rows(SHORT_ROWS).with_interpolation_order(order);
    let err = EphemerisTable::new(&data).unwrap_err();

    assert!(matches!(
        err,
        EphemerisError::InterpolationOrderOutOfRange(ref o) if *o == order.to_string()
    ));
    assert!(err
        .to_string()
        .starts_with("Interpolation order must be >0 and <20"));
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(19)]
fn test_in_range_order_accepted(#[case] order: i64) {
    let data = EphemerisData::from_rows(SHORT_ROWS).with_interpolation_order(order);
    let table = EphemerisTable::new(&data).unwrap();
    assert_eq!(table.interpolation_order() as i64, order);
}

#[rstest]
#[case::first(0)]
#[case::middle(3)]
#[case::last(9)]
fn test_position_at_sample_time(horizons_table: EphemerisTable, #[case] index: usize) {
    let row = &HORIZONS_ROWS[index];
    assert_position_matches_row(&horizons_table, row[0], row);
}

#[rstest]
fn test_position_at_every_sample_time(horizons_table: EphemerisTable) {
    for row in &HORIZONS_ROWS {
        assert_position_matches_row(&horizons_table, row[0], row);
    }
}

#[rstest]
fn test_before_first_point_returns_first_point(horizons_table: EphemerisTable) {
    let first = &HORIZONS_ROWS[0];
    assert_position_matches_row(&horizons_table, first[0] - 10.0, first);
    assert_eq!(
        horizons_table.position_at_time(first[0] - 10.0),
        horizons_table.records()[0].position
    );
}

#[rstest]
fn test_after_last_point_returns_last_point(horizons_table: EphemerisTable) {
    let last = &HORIZONS_ROWS[9];
    assert_position_matches_row(&horizons_table, last[0] + 10.0, last);
    assert_eq!(
        horizons_table.position_at_time(last[0] + 10.0),
        horizons_table.records()[9].position
    );
}

#[rstest]
// Midway between samples 3 and 4, window 1..=6
#[case::between(HORIZONS_ROWS[3][0] + 15.0, [
    -0.18361404742989912,
    -2.018802886853825,
    0.10045271135143871,
])]
// Near the start, window shifted to 0..=5
#[case::near_start(HORIZONS_ROWS[0][0] + 10.0, [
    -1.2850154200641106,
    -1.6164469371227796,
    -0.011792846144823257,
])]
// Near the end, window shifted to 4..=9
#[case::near_end(HORIZONS_ROWS[8][0] + 20.0, [
    1.5731267151004549,
    -1.375368969213372,
    0.20652316275249247,
])]
fn test_position_between_points(
    horizons_table: EphemerisTable,
    #[case] t: f64,
    #[case] expected: [f64; 3],
) {
    let position = horizons_table.position_at_time(t);
    assert_abs_diff_eq!(position.x, expected[0], epsilon = 1e-12);
    assert_abs_diff_eq!(position.y, expected[1], epsilon = 1e-12);
    assert_abs_diff_eq!(position.z, expected[2], epsilon = 1e-12);
}

#[test]
fn test_lower_order_uses_smaller_window() {
    // Order 2 fits samples 3, 4 and 5
    let data = EphemerisData::from_rows(HORIZONS_ROWS)
        .with_distance_units("km")
        .with_interpolation_order(2);
    let table = EphemerisTable::new(&data).unwrap();

    let position = table.position_at_time(HORIZONS_ROWS[3][0] + 15.0);
    assert_abs_diff_eq!(position.x, -0.1828729973730579, epsilon = 1e-12);
    assert_abs_diff_eq!(position.y, -2.0188082727206593, epsilon = 1e-12);
    assert_abs_diff_eq!(position.z, 0.10051315837753481, epsilon = 1e-12);
}

#[rstest]
fn test_interpolated_velocity_tracks_position(horizons_table: EphemerisTable) {
    // Velocities here are km/s mislabelled as km/day; rescale before comparing
    let t = HORIZONS_ROWS[4][0] + 7.5;
    let dt = 1e-3;
    let ahead = horizons_table.position_at_time(t + dt);
    let behind = horizons_table.position_at_time(t - dt);
    let finite_difference = (ahead - behind) / (2.0 * dt);

    let velocity = horizons_table.velocity_at_time(t) * 86_400.0;
    assert_relative_eq!(finite_difference, velocity, max_relative = 1e-3);
}

#[test]
fn test_seconds_table_matches_days_table() {
    let days =
        EphemerisTable::new(&EphemerisData::from_rows(HORIZONS_ROWS).with_distance_units("km"))
            .unwrap();
    let seconds = EphemerisTable::new(
        &EphemerisData::from_rows(HORIZONS_ROWS)
            .with_distance_units("km")
            .with_time_units("sec"),
    )
    .unwrap();

    // The time column is scaled too, so query in the scaled time
    for &offset in &[0.0, 12.5, 15.0, 100.0, 269.9] {
        let t = HORIZONS_ROWS[0][0] + offset;
        let a = days.position_at_time(t);
        let b = seconds.position_at_time(t / 86_400.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    for (d, s) in days.records().iter().zip(seconds.records()) {
        assert_relative_eq!(s.velocity, d.velocity * 86_400.0, max_relative = 1e-12);
    }
}

#[rstest]
fn test_json_construction_matches_builder(horizons_table: EphemerisTable) {
    let json = serde_json::json!({
        "data": HORIZONS_ROWS,
        "distanceUnits": "km",
        "timeUnits": "day",
        "interpolationOrder": 5
    });
    let from_json = EphemerisTable::from_json(&json.to_string()).unwrap();
    let t = HORIZONS_ROWS[3][0] + 15.0;
    assert_eq!(
        from_json.position_at_time(t),
        horizons_table.position_at_time(t)
    );
}
