//! Integration tests: forward transforms against known values and exact
//! reconstruction through the inverses.

use approx::assert_relative_eq;
use modelselec_transform::{Table, diff, diff_inv, ln_diff, ln_diff_inv};

fn two_columns() -> Table {
    Table::from_columns([("A", vec![1.0, 2.0, 3.0, 4.0]), ("B", vec![4.0, 6.0, 8.0, 10.0])])
        .expect("fixture is valid")
}

fn one_column() -> Table {
    Table::from_columns([("A", vec![1.0, 2.0, 3.0, 4.0])]).expect("fixture is valid")
}

fn cells(table: &Table, name: &str) -> Vec<Option<f64>> {
    table.column(name).expect("column exists").to_vec()
}

#[test]
fn diff_lag_one_known_values() {
    let d = diff(&two_columns(), 1).unwrap();
    assert_eq!(cells(&d, "A"), vec![None, Some(1.0), Some(1.0), Some(1.0)]);
    assert_eq!(cells(&d, "B"), vec![None, Some(2.0), Some(2.0), Some(2.0)]);
}

#[test]
fn diff_lag_three_known_values() {
    let d = diff(&two_columns(), 3).unwrap();
    assert_eq!(cells(&d, "A"), vec![None, None, None, Some(3.0)]);
    assert_eq!(cells(&d, "B"), vec![None, None, None, Some(6.0)]);

    let d = diff(&one_column(), 3).unwrap();
    assert_eq!(cells(&d, "A"), vec![None, None, None, Some(3.0)]);
}

#[test]
fn diff_has_exactly_lag_warm_up_rows() {
    let levels = Table::from_columns([("A", (0..10).map(|i| (i * i) as f64).collect())]).unwrap();
    for lag in 1..=4 {
        let d = diff(&levels, lag).unwrap();
        for i in 0..d.n_rows() {
            assert_eq!(d.row_has_undefined(i), i < lag, "lag {lag} row {i}");
        }
        let a = levels.column("A").unwrap();
        for i in lag..d.n_rows() {
            assert_eq!(
                d.column("A").unwrap()[i],
                Some(a[i].unwrap() - a[i - lag].unwrap())
            );
        }
    }
}

#[test]
fn ln_diff_lag_one_known_values() {
    let d = ln_diff(&two_columns(), 1).unwrap();
    let a = cells(&d, "A");
    let b = cells(&d, "B");
    assert_eq!(a[0], None);
    assert_eq!(b[0], None);
    assert_relative_eq!(a[1].unwrap(), 2f64.ln() - 1f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(a[3].unwrap(), 4f64.ln() - 3f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(b[1].unwrap(), 6f64.ln() - 4f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(b[3].unwrap(), 10f64.ln() - 8f64.ln(), epsilon = 1e-12);
}

#[test]
fn ln_diff_lag_three_known_values() {
    let d = ln_diff(&two_columns(), 3).unwrap();
    assert_eq!(cells(&d, "A")[..3], [None::<f64>; 3]);
    assert_relative_eq!(cells(&d, "A")[3].unwrap(), 4f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(
        cells(&d, "B")[3].unwrap(),
        10f64.ln() - 4f64.ln(),
        epsilon = 1e-12
    );
}

#[test]
fn diff_inv_reconstructs_levels() {
    for levels in [two_columns(), one_column()] {
        for lag in [1, 3] {
            let d = diff(&levels, lag).unwrap();
            let seed = levels.head(lag);

            let rebuilt = diff_inv(&d, lag, &seed).unwrap();
            assert!(rebuilt.approx_eq(&levels, 1e-12), "lag {lag}");

            // Dropping the warm-up rows beforehand changes nothing.
            let trimmed = diff_inv(&d.drop_undefined_rows(), lag, &seed).unwrap();
            assert_eq!(trimmed, rebuilt);
        }
    }
}

#[test]
fn ln_diff_inv_reconstructs_levels() {
    for levels in [two_columns(), one_column()] {
        for lag in [1, 3] {
            let d = ln_diff(&levels, lag).unwrap();
            let seed = levels.head(lag);

            let rebuilt = ln_diff_inv(&d, lag, &seed).unwrap();
            assert!(rebuilt.approx_eq(&levels, 1e-12), "lag {lag}");

            let trimmed = ln_diff_inv(&d.drop_undefined_rows(), lag, &seed).unwrap();
            assert_eq!(trimmed, rebuilt);
        }
    }
}

#[test]
fn output_length_is_seed_plus_defined_rows() {
    let levels = two_columns();
    let d = diff(&levels, 1).unwrap();
    // A longer seed than needed: all of it is kept in front.
    let seed = Table::from_columns([("A", vec![-5.0, 1.0]), ("B", vec![-5.0, 4.0])]).unwrap();
    let rebuilt = diff_inv(&d, 1, &seed).unwrap();
    assert_eq!(rebuilt.n_rows(), seed.n_rows() + 3);
    assert_eq!(
        cells(&rebuilt, "A"),
        vec![Some(-5.0), Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
    );
}

#[test]
fn columns_are_independent() {
    let levels = Table::from_columns([
        ("up", vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0]),
        ("down", vec![100.0, 90.0, 85.0, 60.0, 61.0, 3.0]),
        ("flat", vec![7.0; 6]),
        ("alt", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]),
    ])
    .unwrap();

    for lag in 1..=3 {
        let d = diff(&levels, lag).unwrap();
        for name in ["up", "down", "flat", "alt"] {
            // Each column transformed alone gives the same cells.
            let alone = diff(&levels.select(&[name]).unwrap(), lag).unwrap();
            assert_eq!(cells(&d, name), cells(&alone, name));
        }
        let rebuilt = diff_inv(&d, lag, &levels.head(lag)).unwrap();
        assert!(rebuilt.approx_eq(&levels, 1e-9));
    }
}

#[test]
fn inputs_are_not_modified() {
    let levels = two_columns();
    let before = levels.clone();
    let d = diff(&levels, 1).unwrap();
    let d_before = d.clone();
    let seed = levels.head(1);
    diff_inv(&d, 1, &seed).unwrap();
    ln_diff_inv(&ln_diff(&levels, 1).unwrap(), 1, &seed).unwrap();
    assert_eq!(levels, before);
    assert_eq!(d, d_before);
    assert_eq!(seed, before.head(1));
}

#[test]
fn long_series_reconstructs_without_recursion_limits() {
    let n = 200_000;
    let levels =
        Table::from_columns([("A", (0..n).map(|i| (i % 97) as f64 + 1.0).collect())]).unwrap();
    let d = diff(&levels, 7).unwrap();
    let rebuilt = diff_inv(&d, 7, &levels.head(7)).unwrap();
    assert_eq!(rebuilt.n_rows(), n);
    assert!(rebuilt.approx_eq(&levels, 1e-6));
}
