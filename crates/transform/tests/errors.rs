//! Integration tests for TransformError variants.

use modelselec_transform::{
    EmptyReconstruction, LogDomain, RawTable, Table, TableSchema, TransformConfig,
    TransformError, diff, diff_inv, diff_inv_with, ln_diff_inv, ln_diff_with,
};

fn levels() -> Table {
    Table::from_columns([("A", vec![1.0, 2.0, 3.0, 4.0]), ("B", vec![4.0, 6.0, 8.0, 10.0])])
        .unwrap()
}

#[test]
fn error_insufficient_history_regardless_of_diff_contents() {
    let seeds = [levels().head(0), levels().head(1), levels().head(2)];
    let diffs = [
        diff(&levels(), 3).unwrap(),
        diff(&levels(), 3).unwrap().drop_undefined_rows(),
        Table::from_columns([("A", vec![f64::NAN; 3]), ("B", vec![f64::NAN; 3])]).unwrap(),
        Table::from_columns([("other", vec![1.0])]).unwrap(),
    ];

    for seed in &seeds {
        for d in &diffs {
            let expected = TransformError::InsufficientHistory {
                lag: 3,
                seed_rows: seed.n_rows(),
            };
            assert_eq!(diff_inv(d, 3, seed).unwrap_err(), expected);
            assert_eq!(ln_diff_inv(d, 3, seed).unwrap_err(), expected);
        }
    }
}

#[test]
fn error_invalid_lag() {
    assert!(matches!(
        diff(&levels(), 0),
        Err(TransformError::InvalidLag { lag: 0 })
    ));
    assert!(matches!(
        diff_inv(&levels(), 0, &levels()),
        Err(TransformError::InvalidLag { lag: 0 })
    ));
}

#[test]
fn error_empty_reconstruction_for_single_row_levels() {
    // A single-row level table differenced at lag 1 has nothing to invert.
    let single = levels().head(1);
    let d = diff(&single, 1).unwrap();
    assert_eq!(
        diff_inv(&d, 1, &single).unwrap_err(),
        TransformError::EmptyReconstruction
    );

    let config =
        TransformConfig::default().with_empty_reconstruction(EmptyReconstruction::ReturnSeed);
    assert_eq!(diff_inv_with(&d, 1, &single, &config).unwrap(), single);
}

#[test]
fn error_column_mismatch() {
    let d = diff(&levels(), 1).unwrap();
    let seed = Table::from_columns([("A", vec![1.0])]).unwrap();
    match diff_inv(&d, 1, &seed) {
        Err(TransformError::ColumnMismatch { expected, got }) => {
            assert_eq!(expected, vec!["A".to_string()]);
            assert_eq!(got, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("expected ColumnMismatch, got {other:?}"),
    }
}

#[test]
fn error_log_domain_strict() {
    let t = Table::from_columns([("A", vec![1.0, 2.0, 0.0])]).unwrap();
    let config = TransformConfig::default().with_log_domain(LogDomain::Strict);
    assert_eq!(
        ln_diff_with(&t, 1, &config).unwrap_err(),
        TransformError::LogDomain {
            column: "A".to_string(),
            row: 2,
            value: 0.0,
        }
    );
}

#[test]
fn error_type_conversion_at_boundary() {
    let raw: RawTable = serde_json::from_str(
        r#"{"columns":[{"name":"A","values":[1, 2]},{"name":"B","values":["3", "four"]}]}"#,
    )
    .unwrap();
    assert_eq!(
        raw.coerce(&TableSchema::AllNumeric).unwrap_err(),
        TransformError::TypeConversion {
            column: "B".to_string(),
            row: 1,
            value: "four".to_string(),
        }
    );
    // Declaring only the numeric column sidesteps the text one.
    let table = raw.coerce(&TableSchema::numeric(["A"])).unwrap();
    assert_eq!(table.column("A").unwrap(), [Some(1.0), Some(2.0)]);
}
