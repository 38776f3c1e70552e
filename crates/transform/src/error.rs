//! Error types for the modelselec-transform crate.

/// Error type for all fallible operations in the modelselec-transform crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// Returned when the lag is zero.
    #[error("lag must be >= 1, got {lag}")]
    InvalidLag {
        /// The invalid lag value.
        lag: usize,
    },

    /// Returned when the seed table holds fewer rows than the lag.
    #[error(
        "seed has {seed_rows} row(s) but at least {lag} prior observation(s) are needed to invert a lag-{lag} difference"
    )]
    InsufficientHistory {
        /// Lag of the difference being inverted.
        lag: usize,
        /// Number of rows in the seed table.
        seed_rows: usize,
    },

    /// Returned when a cell cannot be coerced to a floating-point number.
    #[error("column '{column}' row {row}: cannot convert {value:?} to f64")]
    TypeConversion {
        /// Column holding the offending cell.
        column: String,
        /// Zero-based row of the offending cell.
        row: usize,
        /// The raw cell text.
        value: String,
    },

    /// Returned when no differenced rows remain after dropping undefined rows.
    #[error("differenced table has no fully defined rows to reconstruct")]
    EmptyReconstruction,

    /// Returned when two tables that must share columns do not.
    #[error("column mismatch: expected {expected:?}, got {got:?}")]
    ColumnMismatch {
        /// Column names of the reference table.
        expected: Vec<String>,
        /// Column names of the table being checked.
        got: Vec<String>,
    },

    /// Returned when a column declared in the schema is absent.
    #[error("column '{name}' not found")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned in strict log mode when a value is not strictly positive.
    #[error("column '{column}' row {row}: logarithm undefined for {value}")]
    LogDomain {
        /// Column holding the offending value.
        column: String,
        /// Zero-based row of the offending value.
        row: usize,
        /// The non-positive value.
        value: f64,
    },

    /// Returned when a transform tag is not recognised.
    #[error("unknown transform {name:?}: expected one of \"lvl\", \"diff\", \"diffln\"")]
    UnknownTransform {
        /// The unrecognised tag.
        name: String,
    },

    /// One or more table construction checks failed.
    #[error("{count} validation error(s): {details}")]
    Validation { count: usize, details: String },
}
