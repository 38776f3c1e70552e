//! Forward transforms: lagged difference and lagged log-difference.

use tracing::debug;

use crate::config::{LogDomain, TransformConfig};
use crate::error::TransformError;
use crate::table::{Table, defined};

/// Rejects a zero lag.
pub(crate) fn validate_lag(lag: usize) -> Result<(), TransformError> {
    if lag == 0 {
        return Err(TransformError::InvalidLag { lag });
    }
    Ok(())
}

/// Lag-`lag` difference of a single column.
///
/// The first `lag` cells are undefined, as is any cell whose window holds an
/// undefined value.
pub(crate) fn lagged_difference(values: &[Option<f64>], lag: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i < lag {
                return None;
            }
            match (values[i], values[i - lag]) {
                (Some(now), Some(before)) => defined(now - before),
                _ => None,
            }
        })
        .collect()
}

fn difference(table: &Table, lag: usize) -> Table {
    let columns = table
        .raw_columns()
        .iter()
        .map(|col| lagged_difference(col, lag))
        .collect();
    Table::from_parts(table.column_names().to_vec(), columns)
}

/// Natural logarithm of every cell under the given domain policy.
pub(crate) fn log_table(table: &Table, policy: LogDomain) -> Result<Table, TransformError> {
    let mut non_positive = 0usize;
    for (name, col) in table.columns() {
        for (row, value) in col.iter().enumerate() {
            if let Some(x) = value.filter(|x| *x <= 0.0) {
                if policy == LogDomain::Strict {
                    return Err(TransformError::LogDomain {
                        column: name.to_string(),
                        row,
                        value: x,
                    });
                }
                non_positive += 1;
            }
        }
    }
    if non_positive > 0 {
        debug!(non_positive, "non-positive values left undefined by logarithm");
    }
    Ok(table.map_values(f64::ln))
}

/// Lag-`lag` difference of every column: `out[i] = table[i] - table[i - lag]`.
///
/// The output has the same shape and column names as `table`; its first
/// `lag` rows are undefined. When `lag >= table.n_rows()` every row is
/// undefined.
///
/// # Errors
///
/// Returns [`TransformError::InvalidLag`] if `lag` is zero.
///
/// # Example
///
/// ```
/// use modelselec_transform::{Table, diff};
///
/// let levels = Table::from_columns([("A", vec![1.0, 2.0, 4.0])]).unwrap();
/// let diffed = diff(&levels, 1).unwrap();
/// assert_eq!(diffed.column("A").unwrap(), [None, Some(1.0), Some(2.0)]);
/// ```
pub fn diff(table: &Table, lag: usize) -> Result<Table, TransformError> {
    validate_lag(lag)?;
    Ok(difference(table, lag))
}

/// Lag-`lag` log-difference of every column with the default configuration:
/// `out[i] = ln(table[i]) - ln(table[i - lag])`.
///
/// Non-positive values are left undefined (see [`LogDomain::Propagate`]).
///
/// # Errors
///
/// Returns [`TransformError::InvalidLag`] if `lag` is zero.
pub fn ln_diff(table: &Table, lag: usize) -> Result<Table, TransformError> {
    ln_diff_with(table, lag, &TransformConfig::default())
}

/// Lag-`lag` log-difference of every column.
///
/// # Errors
///
/// Returns [`TransformError::InvalidLag`] if `lag` is zero, or
/// [`TransformError::LogDomain`] under [`LogDomain::Strict`] if any defined
/// value is not strictly positive.
pub fn ln_diff_with(
    table: &Table,
    lag: usize,
    config: &TransformConfig,
) -> Result<Table, TransformError> {
    validate_lag(lag)?;
    let logged = log_table(table, config.log_domain())?;
    Ok(difference(&logged, lag))
}
