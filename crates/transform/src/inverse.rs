//! Inverse transforms: rebuild levels from differences and seed history.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::{EmptyReconstruction, TransformConfig};
use crate::error::TransformError;
use crate::forward::{log_table, validate_lag};
use crate::table::{Table, defined};

/// The `lag` most recent level rows, oldest first.
///
/// Reconstructing a lag-`lag` difference only ever needs the level exactly
/// `lag` rows back, which is always the front of this window.
#[derive(Debug)]
struct LagWindow {
    rows: VecDeque<Vec<Option<f64>>>,
}

impl LagWindow {
    /// Fills the window from the last `lag` rows of `history`.
    fn seeded(history: &[Vec<Option<f64>>], lag: usize) -> Self {
        let n = history.first().map_or(0, Vec::len);
        let rows = (n - lag..n)
            .map(|i| history.iter().map(|col| col[i]).collect())
            .collect();
        Self { rows }
    }

    /// Level row `lag` periods before the row about to be reconstructed.
    fn base(&self) -> &[Option<f64>] {
        &self.rows[0]
    }

    /// Drops the oldest row and appends `row` as the most recent one.
    fn slide(&mut self, row: Vec<Option<f64>>) {
        self.rows.pop_front();
        self.rows.push_back(row);
    }
}

/// Checks the preconditions shared by both inverses, before any work is done.
fn check_history(lag: usize, seed: &Table) -> Result<(), TransformError> {
    validate_lag(lag)?;
    if seed.n_rows() < lag {
        return Err(TransformError::InsufficientHistory {
            lag,
            seed_rows: seed.n_rows(),
        });
    }
    Ok(())
}

fn reconstruct(
    table_diff: &Table,
    lag: usize,
    seed: &Table,
    config: &TransformConfig,
) -> Result<Table, TransformError> {
    if !table_diff.same_columns(seed) {
        return Err(TransformError::ColumnMismatch {
            expected: seed.column_names().to_vec(),
            got: table_diff.column_names().to_vec(),
        });
    }

    // Align to the seed's column order, then drop warm-up and gap rows.
    let steps = table_diff
        .select(seed.column_names())?
        .drop_undefined_rows();
    let dropped = table_diff.n_rows() - steps.n_rows();
    if dropped > 0 {
        debug!(dropped, "dropped differenced rows holding undefined values");
    }

    if steps.is_empty() {
        return match config.empty_reconstruction() {
            EmptyReconstruction::Error => Err(TransformError::EmptyReconstruction),
            EmptyReconstruction::ReturnSeed => {
                debug!("nothing to reconstruct, returning seed");
                Ok(seed.clone())
            }
        };
    }

    let n_total = seed.n_rows() + steps.n_rows();
    let mut history: Vec<Vec<Option<f64>>> = seed
        .raw_columns()
        .iter()
        .map(|col| {
            let mut out = Vec::with_capacity(n_total);
            out.extend_from_slice(col);
            out
        })
        .collect();

    let mut window = LagWindow::seeded(&history, lag);
    for i in 0..steps.n_rows() {
        let row: Vec<Option<f64>> = steps
            .raw_columns()
            .iter()
            .zip(window.base())
            .map(|(delta, base)| match (delta[i], *base) {
                (Some(d), Some(b)) => defined(d + b),
                _ => None,
            })
            .collect();
        for (col, value) in history.iter_mut().zip(&row) {
            col.push(*value);
        }
        window.slide(row);
    }

    Ok(Table::from_parts(seed.column_names().to_vec(), history))
}

/// Inverse of [`diff`](crate::diff) with the default configuration.
///
/// Rebuilds levels from `table_diff` (lag-`lag` differences) and `seed`, the
/// level observations immediately preceding the first differenced row. Rows
/// of `table_diff` holding any undefined cell, such as the warm-up rows
/// produced by [`diff`](crate::diff), are dropped first.
///
/// Returns the seed rows followed by one reconstructed row per remaining
/// differenced row, in time order, with the seed's column order.
///
/// # Errors
///
/// - [`TransformError::InvalidLag`] if `lag` is zero.
/// - [`TransformError::InsufficientHistory`] if `seed` has fewer than `lag`
///   rows.
/// - [`TransformError::ColumnMismatch`] if the tables carry different columns.
/// - [`TransformError::EmptyReconstruction`] if no fully defined
///   differenced rows remain.
///
/// # Example
///
/// ```
/// use modelselec_transform::{Table, diff, diff_inv};
///
/// let levels = Table::from_columns([("A", vec![1.0, 2.0, 4.0, 7.0])]).unwrap();
/// let diffed = diff(&levels, 1).unwrap();
/// let rebuilt = diff_inv(&diffed, 1, &levels.head(1)).unwrap();
/// assert_eq!(rebuilt, levels);
/// ```
pub fn diff_inv(table_diff: &Table, lag: usize, seed: &Table) -> Result<Table, TransformError> {
    diff_inv_with(table_diff, lag, seed, &TransformConfig::default())
}

/// Inverse of [`diff`](crate::diff).
///
/// See [`diff_inv`]; `config` selects the empty-reconstruction policy.
///
/// # Errors
///
/// As [`diff_inv`], except that [`EmptyReconstruction::ReturnSeed`] returns
/// the seed instead of failing.
#[tracing::instrument(skip_all, fields(lag = lag, diff_rows = table_diff.n_rows(), seed_rows = seed.n_rows()))]
pub fn diff_inv_with(
    table_diff: &Table,
    lag: usize,
    seed: &Table,
    config: &TransformConfig,
) -> Result<Table, TransformError> {
    check_history(lag, seed)?;
    reconstruct(table_diff, lag, seed, config)
}

/// Inverse of [`ln_diff`](crate::ln_diff) with the default configuration.
///
/// Takes the logarithm of `seed`, rebuilds log-levels from `table_diff`
/// exactly as [`diff_inv`] does, and exponentiates the reconstructed rows.
/// The seed rows at the front of the output are copied from `seed`.
///
/// # Errors
///
/// As [`diff_inv`].
pub fn ln_diff_inv(table_diff: &Table, lag: usize, seed: &Table) -> Result<Table, TransformError> {
    ln_diff_inv_with(table_diff, lag, seed, &TransformConfig::default())
}

/// Inverse of [`ln_diff`](crate::ln_diff).
///
/// # Errors
///
/// As [`diff_inv_with`], plus [`TransformError::LogDomain`] under
/// [`LogDomain::Strict`](crate::LogDomain::Strict) if a seed value is not
/// strictly positive.
#[tracing::instrument(skip_all, fields(lag = lag, diff_rows = table_diff.n_rows(), seed_rows = seed.n_rows()))]
pub fn ln_diff_inv_with(
    table_diff: &Table,
    lag: usize,
    seed: &Table,
    config: &TransformConfig,
) -> Result<Table, TransformError> {
    check_history(lag, seed)?;
    let log_seed = log_table(seed, config.log_domain())?;
    let log_levels = reconstruct(table_diff, lag, &log_seed, config)?;
    // Seed rows are returned as given, not as exp(ln(seed)).
    let rebuilt = log_levels
        .slice(seed.n_rows()..log_levels.n_rows())
        .map_values(f64::exp);
    Ok(seed.append_rows(&rebuilt))
}
