//! Column-major table of named numeric series.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Maps a raw float to a table cell: finite values are defined, NaN and
/// infinities are undefined.
pub(crate) fn defined(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// An ordered set of named numeric columns of equal length.
///
/// Rows are observations in time order, earliest first. Each cell is an
/// `Option<f64>`: `None` marks an undefined (missing) value, `Some(x)` always
/// holds a finite `x`.
///
/// # Example
///
/// ```
/// use modelselec_transform::Table;
///
/// let table = Table::from_columns([("A", vec![1.0, 2.0, f64::NAN])]).unwrap();
/// assert_eq!(table.n_rows(), 3);
/// assert_eq!(table.column("A").unwrap()[2], None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableDoc", into = "TableDoc")]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
}

/// Wire form of a [`Table`].
#[derive(Debug, Serialize, Deserialize)]
struct TableDoc {
    columns: Vec<ColumnDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ColumnDoc {
    name: String,
    values: Vec<Option<f64>>,
}

impl TryFrom<TableDoc> for Table {
    type Error = TransformError;

    fn try_from(doc: TableDoc) -> Result<Self, Self::Error> {
        let (names, columns): (Vec<String>, Vec<Vec<Option<f64>>>) = doc
            .columns
            .into_iter()
            .map(|c| (c.name, c.values))
            .unzip();
        Table::new(names, columns)
    }
}

impl From<Table> for TableDoc {
    fn from(table: Table) -> Self {
        TableDoc {
            columns: table
                .names
                .into_iter()
                .zip(table.columns)
                .map(|(name, values)| ColumnDoc { name, values })
                .collect(),
        }
    }
}

impl Table {
    /// Creates a table from column names and cell vectors.
    ///
    /// Non-finite `Some` cells are stored as undefined.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Validation`] if there are no columns, the
    /// name and column counts differ, a name is empty or repeated, or the
    /// columns have different lengths. All failures are reported together.
    pub fn new(
        names: Vec<String>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, TransformError> {
        let mut errors = Vec::new();

        if names.is_empty() && columns.is_empty() {
            errors.push("table has no columns".to_string());
        }
        if names.len() != columns.len() {
            errors.push(format!(
                "{} column name(s) for {} column(s)",
                names.len(),
                columns.len()
            ));
        }

        let mut seen = BTreeSet::new();
        for name in &names {
            if name.is_empty() {
                errors.push("empty column name".to_string());
            } else if !seen.insert(name.as_str()) {
                errors.push(format!("duplicate column '{name}'"));
            }
        }

        if let Some(expected) = columns.first().map(Vec::len) {
            for (name, col) in names.iter().zip(&columns) {
                if col.len() != expected {
                    errors.push(format!(
                        "column '{name}' has {} rows, expected {expected}",
                        col.len()
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(TransformError::Validation {
                count: errors.len(),
                details: errors.join("; "),
            });
        }

        let columns = columns
            .into_iter()
            .map(|col| col.into_iter().map(|c| c.and_then(defined)).collect())
            .collect();

        Ok(Self { names, columns })
    }

    /// Creates a table from `(name, values)` pairs of plain floats.
    ///
    /// NaN and infinite values become undefined cells.
    ///
    /// # Errors
    ///
    /// Same as [`Table::new`].
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TransformError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let (names, columns): (Vec<String>, Vec<Vec<Option<f64>>>) = columns
            .into_iter()
            .map(|(name, values)| {
                (
                    name.into(),
                    values.into_iter().map(defined).collect::<Vec<_>>(),
                )
            })
            .unzip();
        Self::new(names, columns)
    }

    /// Builds a table whose invariants the caller already guarantees.
    pub(crate) fn from_parts(names: Vec<String>, columns: Vec<Vec<Option<f64>>>) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        Self { names, columns }
    }

    /// Number of rows (observations).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns (series).
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Cells of the named column, or `None` if there is no such column.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Iterates over `(name, cells)` pairs in table order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Cells of row `i` in column order, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<Vec<Option<f64>>> {
        (i < self.n_rows()).then(|| self.columns.iter().map(|c| c[i]).collect())
    }

    /// Rows in `range`, clamped to the table bounds.
    pub fn slice(&self, range: Range<usize>) -> Table {
        let n = self.n_rows();
        let end = range.end.min(n);
        let start = range.start.min(end);
        Self::from_parts(
            self.names.clone(),
            self.columns.iter().map(|c| c[start..end].to_vec()).collect(),
        )
    }

    /// The first `n` rows (all rows if `n` exceeds the length).
    pub fn head(&self, n: usize) -> Table {
        self.slice(0..n)
    }

    /// The last `n` rows (all rows if `n` exceeds the length).
    pub fn tail(&self, n: usize) -> Table {
        let len = self.n_rows();
        self.slice(len.saturating_sub(n)..len)
    }

    /// Returns `true` if any cell of row `i` is undefined.
    ///
    /// Out-of-range rows are reported as undefined.
    pub fn row_has_undefined(&self, i: usize) -> bool {
        self.columns
            .iter()
            .any(|c| c.get(i).is_none_or(Option::is_none))
    }

    /// Returns `true` if any cell in the table is undefined.
    pub fn has_undefined(&self) -> bool {
        self.columns.iter().flatten().any(Option::is_none)
    }

    /// Returns a copy without the rows that hold any undefined cell.
    ///
    /// Row order is preserved and the result is indexed from 0.
    pub fn drop_undefined_rows(&self) -> Table {
        let keep: Vec<usize> = (0..self.n_rows())
            .filter(|&i| !self.row_has_undefined(i))
            .collect();
        Self::from_parts(
            self.names.clone(),
            self.columns
                .iter()
                .map(|c| keep.iter().map(|&i| c[i]).collect())
                .collect(),
        )
    }

    /// Applies `f` to every defined cell. Non-finite results become undefined.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Table {
        Self::from_parts(
            self.names.clone(),
            self.columns
                .iter()
                .map(|c| c.iter().map(|v| v.map(&f).and_then(defined)).collect())
                .collect(),
        )
    }

    /// Returns the named columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MissingColumn`] for the first absent name.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TransformError> {
        let mut out_names = Vec::with_capacity(names.len());
        let mut out_cols = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let col = self
                .column(name)
                .ok_or_else(|| TransformError::MissingColumn {
                    name: name.to_string(),
                })?;
            out_names.push(name.to_string());
            out_cols.push(col.to_vec());
        }
        Table::new(out_names, out_cols)
    }

    /// Returns `true` if both tables carry the same set of column names,
    /// regardless of order.
    pub fn same_columns(&self, other: &Table) -> bool {
        let a: BTreeSet<&str> = self.names.iter().map(String::as_str).collect();
        let b: BTreeSet<&str> = other.names.iter().map(String::as_str).collect();
        a == b
    }

    /// Compares two tables cell by cell.
    ///
    /// Column names and order must match, undefined cells must coincide, and
    /// defined cells must differ by at most `tol`.
    pub fn approx_eq(&self, other: &Table, tol: f64) -> bool {
        self.names == other.names
            && self.n_rows() == other.n_rows()
            && self
                .columns
                .iter()
                .flatten()
                .zip(other.columns.iter().flatten())
                .all(|(a, b)| match (a, b) {
                    (Some(x), Some(y)) => (x - y).abs() <= tol,
                    (None, None) => true,
                    _ => false,
                })
    }

    /// Rows of `self` followed by rows of `other`, matched by column name.
    ///
    /// `other` must carry the same columns as `self`.
    pub(crate) fn append_rows(&self, other: &Table) -> Table {
        let columns = self
            .names
            .iter()
            .zip(&self.columns)
            .map(|(name, col)| {
                let mut out = col.clone();
                out.extend_from_slice(other.column(name).unwrap_or_default());
                out
            })
            .collect();
        Self::from_parts(self.names.clone(), columns)
    }

    pub(crate) fn raw_columns(&self) -> &[Vec<Option<f64>>] {
        &self.columns
    }
}
