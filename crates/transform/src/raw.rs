//! Untyped input tables and schema-driven numeric coercion.

use serde::Deserialize;

use crate::error::TransformError;
use crate::table::{Table, defined};

/// A single cell as read from an untyped source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// A number.
    Number(f64),
    /// A boolean, read as 1.0 or 0.0.
    Bool(bool),
    /// Free text, possibly holding a number.
    Text(String),
    /// An explicit null.
    Missing,
    /// Any other value, such as an array or an object. Never numeric.
    Other(serde_json::Value),
}

/// A named column of raw cells.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawColumn {
    /// Column name.
    pub name: String,
    /// Cells in row order.
    pub values: Vec<RawCell>,
}

/// An untyped table, read before the numeric schema is applied.
///
/// Deserialises from the same document layout as [`Table`], but cells may
/// also be strings, booleans or any other JSON value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTable {
    /// Columns in source order.
    pub columns: Vec<RawColumn>,
}

/// Declares which columns of a [`RawTable`] are numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TableSchema {
    /// Every column is numeric, kept in source order.
    #[default]
    AllNumeric,
    /// Only the listed columns, in the listed order.
    Numeric(Vec<String>),
}

impl TableSchema {
    /// Schema selecting the given columns.
    pub fn numeric<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableSchema::Numeric(names.into_iter().map(Into::into).collect())
    }
}

impl RawTable {
    /// Converts the columns the schema declares numeric into a [`Table`].
    ///
    /// Numbers pass through, nulls become undefined, and text is trimmed and
    /// parsed as `f64` (`"nan"` and `"inf"` parse and become undefined).
    ///
    /// # Errors
    ///
    /// - [`TransformError::MissingColumn`] if a declared column is absent.
    /// - [`TransformError::TypeConversion`] on the first text cell that does
    ///   not parse.
    /// - [`TransformError::Validation`] if the selected columns do not form a
    ///   valid table.
    pub fn coerce(&self, schema: &TableSchema) -> Result<Table, TransformError> {
        let selected: Vec<&RawColumn> = match schema {
            TableSchema::AllNumeric => self.columns.iter().collect(),
            TableSchema::Numeric(names) => names
                .iter()
                .map(|name| {
                    self.columns
                        .iter()
                        .find(|c| &c.name == name)
                        .ok_or_else(|| TransformError::MissingColumn { name: name.clone() })
                })
                .collect::<Result<_, _>>()?,
        };

        let mut names = Vec::with_capacity(selected.len());
        let mut columns = Vec::with_capacity(selected.len());
        for col in selected {
            let cells = col
                .values
                .iter()
                .enumerate()
                .map(|(row, cell)| coerce_cell(cell, &col.name, row))
                .collect::<Result<Vec<_>, _>>()?;
            names.push(col.name.clone());
            columns.push(cells);
        }

        Table::new(names, columns)
    }
}

fn coerce_cell(cell: &RawCell, column: &str, row: usize) -> Result<Option<f64>, TransformError> {
    match cell {
        RawCell::Number(x) => Ok(defined(*x)),
        RawCell::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        RawCell::Missing => Ok(None),
        RawCell::Other(v) => Err(TransformError::TypeConversion {
            column: column.to_string(),
            row,
            value: v.to_string(),
        }),
        RawCell::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(defined)
            .map_err(|_| TransformError::TypeConversion {
                column: column.to_string(),
                row,
                value: s.clone(),
            }),
    }
}
