//! JSON table documents on disk or stdout.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use modelselec_transform::{RawTable, Table, TableSchema};

/// Reads a raw JSON table and coerces it to a numeric [`Table`].
pub fn read_table(path: &Path, schema: &TableSchema) -> Result<Table> {
    info!(path = %path.display(), "reading table");
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table: {}", path.display()))?;
    let raw: RawTable = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse table JSON: {}", path.display()))?;
    let table = raw
        .coerce(schema)
        .with_context(|| format!("failed to coerce table: {}", path.display()))?;
    info!(
        n_rows = table.n_rows(),
        n_columns = table.n_columns(),
        "table loaded"
    );
    Ok(table)
}

/// Writes `table` as pretty-printed JSON to `path`, or to stdout if `None`.
pub fn write_table(table: &Table, path: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(table).context("failed to serialize table")?;
    json.push('\n');
    match path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write table: {}", path.display()))?;
            info!(path = %path.display(), n_rows = table.n_rows(), "table written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write table to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_coerces_strings_and_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        std::fs::write(
            &path,
            r#"{"columns":[{"name":"A","values":[1, "2.5", null]},{"name":"site","values":["x","y","z"]}]}"#,
        )
        .unwrap();

        let table = read_table(&path, &TableSchema::numeric(["A"])).unwrap();
        assert_eq!(table.column_names(), ["A"]);
        assert_eq!(table.column("A").unwrap(), [Some(1.0), Some(2.5), None]);

        let err = read_table(&path, &TableSchema::AllNumeric).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to coerce table"));
        assert!(msg.contains("site"));
    }

    #[test]
    fn test_read_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_table(&path, &TableSchema::AllNumeric).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse table JSON"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let table = Table::from_columns([("A", vec![f64::NAN, 1.0])]).unwrap();
        write_table(&table, Some(&path)).unwrap();
        assert_eq!(read_table(&path, &TableSchema::AllNumeric).unwrap(), table);
    }
}
