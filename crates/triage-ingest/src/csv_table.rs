//! CSV ingestion.
//!
//! Cell contents are preserved byte-for-byte: no trimming, no type coercion
//! beyond per-cell typing through [`CellValue::from_raw`]. A literal `"NA"`
//! sitting in an otherwise numeric column therefore survives as text until
//! the cleaning stage decides what it means.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

use triage_model::{CellValue, ColumnName, ModelError, Record, Table};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("duplicate column {:?} in {}", .column, .path.display())]
    DuplicateColumn { path: PathBuf, column: String },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Read a delimited survey file into a [`Table`].
///
/// The header row defines the column names (a UTF-8 BOM on the first header
/// is stripped). Rows whose cell count differs from the header are rejected
/// here, before any downstream stage runs. An empty file yields an empty
/// table.
pub fn read_survey_table(path: &Path) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut columns = Vec::with_capacity(headers.len());
    let mut seen = BTreeSet::new();
    for (idx, header) in headers.iter().enumerate() {
        let name = if idx == 0 {
            header.trim_start_matches('\u{feff}')
        } else {
            header
        };
        let column = ColumnName::new(name)?;
        if !seen.insert(column.clone()) {
            return Err(IngestError::DuplicateColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
        columns.push(column);
    }

    let mut table = Table::new(columns);
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != table.column_count() {
            return Err(ModelError::ShapeMismatch {
                row: table.row_count(),
                expected: table.column_count(),
                found: record.len(),
            }
            .into());
        }
        let cells = table
            .columns
            .iter()
            .cloned()
            .zip(record.iter().map(CellValue::from_raw))
            .collect();
        table.push_row(Record::new(cells));
    }

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded survey table"
    );
    Ok(table)
}
