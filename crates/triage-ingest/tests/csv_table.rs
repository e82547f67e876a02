//! Integration tests for CSV ingestion.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use triage_ingest::{IngestError, read_survey_table};
use triage_model::{CellValue, ColumnName, ModelError};

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn column(name: &str) -> ColumnName {
    ColumnName::new(name).expect("valid column name")
}

#[test]
fn reads_headers_and_typed_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "region,age\nnorth,34\nsouth,NA\n");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(table.columns, vec![column("region"), column("age")]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.cell(0, &column("age")),
        Some(&CellValue::Numeric {
            raw: "34".to_string(),
            value: 34.0
        })
    );
    assert_eq!(
        table.cell(1, &column("age")),
        Some(&CellValue::Text("NA".to_string()))
    );
    assert!(table.ensure_uniform().is_ok());
}

#[test]
fn preserves_raw_cell_content_without_trimming() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "answer\n\" NA \"\n");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(
        table.cell(0, &column("answer")),
        Some(&CellValue::Text(" NA ".to_string()))
    );
}

#[test]
fn empty_cells_become_empty_not_missing() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "lat,long\n,\n");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(table.cell(0, &column("lat")), Some(&CellValue::Empty));
    assert_eq!(table.cell(0, &column("long")), Some(&CellValue::Empty));
}

#[test]
fn strips_bom_from_first_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "\u{feff}region,age\nnorth,34\n");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(table.columns[0], column("region"));
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "city\n\"Rabat, Morocco\"\n");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(
        table.cell(0, &column("city")),
        Some(&CellValue::Text("Rabat, Morocco".to_string()))
    );
}

#[test]
fn ragged_row_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "region,age\nnorth\n");

    match read_survey_table(&path) {
        Err(IngestError::Csv { .. } | IngestError::Model(ModelError::ShapeMismatch { .. })) => {}
        other => panic!("expected ragged row rejection, got {other:?}"),
    }
}

#[test]
fn duplicate_header_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "age,age\n1,2\n");

    match read_survey_table(&path) {
        Err(IngestError::DuplicateColumn { column, .. }) => assert_eq!(column, "age"),
        other => panic!("expected duplicate column error, got {other:?}"),
    }
}

#[test]
fn blank_header_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "region,\nnorth,1\n");

    match read_survey_table(&path) {
        Err(IngestError::Model(ModelError::InvalidColumnName(_))) => {}
        other => panic!("expected invalid column name, got {other:?}"),
    }
}

#[test]
fn empty_file_yields_empty_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "survey.csv", "");

    let table = read_survey_table(&path).expect("read table");

    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("does-not-exist.csv");

    assert!(matches!(
        read_survey_table(&path),
        Err(IngestError::Csv { .. })
    ));
}
