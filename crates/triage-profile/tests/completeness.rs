//! Integration tests for completeness analysis and column profiling.

use std::collections::BTreeMap;

use triage_model::{CellValue, ColumnName, ModelError, Record, Table};
use triage_profile::{analyze_completeness, profile_columns};

fn column(name: &str) -> ColumnName {
    ColumnName::new(name).expect("valid column name")
}

/// Build a table where `None` stands for a normalized `Missing` cell.
fn table_of(columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
    let columns: Vec<ColumnName> = columns.iter().map(|name| column(name)).collect();
    let mut table = Table::new(columns.clone());
    for row in rows {
        let cells: BTreeMap<ColumnName, CellValue> = columns
            .iter()
            .cloned()
            .zip(row.iter().map(|raw| match raw {
                Some(raw) => CellValue::from_raw(raw),
                None => CellValue::Missing,
            }))
            .collect();
        table.push_row(Record::new(cells));
    }
    table
}

#[test]
fn counts_complete_records_and_positions() {
    // First two records fully populated, last three each missing one cell.
    let table = table_of(
        &["a", "b"],
        &[
            &[Some("1"), Some("x")],
            &[Some("2"), Some("y")],
            &[None, Some("z")],
            &[Some("4"), None],
            &[None, Some("w")],
        ],
    );
    let profile = analyze_completeness(&table).expect("analyze");

    assert_eq!(profile.flags, vec![true, true, false, false, false]);
    assert_eq!(profile.summary.total_records, 5);
    assert_eq!(profile.summary.complete_count, 2);
    assert!((profile.summary.complete_fraction - 0.4).abs() < f64::EPSILON);
    assert_eq!(profile.summary.complete_row_indices, vec![0, 1]);
}

#[test]
fn empty_cells_count_as_present() {
    let table = table_of(&["a", "b"], &[&[Some(""), Some("5")]]);
    let profile = analyze_completeness(&table).expect("analyze");

    assert_eq!(profile.flags, vec![true]);
    assert_eq!(profile.summary.complete_count, 1);
}

#[test]
fn missing_record_is_incomplete() {
    let table = table_of(&["a", "b"], &[&[None, Some("5")]]);
    let profile = analyze_completeness(&table).expect("analyze");

    assert_eq!(profile.flags, vec![false]);
    assert_eq!(profile.summary.complete_count, 0);
    assert!(profile.summary.complete_row_indices.is_empty());
}

#[test]
fn empty_table_yields_zero_fraction_without_error() {
    let table = table_of(&["a"], &[]);
    let profile = analyze_completeness(&table).expect("analyze");

    assert_eq!(profile.summary.total_records, 0);
    assert_eq!(profile.summary.complete_count, 0);
    assert_eq!(profile.summary.complete_fraction, 0.0);
    assert!(profile.summary.complete_row_indices.is_empty());
    assert!(profile.flags.is_empty());
}

#[test]
fn indices_preserve_original_order() {
    let table = table_of(
        &["a"],
        &[
            &[Some("1")],
            &[None],
            &[Some("3")],
            &[None],
            &[Some("5")],
        ],
    );
    let profile = analyze_completeness(&table).expect("analyze");

    assert_eq!(profile.summary.complete_row_indices, vec![0, 2, 4]);
}

#[test]
fn malformed_table_fails_loudly() {
    let mut table = table_of(&["a", "b"], &[]);
    let mut cells = BTreeMap::new();
    cells.insert(column("a"), CellValue::from_raw("1"));
    table.push_row(Record::new(cells));

    assert!(matches!(
        analyze_completeness(&table),
        Err(ModelError::ShapeMismatch { row: 0, .. })
    ));
}

#[test]
fn column_profiles_count_missing_and_empty() {
    let table = table_of(
        &["lat", "name"],
        &[
            &[Some("33.5"), Some("amal")],
            &[Some(""), Some("sara")],
            &[None, Some("")],
            &[Some("34.0"), None],
        ],
    );
    let profiles = profile_columns(&table).expect("profile");

    let lat = &profiles[&column("lat")];
    assert_eq!(lat.missing, 1);
    assert_eq!(lat.empty, 1);
    assert_eq!(lat.present, 3);
    assert!((lat.missing_ratio - 0.25).abs() < f64::EPSILON);
    assert!(lat.numeric);

    let name = &profiles[&column("name")];
    assert_eq!(name.missing, 1);
    assert_eq!(name.empty, 1);
    assert!(!name.numeric);
}

#[test]
fn column_profile_unique_ratio_ignores_empty_and_missing() {
    let table = table_of(
        &["answer"],
        &[
            &[Some("yes")],
            &[Some("yes")],
            &[Some("no")],
            &[Some("no")],
            &[Some("")],
            &[None],
        ],
    );
    let profiles = profile_columns(&table).expect("profile");

    let answer = &profiles[&column("answer")];
    assert!((answer.unique_ratio - 0.5).abs() < f64::EPSILON);
}

#[test]
fn column_profiles_on_empty_table_are_well_defined() {
    let table = table_of(&["a"], &[]);
    let profiles = profile_columns(&table).expect("profile");

    let a = &profiles[&column("a")];
    assert_eq!(a.present, 0);
    assert_eq!(a.missing_ratio, 0.0);
    assert_eq!(a.unique_ratio, 0.0);
    assert!(!a.numeric);
}
