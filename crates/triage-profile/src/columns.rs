use std::collections::{BTreeMap, BTreeSet};

use triage_model::{CellValue, ColumnName, Result, Table};

/// Shape of one column's content after normalization.
///
/// `numeric` and `unique_ratio` consider only valued cells (text or numeric);
/// empties are counted separately so that columns hiding blank-string
/// encodings stand out in the triage output.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnProfile {
    pub present: usize,
    pub empty: usize,
    pub missing: usize,
    pub missing_ratio: f64,
    pub numeric: bool,
    pub unique_ratio: f64,
}

/// Profile every column of the table.
pub fn profile_columns(table: &Table) -> Result<BTreeMap<ColumnName, ColumnProfile>> {
    table.ensure_uniform()?;

    let row_count = table.row_count();
    let mut profiles = BTreeMap::new();
    for column in &table.columns {
        let mut missing = 0usize;
        let mut empty = 0usize;
        let mut valued = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for record in &table.rows {
            match record.cell(column) {
                Some(CellValue::Missing) => missing += 1,
                Some(CellValue::Empty) => empty += 1,
                Some(CellValue::Numeric { raw, .. }) => {
                    valued += 1;
                    numeric += 1;
                    uniques.insert(raw.as_str());
                }
                Some(CellValue::Text(text)) => {
                    valued += 1;
                    uniques.insert(text.as_str());
                }
                None => {}
            }
        }
        let missing_ratio = if row_count == 0 {
            0.0
        } else {
            missing as f64 / row_count as f64
        };
        let unique_ratio = if valued == 0 {
            0.0
        } else {
            uniques.len() as f64 / valued as f64
        };
        profiles.insert(
            column.clone(),
            ColumnProfile {
                present: row_count - missing,
                empty,
                missing,
                missing_ratio,
                numeric: valued > 0 && numeric == valued,
                unique_ratio,
            },
        );
    }
    Ok(profiles)
}
