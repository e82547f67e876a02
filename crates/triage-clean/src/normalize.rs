use std::collections::BTreeMap;

use tracing::{debug, trace};

use triage_model::{CellValue, ColumnName, Result, Table};

use crate::MissingValueRules;

/// Result of one normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationOutcome {
    /// The rewritten table. The input is never mutated.
    pub table: Table,
    /// Exact count of cells whose tag changed to `Missing`.
    pub cells_changed: usize,
    /// Change counts attributed to the columns they occurred in.
    pub changed_by_column: BTreeMap<ColumnName, usize>,
}

impl NormalizationOutcome {
    /// False when the rule set matched nothing. On a non-empty dataset this
    /// usually means the configured tokens do not match the data's actual
    /// encoding, so callers are expected to check it and warn.
    pub fn had_effect(&self) -> bool {
        self.cells_changed > 0
    }
}

/// Rewrite every cell whose raw form matches `rules` into the canonical
/// `Missing` marker.
///
/// Cells that are already `Missing` pass through untouched, so running the
/// pass twice changes nothing. The scan is per-cell and order-independent.
pub fn normalize_missing(table: &Table, rules: &MissingValueRules) -> Result<NormalizationOutcome> {
    table.ensure_uniform()?;

    let mut normalized = table.clone();
    let mut cells_changed = 0usize;
    let mut changed_by_column: BTreeMap<ColumnName, usize> = BTreeMap::new();

    for (row, record) in normalized.rows.iter_mut().enumerate() {
        for (column, cell) in record.cells.iter_mut() {
            let matched = cell.raw_form().is_some_and(|raw| rules.matches(raw));
            if matched {
                *cell = CellValue::Missing;
                cells_changed += 1;
                *changed_by_column.entry(column.clone()).or_insert(0) += 1;
                trace!(row, column = %column, "cell marked missing");
            }
        }
    }

    debug!(
        rows = normalized.row_count(),
        cells_changed, "normalized missing values"
    );
    Ok(NormalizationOutcome {
        table: normalized,
        cells_changed,
        changed_by_column,
    })
}
