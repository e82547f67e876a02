use tracing::debug;

use triage_model::{Result, Table};

/// Aggregate completeness counts for one table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompletenessSummary {
    pub total_records: usize,
    pub complete_count: usize,
    /// `complete_count / total_records`, defined as `0.0` for an empty table.
    pub complete_fraction: f64,
    /// 0-based positions of complete records, in original row order.
    pub complete_row_indices: Vec<usize>,
}

/// Per-record completeness flags plus their aggregate summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessProfile {
    /// One flag per record, same length and order as the source table.
    pub flags: Vec<bool>,
    pub summary: CompletenessSummary,
}

/// Compute which records contain no `Missing` cell.
///
/// Completeness is defined purely in terms of the canonical marker: `Empty`
/// and every other non-`Missing` value count as present. Semantically empty
/// values only affect completeness once the cleaning stage has rewritten
/// them.
pub fn analyze_completeness(table: &Table) -> Result<CompletenessProfile> {
    table.ensure_uniform()?;

    let mut flags = Vec::with_capacity(table.row_count());
    let mut complete_row_indices = Vec::new();
    for (idx, record) in table.rows.iter().enumerate() {
        let complete = record.cells.values().all(|cell| !cell.is_missing());
        if complete {
            complete_row_indices.push(idx);
        }
        flags.push(complete);
    }

    let total_records = table.row_count();
    let complete_count = complete_row_indices.len();
    let complete_fraction = if total_records == 0 {
        0.0
    } else {
        complete_count as f64 / total_records as f64
    };
    debug!(
        total_records,
        complete_count, "analyzed record completeness"
    );
    Ok(CompletenessProfile {
        flags,
        summary: CompletenessSummary {
            total_records,
            complete_count,
            complete_fraction,
            complete_row_indices,
        },
    })
}
