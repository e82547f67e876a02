//! Plot- and machine-ready output structures.

use std::collections::BTreeMap;

use triage_clean::{MissingValueRules, NormalizationOutcome};
use triage_model::ColumnName;
use triage_profile::{ColumnProfile, CompletenessProfile};

/// One (row, isComplete) pair, suitable for a scatter/strip rendering of
/// where complete records sit in the original row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletenessPoint {
    pub row: usize,
    pub complete: bool,
}

/// Everything one triage run learned about a dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DatasetReport {
    pub dataset: String,
    /// Effective missing-value tokens, in sorted order.
    pub rules: Vec<String>,
    pub cells_changed: usize,
    /// True when normalization changed nothing. On a non-empty dataset this
    /// is an advisory signal that the rule set missed the data's encoding.
    pub zero_effect: bool,
    pub changed_by_column: BTreeMap<String, usize>,
    pub total_records: usize,
    pub complete_count: usize,
    pub complete_fraction: f64,
    pub complete_row_indices: Vec<usize>,
    pub points: Vec<CompletenessPoint>,
    pub columns: BTreeMap<String, ColumnProfile>,
}

/// Assemble the final report from the upstream stage outputs.
pub fn assemble_report(
    dataset: impl Into<String>,
    rules: &MissingValueRules,
    outcome: &NormalizationOutcome,
    profile: &CompletenessProfile,
    columns: &BTreeMap<ColumnName, ColumnProfile>,
) -> DatasetReport {
    let points = profile
        .flags
        .iter()
        .enumerate()
        .map(|(row, complete)| CompletenessPoint {
            row,
            complete: *complete,
        })
        .collect();
    DatasetReport {
        dataset: dataset.into(),
        rules: rules.tokens().map(str::to_string).collect(),
        cells_changed: outcome.cells_changed,
        zero_effect: !outcome.had_effect(),
        changed_by_column: outcome
            .changed_by_column
            .iter()
            .map(|(column, count)| (column.to_string(), *count))
            .collect(),
        total_records: profile.summary.total_records,
        complete_count: profile.summary.complete_count,
        complete_fraction: profile.summary.complete_fraction,
        complete_row_indices: profile.summary.complete_row_indices.clone(),
        points,
        columns: columns
            .iter()
            .map(|(column, shape)| (column.to_string(), shape.clone()))
            .collect(),
    }
}
