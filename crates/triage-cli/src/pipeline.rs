//! Dataset triage pipeline with explicit stages.
//!
//! 1. **Ingest**: read the delimited file, preserving raw cell content
//! 2. **Clean**: rewrite recognized missing-value encodings
//! 3. **Profile**: per-record completeness and per-column shape
//! 4. **Assemble**: fold everything into one report value
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; nothing here mutates shared state, so a run can be repeated on
//! the same input with the same outcome.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use triage_clean::{MissingValueRules, normalize_missing};
use triage_ingest::read_survey_table;
use triage_profile::{analyze_completeness, profile_columns};
use triage_report::{DatasetReport, assemble_report};

/// Rule-set configuration collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    /// Extra tokens appended to the set.
    pub extra_tokens: Vec<String>,
    /// Start from an empty set instead of the built-in tokens.
    pub no_default_rules: bool,
    /// Opt in to treating the empty string as missing.
    pub empty_as_missing: bool,
    /// Opt in to case-insensitive token matching.
    pub ignore_case: bool,
    /// Opt in to trimming cell whitespace before matching.
    pub trim_tokens: bool,
}

/// Build the effective rule set from CLI options.
pub fn build_rules(options: &RuleOptions) -> MissingValueRules {
    let mut rules = if options.no_default_rules {
        MissingValueRules::empty()
    } else {
        MissingValueRules::standard()
    };
    for token in &options.extra_tokens {
        rules = rules.with_token(token.clone());
    }
    rules
        .with_empty_as_missing(options.empty_as_missing)
        .with_ignore_case(options.ignore_case)
        .with_trim_whitespace(options.trim_tokens)
}

/// Run the full triage pipeline over one dataset file.
pub fn run_dataset(path: &Path, rules: &MissingValueRules) -> Result<DatasetReport> {
    let dataset = dataset_name(path);
    let span = info_span!("triage", dataset = %dataset);
    let _guard = span.enter();

    let table = read_survey_table(path).context("ingest dataset")?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "ingested dataset"
    );

    let outcome = normalize_missing(&table, rules).context("normalize missing values")?;
    info!(cells_changed = outcome.cells_changed, "cleaned dataset");
    if !outcome.had_effect() && !table.is_empty() {
        warn!(
            "normalization changed no cells; the configured tokens may not \
             match the dataset's missing-value encoding"
        );
    }

    let profile = analyze_completeness(&outcome.table).context("analyze completeness")?;
    let columns = profile_columns(&outcome.table).context("profile columns")?;
    info!(
        complete = profile.summary.complete_count,
        total = profile.summary.total_records,
        "profiled dataset"
    );

    Ok(assemble_report(dataset, rules, &outcome, &profile, &columns))
}

fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
