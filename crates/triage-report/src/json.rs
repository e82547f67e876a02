use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::DatasetReport;

/// Write the report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &DatasetReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report: {}", path.display()))?;
    info!(path = %path.display(), "wrote triage report");
    Ok(())
}
