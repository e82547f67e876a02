use std::path::PathBuf;

use triage_report::DatasetReport;

#[derive(Debug)]
pub struct CheckResult {
    pub report: DatasetReport,
    pub report_path: Option<PathBuf>,
}
