pub mod dataset;
pub mod json;

pub use dataset::{CompletenessPoint, DatasetReport, assemble_report};
pub use json::write_report_json;
