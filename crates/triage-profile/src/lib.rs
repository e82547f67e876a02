pub mod columns;
pub mod completeness;

pub use columns::{ColumnProfile, profile_columns};
pub use completeness::{CompletenessProfile, CompletenessSummary, analyze_completeness};
