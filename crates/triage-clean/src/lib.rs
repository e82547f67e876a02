pub mod normalize;
pub mod rules;

pub use normalize::{NormalizationOutcome, normalize_missing};
pub use rules::MissingValueRules;
