pub mod csv_table;

pub use csv_table::{IngestError, read_survey_table};
