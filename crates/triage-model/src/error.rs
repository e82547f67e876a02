use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} references unknown column {column:?}")]
    UnknownColumn { row: usize, column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
