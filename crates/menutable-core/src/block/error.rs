//! Error type for menu row validation.

use super::ROW_CELLS;

/// A block row that does not match the positional menu row schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowSchemaError {
    #[error("menu row {row} has {found} cells, expected {}", ROW_CELLS)]
    MissingCells { row: usize, found: usize },
    #[error("menu row {row} has no image in its image cell")]
    MissingImage { row: usize },
}

impl RowSchemaError {
    pub fn row(&self) -> usize {
        match self {
            RowSchemaError::MissingCells { row, .. } | RowSchemaError::MissingImage { row } => *row,
        }
    }
}
