//! Authored menu block: row structure and static item parsing.
//!
//! Each row holds four positional cells: name, price, description and an
//! image cell whose first image is the item picture. Rows are checked
//! against that schema before any item is produced.

mod error;

use serde::Deserialize;

pub use error::RowSchemaError;

/// Number of positional cells a menu row must carry.
pub const ROW_CELLS: usize = 4;

const NAME_CELL: usize = 0;
const PRICE_CELL: usize = 1;
const DESCRIPTION_CELL: usize = 2;
const IMAGE_CELL: usize = 3;

/// Authored block content: ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub rows: Vec<Row>,
}

/// One authored row: ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A block cell: its text content and any images nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            images: vec![ImageRef {
                src: src.into(),
                alt: String::new(),
            }],
        }
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// Static item as authored. Text fields may hold one placeholder token each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// Checks one row against the positional schema and extracts its item.
pub fn parse_row(index: usize, row: &Row) -> Result<MenuItem, RowSchemaError> {
    if row.cells.len() < ROW_CELLS {
        return Err(RowSchemaError::MissingCells {
            row: index,
            found: row.cells.len(),
        });
    }
    if row.cells.len() > ROW_CELLS {
        tracing::debug!(
            "menu row {} has {} cells, ignoring the extra ones",
            index,
            row.cells.len()
        );
    }

    let image = row.cells[IMAGE_CELL]
        .images
        .first()
        .ok_or(RowSchemaError::MissingImage { row: index })?;

    Ok(MenuItem {
        name: row.cells[NAME_CELL].text.clone(),
        price: row.cells[PRICE_CELL].text.clone(),
        description: row.cells[DESCRIPTION_CELL].text.clone(),
        image: image.src.clone(),
    })
}

/// Parses every row in order. The first malformed row fails the whole block.
pub fn parse_items(block: &Block) -> Result<Vec<MenuItem>, RowSchemaError> {
    block
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect()
}
