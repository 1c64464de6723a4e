use std::fmt;

use serde::{Deserialize, Serialize};

use tabula_grid::{CellValue, TableError};

use crate::directives::FormatDirective;

/// Locator for one sheet inside a spreadsheet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRef {
    pub spreadsheet_id: String,
    pub title: String,
}

impl SheetRef {
    pub fn new(spreadsheet_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.spreadsheet_id, self.title)
    }
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing store rejected or failed the call
    Backend(String),
    /// A table operation failed while building or flattening
    Table(TableError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "store error: {}", msg),
            StoreError::Table(err) => write!(f, "table error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<TableError> for StoreError {
    fn from(err: TableError) -> Self {
        StoreError::Table(err)
    }
}

/// The external spreadsheet collaborator.
///
/// Everything behind this trait — authentication, request construction,
/// sheet lifecycle — belongs to the implementation. The exchange layer
/// only needs the two call shapes plus a formatting channel: rows of
/// untyped values in, a rectangular value matrix and a directive list
/// out. Rows coming back from `read` may vary in length.
pub trait SheetStore {
    fn read(&self, sheet: &SheetRef) -> Result<Vec<Vec<CellValue>>, StoreError>;

    fn write(&mut self, sheet: &SheetRef, values: Vec<Vec<CellValue>>) -> Result<(), StoreError>;

    fn apply_format(
        &mut self,
        sheet: &SheetRef,
        directives: &[FormatDirective],
    ) -> Result<(), StoreError>;
}
