use std::fmt;

/// Errors returned by table writes and structural operations.
///
/// Bounds violations are rejected before any mutation happens, so a
/// failed call leaves the table exactly as it was. Coercive value
/// accessors never produce one of these — they degrade to a zero value
/// instead, because the source data's typing is unreliable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A write targeted a coordinate outside the table's fixed dimensions.
    OutOfRange { row: usize, col: usize, rows: usize, cols: usize },
    /// A requested rectangle extends past the table's dimensions.
    BadRange { row_end: usize, col_end: usize, rows: usize, cols: usize },
    /// A column insert/remove index is out of bounds.
    BadColumn { index: usize, cols: usize },
    /// The sink failed during delimited export.
    Io(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::OutOfRange { row, col, rows, cols } => {
                write!(f, "cell ({}, {}) out of range of {} x {} table", row, col, rows, cols)
            }
            TableError::BadRange { row_end, col_end, rows, cols } => {
                write!(
                    f,
                    "requested range ends at ({}, {}), table has {} rows and {} cols",
                    row_end, col_end, rows, cols
                )
            }
            TableError::BadColumn { index, cols } => {
                write!(f, "invalid column index {} for table with {} cols", index, cols)
            }
            TableError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}
