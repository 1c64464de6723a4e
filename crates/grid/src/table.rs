use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellValue, Color, NumberFormatKind};
use crate::error::TableError;

/// A rectangular grid of sparsely-populated cells.
///
/// Dimensions are fixed at construction and define the valid index
/// space `[0, rows) x [0, cols)`. Only cells that were explicitly
/// written consume storage; every read is total and reports the
/// documented default for an unwritten cell. Writes outside the index
/// space are rejected before any mutation.
///
/// The only operations allowed to change the dimensions are the column
/// insert/remove operations in `ops` — everything else either mutates
/// cells in place or builds a fresh table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: FxHashMap<(usize, usize), Cell>,
    /// Display hint: leading rows pinned when the external viewer scrolls.
    pub frozen_row_count: usize,
    /// Display hint: leading columns pinned when the external viewer scrolls.
    pub frozen_column_count: usize,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {} rows x {} cols", self.rows, self.cols)
    }
}

impl Table {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: FxHashMap::default(),
            frozen_row_count: 0,
            frozen_column_count: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), TableError> {
        if row >= self.rows || col >= self.cols {
            return Err(TableError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Bounds-checked cell mutation. Cells that end up blank are dropped
    /// from the map so sparsity is preserved.
    fn update_cell(
        &mut self,
        row: usize,
        col: usize,
        f: impl FnOnce(&mut Cell),
    ) -> Result<(), TableError> {
        self.check_bounds(row, col)?;
        let cell = self.cells.entry((row, col)).or_default();
        f(cell);
        if cell.is_blank() {
            self.cells.remove(&(row, col));
        }
        Ok(())
    }

    /// Set the value of a cell, overwriting any prior value. Formatting
    /// attributes are untouched.
    pub fn put_value(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<CellValue>,
    ) -> Result<(), TableError> {
        let value = value.into();
        self.update_cell(row, col, |cell| cell.value = value)
    }

    /// The value of a cell. Total: unknown or out-of-range coordinates
    /// yield `Empty`, so exporters can probe freely after structural
    /// changes.
    pub fn value(&self, row: usize, col: usize) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    pub fn set_background(&mut self, row: usize, col: usize, color: Color) -> Result<(), TableError> {
        self.update_cell(row, col, |cell| cell.background = Some(color))
    }

    /// Background color of a cell; `None` means transparent/unset.
    pub fn background(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get(&(row, col)).and_then(|c| c.background)
    }

    pub fn set_number_format(
        &mut self,
        row: usize,
        col: usize,
        pattern: impl Into<String>,
    ) -> Result<(), TableError> {
        let pattern = pattern.into();
        self.update_cell(row, col, |cell| cell.number_format = Some(pattern))
    }

    /// Number-format pattern of a cell; `None` means no pattern.
    pub fn number_format(&self, row: usize, col: usize) -> Option<String> {
        self.cells
            .get(&(row, col))
            .and_then(|c| c.number_format.clone())
    }

    pub fn set_format_kind(
        &mut self,
        row: usize,
        col: usize,
        kind: NumberFormatKind,
    ) -> Result<(), TableError> {
        self.update_cell(row, col, |cell| cell.format_kind = Some(kind))
    }

    /// Number-format type tag of a cell; `None` means no tag. A cell
    /// with a pattern but no tag is treated as `Number` when directives
    /// are assembled.
    pub fn format_kind(&self, row: usize, col: usize) -> Option<NumberFormatKind> {
        self.cells.get(&(row, col)).and_then(|c| c.format_kind)
    }

    /// Remove the value and all three formatting attributes of a cell.
    /// Idempotent, and a no-op outside the grid.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        self.cells.remove(&(row, col));
    }

    /// Set an `Int64` value with a thousands-separator pattern in one call.
    pub fn put_comma_separated_int64(
        &mut self,
        row: usize,
        col: usize,
        value: i64,
    ) -> Result<(), TableError> {
        self.put_value(row, col, value)?;
        self.set_number_format(row, col, "#,##0")
    }

    // =========================================================================
    // Typed accessors
    //
    // Best-effort reads for loosely-typed spreadsheet input: a type
    // mismatch or failed parse degrades to the documented zero value,
    // never an error. A returned 0 is indistinguishable from a stored 0;
    // callers that care about presence must use `value()`.
    // =========================================================================

    /// The value as a string. No coercion from numeric kinds.
    pub fn string_value(&self, row: usize, col: usize) -> String {
        match self.value(row, col) {
            CellValue::Text(s) => s,
            _ => String::new(),
        }
    }

    /// The value as an `i32`: direct read, or a parse of a text value.
    pub fn int_value(&self, row: usize, col: usize) -> i32 {
        match self.value(row, col) {
            CellValue::Int(n) => n,
            CellValue::Text(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// The value as an `i64`: direct read, `Int` widened, or a parse of
    /// a text value.
    pub fn int64_value(&self, row: usize, col: usize) -> i64 {
        match self.value(row, col) {
            CellValue::Int64(n) => n,
            CellValue::Int(n) => i64::from(n),
            CellValue::Text(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// All `cols` values of a row in order, absent cells as `Empty`.
    pub fn values_at_row(&self, row: usize) -> Vec<CellValue> {
        (0..self.cols).map(|col| self.value(row, col)).collect()
    }

    /// Write values positionally starting at column 0. Supplying more
    /// values than the table has columns fails with `OutOfRange` at the
    /// first surplus column; values within bounds are already written.
    pub fn put_values_at_row<I>(&mut self, row: usize, values: I) -> Result<(), TableError>
    where
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        for (col, value) in values.into_iter().enumerate() {
            self.put_value(row, col, value)?;
        }
        Ok(())
    }
}
