//! Structural operations: slicing, concatenation, filtering, column
//! insertion/removal, range clearing, prefix search.
//!
//! Every copy moves a cell's value and its formatting attributes as one
//! unit, and every returned table owns fresh storage — results never
//! alias the source.

use crate::cell::CellValue;
use crate::error::TableError;
use crate::table::Table;

impl Table {
    fn check_range(
        &self,
        row_start: usize,
        col_start: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<(), TableError> {
        // checked_add: a start index near usize::MAX must report a bad
        // range, not wrap around and pass the bounds test
        let row_end = row_start.checked_add(num_rows);
        let col_end = col_start.checked_add(num_cols);
        match (row_end, col_end) {
            (Some(row_end), Some(col_end)) if row_end <= self.rows && col_end <= self.cols => {
                Ok(())
            }
            _ => Err(TableError::BadRange {
                row_end: row_start.saturating_add(num_rows),
                col_end: col_start.saturating_add(num_cols),
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    fn copy_cells_from(&mut self, other: &Table, row_offset: usize, col_offset: usize) {
        for (&(row, col), cell) in &other.cells {
            self.cells.insert((row + row_offset, col + col_offset), cell.clone());
        }
    }

    /// A new table with `other`'s rows below this table's rows.
    ///
    /// Width is the maximum of the two; the narrower table's missing
    /// columns stay absent in its contribution. Frozen hints come from
    /// `self`.
    pub fn append_below(&self, other: &Table) -> Table {
        let mut merged = Table::new(self.rows + other.rows, self.cols.max(other.cols));
        merged.frozen_row_count = self.frozen_row_count;
        merged.frozen_column_count = self.frozen_column_count;
        merged.copy_cells_from(self, 0, 0);
        merged.copy_cells_from(other, self.rows, 0);
        merged
    }

    /// A new table with `other`'s columns to the right of this table's.
    pub fn append_right(&self, other: &Table) -> Table {
        let mut merged = Table::new(self.rows.max(other.rows), self.cols + other.cols);
        merged.frozen_row_count = self.frozen_row_count;
        merged.frozen_column_count = self.frozen_column_count;
        merged.copy_cells_from(self, 0, 0);
        merged.copy_cells_from(other, 0, self.cols);
        merged
    }

    /// A freshly-owned copy of the requested rectangle, formatting
    /// included. Not a view.
    pub fn sub_table(
        &self,
        row_start: usize,
        col_start: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Table, TableError> {
        self.check_range(row_start, col_start, num_rows, num_cols)?;

        let mut sub = Table::new(num_rows, num_cols);
        for (&(row, col), cell) in &self.cells {
            if row >= row_start
                && row < row_start + num_rows
                && col >= col_start
                && col < col_start + num_cols
            {
                sub.cells.insert((row - row_start, col - col_start), cell.clone());
            }
        }
        Ok(sub)
    }

    /// A new table holding the rows the predicate accepts, in source
    /// order, as full attribute copies.
    ///
    /// Single linear scan: the predicate sees each row's `cols`-length
    /// value slice exactly once, top to bottom.
    pub fn filter_rows(&self, mut predicate: impl FnMut(&[CellValue]) -> bool) -> Table {
        let mut kept = Vec::new();
        for row in 0..self.rows {
            if predicate(&self.values_at_row(row)) {
                kept.push(row);
            }
        }

        let mut filtered = Table::new(kept.len(), self.cols);
        for (target, &source) in kept.iter().enumerate() {
            for col in 0..self.cols {
                if let Some(cell) = self.cells.get(&(source, col)) {
                    filtered.cells.insert((target, col), cell.clone());
                }
            }
        }
        filtered
    }

    /// Insert a fully-absent column at `index`, shifting cells at
    /// `col >= index` right by one. `index == cols` appends at the end.
    pub fn insert_col_at(&mut self, index: usize) -> Result<(), TableError> {
        if index > self.cols {
            return Err(TableError::BadColumn { index, cols: self.cols });
        }

        let shifted: Vec<_> = self
            .cells
            .iter()
            .filter(|((_, col), _)| *col >= index)
            .map(|(&(row, col), cell)| ((row, col), cell.clone()))
            .collect();

        for ((row, col), _) in &shifted {
            self.cells.remove(&(*row, *col));
        }
        for ((row, col), cell) in shifted {
            self.cells.insert((row, col + 1), cell);
        }

        self.cols += 1;
        Ok(())
    }

    /// Remove the column at `index`, shifting cells at `col > index`
    /// left by one.
    pub fn remove_col_at(&mut self, index: usize) -> Result<(), TableError> {
        if index >= self.cols {
            return Err(TableError::BadColumn { index, cols: self.cols });
        }

        for row in 0..self.rows {
            self.cells.remove(&(row, index));
        }

        let shifted: Vec<_> = self
            .cells
            .iter()
            .filter(|((_, col), _)| *col > index)
            .map(|(&(row, col), cell)| ((row, col), cell.clone()))
            .collect();

        for ((row, col), _) in &shifted {
            self.cells.remove(&(*row, *col));
        }
        for ((row, col), cell) in shifted {
            self.cells.insert((row, col - 1), cell);
        }

        self.cols -= 1;
        Ok(())
    }

    /// Set every cell's value to the explicit empty string (not absent).
    /// Formatting attributes are untouched.
    pub fn clear_values(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.cells.entry((row, col)).or_default();
                cell.value = CellValue::Text(String::new());
            }
        }
    }

    /// Set affected cells' values to the explicit empty string, leaving
    /// formatting untouched. No-op on a bad range.
    pub fn clear_values_in_range(
        &mut self,
        row_start: usize,
        col_start: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<(), TableError> {
        self.check_range(row_start, col_start, num_rows, num_cols)?;

        for row in row_start..row_start + num_rows {
            for col in col_start..col_start + num_cols {
                let cell = self.cells.entry((row, col)).or_default();
                cell.value = CellValue::Text(String::new());
            }
        }
        Ok(())
    }

    /// The first row whose leading cells equal `prefix` element-wise,
    /// under strict type-and-value equality. `None` for an empty prefix,
    /// a prefix wider than the table, or no match.
    pub fn index_of_row_with_prefix(&self, prefix: &[CellValue]) -> Option<usize> {
        if prefix.is_empty() || prefix.len() > self.cols {
            return None;
        }

        (0..self.rows).find(|&row| {
            prefix
                .iter()
                .enumerate()
                .all(|(col, expected)| self.value(row, col) == *expected)
        })
    }
}
