//! Flattening the grid to external representations: a rectangular value
//! matrix, delimited text, and a key/value projection.

use std::io;

use rustc_hash::FxHashMap;

use crate::cell::CellValue;
use crate::error::TableError;
use crate::table::Table;

impl Table {
    /// The full `rows x cols` value matrix in row-major order, absent
    /// cells included as `Empty`. Deterministic for a given table state.
    pub fn to_matrix(&self) -> Vec<Vec<CellValue>> {
        (0..self.rows).map(|row| self.values_at_row(row)).collect()
    }

    /// Write the table as CSV: one record per row, one field per column.
    ///
    /// Text renders verbatim, integers as decimal text, absent cells as
    /// empty fields. The writer is flushed on completion; the first sink
    /// failure aborts and is surfaced as `TableError::Io`.
    pub fn write_csv<W: io::Write>(&self, sink: W) -> Result<(), TableError> {
        let mut writer = csv::Writer::from_writer(sink);
        for row in 0..self.rows {
            let record: Vec<String> = (0..self.cols)
                .map(|col| match self.value(row, col) {
                    CellValue::Text(s) => s,
                    CellValue::Int(n) => n.to_string(),
                    CellValue::Int64(n) => n.to_string(),
                    CellValue::Empty => String::new(),
                })
                .collect();
            writer
                .write_record(&record)
                .map_err(|e| TableError::Io(e.to_string()))?;
        }
        writer.flush().map_err(|e| TableError::Io(e.to_string()))
    }

    /// Project the first two columns into a map: first-column value to
    /// second-column value, top to bottom, later rows overwriting
    /// earlier ones on key collision.
    ///
    /// The caller must ensure the table has at least 2 columns.
    pub fn to_map(&self) -> FxHashMap<CellValue, CellValue> {
        debug_assert!(self.cols >= 2, "to_map requires a table with at least 2 columns");
        let mut map = FxHashMap::default();
        for row in 0..self.rows {
            map.insert(self.value(row, 0), self.value(row, 1));
        }
        map
    }
}
