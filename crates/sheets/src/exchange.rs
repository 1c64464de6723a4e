//! Table ↔ store exchange: build a table from the rows a store returns,
//! and flatten a table back into a value write plus formatting
//! directives.

use tabula_grid::Table;

use crate::directives::format_directives;
use crate::store::{SheetRef, SheetStore, StoreError};

/// Read a sheet into a table.
///
/// Inbound rows may be ragged; the grid's width is the maximum row
/// length observed, and shorter rows leave their trailing cells absent.
pub fn read_table<S: SheetStore>(store: &S, sheet: &SheetRef) -> Result<Table, StoreError> {
    let rows = store.read(sheet)?;

    let max_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut table = Table::new(rows.len(), max_cols);
    for (row_idx, row) in rows.into_iter().enumerate() {
        for (col_idx, value) in row.into_iter().enumerate() {
            table.put_value(row_idx, col_idx, value)?;
        }
    }
    Ok(table)
}

/// Write a table's values to a sheet, then apply its formatting
/// directives. The formatting call is skipped entirely when the table
/// carries no non-default presentation state.
pub fn write_table<S: SheetStore>(
    store: &mut S,
    sheet: &SheetRef,
    table: &Table,
) -> Result<(), StoreError> {
    store.write(sheet, table.to_matrix())?;

    let directives = format_directives(table);
    if directives.is_empty() {
        return Ok(());
    }
    store.apply_format(sheet, &directives)
}
