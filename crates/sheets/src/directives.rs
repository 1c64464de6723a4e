//! Formatting directives: the non-default presentation state of a table,
//! flattened into the per-cell/per-sheet instructions the store applies
//! after a value write.

use serde::{Deserialize, Serialize};

use tabula_grid::{NumberFormatKind, Table};

/// One formatting instruction for the store.
///
/// Only deviations from the defaults are ever emitted: transparent
/// backgrounds, missing patterns, and zero frozen counts produce no
/// directive at all, keeping the outbound batch small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatDirective {
    FrozenRows {
        count: usize,
    },
    FrozenColumns {
        count: usize,
    },
    CellBackground {
        row: usize,
        col: usize,
        /// RGBA components normalized to 0.0–1.0
        color: [f64; 4],
    },
    CellNumberFormat {
        row: usize,
        col: usize,
        pattern: String,
        format_type: NumberFormatKind,
    },
}

/// Assemble the directive list for a table.
///
/// Emission order: frozen rows, frozen columns, then cells column-major
/// with background before number format. A cell carrying a pattern but
/// no type tag is tagged `NUMBER`.
pub fn format_directives(table: &Table) -> Vec<FormatDirective> {
    let mut directives = Vec::new();

    if table.frozen_row_count > 0 {
        directives.push(FormatDirective::FrozenRows { count: table.frozen_row_count });
    }
    if table.frozen_column_count > 0 {
        directives.push(FormatDirective::FrozenColumns { count: table.frozen_column_count });
    }

    for col in 0..table.cols() {
        for row in 0..table.rows() {
            if let Some(color) = table.background(row, col) {
                directives.push(FormatDirective::CellBackground {
                    row,
                    col,
                    color: color.normalized(),
                });
            }

            if let Some(pattern) = table.number_format(row, col) {
                if !pattern.is_empty() {
                    directives.push(FormatDirective::CellNumberFormat {
                        row,
                        col,
                        pattern,
                        format_type: table.format_kind(row, col).unwrap_or_default(),
                    });
                }
            }
        }
    }

    directives
}
