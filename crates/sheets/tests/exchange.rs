//! Exchange round-trips against an in-memory store double.

use rustc_hash::FxHashMap;

use tabula_grid::{CellValue, Color, NumberFormatKind, Table};
use tabula_sheets::{
    read_table, write_table, FormatDirective, SheetRef, SheetStore, StoreError,
};

/// In-memory stand-in for the spreadsheet store: keeps the last written
/// matrix and directive batch per sheet, and counts formatting calls.
#[derive(Default)]
struct MemoryStore {
    sheets: FxHashMap<String, Vec<Vec<CellValue>>>,
    formats: FxHashMap<String, Vec<FormatDirective>>,
    format_calls: usize,
}

impl SheetStore for MemoryStore {
    fn read(&self, sheet: &SheetRef) -> Result<Vec<Vec<CellValue>>, StoreError> {
        self.sheets
            .get(&sheet.to_string())
            .cloned()
            .ok_or_else(|| StoreError::Backend(format!("sheet not found: {}", sheet)))
    }

    fn write(&mut self, sheet: &SheetRef, values: Vec<Vec<CellValue>>) -> Result<(), StoreError> {
        self.sheets.insert(sheet.to_string(), values);
        Ok(())
    }

    fn apply_format(
        &mut self,
        sheet: &SheetRef,
        directives: &[FormatDirective],
    ) -> Result<(), StoreError> {
        self.format_calls += 1;
        self.formats.insert(sheet.to_string(), directives.to_vec());
        Ok(())
    }
}

#[test]
fn test_write_then_read_round_trips() {
    let mut store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "RoundTrip");

    let mut table = Table::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            table.put_value(row, col, format!("{},{}", row, col)).unwrap();
        }
    }

    write_table(&mut store, &sheet, &table).unwrap();
    let read_back = read_table(&store, &sheet).unwrap();

    assert_eq!(read_back.rows(), 2);
    assert_eq!(read_back.cols(), 2);
    for row in 0..2 {
        for col in 0..2 {
            assert_eq!(
                read_back.value(row, col),
                CellValue::Text(format!("{},{}", row, col))
            );
        }
    }
}

#[test]
fn test_read_ragged_rows_uses_widest_row() {
    let mut store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "Ragged");
    store.sheets.insert(
        sheet.to_string(),
        vec![
            vec![CellValue::from("a")],
            vec![CellValue::from("b"), CellValue::from("c"), CellValue::from("d")],
            vec![],
        ],
    );

    let table = read_table(&store, &sheet).unwrap();
    assert_eq!(table.rows(), 3);
    assert_eq!(table.cols(), 3);
    assert_eq!(table.value(0, 0), CellValue::Text("a".into()));
    // Short rows leave their trailing cells absent
    assert_eq!(table.value(0, 1), CellValue::Empty);
    assert_eq!(table.value(1, 2), CellValue::Text("d".into()));
    assert_eq!(table.value(2, 0), CellValue::Empty);
}

#[test]
fn test_read_empty_sheet_yields_zero_by_zero() {
    let mut store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "Empty");
    store.sheets.insert(sheet.to_string(), vec![]);

    let table = read_table(&store, &sheet).unwrap();
    assert_eq!(table.rows(), 0);
    assert_eq!(table.cols(), 0);
}

#[test]
fn test_read_missing_sheet_surfaces_backend_error() {
    let store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "Nowhere");
    match read_table(&store, &sheet) {
        Err(StoreError::Backend(msg)) => assert!(msg.contains("Nowhere")),
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[test]
fn test_write_emits_values_and_directives() {
    let mut store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "Report");

    let mut table = Table::new(4, 3);
    table.put_value(0, 0, "Updated: 2026-08-24").unwrap();
    table.put_value(1, 0, 1234567890).unwrap();
    table.put_value(2, 0, "12345000").unwrap();
    table.put_value(0, 1, "fuga").unwrap();
    table.put_value(2, 1, 49501).unwrap();
    table.put_value(3, 2, "Hello world").unwrap();

    table.set_background(0, 0, Color::BLACK).unwrap();
    table.set_background(1, 1, Color { r: 128, g: 0, b: 0, a: 0 }).unwrap();
    table.set_number_format(1, 0, "#,###").unwrap();
    table.set_number_format(2, 0, "#,##0").unwrap();
    table.set_format_kind(2, 0, NumberFormatKind::Currency).unwrap();
    table.set_number_format(2, 1, "yyyy/MM").unwrap();
    table.set_format_kind(2, 1, NumberFormatKind::Date).unwrap();

    table.frozen_row_count = 1;
    table.frozen_column_count = 2;

    write_table(&mut store, &sheet, &table).unwrap();

    let written = &store.sheets[&sheet.to_string()];
    assert_eq!(written.len(), 4);
    assert_eq!(written[1][0], CellValue::Int(1234567890));
    assert_eq!(written[3][2], CellValue::Text("Hello world".into()));

    let directives = &store.formats[&sheet.to_string()];
    assert_eq!(directives[0], FormatDirective::FrozenRows { count: 1 });
    assert_eq!(directives[1], FormatDirective::FrozenColumns { count: 2 });
    // 2 frozen hints + 2 backgrounds + 3 number formats
    assert_eq!(directives.len(), 7);
    assert!(directives.contains(&FormatDirective::CellNumberFormat {
        row: 2,
        col: 0,
        pattern: "#,##0".into(),
        format_type: NumberFormatKind::Currency,
    }));
    assert!(directives.contains(&FormatDirective::CellNumberFormat {
        row: 1,
        col: 0,
        pattern: "#,###".into(),
        format_type: NumberFormatKind::Number,
    }));
    assert!(directives.contains(&FormatDirective::CellBackground {
        row: 1,
        col: 1,
        color: [128.0 / 255.0, 0.0, 0.0, 0.0],
    }));
}

#[test]
fn test_write_skips_formatting_call_when_table_is_plain() {
    let mut store = MemoryStore::default();
    let sheet = SheetRef::new("doc-1", "Plain");

    let mut table = Table::new(2, 2);
    table.put_values_at_row(0, ["a", "b"]).unwrap();

    write_table(&mut store, &sheet, &table).unwrap();
    assert_eq!(store.format_calls, 0);
    assert!(store.sheets.contains_key(&sheet.to_string()));
}
