//! Boundary to the external spreadsheet store.
//!
//! The core table model (`tabula-grid`) is pure in-memory; this crate
//! carries the two call shapes that connect it to a spreadsheet-backed
//! store — ordered rows in, a value matrix plus formatting directives
//! out — behind the `SheetStore` trait.

pub mod directives;
pub mod exchange;
pub mod store;

pub use directives::{format_directives, FormatDirective};
pub use exchange::{read_table, write_table};
pub use store::{SheetRef, SheetStore, StoreError};
