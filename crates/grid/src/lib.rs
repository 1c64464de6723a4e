pub mod cell;
pub mod error;
pub mod export;
pub mod ops;
pub mod table;

pub use cell::{Cell, CellValue, Color, NumberFormatKind};
pub use error::TableError;
pub use table::Table;
