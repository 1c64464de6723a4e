use serde::{Deserialize, Serialize};

/// A scalar cell value.
///
/// Spreadsheet cells are untyped at origin, so the model carries exactly
/// the kinds the store hands back: text, two integer widths, and `Empty`
/// for a cell that was never written. `Empty` is distinct from
/// `Text("")` — clearing values produces the latter.
///
/// Equality is strict across kinds: `Text("5")`, `Int(5)` and
/// `Int64(5)` are three different values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i32),
    Int64(i64),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int64(n)
    }
}

/// Cell background color, 8-bit RGBA.
///
/// A cell with no color set is transparent; that state is modeled as the
/// absence of a `Color`, not as a sentinel value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Components as 0.0–1.0 floats, `[r, g, b, a]` — the form the
    /// spreadsheet store expects in formatting directives.
    pub fn normalized(&self) -> [f64; 4] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            f64::from(self.a) / 255.0,
        ]
    }
}

/// Number-format type tag attached to a format pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatKind {
    #[default]
    Number,
    Text,
    Percent,
    Currency,
    Date,
    Time,
    DateTime,
    Scientific,
}

impl NumberFormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormatKind::Number => "NUMBER",
            NumberFormatKind::Text => "TEXT",
            NumberFormatKind::Percent => "PERCENT",
            NumberFormatKind::Currency => "CURRENCY",
            NumberFormatKind::Date => "DATE",
            NumberFormatKind::Time => "TIME",
            NumberFormatKind::DateTime => "DATE_TIME",
            NumberFormatKind::Scientific => "SCIENTIFIC",
        }
    }
}

/// One cell: a value plus its three independent formatting attributes.
///
/// The attributes travel together — every structural operation that
/// copies a cell copies all four fields as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub background: Option<Color>,
    pub number_format: Option<String>,
    pub format_kind: Option<NumberFormatKind>,
}

impl Cell {
    /// A blank cell carries no information and can be dropped from the
    /// sparse map without changing what readers observe.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
            && self.background.is_none()
            && self.number_format.is_none()
            && self.format_kind.is_none()
    }
}
