use std::fmt;

/// A single typed value inside a row.
///
/// `Null` doubles as the "no signal observed" output of the carry-forward
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Null
    }
}

impl From<Option<Cell>> for Cell {
    fn from(v: Option<Cell>) -> Self {
        v.unwrap_or(Cell::Null)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::String(v.to_string())
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int64(v)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Int64(v) => write!(f, "{}", v),
            Cell::Float64(v) => write!(f, "{}", v),
            Cell::String(v) => write!(f, "{:?}", v),
        }
    }
}
