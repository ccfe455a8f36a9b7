use serde::Serialize;
use serde_json::Value;

/// Largest magnitude for which every whole number is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One typed cell of a `Table`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Absent,
}

impl Cell {
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// JSON form of the cell. Anything JSON cannot carry maps to `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < MAX_SAFE_INTEGER => {
                Value::from(*v as i64)
            }
            Cell::Number(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Absent => Value::Null,
        }
    }
}

/// Typed, row-major table. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Response body in "split" orientation: field names once, then bare rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Columnar {
    pub columns: Vec<String>,
    pub data: Vec<Vec<Value>>,
}
