use crate::error::{DatasetError, Malformed};
use crate::process::raw_table::RawTable;
use crate::process::table::{Cell, Table};
use crate::process::utils::{is_missing, parse_finite, parse_number};
use crate::process::{LAT, LNG};
use tracing::debug;

/// How a non-coordinate column is typed, decided from all of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Coordinate,
    Numeric,
    Text,
}

fn infer_kind(table: &RawTable, col: usize) -> ColumnKind {
    let numeric = table
        .rows
        .iter()
        .map(|row| cell_at(row, col))
        .filter(|s| !is_missing(s))
        .all(|s| parse_number(s).is_some());
    if numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

fn cell_at(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", String::as_str)
}

fn convert_cell(raw: &str, kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Coordinate => parse_finite(raw).map_or(Cell::Absent, Cell::Number),
        _ if is_missing(raw) => Cell::Absent,
        ColumnKind::Numeric => parse_number(raw).map_or(Cell::Absent, Cell::Number),
        ColumnKind::Text => Cell::Text(raw.to_string()),
    }
}

/// Convert raw strings into typed cells. `lat`/`lng` cells that are not finite
/// numbers become `Absent`; the table must already have normalized headers.
pub fn coerce(table: &RawTable) -> Result<Table, DatasetError> {
    let lat = table.position(LAT).ok_or(Malformed::MissingColumn(LAT))?;
    let lng = table.position(LNG).ok_or(Malformed::MissingColumn(LNG))?;

    let kinds: Vec<ColumnKind> = (0..table.headers.len())
        .map(|i| {
            if i == lat || i == lng {
                ColumnKind::Coordinate
            } else {
                infer_kind(table, i)
            }
        })
        .collect();

    let rows: Vec<Vec<Cell>> = table
        .rows
        .iter()
        .map(|row| {
            kinds
                .iter()
                .enumerate()
                .map(|(i, &kind)| convert_cell(cell_at(row, i), kind))
                .collect()
        })
        .collect();

    debug!(
        rows = rows.len(),
        numeric = kinds.iter().filter(|k| **k == ColumnKind::Numeric).count(),
        "coerced cells"
    );

    Ok(Table {
        columns: table.headers.clone(),
        rows,
    })
}
