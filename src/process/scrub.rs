use crate::process::table::{Cell, Columnar, Table};
use tracing::debug;

/// Rewrite NaN and +/-infinity to `Absent` in every column.
pub fn scrub_non_finite(table: Table) -> Table {
    let mut scrubbed = 0usize;
    let rows: Vec<Vec<Cell>> = table
        .rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Cell::Number(v) if !v.is_finite() => {
                        scrubbed += 1;
                        Cell::Absent
                    }
                    other => other,
                })
                .collect()
        })
        .collect();

    debug!(scrubbed, "scrubbed non-finite values");
    Table {
        columns: table.columns,
        rows,
    }
}

/// Map every cell to its JSON value (`Absent` becomes `null`) and project to the
/// columnar response shape. Must run after `scrub_non_finite`.
pub fn to_json_cells(table: Table) -> Columnar {
    let data = table
        .rows
        .iter()
        .map(|row| row.iter().map(Cell::to_json).collect())
        .collect();
    Columnar {
        columns: table.columns,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn table(rows: Vec<Vec<Cell>>) -> Table {
        Table {
            columns: vec!["lat".into(), "lng".into(), "rating".into()],
            rows,
        }
    }

    #[test]
    fn non_finite_cells_become_absent() {
        let out = scrub_non_finite(table(vec![
            vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(f64::INFINITY)],
            vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(f64::NEG_INFINITY)],
            vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(f64::NAN)],
            vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.5)],
        ]));
        let ratings: Vec<_> = out.rows.iter().map(|r| r[2].clone()).collect();
        assert_eq!(
            ratings,
            vec![Cell::Absent, Cell::Absent, Cell::Absent, Cell::Number(3.5)]
        );
    }

    #[test]
    fn absent_becomes_null_and_shape_is_kept() {
        let out = to_json_cells(table(vec![vec![
            Cell::Number(24.7),
            Cell::Number(46.6),
            Cell::Absent,
        ]]));
        assert_eq!(out.columns, vec!["lat", "lng", "rating"]);
        assert_eq!(out.data, vec![vec![json!(24.7), json!(46.6), Value::Null]]);
        assert!(out.data.iter().all(|row| row.len() == out.columns.len()));
    }
}
