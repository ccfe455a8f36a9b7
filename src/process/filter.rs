use crate::error::{DatasetError, Malformed};
use crate::process::table::Table;
use crate::process::{LAT, LNG};
use tracing::debug;

/// Drop every row whose `lat` or `lng` cell is absent. Rows are never imputed.
pub fn drop_missing_coordinates(table: Table) -> Result<Table, DatasetError> {
    let lat = table.position(LAT).ok_or(Malformed::MissingColumn(LAT))?;
    let lng = table.position(LNG).ok_or(Malformed::MissingColumn(LNG))?;

    let before = table.rows.len();
    let rows: Vec<_> = table
        .rows
        .into_iter()
        .filter(|row| {
            let present = |i: usize| row.get(i).is_some_and(|c| !c.is_absent());
            present(lat) && present(lng)
        })
        .collect();

    debug!(kept = rows.len(), dropped = before - rows.len(), "filtered rows");
    Ok(Table {
        columns: table.columns,
        rows,
    })
}
