use crate::process::raw_table::RawTable;
use crate::process::utils::normalize_header;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Normalize every header; when two headers normalize to the same name the first
/// one is kept and the later column is dropped from every row.
pub fn normalize_headers(table: RawTable) -> RawTable {
    let mut seen = HashSet::with_capacity(table.headers.len());
    let mut keep = Vec::with_capacity(table.headers.len());
    let mut headers = Vec::with_capacity(table.headers.len());

    for (i, raw) in table.headers.iter().enumerate() {
        let name = normalize_header(raw);
        if seen.insert(name.clone()) {
            keep.push(i);
            headers.push(name);
        } else {
            warn!(
                column = %raw,
                normalized = %name,
                "duplicate column after normalization, dropping"
            );
        }
    }

    let rows = if keep.len() == table.headers.len() {
        table.rows
    } else {
        table
            .rows
            .into_iter()
            .map(|row| {
                keep.iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    };

    debug!(columns = headers.len(), "normalized headers");
    RawTable::new(headers, rows)
}
