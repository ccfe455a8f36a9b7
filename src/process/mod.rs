// src/process/mod.rs
use crate::error::{DatasetError, Malformed};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info};

pub mod convert;
pub mod filter;
pub mod raw_table;
pub mod scrub;
pub mod table;
pub mod trimming;
pub mod utils;

pub use raw_table::RawTable;
pub use table::{Cell, Columnar, Table};

/// Normalized name of the latitude column.
pub const LAT: &str = "lat";
/// Normalized name of the longitude column.
pub const LNG: &str = "lng";

/// Parse CSV text with a header row into a `RawTable`.
///
/// Records shorter than the header are padded with empty fields; records longer
/// than the header are rejected.
pub fn load_csv<R: Read>(reader: R) -> Result<RawTable, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(Malformed::NoHeader.into());
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(Malformed::TooManyFields {
                record: idx + 1,
                expected: headers.len(),
                found: record.len(),
            }
            .into());
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "parsed CSV");
    Ok(RawTable::new(headers, rows))
}

/// Run the cleaning stages over a freshly parsed table:
/// normalize headers → coerce → drop rows without coordinates → scrub
/// non-finite values → JSON cells in columnar shape.
pub fn sanitize(raw: RawTable) -> Result<Columnar, DatasetError> {
    let raw = trimming::normalize_headers(raw);
    let table = convert::coerce(&raw)?;
    let table = filter::drop_missing_coordinates(table)?;
    let table = scrub::scrub_non_finite(table);
    Ok(scrub::to_json_cells(table))
}

/// Read the dataset at `path` and return it sanitized.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_restaurants<P: AsRef<Path>>(path: P) -> Result<Columnar, DatasetError> {
    let path = path.as_ref();
    let source_unavailable = |source| DatasetError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    // read fully up front; the handle is released before parsing starts
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(source_unavailable)?;

    let out = sanitize(load_csv(bytes.as_slice())?)?;
    info!(rows = out.data.len(), columns = out.columns.len(), "loaded restaurants");
    Ok(out)
}
