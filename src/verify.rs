//! Integrity check for a `/restaurants` response body.

use serde_json::Value;
use thiserror::Error;

/// Why the payload as a whole was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The server answered with an `error` payload.
    #[error("server reported an error: {0}")]
    ServerError(String),

    #[error("response does not have 'columns' and 'data' keys (expected split format)")]
    NotSplit,

    #[error("'lat' or 'lng' column missing")]
    MissingCoordinates,
}

/// A row that broke the coordinate contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RowProblem {
    pub index: usize,
    pub reason: &'static str,
    pub row: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub records: usize,
    pub problems: Vec<RowProblem>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

fn column_index(columns: &[Value], name: &str) -> Option<usize> {
    columns.iter().position(|c| c.as_str() == Some(name))
}

/// Check that every row carries a present, numeric `lat`/`lng` pair.
pub fn check_payload(body: &Value) -> Result<Report, PayloadError> {
    let (Some(columns), Some(rows)) = (
        body.get("columns").and_then(Value::as_array),
        body.get("data").and_then(Value::as_array),
    ) else {
        return Err(match body.get("error").and_then(Value::as_str) {
            Some(e) => PayloadError::ServerError(e.to_string()),
            None => PayloadError::NotSplit,
        });
    };

    let lat = column_index(columns, "lat").ok_or(PayloadError::MissingCoordinates)?;
    let lng = column_index(columns, "lng").ok_or(PayloadError::MissingCoordinates)?;

    let mut problems = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let pair = (
            row.get(lat).unwrap_or(&Value::Null),
            row.get(lng).unwrap_or(&Value::Null),
        );
        let reason = match pair {
            (Value::Null, _) | (_, Value::Null) => "None coordinates",
            (a, b) if !a.is_number() || !b.is_number() => "coordinates not numbers",
            _ => continue,
        };
        problems.push(RowProblem {
            index,
            reason,
            row: row.clone(),
        });
    }

    Ok(Report {
        records: rows.len(),
        problems,
    })
}
