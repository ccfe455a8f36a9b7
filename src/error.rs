//! Error types for loading and sanitizing the restaurant dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Table-shape failures. Any of these aborts the whole pipeline.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The source file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not usable tabular data.
    #[error("malformed dataset: {0}")]
    SourceMalformed(#[from] Malformed),
}

/// Reasons a source is rejected as malformed.
#[derive(Debug, Error)]
pub enum Malformed {
    /// CSV syntax, I/O or UTF-8 failure inside the reader.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// The file has no header row.
    #[error("no header row")]
    NoHeader,

    /// A record carries more fields than the header names.
    #[error("record {record} has {found} fields, header has {expected}")]
    TooManyFields {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// A required column is absent after header normalization.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::SourceMalformed(Malformed::Csv(err))
    }
}
