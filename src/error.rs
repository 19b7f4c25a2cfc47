// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures while retrieving the remote archive.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failures while opening the downloaded payload as a ZIP archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("payload is not a valid ZIP archive")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive contains no file entries")]
    NoEntries,

    #[error("reading archive entry {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Every way a single fetch → parse → write run can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid selector (period {period}, weighting '{weighting}'): \
         period must be 1 or 12 and weighting 'value' or 'equal'"
    )]
    InvalidSelector { period: String, weighting: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("section not found: '{0}'")]
    SectionNotFound(String),

    #[error("section '{0}' yielded no data rows")]
    EmptyTable(String),

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NumericConversion {
        row: usize,
        column: String,
        value: String,
    },

    #[error("writing {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
