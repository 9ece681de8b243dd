use std::path::PathBuf;

use thiserror::Error;

/// Fatal setup errors. Everything at or below session-line granularity is
/// absorbed where it happens and never reaches this type.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Claude data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("Failed to read Claude data file {}: {source}", path.display())]
    DataFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse Claude data file {}: {source}", path.display())]
    DataFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported export format: {0} (expected json or markdown)")]
    UnsupportedFormat(String),

    #[error("Invalid sort specification: {0} (expected [+|-]name or [+|-]size)")]
    InvalidSort(String),

    #[error("Failed to serialize export: {0}")]
    ExportSerialize(#[source] serde_json::Error),

    #[error("Failed to write export to {}: {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
