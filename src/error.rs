//! Error types for report generation.
//!
//! Layout itself cannot fail: malformed field values degrade to fallbacks
//! and every input produces a document. Errors only arise at the edges,
//! parsing incident JSON and writing the finished file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The report could not be written to disk.
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The incident payload was not valid JSON for the expected shape.
    #[error("invalid incident JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
