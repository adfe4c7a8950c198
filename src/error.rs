use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a tree data table.
///
/// Field-level problems (a non-numeric diameter, a missing status cell)
/// are never errors: the loader normalizes them to documented defaults.
/// Only file-level and parser-level failures surface here.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input path did not resolve to a readable file.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but its content could not be interpreted as a
    /// delimited table.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Any other failure while reading the file.
    #[error("could not load {path}: {source}")]
    Failure {
        path: PathBuf,
        source: std::io::Error,
    },
}
