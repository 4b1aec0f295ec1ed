//! Error types for dataset loading.

use thiserror::Error;

/// Errors raised while loading the launch dataset.
///
/// Any of these is fatal at startup: the server refuses to run without a
/// well-formed dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}
