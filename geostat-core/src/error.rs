//! Errors raised while reading or writing the dataset file.

use thiserror::Error;

/// Failure that aborts a dataset load or save.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header row lacks one of the required columns.
    #[error("missing expected column '{0}' in header")]
    MissingColumn(&'static str),

    #[error("dataset file has no header row")]
    EmptyFile,
}

/// Why a single row was skipped. The load continues past these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid number in '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("negative value in '{field}': {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("empty name")]
    EmptyName,

    #[error("empty continent")]
    EmptyContinent,
}

pub type Result<T> = std::result::Result<T, DatasetError>;
