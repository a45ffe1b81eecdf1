//! Error types for tabrepl-data operations.

use thiserror::Error;

/// The error type for tabrepl-data operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No dataset with this name is known to the source.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// A table has no header row.
    #[error("Table has no header row")]
    MissingHeader,

    /// A row's width differs from the header's.
    #[error("Row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        /// Index of the offending row (the header is row 0).
        row: usize,
        /// Header width.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// The source knows the name but could not produce a table for it.
    #[error("Dataset '{name}' is corrupted: {reason}")]
    Corrupted {
        /// Dataset name.
        name: String,
        /// What went wrong.
        reason: String,
    },
}

impl Error {
    /// Whether this error means the named dataset exists but is unusable.
    pub fn is_corruption(&self) -> bool {
        !matches!(self, Error::UnknownDataset(_))
    }
}

/// A specialized Result type for tabrepl-data operations.
pub type Result<T> = std::result::Result<T, Error>;
