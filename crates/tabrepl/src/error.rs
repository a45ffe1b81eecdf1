//! Error types for tabrepl command evaluation.
//!
//! Every variant's `Display` text is exactly the message shown to the user.
//! Handlers return these; the evaluator turns them into message lines, so
//! none of them ever ends a session.

use thiserror::Error;

/// A command that could not be carried out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not one of the known commands.
    #[error("[Error] Command is invalid.")]
    InvalidCommand,

    /// The command needs a selected dataset and none is selected.
    #[error("[Error] No csv is selected.")]
    NoSelection,

    /// `load_file` was given no dataset name.
    #[error("[Error] File path not provided.")]
    MissingFilePath,

    /// `load_file` was given a name the registry does not know.
    #[error("[Error] File path is invalid.")]
    InvalidFilePath,

    /// The registry knows the name but its table is unusable.
    #[error("[Error] csv is corrupted.")]
    Corrupted,

    /// `search` was given no value.
    #[error("[Error] No search term provided.")]
    NoSearchTerm,

    /// `search` was given more than a column and a value.
    #[error("[Error] Too many search terms provided.")]
    TooManySearchTerms,

    /// The column name is not in the header.
    #[error("[Error] Column name not found in header.")]
    ColumnNotFound,

    /// The numeric column selector does not address a column.
    #[error("[Error] Column index out of bounds.")]
    ColumnIndexOutOfBounds,

    /// The query is not the one form the stub understands. Carries the
    /// query text as typed.
    #[error("[Error] This query command is not supported in mocking.")]
    UnsupportedQuery(String),
}

impl CommandError {
    /// Follow-up lines shown after the error message, without any prefix.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            CommandError::UnsupportedQuery(query) => vec![
                "Try the following commands instead".to_string(),
                format!("load_file {}", crate::commands::query::EXAMPLE_DATASET),
                format!("query {query}"),
            ],
            _ => Vec::new(),
        }
    }
}

/// A specialized Result type for command handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
