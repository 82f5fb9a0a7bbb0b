//! Error types for the recr-core library.

use thiserror::Error;

/// Main error type for the recr library.
///
/// The parsing operations themselves are total over arbitrary UTF-8 input
/// and report "nothing found" through `Option` / empty collections; errors
/// only arise on the configuration surface (loading rule tables and
/// vocabularies).
#[derive(Error, Debug)]
pub enum RecrError {
    /// Rule table or vocabulary error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when loading or validating categorization tables.
#[derive(Error, Debug)]
pub enum TableError {
    /// The JSON could not be deserialized.
    #[error("failed to parse table: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table contains no rules.
    #[error("table has no rules")]
    Empty,

    /// A rule has no keywords to match on.
    #[error("rule {0:?} has no keywords")]
    EmptyKeywords(String),

    /// A vocabulary list is empty.
    #[error("vocabulary list {0:?} is empty")]
    EmptyVocabulary(&'static str),
}

/// Result type for the recr library.
pub type Result<T> = std::result::Result<T, RecrError>;
