/*!
 * Error types for the m2align application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while reading M2 records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum M2Error {
    /// The first line of a record is not a sentence line
    #[error("Line {line}: record does not start with a sentence line: {content}")]
    MissingSentence {
        /// 1-based line number in the corpus
        line: usize,
        /// The offending line
        content: String,
    },

    /// An edit line does not follow the 6-field grammar
    #[error("Line {line}: malformed edit line ({reason}): {content}")]
    MalformedEdit {
        /// 1-based line number in the corpus
        line: usize,
        /// What is wrong with it
        reason: String,
        /// The offending line
        content: String,
    },

    /// An edit span points outside the sentence it edits
    #[error("Line {line}: edit span {start}..{end} is out of bounds for a sentence of {len} tokens")]
    SpanOutOfBounds {
        /// 1-based line number in the corpus
        line: usize,
        /// Span start as written
        start: i64,
        /// Span end as written
        end: i64,
        /// Length of the sentence the span was applied to
        len: usize,
    },

    /// A line that is neither a sentence, annotation nor edit line
    #[error("Line {line}: unexpected line in record: {content}")]
    UnexpectedLine {
        /// 1-based line number in the corpus
        line: usize,
        /// The offending line
        content: String,
    },
}

/// Errors raised while loading the lexical resources
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A resource file could not be read
    #[error("Failed to read {kind} from {path}: {source}")]
    Unreadable {
        /// Resource kind (word list, tag map, lexicon)
        kind: &'static str,
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A resource line could not be parsed
    #[error("Invalid {kind} entry at line {line}: {content}")]
    InvalidEntry {
        /// Resource kind (word list, tag map, lexicon)
        kind: &'static str,
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },
}

/// Internal invariant violations of the alignment engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    /// Operations do not partition both token sequences
    #[error("Alignment does not partition the sentences: {0}")]
    Partition(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from record parsing
    #[error("M2 error: {0}")]
    M2(#[from] M2Error),

    /// Error from resource loading
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Error from the alignment engine
    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    /// Configuration is not usable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
