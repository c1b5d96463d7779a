//! Error types for vocab-core.

use thiserror::Error;

use crate::types::LessonTag;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Fatal errors while parsing a word list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("header is missing the required column {label:?}")]
    MissingColumn { label: String },
}

/// A data row whose field count does not match the header.
///
/// Not fatal: the row is dropped and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row at line {line} has {found} fields, expected {expected}: {row}")]
pub struct MalformedRowError {
    pub line: usize,
    pub expected: usize,
    pub found: usize,
    pub row: String,
}

/// Failure reported by a score store backend.
#[derive(Debug, Error)]
#[error("score store failure: {0}")]
pub struct StoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}

/// Errors surfaced by the session controller.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no words available, select at least one lesson")]
    NoQuestionsAvailable,

    #[error("no question is currently displayed")]
    NoCurrentQuestion,

    #[error("unknown lesson {}", display_lesson(.0))]
    UnknownLesson(LessonTag),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn display_lesson(lesson: &LessonTag) -> String {
    match lesson {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    }
}
