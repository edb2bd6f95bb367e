//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::QuizFailure;
use exam_core::model::QuestionError;

/// Errors emitted by a `QuestionGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("question generator is not configured")]
    Configuration,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl GenerationError {
    /// User-facing failure this error collapses to.
    #[must_use]
    pub fn failure(&self) -> QuizFailure {
        match self {
            GenerationError::Configuration => QuizFailure::Configuration,
            _ => QuizFailure::Generation,
        }
    }
}

/// Shape violations in a generator payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload has no `questions` collection")]
    MissingQuestions,
    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("expected {expected} questions, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}
