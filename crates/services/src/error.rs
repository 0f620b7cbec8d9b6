//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizSessionError, QuizSettingsError};

/// Errors emitted by `QuizLoopService` and `QuizHandle`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error("quiz timer is no longer running")]
    Closed,
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Session(#[from] QuizSessionError),
}
