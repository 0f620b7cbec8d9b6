use quiz_core::model::QuizSessionError;
use services::QuizLoopError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    InvalidSettings,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_quiz(err: &QuizLoopError) -> Self {
        match err {
            QuizLoopError::Session(QuizSessionError::EmptyQuestionSet) => Self::EmptyQuiz,
            QuizLoopError::Settings(_) => Self::InvalidSettings,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyQuiz => "This quiz has no questions yet.",
            Self::InvalidSettings => "This quiz could not be started with the current settings.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
