use serde::{Deserialize, Serialize};

/// Render-ready view of a quiz at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizSnapshot {
    InProgress(QuestionSnapshot),
    Finished(QuizResult),
}

impl QuizSnapshot {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    #[must_use]
    pub fn question(&self) -> Option<&QuestionSnapshot> {
        match self {
            Self::InProgress(question) => Some(question),
            Self::Finished(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            Self::Finished(result) => Some(result),
            Self::InProgress(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSnapshot {
    /// Zero-based position of the current question.
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    /// Empty when the quiz does not show choices.
    pub choices: Vec<String>,
    pub seconds_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// `None` when scoring is disabled.
    pub score: Option<u32>,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub timed_out: usize,
}
