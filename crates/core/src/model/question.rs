use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    /// Pick one of an ordered list of choices.
    Choices { choices: Vec<String>, correct: String },
    /// A reference answer shown for context only; never checked against input.
    Expected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub answer: AnswerKey,
}

impl QuestionDraft {
    #[must_use]
    pub fn multiple_choice<I, S>(
        prompt: impl Into<String>,
        choices: I,
        correct: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            answer: AnswerKey::Choices {
                choices: choices.into_iter().map(Into::into).collect(),
                correct: correct.into(),
            },
        }
    }

    #[must_use]
    pub fn expected(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: AnswerKey::Expected(answer.into()),
        }
    }

    /// Validate the draft and assign it an id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank or the answer key is malformed.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        match &self.answer {
            AnswerKey::Choices { choices, correct } => {
                if choices.is_empty() {
                    return Err(QuestionError::NoChoices);
                }
                for (i, choice) in choices.iter().enumerate() {
                    if choice.trim().is_empty() {
                        return Err(QuestionError::BlankChoice { position: i });
                    }
                    if choices[..i].contains(choice) {
                        return Err(QuestionError::DuplicateChoice(choice.clone()));
                    }
                }
                if !choices.contains(correct) {
                    return Err(QuestionError::CorrectNotInChoices(correct.clone()));
                }
            }
            AnswerKey::Expected(answer) => {
                if answer.trim().is_empty() {
                    return Err(QuestionError::EmptyAnswer);
                }
            }
        }

        Ok(Question {
            id,
            prompt,
            answer: self.answer,
        })
    }
}

/// An immutable, validated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    answer: AnswerKey,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Ordered choices, empty for expected-answer questions.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        match &self.answer {
            AnswerKey::Choices { choices, .. } => choices,
            AnswerKey::Expected(_) => &[],
        }
    }

    #[must_use]
    pub fn has_choices(&self) -> bool {
        matches!(self.answer, AnswerKey::Choices { .. })
    }

    #[must_use]
    pub fn correct_choice(&self) -> Option<&str> {
        match &self.answer {
            AnswerKey::Choices { correct, .. } => Some(correct),
            AnswerKey::Expected(_) => None,
        }
    }

    #[must_use]
    pub fn expected_answer(&self) -> Option<&str> {
        match &self.answer {
            AnswerKey::Expected(answer) => Some(answer),
            AnswerKey::Choices { .. } => None,
        }
    }

    /// Exact comparison against the correct choice.
    ///
    /// Strings outside the choice list are simply wrong, and expected-answer
    /// questions never match.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_choice() == Some(choice)
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("multiple-choice question has no choices")]
    NoChoices,

    #[error("choice {position} is blank")]
    BlankChoice { position: usize },

    #[error("duplicate choice: {0}")]
    DuplicateChoice(String),

    #[error("correct choice {0:?} is not one of the choices")]
    CorrectNotInChoices(String),

    #[error("expected answer is empty")]
    EmptyAnswer,
}
