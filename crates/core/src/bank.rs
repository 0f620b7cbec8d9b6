//! Built-in question sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Question, QuestionDraft, QuestionError, QuestionId, QuizFeatures};

struct ChoiceEntry {
    prompt: &'static str,
    choices: [&'static str; 4],
    correct: &'static str,
}

struct OpenEntry {
    prompt: &'static str,
    answer: &'static str,
}

const AI_FUNDAMENTALS: [ChoiceEntry; 5] = [
    ChoiceEntry {
        prompt: "What is AI?",
        choices: [
            "Artificial Intelligence",
            "Artistic Interpretation",
            "Arbitrary Inclusion",
            "Antarctic Ice",
        ],
        correct: "Artificial Intelligence",
    },
    ChoiceEntry {
        prompt: "Who is known as the father of AI?",
        choices: ["John McCarthy", "Alan Turing", "Elon Musk", "John Lennon"],
        correct: "John McCarthy",
    },
    ChoiceEntry {
        prompt: "Which language is primarily used for AI?",
        choices: ["JavaScript", "Python", "C++", "Java"],
        correct: "Python",
    },
    ChoiceEntry {
        prompt: "What is machine learning?",
        choices: [
            "A branch of AI",
            "A coffee machine learning to make coffee",
            "Learning about machines",
            "None of the above",
        ],
        correct: "A branch of AI",
    },
    ChoiceEntry {
        prompt: "What is the Turing Test?",
        choices: [
            "A test for computer hardware",
            "A test for intelligence",
            "A physical test",
            "A test for programming skills",
        ],
        correct: "A test for intelligence",
    },
];

const GENERAL_TRIVIA: [OpenEntry; 5] = [
    OpenEntry {
        prompt: "What is 2 + 2?",
        answer: "4",
    },
    OpenEntry {
        prompt: "Capital of France?",
        answer: "Paris",
    },
    OpenEntry {
        prompt: "What does 'www' stand for in a website browser?",
        answer: "World Wide Web",
    },
    OpenEntry {
        prompt: "Year the first man landed on the moon?",
        answer: "1969",
    },
    OpenEntry {
        prompt: "Is Java a type of OS?",
        answer: "No",
    },
];

/// Multiple-choice questions about AI.
///
/// # Errors
///
/// Returns `QuestionError` if an entry fails validation.
pub fn ai_fundamentals() -> Result<Vec<Question>, QuestionError> {
    AI_FUNDAMENTALS
        .iter()
        .zip(1..)
        .map(|(entry, id)| {
            QuestionDraft::multiple_choice(entry.prompt, entry.choices, entry.correct)
                .validate(QuestionId::new(id))
        })
        .collect()
}

/// Short general-knowledge prompts with reference answers.
///
/// # Errors
///
/// Returns `QuestionError` if an entry fails validation.
pub fn general_trivia() -> Result<Vec<Question>, QuestionError> {
    GENERAL_TRIVIA
        .iter()
        .zip(1..)
        .map(|(entry, id)| {
            QuestionDraft::expected(entry.prompt, entry.answer).validate(QuestionId::new(id))
        })
        .collect()
}

/// A ready-made quiz: a question bank plus the features it runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPreset {
    /// Multiple-choice AI quiz with a final score.
    #[default]
    Scored,
    /// Timer-only trivia walk-through.
    Countdown,
}

impl QuizPreset {
    pub const ALL: [QuizPreset; 2] = [QuizPreset::Scored, QuizPreset::Countdown];

    #[must_use]
    pub fn features(self) -> QuizFeatures {
        match self {
            Self::Scored => QuizFeatures::scored(),
            Self::Countdown => QuizFeatures::timed_only(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuestionError` if the built-in bank fails validation.
    pub fn questions(self) -> Result<Vec<Question>, QuestionError> {
        match self {
            Self::Scored => ai_fundamentals(),
            Self::Countdown => general_trivia(),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Scored => "AI Fundamentals",
            Self::Countdown => "Trivia Countdown",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Countdown => "countdown",
        }
    }
}

impl fmt::Display for QuizPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quiz preset: {0} (expected scored or countdown)")]
pub struct UnknownPreset(pub String);

impl FromStr for QuizPreset {
    type Err = UnknownPreset;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scored" | "ai" => Ok(Self::Scored),
            "countdown" | "trivia" => Ok(Self::Countdown),
            _ => Err(UnknownPreset(raw.to_string())),
        }
    }
}
