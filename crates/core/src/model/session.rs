use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    features::QuizFeatures,
    question::Question,
    settings::QuizSettings,
    snapshot::{QuestionSnapshot, QuizResult, QuizSnapshot},
};
use crate::time::Countdown;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("a quiz needs at least one question")]
    EmptyQuestionSet,

    #[error("question {index} has no choices but the quiz shows choices")]
    MissingChoices { index: usize },
}

/// What happened to a single question during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionOutcome {
    Pending,
    Correct,
    Incorrect,
    TimedOut,
}

/// Result of moving past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to `index` with a fresh countdown.
    Next { index: usize },
    /// Already on the last question; stays there with a fresh countdown.
    Held { index: usize },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Counting { seconds_remaining: u32 },
    /// The countdown reached zero on this tick.
    Expired(Advance),
    /// The session is finished; ticks do nothing.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded { correct: bool, advance: Advance },
    /// Finished, choices disabled, or the question was already answered.
    Ignored,
}

/// State of one quiz run: current question, countdown, score and completion.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    features: QuizFeatures,
    current_index: usize,
    countdown: Countdown,
    score: u32,
    outcomes: Vec<QuestionOutcome>,
    finished: bool,
}

impl QuizSession {
    /// Start a session on the first question with a full countdown.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::EmptyQuestionSet` when `questions` is empty.
    /// Returns `QuizSessionError::MissingChoices` when choices are enabled and
    /// a question has none.
    pub fn new(
        questions: Vec<Question>,
        settings: &QuizSettings,
    ) -> Result<Self, QuizSessionError> {
        if questions.is_empty() {
            return Err(QuizSessionError::EmptyQuestionSet);
        }
        let features = settings.features();
        if features.choices {
            if let Some(index) = questions.iter().position(|q| !q.has_choices()) {
                return Err(QuizSessionError::MissingChoices { index });
            }
        }

        let outcomes = vec![QuestionOutcome::Pending; questions.len()];
        Ok(Self {
            questions,
            features,
            current_index: 0,
            countdown: Countdown::new(settings.seconds_per_question()),
            score: 0,
            outcomes,
            finished: false,
        })
    }

    /// One second of wall-clock time has passed.
    ///
    /// The question advances on the tick that takes the countdown to zero.
    pub fn tick(&mut self) -> TickOutcome {
        if self.finished {
            return TickOutcome::Idle;
        }

        let seconds_remaining = self.countdown.decrement();
        if !self.countdown.is_expired() {
            return TickOutcome::Counting { seconds_remaining };
        }

        let outcome = &mut self.outcomes[self.current_index];
        if *outcome == QuestionOutcome::Pending {
            *outcome = QuestionOutcome::TimedOut;
        }
        TickOutcome::Expired(self.advance())
    }

    /// Move past the current question.
    pub fn advance(&mut self) -> Advance {
        if self.finished {
            return Advance::Finished;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.countdown.reset();
            Advance::Next {
                index: self.current_index,
            }
        } else if self.features.finished_state {
            self.finished = true;
            Advance::Finished
        } else {
            self.countdown.reset();
            Advance::Held {
                index: self.current_index,
            }
        }
    }

    /// Record an answer for the current question and move on.
    ///
    /// Any string is accepted; one that is not the correct choice counts as wrong.
    pub fn submit_answer(&mut self, choice: &str) -> AnswerOutcome {
        if self.finished || !self.features.choices {
            return AnswerOutcome::Ignored;
        }
        if self.outcomes[self.current_index] != QuestionOutcome::Pending {
            return AnswerOutcome::Ignored;
        }

        let correct = self.questions[self.current_index].is_correct(choice);
        self.outcomes[self.current_index] = if correct {
            QuestionOutcome::Correct
        } else {
            QuestionOutcome::Incorrect
        };
        if correct && self.features.scoring {
            self.score += 1;
        }

        AnswerOutcome::Recorded {
            correct,
            advance: self.advance(),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.countdown.start()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.count(QuestionOutcome::Correct) + self.count(QuestionOutcome::Incorrect)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn features(&self) -> QuizFeatures {
        self.features
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        if self.finished {
            return QuizSnapshot::Finished(QuizResult {
                score: self.features.scoring.then_some(self.score),
                total: self.questions.len(),
                correct: self.count(QuestionOutcome::Correct),
                incorrect: self.count(QuestionOutcome::Incorrect),
                timed_out: self.count(QuestionOutcome::TimedOut),
            });
        }

        let question = self.current_question();
        let choices = if self.features.choices {
            question.choices().to_vec()
        } else {
            Vec::new()
        };
        QuizSnapshot::InProgress(QuestionSnapshot {
            index: self.current_index,
            total: self.questions.len(),
            prompt: question.prompt().to_string(),
            choices,
            seconds_remaining: self.countdown.remaining(),
        })
    }

    fn count(&self, outcome: QuestionOutcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }
}
