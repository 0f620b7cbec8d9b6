use thiserror::Error;

use crate::model::features::QuizFeatures;
use crate::time::DEFAULT_SECONDS_PER_QUESTION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    features: QuizFeatures,
    seconds_per_question: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct QuizSettingsDraft {
    pub features: QuizFeatures,
    pub seconds_per_question: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("seconds per question must be greater than zero")]
    ZeroSeconds,
    #[error("scoring requires the choices feature")]
    ScoringWithoutChoices,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new(features: QuizFeatures) -> Self {
        Self {
            features,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
        }
    }

    #[must_use]
    pub fn with_seconds_per_question(mut self, seconds: u32) -> Self {
        self.seconds_per_question = seconds;
        self
    }

    /// # Errors
    ///
    /// Returns `QuizSettingsError` for a zero countdown or scoring without choices.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        if self.seconds_per_question == 0 {
            return Err(QuizSettingsError::ZeroSeconds);
        }
        if self.features.scoring && !self.features.choices {
            return Err(QuizSettingsError::ScoringWithoutChoices);
        }

        Ok(QuizSettings {
            features: self.features,
            seconds_per_question: self.seconds_per_question,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn features(&self) -> QuizFeatures {
        self.features
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            features: QuizFeatures::default(),
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
        }
    }
}
