use serde::{Deserialize, Serialize};

/// Optional behaviours a quiz can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizFeatures {
    /// Count correct answers.
    pub scoring: bool,
    /// Show choices and accept answers.
    pub choices: bool,
    /// End the quiz after the last question instead of holding on it.
    pub finished_state: bool,
}

impl QuizFeatures {
    /// Multiple choice with a final score.
    #[must_use]
    pub const fn scored() -> Self {
        Self {
            scoring: true,
            choices: true,
            finished_state: true,
        }
    }

    /// Timer-driven walk through the prompts, holding on the last one.
    #[must_use]
    pub const fn timed_only() -> Self {
        Self {
            scoring: false,
            choices: false,
            finished_state: false,
        }
    }
}

impl Default for QuizFeatures {
    fn default() -> Self {
        Self::scored()
    }
}
