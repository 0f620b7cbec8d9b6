use std::time::Duration;

use quiz_core::QuizPreset;
use quiz_core::model::{Question, QuizFeatures, QuizSession, QuizSettingsDraft};
use quiz_core::time::{DEFAULT_SECONDS_PER_QUESTION, DEFAULT_TICK_PERIOD};
use tokio::task::JoinHandle;

use super::driver::{QuizDriver, QuizHandle};
use crate::error::QuizLoopError;

/// Builds quiz sessions and the timers that drive them.
#[derive(Clone, Debug)]
pub struct QuizLoopService {
    seconds_per_question: u32,
    tick_period: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    #[must_use]
    pub fn with_seconds_per_question(mut self, seconds: u32) -> Self {
        self.seconds_per_question = seconds;
        self
    }

    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    /// Prepare a built-in quiz. The caller decides where the driver runs.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError` if the bank or settings fail validation.
    pub fn start(&self, preset: QuizPreset) -> Result<(QuizHandle, QuizDriver), QuizLoopError> {
        self.start_with(preset.questions()?, preset.features())
    }

    /// Prepare a quiz over an arbitrary question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` for an empty list or missing choices.
    /// Returns `QuizLoopError::Settings` for invalid feature combinations.
    pub fn start_with(
        &self,
        questions: Vec<Question>,
        features: QuizFeatures,
    ) -> Result<(QuizHandle, QuizDriver), QuizLoopError> {
        let settings = QuizSettingsDraft::new(features)
            .with_seconds_per_question(self.seconds_per_question)
            .validate()?;
        let session = QuizSession::new(questions, &settings)?;
        tracing::info!(
            questions = session.question_count(),
            seconds = settings.seconds_per_question(),
            "quiz session created"
        );
        Ok(QuizDriver::new(session, self.tick_period))
    }

    /// Start a built-in quiz on the tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError` if the quiz cannot be built.
    pub fn spawn(&self, preset: QuizPreset) -> Result<RunningQuiz, QuizLoopError> {
        let (handle, driver) = self.start(preset)?;
        Ok(RunningQuiz {
            handle,
            task: tokio::spawn(driver.run()),
        })
    }
}

impl Default for QuizLoopService {
    fn default() -> Self {
        Self::new()
    }
}

/// A quiz whose driver runs as a tokio task. Dropping it cancels the timer.
#[derive(Debug)]
pub struct RunningQuiz {
    handle: QuizHandle,
    task: JoinHandle<()>,
}

impl RunningQuiz {
    #[must_use]
    pub fn handle(&self) -> &QuizHandle {
        &self.handle
    }

    /// Wait for the driver to stop on its own.
    pub async fn wait(&mut self) {
        if let Err(err) = (&mut self.task).await {
            if err.is_panic() {
                tracing::error!(%err, "quiz driver panicked");
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RunningQuiz {
    fn drop(&mut self) {
        self.task.abort();
    }
}
