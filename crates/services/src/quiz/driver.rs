use std::time::Duration;

use quiz_core::model::{AnswerOutcome, QuizSession, QuizSnapshot, TickOutcome};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::QuizLoopError;

#[derive(Debug)]
enum QuizCommand {
    SubmitAnswer { index: usize, choice: String },
}

/// Input and output side of a running quiz.
///
/// The driver stops once every clone of the handle has been dropped.
#[derive(Clone, Debug)]
pub struct QuizHandle {
    commands: mpsc::UnboundedSender<QuizCommand>,
    snapshots: watch::Receiver<QuizSnapshot>,
}

impl QuizHandle {
    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.clone()
    }

    /// Queue an answer for the question at `index`, as taken from the snapshot
    /// the player was shown. The answer is dropped if the quiz has moved on
    /// by the time the driver sees it.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Closed` if the driver has stopped.
    pub fn submit_answer(
        &self,
        index: usize,
        choice: impl Into<String>,
    ) -> Result<(), QuizLoopError> {
        self.commands
            .send(QuizCommand::SubmitAnswer {
                index,
                choice: choice.into(),
            })
            .map_err(|_| QuizLoopError::Closed)
    }

    /// True while the driver is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }
}

/// Owns the session and its timer. All state changes happen inside [`QuizDriver::run`],
/// one event at a time.
#[derive(Debug)]
pub struct QuizDriver {
    session: QuizSession,
    tick_period: Duration,
    commands: mpsc::UnboundedReceiver<QuizCommand>,
    snapshots: watch::Sender<QuizSnapshot>,
}

impl QuizDriver {
    #[must_use]
    pub fn new(session: QuizSession, tick_period: Duration) -> (QuizHandle, Self) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

        let handle = QuizHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        let driver = Self {
            session,
            tick_period,
            commands: command_rx,
            snapshots: snapshot_tx,
        };
        (handle, driver)
    }

    /// Drive the quiz until it finishes or every handle is dropped.
    pub async fn run(mut self) {
        let mut ticker = time::interval_at(Instant::now() + self.tick_period, self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            questions = self.session.question_count(),
            seconds = self.session.seconds_per_question(),
            "quiz timer started"
        );

        while !self.session.is_finished() {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.session.tick() {
                        TickOutcome::Expired(advance) => {
                            tracing::debug!(?advance, "question timed out");
                        }
                        outcome => tracing::trace!(?outcome, "tick"),
                    }
                }
                command = self.commands.recv() => {
                    let Some(QuizCommand::SubmitAnswer { index, choice }) = command else {
                        tracing::debug!("quiz handles dropped, stopping timer");
                        return;
                    };
                    let current = self.session.current_index();
                    if index != current {
                        tracing::trace!(index, current, "stale answer ignored");
                        continue;
                    }
                    match self.session.submit_answer(&choice) {
                        AnswerOutcome::Recorded { correct, advance } => {
                            tracing::debug!(correct, ?advance, "answer recorded");
                            // Full period for whichever question comes next.
                            ticker.reset();
                        }
                        AnswerOutcome::Ignored => {
                            tracing::trace!("answer ignored");
                            continue;
                        }
                    }
                }
            }

            self.snapshots.send_replace(self.session.snapshot());
        }

        tracing::info!(
            score = self.session.score(),
            total = self.session.question_count(),
            "quiz finished"
        );
    }
}
