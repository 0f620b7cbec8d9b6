mod driver;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizLoopError;
pub use driver::{QuizDriver, QuizHandle};
pub use service::{QuizLoopService, RunningQuiz};
