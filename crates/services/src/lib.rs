#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizLoopError;
pub use quiz::{QuizDriver, QuizHandle, QuizLoopService, RunningQuiz};
