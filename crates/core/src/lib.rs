#![forbid(unsafe_code)]

pub mod bank;
pub mod model;
pub mod time;

pub use bank::{QuizPreset, UnknownPreset};
pub use time::Countdown;
