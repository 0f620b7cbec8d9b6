mod features;
mod ids;
mod question;
mod session;
mod settings;
mod snapshot;

pub use features::QuizFeatures;
pub use ids::QuestionId;
pub use question::{AnswerKey, Question, QuestionDraft, QuestionError};
pub use session::{
    Advance, AnswerOutcome, QuestionOutcome, QuizSession, QuizSessionError, TickOutcome,
};
pub use settings::{QuizSettings, QuizSettingsDraft, QuizSettingsError};
pub use snapshot::{QuestionSnapshot, QuizResult, QuizSnapshot};
