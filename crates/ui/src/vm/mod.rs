mod quiz_vm;

pub use quiz_vm::{
    QuestionCardVm, QuizResultVm, QuizScreenVm, URGENT_SECONDS, format_time_left,
    map_quiz_snapshot,
};
