use quiz_core::model::{QuestionSnapshot, QuizResult, QuizSnapshot};

/// At or below this many seconds the timer is highlighted.
pub const URGENT_SECONDS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionCardVm),
    Result(QuizResultVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    /// Zero-based question index; answers are submitted against it.
    pub index: usize,
    pub progress_label: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub timer_label: String,
    pub timer_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub headline: String,
    pub breakdown: String,
}

#[must_use]
pub fn map_quiz_snapshot(snapshot: &QuizSnapshot) -> QuizScreenVm {
    match snapshot {
        QuizSnapshot::InProgress(question) => QuizScreenVm::Question(map_question(question)),
        QuizSnapshot::Finished(result) => QuizScreenVm::Result(map_result(result)),
    }
}

fn map_question(question: &QuestionSnapshot) -> QuestionCardVm {
    let timer_class = if question.seconds_remaining <= URGENT_SECONDS {
        "timer urgent"
    } else {
        "timer"
    };
    QuestionCardVm {
        index: question.index,
        progress_label: format!("Question {}/{}", question.index + 1, question.total),
        prompt: question.prompt.clone(),
        choices: question.choices.clone(),
        timer_label: format_time_left(question.seconds_remaining),
        timer_class,
    }
}

fn map_result(result: &QuizResult) -> QuizResultVm {
    let headline = match result.score {
        Some(score) => format!("You scored {score} out of {}", result.total),
        None => "Quiz complete".to_string(),
    };
    QuizResultVm {
        headline,
        breakdown: format!(
            "Correct: {} · Incorrect: {} · Timed out: {}",
            result.correct, result.incorrect, result.timed_out
        ),
    }
}

#[must_use]
pub fn format_time_left(seconds: u32) -> String {
    if seconds == 1 {
        "Time left: 1 second".to_string()
    } else {
        format!("Time left: {seconds} seconds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(index: usize, seconds_remaining: u32) -> QuizSnapshot {
        QuizSnapshot::InProgress(QuestionSnapshot {
            index,
            total: 5,
            prompt: "What is AI?".into(),
            choices: vec!["Artificial Intelligence".into(), "Antarctic Ice".into()],
            seconds_remaining,
        })
    }

    #[test]
    fn question_labels_are_one_based() {
        let QuizScreenVm::Question(vm) = map_quiz_snapshot(&question(1, 7)) else {
            panic!("expected question screen");
        };
        assert_eq!(vm.index, 1);
        assert_eq!(vm.progress_label, "Question 2/5");
        assert_eq!(vm.timer_label, "Time left: 7 seconds");
        assert_eq!(vm.timer_class, "timer");
        assert_eq!(vm.choices.len(), 2);
    }

    #[test]
    fn timer_turns_urgent_near_zero() {
        let QuizScreenVm::Question(vm) = map_quiz_snapshot(&question(0, 1)) else {
            panic!("expected question screen");
        };
        assert_eq!(vm.timer_label, "Time left: 1 second");
        assert_eq!(vm.timer_class, "timer urgent");
    }

    #[test]
    fn result_with_score_shows_score_line() {
        let snapshot = QuizSnapshot::Finished(QuizResult {
            score: Some(4),
            total: 5,
            correct: 4,
            incorrect: 1,
            timed_out: 0,
        });
        let QuizScreenVm::Result(vm) = map_quiz_snapshot(&snapshot) else {
            panic!("expected result screen");
        };
        assert_eq!(vm.headline, "You scored 4 out of 5");
        assert_eq!(vm.breakdown, "Correct: 4 · Incorrect: 1 · Timed out: 0");
    }

    #[test]
    fn result_without_scoring_says_complete() {
        let snapshot = QuizSnapshot::Finished(QuizResult {
            score: None,
            total: 3,
            correct: 0,
            incorrect: 0,
            timed_out: 3,
        });
        let QuizScreenVm::Result(vm) = map_quiz_snapshot(&snapshot) else {
            panic!("expected result screen");
        };
        assert_eq!(vm.headline, "Quiz complete");
    }
}
