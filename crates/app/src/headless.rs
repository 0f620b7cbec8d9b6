use std::io::{self, Write};

use quiz_core::QuizPreset;
use quiz_core::model::QuizSnapshot;
use services::{QuizHandle, QuizLoopError, QuizLoopService};
use tokio::io::{AsyncBufReadExt, BufReader};
use ui::vm::{QuizScreenVm, map_quiz_snapshot};

/// Map a line typed by the player to the index of the question on screen and a choice.
///
/// A 1-based number picks from the list; anything else is submitted as typed.
fn resolve_choice(shown: &QuizSnapshot, input: &str) -> Option<(usize, String)> {
    let question = shown.question()?;
    let input = input.trim();
    if input.is_empty() || question.choices.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        if let Some(choice) = n.checked_sub(1).and_then(|i| question.choices.get(i)) {
            return Some((question.index, choice.clone()));
        }
    }
    Some((question.index, input.to_string()))
}

/// Send an answer. Returns `false` once the quiz has already stopped.
fn deliver(handle: &QuizHandle, index: usize, choice: String) -> Result<bool, QuizLoopError> {
    match handle.submit_answer(index, choice) {
        Ok(()) => Ok(true),
        Err(QuizLoopError::Closed) => {
            tracing::debug!(index, "answer arrived after the quiz stopped");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

struct Printer {
    json: bool,
    last_index: Option<usize>,
}

impl Printer {
    fn new(json: bool) -> Self {
        Self {
            json,
            last_index: None,
        }
    }

    fn print(&mut self, snapshot: &QuizSnapshot) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            let line = serde_json::to_string(snapshot).map_err(io::Error::other)?;
            return writeln!(out, "{line}");
        }

        match map_quiz_snapshot(snapshot) {
            QuizScreenVm::Question(vm) => {
                let index = Some(vm.index);
                if index != self.last_index {
                    self.last_index = index;
                    writeln!(out)?;
                    writeln!(out, "{}: {}", vm.progress_label, vm.prompt)?;
                    for (i, choice) in vm.choices.iter().enumerate() {
                        writeln!(out, "  {}) {choice}", i + 1)?;
                    }
                }
                writeln!(out, "  {}", vm.timer_label)
            }
            QuizScreenVm::Result(vm) => {
                writeln!(out)?;
                writeln!(out, "{}", vm.headline)?;
                writeln!(out, "{}", vm.breakdown)
            }
        }
    }
}

/// Run a quiz in the terminal until it finishes or the user interrupts.
pub async fn run(
    service: QuizLoopService,
    preset: QuizPreset,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let running = service.spawn(preset)?;
    let handle = running.handle().clone();
    let mut snapshots = handle.subscribe();
    let mut printer = Printer::new(json);

    let mut shown = snapshots.borrow_and_update().clone();
    printer.print(&shown)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                shown = snapshots.borrow_and_update().clone();
                printer.print(&shown)?;
                if shown.is_finished() {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        if let Some((index, choice)) = resolve_choice(&shown, &line) {
                            // A stopped quiz still publishes its result below.
                            stdin_open = deliver(&handle, index, choice)?;
                        }
                    }
                    None => {
                        tracing::debug!("stdin closed, continuing on the timer");
                        stdin_open = false;
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!(%preset, "quiz interrupted");
                break;
            }
        }
    }

    drop(running);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionSnapshot;

    fn snapshot(choices: &[&str]) -> QuizSnapshot {
        QuizSnapshot::InProgress(QuestionSnapshot {
            index: 2,
            total: 1,
            prompt: "Which language is primarily used for AI?".into(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            seconds_remaining: 10,
        })
    }

    #[test]
    fn numbers_pick_choices() {
        let current = snapshot(&["JavaScript", "Python"]);
        assert_eq!(resolve_choice(&current, " 2 "), Some((2, "Python".into())));
        assert_eq!(resolve_choice(&current, "Python"), Some((2, "Python".into())));
    }

    #[test]
    fn out_of_range_numbers_are_submitted_as_text() {
        let current = snapshot(&["JavaScript", "Python"]);
        assert_eq!(resolve_choice(&current, "0"), Some((2, "0".into())));
        assert_eq!(resolve_choice(&current, "9"), Some((2, "9".into())));
    }

    #[test]
    fn blank_lines_and_choiceless_questions_submit_nothing() {
        assert_eq!(resolve_choice(&snapshot(&["A"]), "   "), None);
        assert_eq!(resolve_choice(&snapshot(&[]), "4"), None);
    }

    #[test]
    fn answers_after_the_quiz_stopped_are_not_errors() {
        let (handle, driver) = QuizLoopService::new().start(QuizPreset::Scored).unwrap();
        assert!(deliver(&handle, 0, "Python".into()).unwrap());

        drop(driver);
        assert!(!deliver(&handle, 0, "Python".into()).unwrap());
    }
}
