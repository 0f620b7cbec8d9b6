use quiz_core::QuizPreset;
use services::QuizLoopService;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_loop};

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_presets() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for preset in QuizPreset::ALL {
        assert!(html.contains(preset.title()), "missing {} in {html}", preset.title());
    }
    assert!(html.contains("10 seconds"), "missing countdown length in {html}");
    assert!(html.contains("default"), "missing default badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scored_quiz_renders_first_question_with_choices() {
    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPreset::Scored));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1/5"), "missing progress in {html}");
    assert!(html.contains("What is AI?"), "missing prompt in {html}");
    assert!(html.contains("Artificial Intelligence"), "missing choice in {html}");
    assert!(html.contains("Antarctic Ice"), "missing choice in {html}");
    assert!(html.contains("Time left: 10 seconds"), "missing timer in {html}");
    assert_eq!(html.matches("class=\"answer\"").count(), 4, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_quiz_renders_prompt_without_choices() {
    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPreset::Countdown));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Trivia Countdown"), "missing title in {html}");
    assert!(html.contains("Question 1/5"), "missing progress in {html}");
    assert!(html.contains("What is 2 + 2?"), "missing prompt in {html}");
    assert!(!html.contains("answer-section"), "unexpected choices in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_start_error() {
    let quiz_loop = QuizLoopService::new().with_seconds_per_question(0);
    let mut harness =
        setup_view_harness_with_loop(ViewKind::Quiz(QuizPreset::Scored), quiz_loop);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("could not be started"),
        "missing error in {html}"
    );
    assert!(!html.contains("Question 1/5"), "unexpected question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_every_question_renders_the_score() {
    let answers = [
        "Artificial Intelligence",
        "John McCarthy",
        "Python",
        "A branch of AI",
        "A test for intelligence",
    ];
    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPreset::Scored));
    harness.rebuild();
    let answer = harness.quiz_handles.clone().expect("quiz handles").answer();

    for (index, choice) in answers.iter().enumerate() {
        answer.call((index, (*choice).to_string()));
        let expected = if index + 1 < answers.len() {
            format!("Question {}/5", index + 2)
        } else {
            "score-section".to_string()
        };
        let html = harness.drive_until(&expected).await;
        assert!(html.contains(&expected), "missing {expected} in {html}");
    }

    let html = harness.render();
    assert!(html.contains("You scored 5 out of 5"), "missing score in {html}");
    assert!(
        html.contains("Correct: 5 · Incorrect: 0 · Timed out: 0"),
        "missing breakdown in {html}"
    );
    assert!(!html.contains("class=\"answer\""), "unexpected choices in {html}");
}
