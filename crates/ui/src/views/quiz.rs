use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::QuizPreset;
use services::QuizHandle;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuestionCardVm, QuizResultVm, QuizScreenVm, map_quiz_snapshot};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn start_quiz(ctx: &AppContext, preset: QuizPreset) -> Result<QuizHandle, ViewError> {
    let (handle, driver) = ctx.quiz_loop().start(preset).map_err(|err| {
        tracing::warn!(%err, %preset, "failed to start quiz");
        ViewError::from_quiz(&err)
    })?;
    // Scoped to the calling component: the timer is dropped when it unmounts.
    spawn(driver.run());
    Ok(handle)
}

#[component]
pub fn QuizView(preset: QuizPreset) -> Element {
    rsx! {
        div { class: "page quiz", id: "quiz-root",
            h2 { "{preset.title()}" }
            // Keyed so that switching presets tears down the old timer.
            ActiveQuiz { key: "{preset}", preset }
            Link { to: Route::Home {}, "Back to quizzes" }
        }
    }
}

#[component]
fn ActiveQuiz(preset: QuizPreset) -> Element {
    let ctx = use_context::<AppContext>();
    let started = use_hook(|| start_quiz(&ctx, preset));

    let mut snapshot = use_signal({
        let started = started.clone();
        move || started.as_ref().ok().map(QuizHandle::snapshot)
    });

    let subscription = started.clone();
    use_future(move || {
        let subscription = subscription.clone();
        async move {
            let Ok(handle) = subscription else {
                return;
            };
            let mut snapshots = handle.subscribe();
            while snapshots.changed().await.is_ok() {
                let next = snapshots.borrow_and_update().clone();
                snapshot.set(Some(next));
            }
        }
    });

    let answers = started.clone();
    let on_answer = use_callback(move |(index, choice): (usize, String)| {
        if let Ok(handle) = &answers {
            if let Err(err) = handle.submit_answer(index, choice) {
                tracing::warn!(%err, "answer not delivered");
            }
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(on_answer);
        }
    });

    if let Err(err) = started {
        return rsx! {
            p { class: "error", "{err.message()}" }
        };
    }

    let screen = snapshot.read().as_ref().map(map_quiz_snapshot);
    match screen {
        Some(QuizScreenVm::Question(vm)) => {
            let index = vm.index;
            rsx! {
                QuestionCard {
                    vm,
                    on_answer: move |choice: String| on_answer.call((index, choice)),
                }
            }
        }
        Some(QuizScreenVm::Result(vm)) => rsx! {
            ResultCard { vm }
        },
        None => rsx! {
            p { "Loading..." }
        },
    }
}

#[component]
fn QuestionCard(vm: QuestionCardVm, on_answer: EventHandler<String>) -> Element {
    rsx! {
        div { class: "question-section",
            div { class: "question-count", "{vm.progress_label}" }
            div { class: "question-text", "{vm.prompt}" }
        }
        if !vm.choices.is_empty() {
            div { class: "answer-section",
                for choice in vm.choices.iter().cloned() {
                    AnswerButton { key: "{choice}", label: choice.clone(), on_answer }
                }
            }
        }
        div { class: vm.timer_class, "{vm.timer_label}" }
    }
}

#[component]
fn AnswerButton(label: String, on_answer: EventHandler<String>) -> Element {
    let choice = label.clone();

    rsx! {
        button {
            class: "answer",
            onclick: move |_| on_answer.call(choice.clone()),
            "{label}"
        }
    }
}

#[component]
fn ResultCard(vm: QuizResultVm) -> Element {
    rsx! {
        div { class: "score-section", "{vm.headline}" }
        p { class: "score-breakdown", "{vm.breakdown}" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    answer: Rc<RefCell<Option<Callback<(usize, String)>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, answer: Callback<(usize, String)>) {
        *self.answer.borrow_mut() = Some(answer);
    }

    pub(crate) fn answer(&self) -> Callback<(usize, String)> {
        (*self.answer.borrow()).expect("quiz answer registered")
    }
}
