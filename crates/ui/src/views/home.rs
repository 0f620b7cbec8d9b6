use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::QuizPreset;

use crate::context::AppContext;
use crate::routes::Route;

fn preset_blurb(preset: QuizPreset) -> &'static str {
    match preset {
        QuizPreset::Scored => "Multiple choice, scored at the end.",
        QuizPreset::Countdown => "Prompts only. The clock moves you along.",
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let default_preset = ctx.default_preset();
    let seconds = ctx.quiz_loop().seconds_per_question();

    rsx! {
        div { class: "page",
            h2 { "Quizzes" }
            p { "Every question gets {seconds} seconds on the clock." }
            ul { class: "preset-list",
                for preset in QuizPreset::ALL {
                    li { key: "{preset}",
                        Link { to: Route::Quiz { preset }, "{preset.title()}" }
                        if preset == default_preset {
                            span { class: "badge", "default" }
                        }
                        p { "{preset_blurb(preset)}" }
                    }
                }
            }
        }
    }
}
