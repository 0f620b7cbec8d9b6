use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::QuizPreset;

use crate::context::AppContext;
use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:preset", QuizView)] Quiz { preset: QuizPreset },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let preset = ctx.default_preset();

    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz { preset }, "Play" } }
            }
        }
    }
}
