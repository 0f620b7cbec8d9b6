mod args;
mod headless;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizPreset;
use services::QuizLoopService;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::args::{Args, Command};

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    default_preset: QuizPreset,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn default_preset(&self) -> QuizPreset {
        self.default_preset
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn launch_desktop(quiz_loop: QuizLoopService, preset: QuizPreset) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop: Arc::new(quiz_loop),
        default_preset: preset,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let Some((cmd, parsed)) = args::parse(argv, Args::from_env()).map_err(|e| {
        eprintln!("{e}");
        args::print_usage();
        e
    })?
    else {
        args::print_usage();
        return Ok(());
    };

    let quiz_loop = QuizLoopService::new().with_seconds_per_question(parsed.seconds);
    tracing::info!(preset = %parsed.preset, seconds = parsed.seconds, ?cmd, "starting");

    match cmd {
        Command::Ui => {
            launch_desktop(quiz_loop, parsed.preset);
            Ok(())
        }
        Command::Headless => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(headless::run(quiz_loop, parsed.preset, parsed.json))
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
