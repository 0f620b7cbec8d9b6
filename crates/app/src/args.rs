use quiz_core::{QuizPreset, UnknownPreset};
use quiz_core::time::DEFAULT_SECONDS_PER_QUESTION;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --seconds value: {raw}")]
    InvalidSeconds { raw: String },
    #[error(transparent)]
    Preset(#[from] UnknownPreset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Headless,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "headless" => Some(Self::Headless),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub preset: QuizPreset,
    pub seconds: u32,
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            preset: QuizPreset::default(),
            seconds: DEFAULT_SECONDS_PER_QUESTION,
            json: false,
        }
    }
}

impl Args {
    /// Defaults overridden by `QUIZ_PRESET` and `QUIZ_SECONDS`.
    pub fn from_env() -> Self {
        let mut args = Self::default();
        if let Ok(raw) = std::env::var("QUIZ_PRESET") {
            match raw.parse() {
                Ok(preset) => args.preset = preset,
                Err(err) => tracing::warn!(%err, "ignoring QUIZ_PRESET"),
            }
        }
        if let Ok(raw) = std::env::var("QUIZ_SECONDS") {
            match parse_seconds(&raw) {
                Ok(seconds) => args.seconds = seconds,
                Err(err) => tracing::warn!(%err, "ignoring QUIZ_SECONDS"),
            }
        }
        args
    }

    fn apply_flags(
        mut self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz" => {
                    let value = require_value(args, "--quiz")?;
                    self.preset = value.parse()?;
                }
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    self.seconds = parse_seconds(&value)?;
                }
                "--json" => self.json = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Some(self))
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seconds(raw: &str) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ArgsError::InvalidSeconds {
            raw: raw.to_string(),
        }),
    }
}

/// Parse the command line on top of `defaults`.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse(argv: Vec<String>, defaults: Args) -> Result<Option<(Command, Args)>, ArgsError> {
    let mut iter = argv.into_iter().peekable();

    // No subcommand launches the UI.
    let cmd = match iter.peek().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            let cmd = Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
            iter.next();
            cmd
        }
    };

    Ok(defaults.apply_flags(&mut iter)?.map(|args| (cmd, args)))
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--quiz <scored|countdown>] [--seconds <n>]");
    eprintln!("  cargo run -p app -- headless [--quiz <scored|countdown>] [--seconds <n>] [--json]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --quiz scored");
    eprintln!("  --seconds {DEFAULT_SECONDS_PER_QUESTION}");
    eprintln!();
    eprintln!("Headless mode reads answers from stdin as a choice number or the choice text.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_PRESET, QUIZ_SECONDS, QUIZ_LOG (tracing filter, default info)");
}
