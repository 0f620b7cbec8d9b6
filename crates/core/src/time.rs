use std::time::Duration;

/// Countdown length every question starts with.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 10;

/// Wall-clock period between two ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// A per-question countdown in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    start: u32,
    remaining: u32,
}

impl Countdown {
    /// Returns a full countdown of `start` seconds.
    #[must_use]
    pub fn new(start: u32) -> Self {
        Self {
            start,
            remaining: start,
        }
    }

    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Take one second off and return what is left. Never goes below zero.
    pub fn decrement(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn reset(&mut self) {
        self.remaining = self.start;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_QUESTION)
    }
}
