use crate::error::SessionError;

/// Default quiz length: 30 minutes.
pub const DEFAULT_QUIZ_SECONDS: u32 = 30 * 60;

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    /// This tick brought the countdown to zero.
    Expired,
    /// The countdown had already stopped; nothing changed.
    Halted,
}

/// Whole-second countdown. Driven externally, once per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    halted: bool,
}

impl Countdown {
    /// # Errors
    ///
    /// Returns `SessionError::ZeroDuration` when `seconds` is 0.
    pub fn new(seconds: u32) -> Result<Self, SessionError> {
        if seconds == 0 {
            return Err(SessionError::ZeroDuration);
        }
        Ok(Self {
            total: seconds,
            remaining: seconds,
            halted: false,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.halted {
            return TickOutcome::Halted;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.halted = true;
            return TickOutcome::Expired;
        }
        TickOutcome::Running {
            remaining: self.remaining,
        }
    }

    /// Stop ticking; `remaining` keeps its current value.
    pub fn halt(&mut self) {
        self.halted = true;
    }
}

/// Render seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}
