// Typing animation
//
// Reveals a fixed string one char per interval. It owns no timer: the caller
// feeds elapsed time through `advance` from whatever tick it already has, so
// dropping the Typewriter is all it takes to stop it.

use std::time::Duration;

/// Floor for the reveal interval
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    total: usize,
    revealed: usize,
    interval: Duration,
    /// Elapsed time not yet spent on a char
    carry: Duration,
    cancelled: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        Self {
            total: text.chars().count(),
            text,
            revealed: 0,
            interval: interval.max(MIN_INTERVAL),
            carry: Duration::ZERO,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time. Returns true when more text became visible.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_done() {
            return false;
        }

        self.carry += elapsed;
        let steps = self.carry.as_nanos() / self.interval.as_nanos();
        if steps == 0 {
            return false;
        }
        let remaining = self.total - self.revealed;
        if steps >= remaining as u128 {
            self.revealed = self.total;
            self.carry = Duration::ZERO;
        } else {
            // Bounded by the remaining char count
            self.carry -= self.interval * steps as u32;
            self.revealed += steps as usize;
        }
        true
    }

    /// The revealed prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((i, _)) => &self.text[..i],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.cancelled || self.revealed >= self.total
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop revealing; the visible prefix is frozen
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Jump to the full text
    pub fn finish(&mut self) {
        self.revealed = self.total;
    }
}
