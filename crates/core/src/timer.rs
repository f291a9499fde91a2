//! Countdown module - the game clock as plain state
//!
//! `CountdownTimer` counts whole seconds. It does not own a clock: something
//! outside calls [`CountdownTimer::tick`] once per second (the runtime's tick
//! task in a live session, the test directly in unit tests). Expiry latches
//! and the timer stops itself, so ticks after expiry are no-ops.

use memory_match_types::TickOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    elapsed_secs: u32,
    duration_secs: u32,
    running: bool,
    expired: bool,
}

impl CountdownTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            elapsed_secs: 0,
            duration_secs,
            running: false,
            expired: false,
        }
    }

    /// Reset to zero and start counting.
    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.expired = false;
        self.running = true;
    }

    /// Stop counting. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if self.elapsed_secs >= self.duration_secs {
            self.expired = true;
            self.running = false;
            return TickOutcome::Expired;
        }

        TickOutcome::Running {
            elapsed_secs: self.elapsed_secs,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.duration_secs.saturating_sub(self.elapsed_secs)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
