//! Tick counters
//!
//! One tick is one rendered frame. Every gameplay timer is an integer
//! countdown advanced once per tick; wall-clock time is only ever used to
//! display how long the run has lasted.

use serde::{Deserialize, Serialize};

/// Integer countdown decremented once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown(u32);

impl Countdown {
    /// A countdown that has already expired
    pub const fn idle() -> Self {
        Self(0)
    }

    pub const fn with_ticks(ticks: u32) -> Self {
        Self(ticks)
    }

    /// (Re)start with `ticks` remaining
    pub fn start(&mut self, ticks: u32) {
        self.0 = ticks;
    }

    /// Decrement if running. Returns whether it was running before the call.
    pub fn advance(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.0 > 0
    }

    pub fn remaining(&self) -> u32 {
        self.0
    }
}

/// Frame counter plus the timestamp the run started at
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    /// Ticks simulated while running
    pub frame: u64,
    /// Milliseconds timestamp captured on start
    pub started_at_ms: Option<f64>,
}

impl FrameClock {
    /// Record the start timestamp
    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Seconds since start (display only)
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        match self.started_at_ms {
            Some(start) => ((now_ms - start) / 1000.0).max(0.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_runs_to_zero_and_stops() {
        let mut timer = Countdown::with_ticks(2);
        assert!(timer.is_running());
        assert!(timer.advance());
        assert!(timer.advance());
        assert!(!timer.is_running());
        assert!(!timer.advance());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_clock_elapsed_before_and_after_start() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.elapsed_secs(5_000.0), 0.0);

        clock.start(1_000.0);
        assert!((clock.elapsed_secs(3_500.0) - 2.5).abs() < 1e-9);
    }
}
