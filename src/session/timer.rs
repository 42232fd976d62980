//! Elapsed-time clock for a game session
//!
//! ```text
//! Stopped --start--> Running --stop--> Stopped
//!    ^                  |
//!    +------reset-------+      (reset always lands in Stopped with 0 seconds)
//! ```

use std::time::{Duration, Instant};

/// One tick per second
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Counts whole seconds while running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    elapsed_secs: u64,
    /// Deadline of the next tick; `None` while stopped
    next_tick: Option<Instant>,
}

impl SessionTimer {
    pub fn new() -> Self {
        SessionTimer {
            elapsed_secs: 0,
            next_tick: None,
        }
    }

    /// Begin ticking. Starting a running timer does nothing.
    pub fn start(&mut self, now: Instant) {
        if self.next_tick.is_none() {
            self.next_tick = Some(now + TICK_INTERVAL);
        }
    }

    /// Halt ticking, keeping the elapsed count
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Halt ticking and zero the count
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_secs = 0;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Apply every tick that has come due by `now`, returning how many fired.
    ///
    /// Deadlines advance by whole intervals so a late poll does not drift the clock.
    pub fn poll(&mut self, now: Instant) -> u64 {
        let Some(mut deadline) = self.next_tick else {
            return 0;
        };
        let mut fired = 0;
        while deadline <= now {
            self.elapsed_secs += 1;
            deadline += TICK_INTERVAL;
            fired += 1;
        }
        self.next_tick = Some(deadline);
        fired
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as `M:SS`
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(754), "12:34");
    }

    #[test]
    fn test_ticks_once_per_second() {
        let start = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(start);

        assert_eq!(timer.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(1000)), 1);
        assert_eq!(timer.poll(start + Duration::from_millis(3500)), 2);
        assert_eq!(timer.elapsed_secs(), 3);
    }

    #[test]
    fn test_stop_freezes_count() {
        let start = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(start);
        timer.poll(start + Duration::from_secs(2));
        timer.stop();

        assert_eq!(timer.poll(start + Duration::from_secs(10)), 0);
        assert_eq!(timer.elapsed_secs(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let start = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(start);
        timer.poll(start + Duration::from_secs(5));

        timer.reset();
        let once = timer.clone();
        timer.reset();

        assert_eq!(timer, once);
        assert_eq!(timer.elapsed_secs(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_twice_keeps_deadline() {
        let start = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(start);
        timer.start(start + Duration::from_millis(900));

        assert_eq!(timer.poll(start + Duration::from_secs(1)), 1);
    }
}
