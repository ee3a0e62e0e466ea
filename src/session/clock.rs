//! Countdown display formatting and the one-second wall clock.

use std::time::{Duration, Instant};

/// Format a seconds count as `hh:mm:ss`.
#[must_use]
pub fn format_hhmmss(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// One-second wall clock for the player loop.
///
/// The player polls for input with a timeout that ends at the next second
/// boundary; when the boundary passes, the engine gets exactly one tick.
#[derive(Debug)]
pub struct TickClock {
    next: Instant,
}

impl TickClock {
    /// Start the clock; the first tick is due one second from now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            next: Instant::now() + Duration::from_secs(1),
        }
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Consume a due tick, if any, and schedule the next one.
    ///
    /// Delivers at most one tick per call; if the loop fell far behind,
    /// the schedule realigns rather than bursting missed ticks.
    pub fn tick_due(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next {
            return false;
        }

        self.next += Duration::from_secs(1);
        if self.next <= now {
            self.next = now + Duration::from_secs(1);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hhmmss() {
        assert_eq!(format_hhmmss(0), "00:00:00");
        assert_eq!(format_hhmmss(59), "00:00:59");
        assert_eq!(format_hhmmss(125), "00:02:05");
        assert_eq!(format_hhmmss(7260), "02:01:00");
    }

    #[test]
    fn test_format_hhmmss_rest_period() {
        assert_eq!(format_hhmmss(120), "00:02:00");
    }

    #[test]
    fn test_tick_clock_not_due_immediately() {
        let mut clock = TickClock::start();
        assert!(!clock.tick_due());
        assert!(clock.timeout() <= Duration::from_secs(1));
    }
}
