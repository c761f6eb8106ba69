use chrono::{Duration, Utc};
use liga_core::Timestamp;
use liga_ports::Clock;
use parking_lot::RwLock;

/// Clock that only moves when told to
///
/// Used for deterministic history timestamps in tests and replays.
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `initial_time` (wall time if `None`)
    pub fn new(initial_time: Option<Timestamp>) -> Self {
        Self {
            current_time: RwLock::new(initial_time.unwrap_or_else(Utc::now)),
        }
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: Duration) {
        *self.current_time.write() += duration;
    }

    /// Explicitly set the time
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_is_frozen_until_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(Some(start));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::hours(24));
        assert_eq!(clock.now(), start + Duration::hours(24));

        clock.set_time(start);
        assert_eq!(clock.now(), start);
    }
}
