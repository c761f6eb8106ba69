use chrono::Utc;
use liga_core::Timestamp;
use liga_ports::Clock;

/// Wall-clock UTC time, used when the market runs for real
///
/// Stamps history entries and anything else the engine dates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "system"
    }
}
