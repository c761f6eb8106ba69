//! Liga Clock Infrastructure
//!
//! Time sources for the transfer market:
//!
//! - [`SystemClock`]: wall-clock time for production
//! - [`ManualClock`]: frozen time that moves only when advanced
//!
//! ## Usage
//!
//! ```ignore
//! use liga_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let before = clock.now();
//! clock.advance(Duration::days(1));
//! assert!(clock.now() > before);
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use liga_ports::Clock;
