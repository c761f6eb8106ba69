//! Liga Ports
//!
//! Port definitions (traits) for the Liga transfer market.
//! These define the boundaries between the market engine and infrastructure.

mod announcement;
mod clock;
mod error;
mod history;
mod store;

pub use announcement::AnnouncementSink;
pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use history::HistoryLog;
pub use store::LeagueStore;
