//! Adapters for the market ports and configuration loading

mod announcer;
mod config;
mod history;
mod json_store;
mod memory_store;

pub use announcer::{BroadcastAnnouncer, LogAnnouncer, render};
pub use config::{ConfigError, EngineConfig, IntakeConfig, LeagueConfig};
pub use history::{HISTORY_FILE, InMemoryHistoryLog, JsonHistoryLog};
pub use json_store::{JsonFileStore, LEAGUE_FILE};
pub use memory_store::InMemoryStore;
