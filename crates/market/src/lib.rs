//! Liga Market
//!
//! Transfer market engine for a fantasy football league: public listings,
//! private offers, English auctions, buyout clauses, player valuation and
//! a daily intake of new auctions.
//!
//! # Architecture
//!
//! - **Domain**: [`League`] and the market operations on it; pure and synchronous
//! - **Application**: [`MarketEngine`], the single writer that owns the league
//!   and commits one command at a time, and [`MarketHandle`] for callers
//! - **Infrastructure**: JSON persistence, history log, announcers, configuration
//!
//! # Example
//!
//! ```ignore
//! use liga_market::infrastructure::{InMemoryHistoryLog, InMemoryStore, LogAnnouncer};
//! use liga_market::{EnginePorts, MarketEngine, MarketEngineConfig};
//!
//! let ports = EnginePorts { /* store, history, announcer, clock */ };
//! let (market, _thread) = MarketEngine::spawn(rules, MarketEngineConfig::default(), ports)?;
//! market.place_auction("Pedri", None, dec!(15)).await?;
//! market.bid("Pedri", "Capitán de Betis", dec!(18)).await?;
//! let transfers = market.close_market().await?;
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{EnginePorts, IntakeScheduler, MarketEngine, MarketEngineConfig, MarketHandle};
pub use domain::{EntityStore, League};
pub use error::{MarketError, Result};
