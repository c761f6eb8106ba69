//! Liga Core Domain
//!
//! Pure domain types for the Liga transfer market.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod rules;
pub mod snapshot;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Market listings
    Auction,
    AuctionSummary,
    Bid,
    // Announcements
    MarketAnnouncement,
    MarketState,
    OfferId,
    // League records
    Player,
    PrivateOffer,
    PublicOffer,
    Team,
    // Transfers
    HistoryEntry,
    TransferDetails,
    TransferId,
    TransferKind,
};
pub use rules::MarketRules;
pub use snapshot::LeagueSnapshot;
pub use values::{CaptainRole, Money, PlayerId, TeamId, Timestamp, lookup_key};
