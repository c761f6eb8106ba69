mod announcement;
mod auction;
mod market_state;
mod offer;
mod player;
mod team;
mod transfer;

pub use announcement::MarketAnnouncement;
pub use auction::{Auction, AuctionSummary, Bid};
pub use market_state::MarketState;
pub use offer::{OfferId, PrivateOffer, PublicOffer};
pub use player::Player;
pub use team::Team;
pub use transfer::{HistoryEntry, TransferDetails, TransferId, TransferKind};
