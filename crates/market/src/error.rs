use liga_core::{Money, TeamId};
use liga_ports::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("No team for captain role: {0}")]
    TeamUnresolved(String),

    #[error("Teams not found for roles: seller={seller_role}, buyer={buyer_role}")]
    TeamsUnresolved {
        seller_role: String,
        buyer_role: String,
    },

    #[error("No private offer for {player} in inbox of {role}")]
    OfferNotFound { role: String, player: String },

    #[error("Player is blinded: {0}")]
    Blinded(String),

    #[error("Player is a captain: {0}")]
    IsCaptain(String),

    #[error("Team {team} already completed {limit} transfers this window")]
    Limit { team: TeamId, limit: u8 },

    #[error("Player {player} is not owned by {seller}")]
    NotOwnedBySeller { player: String, seller: String },

    #[error("Insufficient budget: required={required}, available={available}")]
    InsufficientBudget { required: Money, available: Money },

    #[error("Team {0} cannot bid on its own player")]
    SelfBid(TeamId),

    #[error("No active auction for player: {0}")]
    NoSuchAuction(String),

    #[error("Player has no clause: {0}")]
    NoClause(String),

    #[error("Player has no recorded owner: {0}")]
    NoOwner(String),

    #[error("Valuation needs at least one entry")]
    Empty,

    #[error("Too many valuation entries: {count} (max {max})")]
    TooMany { count: usize, max: usize },

    #[error("Valuation total {total} exceeds {budget}")]
    OverBudget { total: Money, budget: Money },

    #[error("Negative value for player {player}: {value}")]
    NegativeValue { player: String, value: Money },

    #[error("Transfer failed: {0}")]
    TransferFailed(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Market engine unavailable")]
    EngineUnavailable,

    #[error("Failed to start market engine: {0}")]
    EngineSpawn(#[source] std::io::Error),
}

impl MarketError {
    /// Whether this is the per-window transfer cap
    pub fn is_limit(&self) -> bool {
        matches!(self, MarketError::Limit { .. })
    }

    /// Keep LIMIT as is, fold every other transfer failure into `TransferFailed`
    pub(crate) fn into_transfer_failure(self) -> Self {
        match self {
            err @ MarketError::Limit { .. } => err,
            err @ MarketError::Store(_) => err,
            other => MarketError::TransferFailed(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
