use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::values::{Money, TeamId, Timestamp};

/// Unique identifier for a history entry
pub type TransferId = Uuid;

/// Mechanism that produced a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Auction,
    PrivateOffer,
    Clause,
    /// Invoked directly on the transfer primitive
    Direct,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransferKind::Auction => "auction",
            TransferKind::PrivateOffer => "private offer",
            TransferKind::Clause => "clause",
            TransferKind::Direct => "direct",
        };
        f.write_str(label)
    }
}

/// Outcome of one completed ownership change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDetails {
    pub player: String,
    /// `None` for a free acquisition
    pub seller: Option<TeamId>,
    pub buyer: TeamId,
    pub price: Money,
    pub kind: TransferKind,
}

impl TransferDetails {
    pub fn is_free_acquisition(&self) -> bool {
        self.seller.is_none()
    }
}

/// Append-only record of a completed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: TransferId,
    pub player: String,
    pub seller: Option<TeamId>,
    pub buyer: TeamId,
    pub price: Money,
    pub kind: TransferKind,
    pub recorded_at: Timestamp,
}

impl HistoryEntry {
    /// Create an entry for a transfer with clock-provided time
    pub fn from_transfer(details: &TransferDetails, recorded_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            player: details.player.clone(),
            seller: details.seller.clone(),
            buyer: details.buyer.clone(),
            price: details.price,
            kind: details.kind,
            recorded_at,
        }
    }
}
