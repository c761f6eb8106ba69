use serde::{Deserialize, Serialize};

use super::TransferDetails;

/// Events broadcast to human-facing channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketAnnouncement {
    MarketOpened,
    MarketClosed { transfers: Vec<TransferDetails> },
    PrivateTransfer(TransferDetails),
    ClausePaid(TransferDetails),
    DailyIntake { players: Vec<String> },
}

impl MarketAnnouncement {
    /// Transfers carried by this announcement
    pub fn transfers(&self) -> &[TransferDetails] {
        match self {
            MarketAnnouncement::MarketClosed { transfers } => transfers,
            MarketAnnouncement::PrivateTransfer(details)
            | MarketAnnouncement::ClausePaid(details) => std::slice::from_ref(details),
            MarketAnnouncement::MarketOpened | MarketAnnouncement::DailyIntake { .. } => &[],
        }
    }
}
