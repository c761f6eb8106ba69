use liga_core::{Money, Player, PrivateOffer, PublicOffer, TeamId, TransferDetails};
use tokio::sync::oneshot;

use crate::error::Result;

pub type Reply<T> = oneshot::Sender<Result<T>>;

/// Commands processed by the market engine, one transaction each
#[derive(Debug)]
pub enum MarketCommand {
    OpenMarket {
        response: Reply<()>,
    },

    /// Resolve every auction and close the market
    CloseMarket {
        response: Reply<Vec<TransferDetails>>,
    },

    PostPublicOffer {
        player: String,
        seller: TeamId,
        price: Money,
        locked: bool,
        response: Reply<PublicOffer>,
    },

    RemovePublicOffer {
        player: String,
        response: Reply<bool>,
    },

    PostPrivateOffer {
        target_role: String,
        player: String,
        seller_role: String,
        price: Money,
        response: Reply<PrivateOffer>,
    },

    AcceptPrivateOffer {
        target_role: String,
        player: String,
        response: Reply<TransferDetails>,
    },

    PlaceAuction {
        player: String,
        seller: Option<TeamId>,
        start_price: Money,
        response: Reply<()>,
    },

    Bid {
        player: String,
        captain_role: String,
        amount: Money,
        response: Reply<()>,
    },

    PayClause {
        player: String,
        buyer_role: String,
        response: Reply<TransferDetails>,
    },

    AssignValues {
        entries: Vec<(String, Money)>,
        actor_role: String,
        response: Reply<Vec<Player>>,
    },

    /// Seed auctions from eligible players
    DailyAdd {
        count: usize,
        response: Reply<Vec<String>>,
    },

    /// Administrative transfer outside any market mechanism
    Transfer {
        player: String,
        seller: Option<TeamId>,
        buyer: TeamId,
        price: Money,
        response: Reply<TransferDetails>,
    },

    ResetTransferWindow {
        response: Reply<()>,
    },

    Shutdown,
}
