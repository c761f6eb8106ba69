use arc_swap::ArcSwap;
use liga_core::{
    AuctionSummary, HistoryEntry, Money, Player, PrivateOffer, PublicOffer, TransferDetails,
};
use liga_ports::HistoryLog;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use super::command::{MarketCommand, Reply};
use crate::domain::League;
use crate::error::{MarketError, Result};

/// Cloneable front door to the market engine
///
/// Mutations are queued to the engine and awaited; reads go to the
/// last committed snapshot and never wait on the writer.
#[derive(Clone)]
pub struct MarketHandle {
    sender: mpsc::Sender<MarketCommand>,
    published: Arc<ArcSwap<League>>,
    history: Arc<dyn HistoryLog>,
}

impl MarketHandle {
    pub(crate) fn new(
        sender: mpsc::Sender<MarketCommand>,
        published: Arc<ArcSwap<League>>,
        history: Arc<dyn HistoryLog>,
    ) -> Self {
        Self {
            sender,
            published,
            history,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> MarketCommand) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(build(tx))
            .await
            .map_err(|_| MarketError::EngineUnavailable)?;
        rx.await.map_err(|_| MarketError::EngineUnavailable)?
    }

    // ============ Market lifecycle ============

    pub async fn open_market(&self) -> Result<()> {
        self.request(|response| MarketCommand::OpenMarket { response })
            .await
    }

    /// Resolve all auctions and close; returns the completed transfers
    pub async fn close_market(&self) -> Result<Vec<TransferDetails>> {
        self.request(|response| MarketCommand::CloseMarket { response })
            .await
    }

    pub async fn reset_transfer_window(&self) -> Result<()> {
        self.request(|response| MarketCommand::ResetTransferWindow { response })
            .await
    }

    // ============ Offers ============

    pub async fn post_public_offer(
        &self,
        player: &str,
        seller: &str,
        price: Money,
        locked: bool,
    ) -> Result<PublicOffer> {
        self.request(|response| MarketCommand::PostPublicOffer {
            player: player.to_string(),
            seller: seller.to_string(),
            price,
            locked,
            response,
        })
        .await
    }

    pub async fn remove_public_offer(&self, player: &str) -> Result<bool> {
        self.request(|response| MarketCommand::RemovePublicOffer {
            player: player.to_string(),
            response,
        })
        .await
    }

    pub async fn post_private_offer(
        &self,
        target_role: &str,
        player: &str,
        seller_role: &str,
        price: Money,
    ) -> Result<PrivateOffer> {
        self.request(|response| MarketCommand::PostPrivateOffer {
            target_role: target_role.to_string(),
            player: player.to_string(),
            seller_role: seller_role.to_string(),
            price,
            response,
        })
        .await
    }

    pub async fn accept_private_offer(
        &self,
        target_role: &str,
        player: &str,
    ) -> Result<TransferDetails> {
        self.request(|response| MarketCommand::AcceptPrivateOffer {
            target_role: target_role.to_string(),
            player: player.to_string(),
            response,
        })
        .await
    }

    // ============ Auctions ============

    pub async fn place_auction(
        &self,
        player: &str,
        seller: Option<&str>,
        start_price: Money,
    ) -> Result<()> {
        self.request(|response| MarketCommand::PlaceAuction {
            player: player.to_string(),
            seller: seller.map(str::to_string),
            start_price,
            response,
        })
        .await
    }

    pub async fn bid(&self, player: &str, captain_role: &str, amount: Money) -> Result<()> {
        self.request(|response| MarketCommand::Bid {
            player: player.to_string(),
            captain_role: captain_role.to_string(),
            amount,
            response,
        })
        .await
    }

    pub async fn daily_add(&self, count: usize) -> Result<Vec<String>> {
        self.request(|response| MarketCommand::DailyAdd { count, response })
            .await
    }

    // ============ Clauses, valuation, transfers ============

    pub async fn pay_clause(&self, player: &str, buyer_role: &str) -> Result<TransferDetails> {
        self.request(|response| MarketCommand::PayClause {
            player: player.to_string(),
            buyer_role: buyer_role.to_string(),
            response,
        })
        .await
    }

    pub async fn assign_values(
        &self,
        entries: Vec<(String, Money)>,
        actor_role: &str,
    ) -> Result<Vec<Player>> {
        self.request(|response| MarketCommand::AssignValues {
            entries,
            actor_role: actor_role.to_string(),
            response,
        })
        .await
    }

    pub async fn transfer(
        &self,
        player: &str,
        seller: Option<&str>,
        buyer: &str,
        price: Money,
    ) -> Result<TransferDetails> {
        self.request(|response| MarketCommand::Transfer {
            player: player.to_string(),
            seller: seller.map(str::to_string),
            buyer: buyer.to_string(),
            price,
            response,
        })
        .await
    }

    /// Ask the engine to stop after the commands already queued
    pub async fn shutdown(&self) -> Result<()> {
        self.sender
            .send(MarketCommand::Shutdown)
            .await
            .map_err(|_| MarketError::EngineUnavailable)
    }

    // ============ Reads ============

    /// Last committed league state
    pub fn snapshot(&self) -> Arc<League> {
        self.published.load_full()
    }

    pub fn is_open(&self) -> bool {
        self.published.load().is_open()
    }

    pub fn public_offers(&self) -> Vec<PublicOffer> {
        self.published.load().list_public_offers().to_vec()
    }

    pub fn auctions(&self) -> Vec<AuctionSummary> {
        self.published.load().list_auctions()
    }

    pub fn private_offers_for(&self, role: &str) -> Vec<PrivateOffer> {
        self.published.load().private_offers_for(role).to_vec()
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.entries()?)
    }
}
