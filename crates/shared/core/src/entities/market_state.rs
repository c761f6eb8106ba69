use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Auction, PrivateOffer, PublicOffer};
use crate::values::{TeamId, lookup_key};

/// Market-wide state: open flag, listings, inboxes and the clause ledger
///
/// Maps are keyed by [`lookup_key`] of the player name (auctions, owners)
/// or of the recipient role (private offers). Insertion order is kept so
/// auctions resolve in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub auctions: IndexMap<String, Auction>,
    #[serde(default)]
    pub offers: Vec<PublicOffer>,
    #[serde(default)]
    pub private_offers: IndexMap<String, Vec<PrivateOffer>>,
    /// Ownership ledger: team holding clause rights per player
    #[serde(default)]
    pub owners: IndexMap<String, TeamId>,
}

impl MarketState {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Auctions ============

    pub fn auction(&self, player_name: &str) -> Option<&Auction> {
        self.auctions.get(&lookup_key(player_name))
    }

    pub fn auction_mut(&mut self, player_name: &str) -> Option<&mut Auction> {
        self.auctions.get_mut(&lookup_key(player_name))
    }

    /// Insert or overwrite the auction for a player
    pub fn put_auction(&mut self, auction: Auction) {
        self.auctions
            .insert(lookup_key(&auction.player_name), auction);
    }

    /// Remove and return every auction in placement order
    pub fn drain_auctions(&mut self) -> Vec<Auction> {
        self.auctions.drain(..).map(|(_, a)| a).collect()
    }

    // ============ Public offers ============

    /// Replace any offer for the same player, then append
    pub fn put_public_offer(&mut self, offer: PublicOffer) {
        self.offers.retain(|o| o.player_id != offer.player_id);
        self.offers.push(offer);
    }

    pub fn remove_public_offer(&mut self, player_name: &str) -> bool {
        let key = lookup_key(player_name);
        let before = self.offers.len();
        self.offers.retain(|o| lookup_key(&o.player_name) != key);
        self.offers.len() != before
    }

    // ============ Private offers ============

    pub fn inbox(&self, role: &str) -> &[PrivateOffer] {
        self.private_offers
            .get(&lookup_key(role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn push_private_offer(&mut self, target_role: &str, offer: PrivateOffer) {
        self.private_offers
            .entry(lookup_key(target_role))
            .or_default()
            .push(offer);
    }

    /// Drop every offer for `player_name` from the recipient's inbox
    pub fn clear_private_offers(&mut self, target_role: &str, player_name: &str) -> usize {
        let key = lookup_key(player_name);
        match self.private_offers.get_mut(&lookup_key(target_role)) {
            Some(inbox) => {
                let before = inbox.len();
                inbox.retain(|o| lookup_key(&o.player_name) != key);
                before - inbox.len()
            }
            None => 0,
        }
    }

    // ============ Ownership ledger ============

    pub fn owner_of(&self, player_name: &str) -> Option<&TeamId> {
        self.owners.get(&lookup_key(player_name))
    }

    pub fn record_owner(&mut self, player_name: &str, team: impl Into<TeamId>) {
        self.owners.insert(lookup_key(player_name), team.into());
    }
}
