use serde::{Deserialize, Serialize};

use crate::values::{CaptainRole, Money, TeamId};

/// A bid placed on an auction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub captain_role: CaptainRole,
    pub amount: Money,
}

impl Bid {
    pub fn new(captain_role: impl Into<CaptainRole>, amount: Money) -> Self {
        Self {
            captain_role: captain_role.into(),
            amount,
        }
    }
}

/// English auction for one player
///
/// `seller` is `None` when the player was unowned at placement.
/// Bids are kept in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub player_name: String,
    pub seller: Option<TeamId>,
    pub start_price: Money,
    #[serde(default)]
    pub bids: Vec<Bid>,
}

impl Auction {
    pub fn new(player_name: impl Into<String>, seller: Option<TeamId>, start_price: Money) -> Self {
        Self {
            player_name: player_name.into(),
            seller,
            start_price,
            bids: Vec::new(),
        }
    }

    pub fn push_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// Highest bid; the earliest one wins among equal maxima
    pub fn winning_bid(&self) -> Option<&Bid> {
        self.bids.iter().fold(None, |best, bid| match best {
            Some(current) if bid.amount <= current.amount => Some(current),
            _ => Some(bid),
        })
    }

    /// Highest bid amount, or the start price when nobody has bid
    pub fn top_price(&self) -> Money {
        self.winning_bid()
            .map(|b| b.amount)
            .unwrap_or(self.start_price)
    }
}

/// Read-only auction listing row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSummary {
    pub player_name: String,
    pub seller: Option<TeamId>,
    pub start_price: Money,
    pub top_price: Money,
    pub bid_count: usize,
}

impl From<&Auction> for AuctionSummary {
    fn from(auction: &Auction) -> Self {
        Self {
            player_name: auction.player_name.clone(),
            seller: auction.seller.clone(),
            start_price: auction.start_price,
            top_price: auction.top_price(),
            bid_count: auction.bids.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_winner_is_earliest_among_maxima() {
        let mut auction = Auction::new("Pedri", Some("barca".to_string()), dec!(5));
        auction.push_bid(Bid::new("RoleA", dec!(10)));
        auction.push_bid(Bid::new("RoleB", dec!(15)));
        auction.push_bid(Bid::new("RoleC", dec!(15)));

        let winner = auction.winning_bid().unwrap();
        assert_eq!(winner.captain_role.as_str(), "RoleB");
        assert_eq!(winner.amount, dec!(15));
    }

    #[test]
    fn test_lower_bid_after_higher_is_kept_but_loses() {
        let mut auction = Auction::new("Pedri", None, dec!(5));
        auction.push_bid(Bid::new("RoleA", dec!(20)));
        auction.push_bid(Bid::new("RoleB", dec!(12)));

        assert_eq!(auction.bids.len(), 2);
        assert_eq!(auction.winning_bid().unwrap().captain_role.as_str(), "RoleA");
    }

    #[test]
    fn test_top_price_defaults_to_start() {
        let mut auction = Auction::new("Pedri", None, dec!(7.5));
        assert!(auction.winning_bid().is_none());
        assert_eq!(auction.top_price(), dec!(7.5));

        auction.push_bid(Bid::new("RoleA", dec!(3)));
        assert_eq!(auction.top_price(), dec!(3));

        let summary = AuctionSummary::from(&auction);
        assert_eq!(summary.bid_count, 1);
        assert_eq!(summary.start_price, dec!(7.5));
    }
}
