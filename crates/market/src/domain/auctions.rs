use liga_core::{Auction, Bid, Money, TransferDetails, TransferKind};
use log::{debug, info, warn};

use super::League;
use crate::error::{MarketError, Result};

impl League {
    pub fn open_market(&mut self) {
        self.market.open = true;
        info!("Market opened");
    }

    /// Create (or overwrite) the auction for a player with no bids
    pub fn place_auction(
        &mut self,
        player_name: &str,
        seller: Option<&str>,
        start_price: Money,
    ) -> Result<()> {
        let player = self
            .entities
            .get_player(player_name)
            .ok_or_else(|| MarketError::PlayerNotFound(player_name.to_string()))?;

        if player.blinded {
            return Err(MarketError::Blinded(player.name.clone()));
        }

        let auction = Auction::new(player.name.clone(), seller.map(str::to_string), start_price);
        info!(
            "Auction placed: {} from {} starting at {}",
            auction.player_name,
            seller.unwrap_or("free market"),
            start_price
        );
        self.market.put_auction(auction);
        Ok(())
    }

    /// Record a bid; the amount is not compared with earlier bids
    pub fn bid(&mut self, player_name: &str, captain_role: &str, amount: Money) -> Result<()> {
        let auction = self
            .market
            .auction(player_name)
            .ok_or_else(|| MarketError::NoSuchAuction(player_name.to_string()))?;

        let team = self
            .entities
            .get_team_by_role(captain_role)
            .ok_or_else(|| MarketError::TeamUnresolved(captain_role.to_string()))?;

        if auction.seller.as_deref() == Some(team.id.as_str()) {
            return Err(MarketError::SelfBid(team.id.clone()));
        }

        debug!("Bid on {}: {} offers {}", auction.player_name, team.id, amount);

        if let Some(auction) = self.market.auction_mut(player_name) {
            auction.push_bid(Bid::new(captain_role, amount));
        }
        Ok(())
    }

    /// Settle every auction and close the market
    ///
    /// Auctions without bids are dropped. A winner that cannot be resolved
    /// or cannot sign is skipped; the rest are still processed.
    pub fn resolve_and_close_market(&mut self) -> Vec<TransferDetails> {
        let mut completed = Vec::new();

        for auction in self.market.drain_auctions() {
            let Some(winner) = auction.winning_bid() else {
                debug!("Auction for {} closed without bids", auction.player_name);
                continue;
            };

            let Some(buyer) = self
                .entities
                .get_team_by_role(winner.captain_role.as_str())
                .map(|t| t.id.clone())
            else {
                warn!(
                    "Auction for {}: winner {} has no team, skipped",
                    auction.player_name, winner.captain_role
                );
                continue;
            };

            match self.transfer(
                &auction.player_name,
                auction.seller.as_deref(),
                &buyer,
                winner.amount,
                TransferKind::Auction,
            ) {
                Ok(details) => completed.push(details),
                Err(err) => warn!("Auction for {} skipped: {}", auction.player_name, err),
            }
        }

        self.market.open = false;
        info!("Market closed with {} transfers", completed.len());
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{BETIS_ROLE, CADIZ_ROLE, SEVILLA_ROLE, sample_league};
    use rust_decimal_macros::dec;

    #[test]
    fn test_place_auction_rejects_blinded_and_unknown() {
        let mut league = sample_league();

        assert!(matches!(
            league.place_auction("Joaquín", Some("betis"), dec!(5)),
            Err(MarketError::Blinded(_))
        ));
        assert!(matches!(
            league.place_auction("Nobody", None, dec!(5)),
            Err(MarketError::PlayerNotFound(_))
        ));
        assert!(league.list_auctions().is_empty());
    }

    #[test]
    fn test_place_auction_overwrites_bids() {
        let mut league = sample_league();
        league.place_auction("pedri", None, dec!(5)).unwrap();
        league.bid("Pedri", BETIS_ROLE, dec!(8)).unwrap();

        league.place_auction("Pedri", None, dec!(7)).unwrap();

        let auctions = league.list_auctions();
        assert_eq!(auctions.len(), 1);
        assert_eq!(auctions[0].player_name, "Pedri");
        assert_eq!(auctions[0].start_price, dec!(7));
        assert_eq!(auctions[0].bid_count, 0);
    }

    #[test]
    fn test_bid_rejections() {
        let mut league = sample_league();
        league.place_auction("Isco", Some("betis"), dec!(20)).unwrap();

        assert!(matches!(
            league.bid("Fekir", SEVILLA_ROLE, dec!(5)),
            Err(MarketError::NoSuchAuction(_))
        ));
        assert!(matches!(
            league.bid("Isco", "Capitán de Nadie", dec!(5)),
            Err(MarketError::TeamUnresolved(_))
        ));
        assert!(matches!(
            league.bid("Isco", BETIS_ROLE, dec!(25)),
            Err(MarketError::SelfBid(_))
        ));
        assert_eq!(league.list_auctions()[0].bid_count, 0);
    }

    #[test]
    fn test_lower_bid_is_still_recorded() {
        let mut league = sample_league();
        league.place_auction("Isco", Some("betis"), dec!(20)).unwrap();
        league.bid("Isco", SEVILLA_ROLE, dec!(30)).unwrap();
        league.bid("Isco", CADIZ_ROLE, dec!(1)).unwrap();

        let summary = &league.list_auctions()[0];
        assert_eq!(summary.bid_count, 2);
        assert_eq!(summary.top_price, dec!(30));
    }

    #[test]
    fn test_close_picks_earliest_highest_bid() {
        let mut league = sample_league();
        league.open_market();
        league.place_auction("Pedri", None, dec!(5)).unwrap();
        league.bid("Pedri", BETIS_ROLE, dec!(10)).unwrap();
        league.bid("Pedri", SEVILLA_ROLE, dec!(15)).unwrap();
        league.bid("Pedri", CADIZ_ROLE, dec!(15)).unwrap();

        let transfers = league.resolve_and_close_market();

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].buyer, "sevilla");
        assert_eq!(transfers[0].price, dec!(15));
        assert_eq!(transfers[0].kind, TransferKind::Auction);
        assert!(transfers[0].seller.is_none());
        assert_eq!(league.entities().get_team("sevilla").unwrap().budget, dec!(35));
        assert!(!league.is_open());
        assert!(league.list_auctions().is_empty());
    }

    #[test]
    fn test_close_drops_auction_without_bids() {
        let mut league = sample_league();
        league.place_auction("Isco", Some("betis"), dec!(20)).unwrap();
        let before = league.entities().get_team("betis").unwrap().clone();

        let transfers = league.resolve_and_close_market();

        assert!(transfers.is_empty());
        assert!(league.list_auctions().is_empty());
        assert_eq!(league.entities().get_team("betis").unwrap(), &before);
    }

    #[test]
    fn test_close_skips_limit_and_continues() {
        let mut league = sample_league();
        league.entities.teams_mut().for_each(|t| {
            if t.id == "cadiz" {
                t.transfers_made = 3;
            }
        });
        league.place_auction("Isco", Some("betis"), dec!(20)).unwrap();
        league.place_auction("Pedri", None, dec!(5)).unwrap();
        league.bid("Isco", CADIZ_ROLE, dec!(25)).unwrap();
        league.bid("Pedri", SEVILLA_ROLE, dec!(6)).unwrap();

        let transfers = league.resolve_and_close_market();

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].player, "Pedri");
        assert!(league.entities().get_team("betis").unwrap().owns("Isco"));
        assert!(league.roster_violations().is_empty());
    }

    #[test]
    fn test_auction_of_owned_player_pays_seller() {
        let mut league = sample_league();
        league.place_auction("Fekir", Some("betis"), dec!(10)).unwrap();
        league.bid("Fekir", CADIZ_ROLE, dec!(12)).unwrap();

        let transfers = league.resolve_and_close_market();

        assert_eq!(transfers.len(), 1);
        assert_eq!(league.entities().get_team("betis").unwrap().budget, dec!(112));
        assert_eq!(league.entities().get_team("cadiz").unwrap().budget, dec!(8));
        assert_eq!(league.owner_of("Fekir").map(String::as_str), Some("cadiz"));
    }

    #[test]
    fn test_close_skips_auction_when_seller_no_longer_owns_player() {
        let mut league = sample_league();
        league.place_auction("Isco", Some("betis"), dec!(20)).unwrap();
        league.bid("Isco", SEVILLA_ROLE, dec!(25)).unwrap();

        // Sold elsewhere while the auction was still running
        league
            .transfer("Isco", Some("betis"), "cadiz", dec!(5), TransferKind::Direct)
            .unwrap();
        let sevilla = league.entities().get_team("sevilla").unwrap().clone();

        let transfers = league.resolve_and_close_market();

        assert!(transfers.is_empty());
        assert!(league.entities().get_team("cadiz").unwrap().owns("Isco"));
        assert!(!league.entities().get_team("betis").unwrap().owns("Isco"));
        assert_eq!(league.entities().get_team("sevilla").unwrap(), &sevilla);
        assert_eq!(league.owner_of("Isco").map(String::as_str), Some("cadiz"));
        assert!(league.roster_violations().is_empty());
    }
}
