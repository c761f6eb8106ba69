use liga_core::{CaptainRole, Money, PrivateOffer, PublicOffer, TeamId, TransferDetails, TransferKind};
use log::{debug, info, warn};

use super::League;
use crate::error::{MarketError, Result};

impl League {
    // ============ Public offers ============

    /// List a player publicly, replacing any previous listing for it
    pub fn post_public_offer(
        &mut self,
        player_name: &str,
        seller: TeamId,
        price: Money,
        locked: bool,
    ) -> Result<PublicOffer> {
        let player = self
            .entities
            .get_player(player_name)
            .ok_or_else(|| MarketError::PlayerNotFound(player_name.to_string()))?;

        if player.blinded {
            return Err(MarketError::Blinded(player.name.clone()));
        }

        let offer = PublicOffer {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            seller,
            price,
            locked,
        };

        info!(
            "Public offer: {} by {} for {} (locked={})",
            offer.player_name, offer.seller, offer.price, offer.locked
        );
        self.market.put_public_offer(offer.clone());
        Ok(offer)
    }

    /// Withdraw the public listing for a player; returns whether one existed
    pub fn remove_public_offer(&mut self, player_name: &str) -> bool {
        let removed = self.market.remove_public_offer(player_name);
        if removed {
            info!("Public offer withdrawn: {}", player_name);
        }
        removed
    }

    // ============ Private offers ============

    /// Drop an offer into `target_role`'s inbox
    ///
    /// Nothing is validated here; acceptance does the checks.
    pub fn post_private_offer(
        &mut self,
        target_role: &str,
        player_name: &str,
        seller_role: impl Into<CaptainRole>,
        price: Money,
    ) -> PrivateOffer {
        let offer = PrivateOffer::new(player_name, seller_role, price);
        info!(
            "Private offer {}: {} offers {} for {} to {}",
            offer.id, offer.seller_role, offer.price, offer.player_name, target_role
        );
        self.market.push_private_offer(target_role, offer.clone());
        offer
    }

    /// Accept the latest offer for `player_name` in `target_role`'s inbox
    ///
    /// The recipient buys from the offering team. On success every offer
    /// for that player is cleared from the inbox; on failure it is untouched.
    pub fn accept_private_offer(
        &mut self,
        target_role: &str,
        player_name: &str,
    ) -> Result<TransferDetails> {
        let wanted = liga_core::lookup_key(player_name);
        let offer = self
            .market
            .inbox(target_role)
            .iter()
            .rev()
            .find(|o| liga_core::lookup_key(&o.player_name) == wanted)
            .cloned()
            .ok_or_else(|| MarketError::OfferNotFound {
                role: target_role.to_string(),
                player: player_name.to_string(),
            })?;

        let seller = self.entities.get_team_by_role(offer.seller_role.as_str());
        let buyer = self.entities.get_team_by_role(target_role);
        let (seller_id, buyer_id) = match (seller, buyer) {
            (Some(s), Some(b)) => (s.id.clone(), b.id.clone()),
            _ => {
                return Err(MarketError::TeamsUnresolved {
                    seller_role: offer.seller_role.to_string(),
                    buyer_role: target_role.to_string(),
                });
            }
        };

        debug!(
            "Accepting private offer {} ({} -> {})",
            offer.id, seller_id, buyer_id
        );

        let details = self
            .transfer(
                &offer.player_name,
                Some(&seller_id),
                &buyer_id,
                offer.price,
                TransferKind::PrivateOffer,
            )
            .map_err(|err| {
                warn!("Private offer {} not accepted: {}", offer.id, err);
                err.into_transfer_failure()
            })?;

        let cleared = self
            .market
            .clear_private_offers(target_role, &offer.player_name);
        debug!("Cleared {} private offers for {}", cleared, offer.player_name);

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{BETIS_ROLE, CADIZ_ROLE, SEVILLA_ROLE, sample_league};
    use rust_decimal_macros::dec;

    #[test]
    fn test_post_public_offer_replaces_existing() {
        let mut league = sample_league();

        league
            .post_public_offer("Isco", "betis".to_string(), dec!(30), false)
            .unwrap();
        league
            .post_public_offer("isco", "betis".to_string(), dec!(28), true)
            .unwrap();

        let offers = league.list_public_offers();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].player_name, "Isco");
        assert_eq!(offers[0].price, dec!(28));
        assert!(offers[0].locked);
    }

    #[test]
    fn test_public_offer_rejects_blinded_and_unknown() {
        let mut league = sample_league();

        assert!(matches!(
            league.post_public_offer("Joaquín", "betis".to_string(), dec!(5), false),
            Err(MarketError::Blinded(_))
        ));
        assert!(matches!(
            league.post_public_offer("Nobody", "betis".to_string(), dec!(5), false),
            Err(MarketError::PlayerNotFound(_))
        ));
        assert!(league.list_public_offers().is_empty());
    }

    #[test]
    fn test_remove_public_offer() {
        let mut league = sample_league();
        league
            .post_public_offer("Fekir", "betis".to_string(), dec!(12), false)
            .unwrap();

        assert!(league.remove_public_offer("FEKIR"));
        assert!(!league.remove_public_offer("Fekir"));
        assert!(league.list_public_offers().is_empty());
    }

    #[test]
    fn test_accept_private_offer_transfers_and_clears_inbox() {
        let mut league = sample_league();
        league.post_private_offer(CADIZ_ROLE, "Isco", BETIS_ROLE, dec!(18));
        league.post_private_offer(CADIZ_ROLE, "isco", BETIS_ROLE, dec!(16));
        league.post_private_offer(CADIZ_ROLE, "Fekir", BETIS_ROLE, dec!(9));

        let details = league.accept_private_offer(CADIZ_ROLE, "ISCO").unwrap();

        // Most recent matching offer wins
        assert_eq!(details.price, dec!(16));
        assert_eq!(details.buyer, "cadiz");
        assert_eq!(details.seller.as_deref(), Some("betis"));
        assert_eq!(details.kind, TransferKind::PrivateOffer);

        let inbox = league.private_offers_for(CADIZ_ROLE);
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].player_name, "Fekir");

        assert_eq!(league.entities().get_team("cadiz").unwrap().budget, dec!(4));
        assert_eq!(league.entities().get_team("betis").unwrap().budget, dec!(116));
        assert_eq!(league.owner_of("Isco").map(String::as_str), Some("cadiz"));
    }

    #[test]
    fn test_accept_missing_offer() {
        let mut league = sample_league();
        assert!(matches!(
            league.accept_private_offer(CADIZ_ROLE, "Isco"),
            Err(MarketError::OfferNotFound { .. })
        ));
    }

    #[test]
    fn test_accept_with_unknown_seller_role() {
        let mut league = sample_league();
        league.post_private_offer(CADIZ_ROLE, "Isco", "Capitán de Nadie", dec!(5));

        assert!(matches!(
            league.accept_private_offer(CADIZ_ROLE, "Isco"),
            Err(MarketError::TeamsUnresolved { .. })
        ));
        assert_eq!(league.private_offers_for(CADIZ_ROLE).len(), 1);
    }

    #[test]
    fn test_accept_at_limit_keeps_inbox() {
        let mut league = sample_league();
        league.entities.teams_mut().for_each(|t| {
            if t.id == "cadiz" {
                t.transfers_made = 3;
            }
        });
        league.post_private_offer(CADIZ_ROLE, "Isco", BETIS_ROLE, dec!(5));

        let err = league.accept_private_offer(CADIZ_ROLE, "Isco").unwrap_err();

        assert!(err.is_limit());
        assert_eq!(league.private_offers_for(CADIZ_ROLE).len(), 1);
        assert!(league.entities().get_team("betis").unwrap().owns("Isco"));
    }

    #[test]
    fn test_accept_when_seller_no_longer_owns() {
        let mut league = sample_league();
        // Sevilla offers a player it does not own
        league.post_private_offer(CADIZ_ROLE, "Isco", SEVILLA_ROLE, dec!(5));

        let err = league.accept_private_offer(CADIZ_ROLE, "Isco").unwrap_err();

        assert!(matches!(err, MarketError::TransferFailed(_)));
        assert_eq!(league.private_offers_for(CADIZ_ROLE).len(), 1);
    }
}
