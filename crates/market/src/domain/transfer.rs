use liga_core::{Money, TransferDetails, TransferKind};
use log::{debug, info};

use super::League;
use crate::error::{MarketError, Result};

impl League {
    /// Move a player to `buyer` and settle the price
    ///
    /// `seller == None` is a free acquisition: nobody is credited and the
    /// player must currently be unowned. The buyer's budget is not checked
    /// and may go negative. Nothing is modified unless every check passes.
    ///
    /// The price is rounded to cents once; that amount is what moves and
    /// what the returned details record.
    pub fn transfer(
        &mut self,
        player_name: &str,
        seller: Option<&str>,
        buyer: &str,
        price: Money,
        kind: TransferKind,
    ) -> Result<TransferDetails> {
        let mut player = self
            .entities
            .get_player(player_name)
            .cloned()
            .ok_or_else(|| MarketError::PlayerNotFound(player_name.to_string()))?;

        if player.blinded {
            return Err(MarketError::Blinded(player.name));
        }

        let seller_team = match seller {
            Some(id) => Some(
                self.entities
                    .get_team(id)
                    .cloned()
                    .ok_or_else(|| MarketError::TeamNotFound(id.to_string()))?,
            ),
            None => None,
        };

        let mut buyer_team = self
            .entities
            .get_team(buyer)
            .cloned()
            .ok_or_else(|| MarketError::TeamNotFound(buyer.to_string()))?;

        let limit = self.rules.max_transfers_per_window;
        if !buyer_team.can_sign(limit) {
            return Err(MarketError::Limit {
                team: buyer_team.id,
                limit,
            });
        }

        match &seller_team {
            Some(team) if !team.owns(&player.name) => {
                return Err(MarketError::NotOwnedBySeller {
                    player: player.name,
                    seller: team.id.clone(),
                });
            }
            None if player.team.is_some() => {
                return Err(MarketError::NotOwnedBySeller {
                    player: player.name,
                    seller: "free market".to_string(),
                });
            }
            _ => {}
        }

        // All checks passed: apply
        let price = price.round_dp(2);
        if let Some(mut seller_team) = seller_team {
            if seller_team.id == buyer_team.id {
                buyer_team.credit(price);
                buyer_team.remove_player(&player.name);
            } else {
                seller_team.credit(price);
                seller_team.remove_player(&player.name);
                self.entities.put_team(seller_team);
            }
        }

        buyer_team.debit(price);
        buyer_team.add_player(player.name.clone());
        buyer_team.transfers_made += 1;

        player.team = Some(buyer_team.id.clone());
        self.market.record_owner(&player.name, buyer_team.id.clone());

        let details = TransferDetails {
            player: player.name.clone(),
            seller: seller.map(str::to_string),
            buyer: buyer_team.id.clone(),
            price,
            kind,
        };

        debug!(
            "Buyer {} now at {} transfers, budget {}",
            buyer_team.id, buyer_team.transfers_made, buyer_team.budget
        );

        self.entities.put_team(buyer_team);
        self.entities.put_player(player);

        info!(
            "Transfer ({}): {} -> {} from {} for {}",
            details.kind,
            details.player,
            details.buyer,
            details.seller.as_deref().unwrap_or("free market"),
            details.price
        );

        Ok(details)
    }

    /// Start a new transfer window: every team may sign again
    pub fn reset_transfer_window(&mut self) {
        for team in self.entities.teams_mut() {
            team.transfers_made = 0;
        }
        info!("Transfer window reset");
    }
}
