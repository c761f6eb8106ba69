use liga_core::{TransferDetails, TransferKind};
use log::warn;

use super::League;
use crate::error::{MarketError, Result};

impl League {
    /// Buy a player outright from its ledger owner at the clause price
    ///
    /// Unlike the other mechanisms the buyer must be able to afford it.
    pub fn pay_clause_and_transfer(
        &mut self,
        player_name: &str,
        buyer_role: &str,
    ) -> Result<TransferDetails> {
        let player = self
            .entities
            .get_player(player_name)
            .ok_or_else(|| MarketError::PlayerNotFound(player_name.to_string()))?;

        if !player.has_clause() {
            return Err(MarketError::NoClause(player.name.clone()));
        }
        let (name, clause) = (player.name.clone(), player.clause);

        let owner = self
            .market
            .owner_of(&name)
            .cloned()
            .ok_or_else(|| MarketError::NoOwner(name.clone()))?;

        let buyer = self
            .entities
            .get_team_by_role(buyer_role)
            .ok_or_else(|| MarketError::TeamUnresolved(buyer_role.to_string()))?;

        if buyer.budget < clause {
            return Err(MarketError::InsufficientBudget {
                required: clause,
                available: buyer.budget,
            });
        }
        let buyer_id = buyer.id.clone();

        self.transfer(&name, Some(&owner), &buyer_id, clause, TransferKind::Clause)
            .map_err(|err| {
                warn!("Clause for {} not paid: {}", name, err);
                err.into_transfer_failure()
            })
    }
}
