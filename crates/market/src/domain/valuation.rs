use liga_core::{Money, Player};
use log::info;
use rust_decimal::Decimal;

use super::League;
use crate::error::{MarketError, Result};

impl League {
    /// Set values (and derived clauses) for up to three players at once
    ///
    /// Every entry is validated before anything is written.
    pub fn assign_values<S: AsRef<str>>(
        &mut self,
        entries: &[(S, Money)],
        actor_role: &str,
    ) -> Result<Vec<Player>> {
        if entries.is_empty() {
            return Err(MarketError::Empty);
        }

        let max = self.rules.max_valuation_entries;
        if entries.len() > max {
            return Err(MarketError::TooMany {
                count: entries.len(),
                max,
            });
        }

        if let Some((name, value)) = entries.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(MarketError::NegativeValue {
                player: name.as_ref().to_string(),
                value: *value,
            });
        }

        let total: Money = entries.iter().map(|(_, v)| *v).sum();
        if total > self.rules.valuation_budget {
            return Err(MarketError::OverBudget {
                total,
                budget: self.rules.valuation_budget,
            });
        }

        let mut updated = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let name = name.as_ref();
            let player = self
                .entities
                .get_player(name)
                .ok_or_else(|| MarketError::PlayerNotFound(name.to_string()))?;
            if player.captain {
                return Err(MarketError::IsCaptain(player.name.clone()));
            }
            if player.blinded {
                return Err(MarketError::Blinded(player.name.clone()));
            }
            let mut player = player.clone();
            player.assign_value(*value, self.rules.clause_multiplier);
            updated.push(player);
        }

        for player in &updated {
            info!(
                "Valuation by {}: {} = {} (clause {})",
                actor_role, player.name, player.value, player.clause
            );
            self.entities.put_player(player.clone());
        }

        Ok(updated)
    }
}
