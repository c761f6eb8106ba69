use liga_core::{
    AuctionSummary, LeagueSnapshot, MarketRules, MarketState, PrivateOffer, PublicOffer, Team,
    TeamId,
};
use std::collections::HashMap;

use super::EntityStore;

/// The whole league: rules, records and market state
///
/// Every market operation is a method on `League` (see the sibling
/// modules). Methods validate before they mutate; the engine additionally
/// runs each one on a draft copy so a failure never leaks partial state.
#[derive(Debug, Clone, Default)]
pub struct League {
    pub(crate) rules: MarketRules,
    pub(crate) entities: EntityStore,
    pub(crate) market: MarketState,
}

impl League {
    pub fn new(rules: MarketRules, snapshot: LeagueSnapshot) -> Self {
        Self {
            rules,
            entities: EntityStore::new(snapshot.players, snapshot.teams),
            market: snapshot.market,
        }
    }

    /// Durable image of the current state
    pub fn to_snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            players: self.entities.players().cloned().collect(),
            teams: self.entities.teams().cloned().collect(),
            market: self.market.clone(),
        }
    }

    pub fn rules(&self) -> &MarketRules {
        &self.rules
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn market(&self) -> &MarketState {
        &self.market
    }

    // ============ Display reads ============

    pub fn is_open(&self) -> bool {
        self.market.open
    }

    pub fn list_public_offers(&self) -> &[PublicOffer] {
        &self.market.offers
    }

    pub fn list_auctions(&self) -> Vec<AuctionSummary> {
        self.market
            .auctions
            .values()
            .map(AuctionSummary::from)
            .collect()
    }

    pub fn private_offers_for(&self, role: &str) -> &[PrivateOffer] {
        self.market.inbox(role)
    }

    pub fn owner_of(&self, player_name: &str) -> Option<&TeamId> {
        self.market.owner_of(player_name)
    }

    pub fn team_by_role(&self, role: &str) -> Option<&Team> {
        self.entities.get_team_by_role(role)
    }

    // ============ Consistency ============

    /// Check that player back-references and rosters agree
    ///
    /// Returns one message per violation; empty when consistent.
    pub fn roster_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let mut listed_by: HashMap<&str, Vec<&str>> = HashMap::new();

        for team in self.entities.teams() {
            for name in &team.players {
                listed_by
                    .entry(name.as_str())
                    .or_default()
                    .push(team.id.as_str());
            }
            if team.transfers_made > self.rules.max_transfers_per_window {
                violations.push(format!(
                    "team {} has {} transfers (cap {})",
                    team.id, team.transfers_made, self.rules.max_transfers_per_window
                ));
            }
        }

        for player in self.entities.players() {
            let rosters = listed_by.remove(player.name.as_str()).unwrap_or_default();
            match (&player.team, rosters.as_slice()) {
                (None, []) => {}
                (Some(team), [listed]) if team.as_str() == *listed => {}
                (team, rosters) => violations.push(format!(
                    "player {} references {:?} but is listed by {:?}",
                    player.name, team, rosters
                )),
            }
        }

        for (name, teams) in listed_by {
            violations.push(format!("unknown player {} listed by {:?}", name, teams));
        }

        violations
    }
}
