use serde::{Deserialize, Serialize};

use crate::entities::{MarketState, Player, Team};

/// Durable image of the league: players, teams and market state
///
/// Persisted as one document so a transaction is written atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub market: MarketState,
}

impl LeagueSnapshot {
    pub fn new(players: Vec<Player>, teams: Vec<Team>) -> Self {
        Self {
            players,
            teams,
            market: MarketState::default(),
        }
    }
}
