use serde::{Deserialize, Serialize};

use crate::values::{CaptainRole, Money, TeamId};

/// A team record
///
/// `budget` is signed and may go negative. `players` holds canonical
/// player names in signing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    pub captain_role: CaptainRole,
    pub budget: Money,
    #[serde(default)]
    pub players: Vec<String>,
    /// Transfers completed as buyer in the current window
    #[serde(default)]
    pub transfers_made: u8,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, captain_role: impl Into<CaptainRole>, budget: Money) -> Self {
        Self {
            id: id.into(),
            name: None,
            captain_role: captain_role.into(),
            budget,
            players: Vec::new(),
            transfers_made: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Name shown in announcements, falls back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn owns(&self, player_name: &str) -> bool {
        self.players.iter().any(|p| p == player_name)
    }

    pub fn remove_player(&mut self, player_name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p != player_name);
        self.players.len() != before
    }

    pub fn add_player(&mut self, player_name: impl Into<String>) {
        let name = player_name.into();
        if !self.owns(&name) {
            self.players.push(name);
        }
    }

    /// Callers settle amounts already rounded to cents; the balance is not
    /// rounded again so both sides of a transfer move by the same amount.
    pub fn credit(&mut self, amount: Money) {
        self.budget += amount;
    }

    pub fn debit(&mut self, amount: Money) {
        self.budget -= amount;
    }

    /// Whether another purchase fits under the per-window cap
    pub fn can_sign(&self, max_transfers: u8) -> bool {
        self.transfers_made < max_transfers
    }
}
