use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Money, PlayerId, TeamId, lookup_key};

/// A player record
///
/// `team` is the back-reference to the roster that lists this player.
/// `clause` is derived from `value` and only changes through
/// [`Player::assign_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub team: Option<TeamId>,
    #[serde(default)]
    pub value: Money,
    #[serde(default)]
    pub clause: Money,
    /// Exempt from every market mechanism
    #[serde(default)]
    pub blinded: bool,
    /// Exempt from valuation
    #[serde(default)]
    pub captain: bool,
}

impl Player {
    /// Create an unowned player with no value
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: None,
            value: Decimal::ZERO,
            clause: Decimal::ZERO,
            blinded: false,
            captain: false,
        }
    }

    pub fn with_team(mut self, team: impl Into<TeamId>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set value and clause using the given clause multiplier
    pub fn with_value(mut self, value: Money, clause_multiplier: Decimal) -> Self {
        self.assign_value(value, clause_multiplier);
        self
    }

    pub fn blinded(mut self) -> Self {
        self.blinded = true;
        self
    }

    pub fn captain(mut self) -> Self {
        self.captain = true;
        self
    }

    /// Case-insensitive key for this player's name
    pub fn key(&self) -> String {
        lookup_key(&self.name)
    }

    /// Assign a value and derive the clause (value x multiplier, 2 dp)
    pub fn assign_value(&mut self, value: Money, clause_multiplier: Decimal) {
        self.value = value;
        self.clause = (value * clause_multiplier).round_dp(2);
    }

    pub fn has_clause(&self) -> bool {
        self.clause > Decimal::ZERO
    }

    /// Eligible for the daily intake: not blinded, not captain, valued
    pub fn is_intake_eligible(&self) -> bool {
        !self.blinded && !self.captain && self.value > Decimal::ZERO
    }
}
