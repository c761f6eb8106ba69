use indexmap::IndexMap;
use liga_core::{Player, Team, TeamId, lookup_key};
use std::collections::HashMap;

/// Owner of player and team records
///
/// Players are indexed by case-insensitive name, teams by id and by
/// case-insensitive captain role. No validation happens here: callers
/// enforce the league invariants.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    players: IndexMap<String, Player>,
    teams: IndexMap<TeamId, Team>,
    /// Index: role key -> team id
    role_index: HashMap<String, TeamId>,
}

impl EntityStore {
    pub fn new(players: Vec<Player>, teams: Vec<Team>) -> Self {
        let mut store = Self::default();
        for player in players {
            store.put_player(player);
        }
        for team in teams {
            store.put_team(team);
        }
        store
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.get(&lookup_key(name))
    }

    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    /// Case-insensitive exact match on the captain role
    pub fn get_team_by_role(&self, role: &str) -> Option<&Team> {
        let team_id = self.role_index.get(&lookup_key(role))?;
        self.teams.get(team_id)
    }

    /// Insert or replace a player (keyed by name)
    pub fn put_player(&mut self, player: Player) {
        self.players.insert(player.key(), player);
    }

    /// Insert or replace a team, keeping the role index in sync
    pub fn put_team(&mut self, team: Team) {
        if let Some(previous) = self.teams.get(&team.id) {
            self.role_index.remove(&previous.captain_role.key());
        }
        self.role_index
            .insert(team.captain_role.key(), team.id.clone());
        self.teams.insert(team.id.clone(), team);
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Mutable access to teams; roles must not be changed through it
    pub(crate) fn teams_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.values_mut()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}
