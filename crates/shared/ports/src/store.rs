use liga_core::LeagueSnapshot;

use crate::error::StoreResult;

/// Durable storage for the league state
///
/// `save` must be atomic: after a failure the previously saved snapshot
/// is still the one returned by `load`.
pub trait LeagueStore: Send {
    /// Load the last committed snapshot (empty league if none exists)
    fn load(&self) -> StoreResult<LeagueSnapshot>;

    /// Replace the committed snapshot
    fn save(&self, snapshot: &LeagueSnapshot) -> StoreResult<()>;
}
