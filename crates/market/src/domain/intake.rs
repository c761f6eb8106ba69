use liga_core::Auction;
use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use super::League;

impl League {
    /// Put up to `count` random eligible players up for auction
    ///
    /// Eligible means valued, not blinded and not a captain. Each auction
    /// starts at the player's value and is sold by its current team.
    pub fn daily_add<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<String> {
        let mut candidates: Vec<_> = self
            .entities
            .players()
            .filter(|p| p.is_intake_eligible())
            .map(|p| Auction::new(p.name.clone(), p.team.clone(), p.value))
            .collect();

        candidates.shuffle(rng);
        candidates.truncate(count);

        let added: Vec<String> = candidates.iter().map(|a| a.player_name.clone()).collect();
        for auction in candidates {
            self.market.put_auction(auction);
        }

        if !added.is_empty() {
            info!("Daily intake: {}", added.join(", "));
        }
        added
    }
}
