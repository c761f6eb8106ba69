use arc_swap::ArcSwap;
use liga_core::{HistoryEntry, MarketAnnouncement, MarketRules, TransferDetails, TransferKind};
use liga_ports::{AnnouncementSink, Clock, HistoryLog, LeagueStore};
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;

use super::command::{MarketCommand, Reply};
use super::handle::MarketHandle;
use crate::domain::League;
use crate::error::{MarketError, Result};

/// Runtime settings for the engine thread
#[derive(Debug, Clone)]
pub struct MarketEngineConfig {
    /// Channel buffer size for commands
    pub command_buffer_size: usize,
    /// Fixed seed for the intake shuffle; entropy when `None`
    pub rng_seed: Option<u64>,
}

impl Default for MarketEngineConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 1024,
            rng_seed: None,
        }
    }
}

/// Collaborators the engine calls into
pub struct EnginePorts {
    pub store: Box<dyn LeagueStore>,
    pub history: Arc<dyn HistoryLog>,
    pub announcer: Arc<dyn AnnouncementSink>,
    pub clock: Arc<dyn Clock>,
}

/// Single writer for all league state
///
/// Runs on its own thread and applies commands one at a time. Each
/// command mutates a draft copy that only replaces the live league once
/// the store has accepted it.
pub struct MarketEngine {
    league: League,
    receiver: mpsc::Receiver<MarketCommand>,
    ports: EnginePorts,
    rng: StdRng,
    published: Arc<ArcSwap<League>>,
}

impl MarketEngine {
    /// Load the league from the store and start the engine thread
    pub fn spawn(
        rules: MarketRules,
        config: MarketEngineConfig,
        ports: EnginePorts,
    ) -> Result<(MarketHandle, JoinHandle<()>)> {
        let snapshot = ports.store.load()?;
        let league = League::new(rules, snapshot);

        for violation in league.roster_violations() {
            warn!("Loaded league is inconsistent: {}", violation);
        }
        info!(
            "League loaded: {} players, {} teams, market {}",
            league.entities().player_count(),
            league.entities().team_count(),
            if league.is_open() { "open" } else { "closed" }
        );

        // tokio channels need room for at least one command
        let buffer = if config.command_buffer_size == 0 {
            warn!("Command buffer size of zero requested, using 1");
            1
        } else {
            config.command_buffer_size
        };
        let (sender, receiver) = mpsc::channel(buffer);
        let published = Arc::new(ArcSwap::from_pointee(league.clone()));
        let handle = MarketHandle::new(sender, Arc::clone(&published), Arc::clone(&ports.history));

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let engine = MarketEngine {
            league,
            receiver,
            ports,
            rng,
            published,
        };

        let thread_handle = thread::Builder::new()
            .name("market-engine".to_string())
            .spawn(move || engine.run())
            .map_err(MarketError::EngineSpawn)?;

        Ok((handle, thread_handle))
    }

    /// Main loop: runs until `Shutdown` or every handle is dropped
    fn run(mut self) {
        info!("Market engine started");

        while let Some(cmd) = self.receiver.blocking_recv() {
            if !self.process_command(cmd) {
                break;
            }
        }

        info!("Market engine stopped");
    }

    /// Process a single command, returns false if should shutdown
    fn process_command(&mut self, cmd: MarketCommand) -> bool {
        match cmd {
            MarketCommand::OpenMarket { response } => {
                let result = self.mutate(|league, _| {
                    league.open_market();
                    Ok(())
                });
                if result.is_ok() {
                    self.ports.announcer.announce(MarketAnnouncement::MarketOpened);
                }
                reply(response, result);
            }

            MarketCommand::CloseMarket { response } => {
                let result = self.mutate(|league, _| Ok(league.resolve_and_close_market()));
                if let Ok(transfers) = &result {
                    self.record_history(transfers);
                    self.ports.announcer.announce(MarketAnnouncement::MarketClosed {
                        transfers: transfers.clone(),
                    });
                }
                reply(response, result);
            }

            MarketCommand::PostPublicOffer {
                player,
                seller,
                price,
                locked,
                response,
            } => {
                let result =
                    self.mutate(|league, _| league.post_public_offer(&player, seller, price, locked));
                reply(response, result);
            }

            MarketCommand::RemovePublicOffer { player, response } => {
                let result = self.mutate(|league, _| Ok(league.remove_public_offer(&player)));
                reply(response, result);
            }

            MarketCommand::PostPrivateOffer {
                target_role,
                player,
                seller_role,
                price,
                response,
            } => {
                let result = self.mutate(|league, _| {
                    Ok(league.post_private_offer(&target_role, &player, seller_role, price))
                });
                reply(response, result);
            }

            MarketCommand::AcceptPrivateOffer {
                target_role,
                player,
                response,
            } => {
                let result =
                    self.mutate(|league, _| league.accept_private_offer(&target_role, &player));
                if let Ok(details) = &result {
                    self.record_history(std::slice::from_ref(details));
                    self.ports
                        .announcer
                        .announce(MarketAnnouncement::PrivateTransfer(details.clone()));
                }
                reply(response, result);
            }

            MarketCommand::PlaceAuction {
                player,
                seller,
                start_price,
                response,
            } => {
                let result = self.mutate(|league, _| {
                    league.place_auction(&player, seller.as_deref(), start_price)
                });
                reply(response, result);
            }

            MarketCommand::Bid {
                player,
                captain_role,
                amount,
                response,
            } => {
                let result = self.mutate(|league, _| league.bid(&player, &captain_role, amount));
                reply(response, result);
            }

            MarketCommand::PayClause {
                player,
                buyer_role,
                response,
            } => {
                let result =
                    self.mutate(|league, _| league.pay_clause_and_transfer(&player, &buyer_role));
                if let Ok(details) = &result {
                    self.record_history(std::slice::from_ref(details));
                    self.ports
                        .announcer
                        .announce(MarketAnnouncement::ClausePaid(details.clone()));
                }
                reply(response, result);
            }

            MarketCommand::AssignValues {
                entries,
                actor_role,
                response,
            } => {
                let result = self.mutate(|league, _| league.assign_values(&entries, &actor_role));
                reply(response, result);
            }

            MarketCommand::DailyAdd { count, response } => {
                let result = self.mutate(|league, rng| Ok(league.daily_add(count, rng)));
                if let Ok(players) = &result
                    && !players.is_empty()
                {
                    self.ports.announcer.announce(MarketAnnouncement::DailyIntake {
                        players: players.clone(),
                    });
                }
                reply(response, result);
            }

            MarketCommand::Transfer {
                player,
                seller,
                buyer,
                price,
                response,
            } => {
                let result = self.mutate(|league, _| {
                    league.transfer(&player, seller.as_deref(), &buyer, price, TransferKind::Direct)
                });
                if let Ok(details) = &result {
                    self.record_history(std::slice::from_ref(details));
                }
                reply(response, result);
            }

            MarketCommand::ResetTransferWindow { response } => {
                let result = self.mutate(|league, _| {
                    league.reset_transfer_window();
                    Ok(())
                });
                reply(response, result);
            }

            MarketCommand::Shutdown => {
                return false;
            }
        }
        true
    }

    /// Run one transaction against a draft and commit it if the store accepts it
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut League, &mut StdRng) -> Result<T>,
    ) -> Result<T> {
        let mut draft = self.league.clone();
        let value = op(&mut draft, &mut self.rng)?;

        if let Err(err) = self.ports.store.save(&draft.to_snapshot()) {
            error!("Failed to persist league, change discarded: {}", err);
            return Err(err.into());
        }

        self.league = draft;
        self.published.store(Arc::new(self.league.clone()));
        Ok(value)
    }

    /// Append committed transfers to the history log
    fn record_history(&self, transfers: &[TransferDetails]) {
        for details in transfers {
            let entry = HistoryEntry::from_transfer(details, self.ports.clock.now());
            if let Err(err) = self.ports.history.append(entry) {
                error!("Failed to record transfer of {}: {}", details.player, err);
            }
        }
    }
}

fn reply<T>(response: Reply<T>, result: Result<T>) {
    if let Err(err) = &result {
        debug!("Command rejected: {}", err);
    }
    // Caller may have gone away
    let _ = response.send(result);
}
