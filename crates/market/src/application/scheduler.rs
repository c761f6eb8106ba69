use log::{error, info, warn};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::handle::MarketHandle;
use crate::error::MarketError;

/// Periodic trigger for the daily intake
///
/// The first run happens as soon as the task starts, then once per period.
pub struct IntakeScheduler {
    handle: MarketHandle,
    period: Duration,
    count: usize,
}

impl IntakeScheduler {
    /// A zero period is raised to one second; tokio intervals cannot be empty
    pub fn new(handle: MarketHandle, period: Duration, count: usize) -> Self {
        let period = if period.is_zero() {
            warn!("Intake period of zero requested, using 1s");
            Duration::from_secs(1)
        } else {
            period
        };
        Self {
            handle,
            period,
            count,
        }
    }

    /// Run on the current tokio runtime until the engine goes away
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Intake scheduler started: {} players every {:?}",
            self.count, self.period
        );

        loop {
            ticker.tick().await;
            match self.handle.daily_add(self.count).await {
                Ok(added) if added.is_empty() => info!("Daily intake: no eligible players"),
                Ok(added) => info!("Daily intake added {} auctions", added.len()),
                Err(MarketError::EngineUnavailable) => break,
                Err(err) => error!("Daily intake failed: {}", err),
            }
        }

        info!("Intake scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{EnginePorts, MarketEngine, MarketEngineConfig};
    use crate::infrastructure::{InMemoryHistoryLog, InMemoryStore, LogAnnouncer};
    use liga_clock::SystemClock;
    use liga_core::{LeagueSnapshot, MarketRules, Player};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn start_engine() -> (MarketHandle, std::thread::JoinHandle<()>) {
        let snapshot = LeagueSnapshot::new(
            vec![Player::new("p1", "Pedri").with_value(dec!(15), dec!(1.5))],
            vec![],
        );
        let ports = EnginePorts {
            store: Box::new(InMemoryStore::new(snapshot)),
            history: Arc::new(InMemoryHistoryLog::new()),
            announcer: Arc::new(LogAnnouncer),
            clock: Arc::new(SystemClock::new()),
        };
        MarketEngine::spawn(MarketRules::default(), MarketEngineConfig::default(), ports).unwrap()
    }

    async fn stop_engine(handle: MarketHandle, thread: std::thread::JoinHandle<()>) {
        handle.shutdown().await.unwrap();
        tokio::task::spawn_blocking(move || thread.join())
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_first_intake_runs_at_startup() {
        let (handle, thread) = start_engine();

        let task = IntakeScheduler::new(handle.clone(), Duration::from_secs(3600), 5).spawn();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.auctions().len(), 1);

        task.abort();
        stop_engine(handle, thread).await;
    }

    #[tokio::test]
    async fn test_zero_period_does_not_kill_the_task() {
        let (handle, thread) = start_engine();

        let task = IntakeScheduler::new(handle.clone(), Duration::ZERO, 5).spawn();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!task.is_finished());
        assert_eq!(handle.auctions().len(), 1);

        task.abort();
        stop_engine(handle, thread).await;
    }

    #[tokio::test]
    async fn test_scheduler_seeds_auctions_and_stops_with_engine() {
        let (handle, thread) = start_engine();

        let task = IntakeScheduler::new(handle.clone(), Duration::from_millis(20), 5).spawn();

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(handle.auctions().len(), 1);
        assert_eq!(handle.auctions()[0].player_name, "Pedri");

        handle.shutdown().await.unwrap();
        tokio::task::spawn_blocking(move || thread.join())
            .await
            .unwrap()
            .unwrap();
        drop(handle);

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }
}
