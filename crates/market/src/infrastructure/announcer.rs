use liga_core::{MarketAnnouncement, TransferDetails};
use liga_ports::AnnouncementSink;
use log::{info, warn};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

/// Writes announcements to the log as human-readable lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl AnnouncementSink for LogAnnouncer {
    fn announce(&self, announcement: MarketAnnouncement) {
        for line in render(&announcement) {
            info!("{}", line);
        }
    }
}

/// Fans announcements out to any number of subscribers
///
/// Sending never blocks; slow subscribers lag and lose the oldest entries.
#[derive(Debug, Clone)]
pub struct BroadcastAnnouncer {
    sender: broadcast::Sender<MarketAnnouncement>,
}

impl BroadcastAnnouncer {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MarketAnnouncement> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe a task that logs every announcement through [`LogAnnouncer`]
    ///
    /// The task ends once every clone of this announcer is dropped.
    pub fn spawn_log_relay(&self) -> JoinHandle<()> {
        let mut rx = self.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(announcement) => LogAnnouncer.announce(announcement),
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Announcement log fell behind, {} skipped", missed)
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for BroadcastAnnouncer {
    fn default() -> Self {
        Self::new(256)
    }
}

impl AnnouncementSink for BroadcastAnnouncer {
    fn announce(&self, announcement: MarketAnnouncement) {
        // No subscribers is fine
        let _ = self.sender.send(announcement);
    }
}

/// Human-readable lines for one announcement
pub fn render(announcement: &MarketAnnouncement) -> Vec<String> {
    match announcement {
        MarketAnnouncement::MarketOpened => vec!["The transfer market is open".to_string()],
        MarketAnnouncement::MarketClosed { transfers } if transfers.is_empty() => {
            vec!["The transfer market is closed, no auctions were won".to_string()]
        }
        MarketAnnouncement::MarketClosed { transfers } => {
            let mut lines = vec![format!(
                "The transfer market is closed, {} auctions won:",
                transfers.len()
            )];
            lines.extend(transfers.iter().map(describe));
            lines
        }
        MarketAnnouncement::PrivateTransfer(details) => {
            vec![format!("Private deal: {}", describe(details))]
        }
        MarketAnnouncement::ClausePaid(details) => {
            vec![format!("Clause paid: {}", describe(details))]
        }
        MarketAnnouncement::DailyIntake { players } => {
            vec![format!("New on the market today: {}", players.join(", "))]
        }
    }
}

fn describe(details: &TransferDetails) -> String {
    match &details.seller {
        Some(seller) => format!(
            "{} moves from {} to {} for {}",
            details.player, seller, details.buyer, details.price
        ),
        None => format!(
            "{} signs for {} for {}",
            details.player, details.buyer, details.price
        ),
    }
}
