use liga_core::HistoryEntry;
use liga_ports::{HistoryLog, StoreResult};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use super::json_store::{read_json, write_json_atomic};

pub const HISTORY_FILE: &str = "history.json";

/// History kept as a JSON array under the data directory
///
/// Appends rewrite the whole document through a temp file and rename.
pub struct JsonHistoryLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonHistoryLog {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(HISTORY_FILE),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> StoreResult<Vec<HistoryEntry>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }
}

impl HistoryLog for JsonHistoryLog {
    fn append(&self, entry: HistoryEntry) -> StoreResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read()?;
        entries.push(entry);
        write_json_atomic(&self.path, &entries)
    }

    fn entries(&self) -> StoreResult<Vec<HistoryEntry>> {
        let _guard = self.lock.lock();
        self.read()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHistoryLog {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl InMemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for InMemoryHistoryLog {
    fn append(&self, entry: HistoryEntry) -> StoreResult<()> {
        self.entries.lock().push(entry);
        Ok(())
    }

    fn entries(&self) -> StoreResult<Vec<HistoryEntry>> {
        Ok(self.entries.lock().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use liga_core::{TransferDetails, TransferKind};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn entry(player: &str) -> HistoryEntry {
        let details = TransferDetails {
            player: player.to_string(),
            seller: Some("betis".to_string()),
            buyer: "sevilla".to_string(),
            price: dec!(12.5),
            kind: TransferKind::Auction,
        };
        HistoryEntry::from_transfer(&details, Utc::now())
    }

    #[test]
    fn test_json_history_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let log = JsonHistoryLog::new(dir.path());
        assert!(log.entries().unwrap().is_empty());

        log.append(entry("Isco")).unwrap();
        log.append(entry("Fekir")).unwrap();

        let reopened = JsonHistoryLog::new(dir.path());
        let players: Vec<_> = reopened
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.player)
            .collect();
        assert_eq!(players, vec!["Isco", "Fekir"]);
    }

    #[test]
    fn test_in_memory_history() {
        let log = InMemoryHistoryLog::new();
        log.append(entry("Isco")).unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].price, dec!(12.5));
    }
}
