use liga_core::HistoryEntry;

use crate::error::StoreResult;

/// Append-only log of completed transfers
///
/// The market engine only appends; `entries` exists for display.
pub trait HistoryLog: Send + Sync {
    fn append(&self, entry: HistoryEntry) -> StoreResult<()>;

    fn entries(&self) -> StoreResult<Vec<HistoryEntry>>;
}
