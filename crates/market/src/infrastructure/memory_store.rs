use liga_core::LeagueSnapshot;
use liga_ports::{LeagueStore, StoreError, StoreResult};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    initial: LeagueSnapshot,
    saved: Option<LeagueSnapshot>,
    save_count: usize,
    fail_saves: bool,
}

/// Store that keeps the league in memory
///
/// Clones share the same state, so a test can keep one clone to inspect
/// what the engine saved or to make saves fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStore {
    pub fn new(initial: LeagueSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                initial,
                ..Default::default()
            })),
        }
    }

    /// Last saved snapshot, if any
    pub fn saved(&self) -> Option<LeagueSnapshot> {
        self.inner.lock().saved.clone()
    }

    pub fn save_count(&self) -> usize {
        self.inner.lock().save_count
    }

    /// Make every following save fail with `Unavailable`
    pub fn fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }
}

impl LeagueStore for InMemoryStore {
    fn load(&self) -> StoreResult<LeagueSnapshot> {
        let inner = self.inner.lock();
        Ok(inner.saved.clone().unwrap_or_else(|| inner.initial.clone()))
    }

    fn save(&self, snapshot: &LeagueSnapshot) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        if inner.fail_saves {
            return Err(StoreError::Unavailable("saves disabled".to_string()));
        }
        inner.saved = Some(snapshot.clone());
        inner.save_count += 1;
        Ok(())
    }
}
