use liga_core::MarketAnnouncement;

/// Sink for human-facing market announcements
///
/// Called synchronously from the engine thread after a commit, so
/// implementations must not block.
pub trait AnnouncementSink: Send + Sync {
    fn announce(&self, announcement: MarketAnnouncement);
}
