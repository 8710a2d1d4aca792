use std::collections::HashMap;

/// State of one hover-triggered download.
#[derive(Debug, Clone, PartialEq)]
enum DownloadState {
    /// Bytes are being fetched; further hovers are no-ops.
    Fetching,
    /// Bytes arrived and can be saved to disk.
    Ready(Vec<u8>),
}

/// In-memory store of hover-prefetched image bytes, keyed by record id.
///
/// The first hover over a card starts a fetch of the full-size image so a
/// later "save" click has the bytes at hand; subsequent hovers do nothing.
/// A failed fetch drops the entry, so the next hover retries. Repeated ids
/// across pages share one entry — the same id is the same source image.
#[derive(Debug, Default)]
pub struct Downloads {
    entries: HashMap<String, DownloadState>,
}

impl Downloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the intent to fetch `id`. Returns true when the caller should
    /// actually start the fetch, false when one is in flight or already done.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.entries.contains_key(id) {
            return false;
        }
        self.entries.insert(id.to_string(), DownloadState::Fetching);
        true
    }

    /// Store fetched bytes for `id`.
    pub fn complete(&mut self, id: &str, bytes: Vec<u8>) {
        self.entries
            .insert(id.to_string(), DownloadState::Ready(bytes));
    }

    /// A fetch for `id` failed: forget it, so a later hover retries.
    pub fn fail(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// Bytes for `id`, if the download finished.
    pub fn get(&self, id: &str) -> Option<&[u8]> {
        match self.entries.get(id) {
            Some(DownloadState::Ready(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Whether the download for `id` finished and can be saved.
    pub fn is_ready(&self, id: &str) -> bool {
        matches!(self.entries.get(id), Some(DownloadState::Ready(_)))
    }
}
