//! The shared mapping cache.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
// Tokio's Instant so expiry follows the runtime clock, including the
// paused clock tests drive with `tokio::time::advance`.
use tokio::time::Instant;

use wuqumo_core::error::{Result, WuqumoError};
use wuqumo_core::types::TranscodeEntry;

use crate::snapshot::Snapshot;

/// Snapshot handle plus its expiry, swapped as one unit under the lock.
#[derive(Default)]
struct CacheState {
    snapshot: Option<Arc<Snapshot>>,
    expires_at: Option<Instant>,
}

/// TTL-refreshed cache over the current transcode snapshot.
///
/// Owns exactly one snapshot at a time. Readers take the lock only long
/// enough to clone the `Arc` handle, so lookups run against an immutable
/// table without blocking each other, and an install is a pointer swap
/// rather than anything proportional to table size. A lookup racing an
/// install sees either the fully-old or fully-new snapshot, never a mix.
///
/// The cache is an owned object: share it via `Arc` between the API state
/// and the refresher, or keep several independent instances in tests.
#[derive(Default)]
pub struct MappingCache {
    state: RwLock<CacheState>,
}

impl MappingCache {
    /// Creates an empty cache with no snapshot installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the current snapshot and arms its expiry.
    pub fn install(&self, snapshot: Snapshot, ttl: Duration) {
        let snapshot = Arc::new(snapshot);
        let expires_at = Instant::now() + ttl;

        let mut state = self.state.write();
        state.snapshot = Some(snapshot);
        state.expires_at = Some(expires_at);
    }

    /// Handle to the current snapshot, if one has been installed.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.state.read().snapshot.clone()
    }

    /// All entries of the current snapshot, in source-row order.
    ///
    /// Returns an empty vec before the first install.
    pub fn all(&self) -> Vec<TranscodeEntry> {
        match self.snapshot() {
            Some(snapshot) => snapshot.entries().to_vec(),
            None => Vec::new(),
        }
    }

    /// First entry whose LCP code equals `id`.
    ///
    /// Comparison is exact and case-sensitive. Misses (including an empty
    /// cache) surface as [`WuqumoError::LcpNotFound`].
    pub fn get_by_lcp(&self, id: &str) -> Result<TranscodeEntry> {
        self.snapshot()
            .as_deref()
            .and_then(|s| s.get_by_lcp(id))
            .cloned()
            .ok_or_else(|| WuqumoError::LcpNotFound(id.to_string()))
    }

    /// First entry whose wuqumo code equals `id`.
    ///
    /// Symmetric to [`MappingCache::get_by_lcp`]; misses surface as
    /// [`WuqumoError::WuqumoNotFound`].
    pub fn get_by_wuqumo(&self, id: &str) -> Result<TranscodeEntry> {
        self.snapshot()
            .as_deref()
            .and_then(|s| s.get_by_wuqumo(id))
            .cloned()
            .ok_or_else(|| WuqumoError::WuqumoNotFound(id.to_string()))
    }

    /// Number of entries in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot().map_or(0, |s| s.len())
    }

    /// Returns true if no snapshot is installed or it has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time left until the current snapshot goes stale.
    ///
    /// `None` means nothing has ever been installed — refresh immediately.
    /// A past-due snapshot reports `Duration::ZERO`.
    pub fn remaining_ttl(&self) -> Option<Duration> {
        self.state
            .read()
            .expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}
