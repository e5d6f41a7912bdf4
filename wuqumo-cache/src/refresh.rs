//! Background refresh loop for the mapping cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use wuqumo_core::error::Result;
use wuqumo_core::traits::SheetSource;

use crate::cache::MappingCache;
use crate::snapshot::Snapshot;

/// Delay before retrying after a failed reload of a previously healthy cache.
const RETRY_DELAY: Duration = Duration::from_secs(30);

/// Keeps a [`MappingCache`] populated from a [`SheetSource`].
///
/// The loop sleeps until the installed snapshot expires, rebuilds the
/// table from a fresh load, and installs it with the configured TTL. With
/// no snapshot installed the first load happens immediately.
///
/// # Failure semantics
///
/// A failed FIRST load is fatal: [`Refresher::run`] returns the error so
/// the process can exit instead of serving an empty table on bad
/// configuration. Once a snapshot has been installed, reload failures are
/// logged and the last good snapshot keeps serving; the loop retries
/// after a short delay instead of waiting out a full TTL.
pub struct Refresher {
    cache: Arc<MappingCache>,
    source: Arc<dyn SheetSource>,
    ttl: Duration,
}

impl Refresher {
    /// Creates a refresher feeding `cache` from `source`.
    ///
    /// `ttl` is how long each installed snapshot stays fresh
    /// ([`DEFAULT_TTL`](wuqumo_core::constants::DEFAULT_TTL) in
    /// production).
    pub fn new(cache: Arc<MappingCache>, source: Arc<dyn SheetSource>, ttl: Duration) -> Self {
        Self { cache, source, ttl }
    }

    /// Runs one load-build-install cycle.
    ///
    /// Returns the number of entries installed. Used for the startup load
    /// (where a failure must abort the process) and by each refresh tick.
    pub async fn load_once(&self) -> Result<usize> {
        let rows = self.source.load().await?;
        let snapshot = Snapshot::from_rows(&rows);
        let entries = snapshot.len();
        let skipped = rows.len() - entries;

        self.cache.install(snapshot, self.ttl);
        info!(entries, skipped, "mapping cache refreshed");
        Ok(entries)
    }

    /// Runs the refresh loop until `shutdown` fires.
    ///
    /// Returns `Err` only when the first-ever load fails; after a healthy
    /// install the loop never gives up.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        loop {
            // No snapshot yet means refresh immediately.
            let wait = self.cache.remaining_ttl().unwrap_or(Duration::ZERO);

            tokio::select! {
                _ = shutdown.changed() => {
                    info!("refresh loop stopping");
                    return Ok(());
                }
                _ = tokio::time::sleep(wait) => {}
            }

            if let Err(err) = self.load_once().await {
                if self.cache.snapshot().is_none() {
                    // Nothing to serve; bad source at startup is fatal.
                    return Err(err);
                }

                warn!(error = %err, "sheet reload failed, keeping previous snapshot");
                tokio::select! {
                    _ = shutdown.changed() => {
                        info!("refresh loop stopping");
                        return Ok(());
                    }
                    _ = tokio::time::sleep(RETRY_DELAY) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wuqumo_core::error::WuqumoError;
    use wuqumo_core::types::SheetRow;

    /// Scripted source: serves the same rows on every load, except the
    /// load numbers listed in `fail_on`.
    struct FakeSource {
        rows: Vec<SheetRow>,
        fail_on: Vec<usize>,
        loads: AtomicUsize,
    }

    impl FakeSource {
        fn new(pairs: &[(&str, &str)], fail_on: Vec<usize>) -> Arc<Self> {
            let rows = pairs
                .iter()
                .map(|(w, l)| {
                    let mut fields = vec![String::new(); 11];
                    fields[0] = (*w).into();
                    fields[2] = (*l).into();
                    SheetRow::new(1, fields)
                })
                .collect();
            Arc::new(Self {
                rows,
                fail_on,
                loads: AtomicUsize::new(0),
            })
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SheetSource for FakeSource {
        async fn load(&self) -> Result<Vec<SheetRow>> {
            let n = self.loads.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&n) {
                return Err(WuqumoError::ColumnCountMismatch {
                    line: 1,
                    expected: 11,
                    actual: 3,
                });
            }
            Ok(self.rows.clone())
        }
    }

    /// Lets the spawned refresher make progress without advancing time.
    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_load_once_installs_snapshot() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1"), ("W2", "")], vec![]);
        let refresher = Refresher::new(cache.clone(), source, TTL);

        let entries = refresher.load_once().await.unwrap();
        assert_eq!(entries, 1);
        assert_eq!(cache.get_by_lcp("L1").unwrap().wuqumo, "W1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_load_happens_immediately() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1")], vec![]);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(Refresher::new(cache.clone(), source.clone(), TTL).run(rx));
        settle().await;

        assert_eq!(source.loads(), 1);
        assert_eq!(cache.len(), 1);

        tx.send(true).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reload_before_ttl_elapses() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1")], vec![]);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(Refresher::new(cache.clone(), source.clone(), TTL).run(rx));
        settle().await;
        assert_eq!(source.loads(), 1);

        tokio::time::advance(TTL - Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(source.loads(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(source.loads(), 2);

        tx.send(true).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_failure_is_fatal() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1")], vec![1]);
        let (_tx, rx) = watch::channel(false);

        let result = Refresher::new(cache.clone(), source, TTL).run(rx).await;
        assert!(matches!(
            result,
            Err(WuqumoError::ColumnCountMismatch { .. })
        ));
        assert!(cache.snapshot().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_failure_keeps_last_snapshot() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1")], vec![2]);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(Refresher::new(cache.clone(), source.clone(), TTL).run(rx));
        settle().await;
        assert_eq!(source.loads(), 1);

        // Second load fails; the old snapshot must keep serving.
        tokio::time::advance(TTL).await;
        settle().await;
        assert_eq!(source.loads(), 2);
        assert_eq!(cache.get_by_lcp("L1").unwrap().wuqumo, "W1");

        // Retry lands after the backoff, not after a fresh full TTL.
        tokio::time::advance(RETRY_DELAY).await;
        settle().await;
        assert_eq!(source.loads(), 3);
        assert_eq!(cache.len(), 1);

        tx.send(true).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_loop() {
        let cache = Arc::new(MappingCache::new());
        let source = FakeSource::new(&[("W1", "L1")], vec![]);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(Refresher::new(cache, source.clone(), TTL).run(rx));
        settle().await;

        tx.send(true).unwrap();
        handle.await.unwrap().unwrap();

        // No further loads once stopped.
        let before = source.loads();
        tokio::time::advance(TTL * 3).await;
        settle().await;
        assert_eq!(source.loads(), before);
    }
}
