use std::sync::Arc;
use std::time::Duration;

use frontier_logging::{frontier_debug, frontier_info, frontier_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{ContentStore, Publication};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub poll_interval: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Keeps a fresh catalog snapshot by polling a content store on a fixed period.
pub struct CatalogSynchronizer {
    store: Arc<dyn ContentStore>,
    settings: SyncSettings,
}

impl CatalogSynchronizer {
    pub fn new(store: Arc<dyn ContentStore>, settings: SyncSettings) -> Self {
        Self { store, settings }
    }

    /// Fetches once and publishes before returning, then polls in the background
    /// until the returned handle is stopped or dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(self) -> SyncHandle {
        let items = self.store.get_all_content_items().await;
        let initial = Publication::new(0, items);
        frontier_info!(
            "Catalog sync started with {} items, polling every {:?}",
            initial.snapshot.len(),
            self.settings.poll_interval
        );

        let (tx, rx) = watch::channel(Arc::new(initial));
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_ticks(
            self.store,
            self.settings.poll_interval,
            tx,
            cancel.clone(),
        ));

        SyncHandle {
            rx,
            cancel,
            task: Some(task),
        }
    }
}

async fn run_ticks(
    store: Arc<dyn ContentStore>,
    period: Duration,
    tx: watch::Sender<Arc<Publication>>,
    cancel: CancellationToken,
) {
    // The fetch in `start` stands in for the first tick.
    let mut interval = time::interval_at(Instant::now() + period, period);
    // A slow fetch drops the ticks it overlapped instead of bunching them up.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut revision = 0;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {}
        }
        let items = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            items = store.get_all_content_items() => items,
        };

        revision += 1;
        let publication = Publication::new(revision, items);
        frontier_debug!(
            "Catalog revision {} with {} items",
            revision,
            publication.snapshot.len()
        );
        tx.send_replace(Arc::new(publication));
    }

    frontier_debug!("Catalog sync loop exited after revision {}", revision);
}

/// Owns the polling task. Dropping the handle stops polling.
pub struct SyncHandle {
    rx: watch::Receiver<Arc<Publication>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SyncHandle {
    /// Latest publication by value.
    pub fn current(&self) -> Arc<Publication> {
        self.rx.borrow().clone()
    }

    /// Receiver that observes each new publication.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Publication>> {
        self.rx.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancels the schedule. Repeated calls are no-ops.
    pub fn stop(&mut self) {
        if !self.cancel.is_cancelled() {
            frontier_info!("Catalog sync stopped");
            self.cancel.cancel();
        }
    }

    /// Stops and waits for the polling task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                frontier_warn!("Catalog sync task ended abnormally: {}", err);
            }
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
