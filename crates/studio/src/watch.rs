//! Per-consumer stylesheet cache with invalidation-driven refetch.
//!
//! Each independent consumer (a preview instance, an edit dialog) owns a
//! [`StylesheetWatcher`]. The watcher tracks its own last-observed
//! invalidation counter: on [`StylesheetWatcher::sync`], if the bus counter
//! has moved past it (or nothing was ever fetched), the stylesheet is
//! refetched. This guarantees at-least-once refetch per invalidation, and a
//! consumer mounting after invalidations occurred simply fetches fresh.
//!
//! An invalidation landing while a fetch is in flight is not lost: `sync`
//! re-reads the counter after every fetch completes and loops. Because `sync`
//! takes `&mut self` and fetches sequentially, a stale fetch can never
//! overwrite a newer one.

use crate::error::StudioError;
use crate::invalidation::{InvalidationBus, Subscription};
use crate::store::{Stylesheet, StylesheetStore};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Notify;

pub struct StylesheetWatcher {
    store: Arc<dyn StylesheetStore>,
    bus: InvalidationBus,
    stylesheet_id: String,
    /// Invalidation counter value this watcher has caught up to.
    last_seen: u64,
    force_fetch: bool,
    data: Option<Stylesheet>,
    error: Option<StudioError>,
    notify: Arc<Notify>,
    _subscription: Subscription,
}

impl StylesheetWatcher {
    pub fn new(
        store: Arc<dyn StylesheetStore>,
        bus: &InvalidationBus,
        stylesheet_id: impl Into<String>,
    ) -> Self {
        let notify = Arc::new(Notify::new());
        let waker = Arc::clone(&notify);
        let subscription = bus.subscribe(move || waker.notify_one());
        Self {
            store,
            bus: bus.clone(),
            stylesheet_id: stylesheet_id.into(),
            last_seen: 0,
            force_fetch: false,
            data: None,
            error: None,
            notify,
            _subscription: subscription,
        }
    }

    pub fn stylesheet_id(&self) -> &str {
        &self.stylesheet_id
    }

    /// Cached stylesheet. On fetch failure this keeps the previous value
    /// (stale-but-present beats an empty preview).
    pub fn data(&self) -> Option<&Stylesheet> {
        self.data.as_ref()
    }

    /// Error from the most recent fetch, cleared by the next success.
    pub fn error(&self) -> Option<&StudioError> {
        self.error.as_ref()
    }

    /// Retargets the watcher; cached state is discarded and the next `sync`
    /// fetches fresh.
    pub fn set_stylesheet(&mut self, stylesheet_id: impl Into<String>) {
        self.stylesheet_id = stylesheet_id.into();
        self.data = None;
        self.error = None;
        self.last_seen = 0;
        self.force_fetch = true;
    }

    /// Brings the cache up to date with the invalidation counter, fetching
    /// as many times as needed. Returns without fetching when the cache is
    /// already current.
    pub async fn sync(&mut self) {
        loop {
            let target = self.bus.counter();
            let settled = self.data.is_some() || self.error.is_some();
            if !self.force_fetch && settled && self.last_seen >= target {
                return;
            }
            self.force_fetch = false;

            match self.store.get(&self.stylesheet_id).await {
                Ok(sheet) => {
                    debug!(
                        "fetched stylesheet {} (version {})",
                        sheet.id, sheet.version
                    );
                    self.data = Some(sheet);
                    self.error = None;
                }
                Err(err) => {
                    warn!("failed to fetch stylesheet {}: {err}", self.stylesheet_id);
                    self.error = Some(err);
                }
            }
            self.last_seen = target;
            // Loop: an invalidation may have landed while the fetch was in
            // flight, in which case the counter has moved past `target`.
        }
    }

    /// Waits for the next invalidation, then syncs.
    pub async fn changed(&mut self) {
        self.notify.notified().await;
        self.sync().await;
    }

    /// Unconditional refetch, regardless of counter state.
    pub async fn refetch(&mut self) {
        self.force_fetch = true;
        self.sync().await;
    }
}
