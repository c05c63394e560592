//! Counter-based cache invalidation bus.
//!
//! A monotonically increasing counter plus a registered-listener set. Every
//! successful mutation of stylesheet content calls [`InvalidationBus::invalidate`],
//! which increments the counter by exactly one and then invokes every
//! registered listener in registration order. Consumers compare their own
//! last-observed counter value against [`InvalidationBus::counter`] to decide
//! whether they must refetch; the counter is incremented before any listener
//! runs, so a listener reading it always sees the up-to-date value.
//!
//! Listeners are invoked outside the internal lock, so a callback may freely
//! subscribe, unsubscribe, or read the counter.

use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct BusInner {
    counter: u64,
    next_listener_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Cheaply cloneable handle to a shared invalidation state.
#[derive(Clone, Default)]
pub struct InvalidationBus {
    inner: Arc<Mutex<BusInner>>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the invalidation counter. Starts at zero and only
    /// ever increases.
    pub fn counter(&self) -> u64 {
        self.inner.lock().unwrap().counter
    }

    /// Increments the counter by exactly one, then invokes every currently
    /// registered listener once, in registration order.
    pub fn invalidate(&self) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.lock().unwrap();
            inner.counter += 1;
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        log::debug!("stylesheet cache invalidated ({} listeners)", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    /// Registers a listener. The returned guard unregisters on drop without
    /// affecting the counter.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            bus: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl std::fmt::Debug for InvalidationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvalidationBus")
            .field("counter", &self.counter())
            .finish()
    }
}

/// RAII subscription handle; dropping it unregisters the listener.
pub struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            if let Ok(mut inner) = bus.lock() {
                inner.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

static GLOBAL_BUS: Lazy<InvalidationBus> = Lazy::new(InvalidationBus::new);

/// The process-wide bus. Consumers that do not need isolated state (tests,
/// embedded tools) share this instance.
pub fn global_bus() -> &'static InvalidationBus {
    &GLOBAL_BUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn counter_incremented_before_listeners_run() {
        let bus = InvalidationBus::new();
        let seen = Arc::new(AtomicU64::new(0));
        let seen2 = Arc::clone(&seen);
        let probe = bus.clone();
        let _sub = bus.subscribe(move || {
            seen2.store(probe.counter(), Ordering::SeqCst);
        });

        bus.invalidate();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let bus = InvalidationBus::new();
        let calls = Arc::new(AtomicU64::new(0));
        let calls2 = Arc::clone(&calls);
        let sub = bus.subscribe(move || {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        bus.invalidate();
        drop(sub);
        bus.invalidate();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.counter(), 2);
    }
}
