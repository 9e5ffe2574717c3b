use crate::config::HubConfig;
use crate::listener::Listener;
use crate::metrics::Metrics;
use crate::slot::Slot;
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock, Weak};
use std::time::Duration;

/// Owns the timed mutex that serializes delivery to exactly one bound
/// Slot. Listeners hold a back-reference to their Hub; Signals reach the
/// Hub only through a connected Listener.
pub struct Hub {
    pub(crate) mutex: Mutex<()>,
    pub(crate) timeout: Duration,
    slot: OnceLock<Weak<Slot>>,
    pub(crate) metrics: Metrics,
}

impl Hub {
    pub fn new(config: HubConfig) -> Arc<Self> {
        Arc::new(Self {
            mutex: Mutex::new(()),
            timeout: config.timeout,
            slot: OnceLock::new(),
            metrics: Metrics::default(),
        })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Binds this Hub to its one Slot. Must be called exactly once, before
    /// `Slot::spawn`.
    ///
    /// # Panics
    /// Panics if a Slot is already bound.
    pub fn bind_slot(&self, slot: &Arc<Slot>) {
        self.slot
            .set(Arc::downgrade(slot))
            .unwrap_or_else(|_| panic!("Hub is already bound to a Slot"));
    }

    /// Constructs a Listener bound to this Hub.
    pub fn make_listener<T>(self: &Arc<Self>) -> Arc<Listener<T>> {
        Arc::new(Listener::new(Arc::clone(self)))
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Resumes the bound Slot inline, unless it hasn't been `spawn`ed yet.
    ///
    /// A Slot's first `poll_once` fixes which thread it's driven on from
    /// then on; if `emit` reached here before `Slot::spawn` ran, driving
    /// that first poll here would bind the Slot to the emitting thread
    /// instead, so it's skipped — the value is already in the Listener's
    /// inbox and a later `spawn` on the intended thread will see it.
    pub(crate) fn resume_bound_slot(&self) {
        if let Some(weak) = self.slot.get() {
            if let Some(slot) = weak.upgrade() {
                if slot.is_spawned() {
                    slot.poll_once();
                }
            }
        }
    }
}
