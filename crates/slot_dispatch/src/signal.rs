use crate::listener::Listener;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// A non-owning, freely reconnectable pointer to at most one Listener.
pub struct Signal<T> {
    target: Mutex<Option<Weak<Listener<T>>>>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            target: Mutex::new(None),
        }
    }

    pub fn connect(&self, listener: &Arc<Listener<T>>) {
        *self.target.lock() = Some(Arc::downgrade(listener));
    }

    pub fn disconnect(&self) {
        *self.target.lock() = None;
    }

    /// Delivers `value` to the connected Listener and resumes its Hub's
    /// bound Slot. Fails (`false`) if nothing is connected, the Hub has no
    /// bound Slot, or the Hub's mutex isn't acquired within its configured
    /// timeout — the inbox is left untouched in every failure case; a
    /// dropped event is never buffered.
    ///
    /// # Reentrancy
    ///
    /// The Hub's mutex is not reentrant. Calling `emit` again from inside
    /// the Slot body the resumed poll is running on — directly, or through
    /// another `emit` reached transitively from that poll — deadlocks
    /// against yourself up to the Hub's timeout, then returns `false`.
    /// Don't emit back into a Signal from code running on its own Slot.
    pub fn emit(&self, value: T) -> bool {
        let Some(listener) = self.target.lock().as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let hub = Arc::clone(&listener.hub);

        if !hub.is_bound() {
            hub.metrics.record_disconnected();
            return false;
        }

        match hub.mutex.try_lock_for(hub.timeout) {
            Some(_guard) => {
                listener.fill(value);
                hub.resume_bound_slot();
                hub.metrics.record_delivered();
                true
            }
            None => {
                hub.metrics.record_timed_out();
                false
            }
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}
