use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    emits_delivered: AtomicU64,
    emits_timed_out: AtomicU64,
    emits_disconnected: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub emits_delivered: u64,
    pub emits_timed_out: u64,
    pub emits_disconnected: u64,
}

impl Metrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emits_delivered: self.emits_delivered.load(Ordering::Relaxed),
            emits_timed_out: self.emits_timed_out.load(Ordering::Relaxed),
            emits_disconnected: self.emits_disconnected.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_delivered(&self) {
        self.emits_delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_timed_out(&self) {
        self.emits_timed_out.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_disconnected(&self) {
        self.emits_disconnected.fetch_add(1, Ordering::Relaxed);
    }
}
