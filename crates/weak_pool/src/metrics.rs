use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking pool activity: a plain struct read by the caller on
/// demand rather than log lines on the acquire hot path.
#[derive(Debug, Default)]
pub struct Metrics {
    pub acquires: AtomicU64,
    pub acquire_hits: AtomicU64,
    pub cleanups: AtomicU64,
    pub resizes: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub acquires: u64,
    pub acquire_hits: u64,
    pub cleanups: u64,
    pub resizes: u64,
}

impl Metrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            acquires: self.acquires.load(Ordering::Relaxed),
            acquire_hits: self.acquire_hits.load(Ordering::Relaxed),
            cleanups: self.cleanups.load(Ordering::Relaxed),
            resizes: self.resizes.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_acquire(&self) {
        self.acquires.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.acquire_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resize(&self) {
        self.resizes.fetch_add(1, Ordering::Relaxed);
    }
}
