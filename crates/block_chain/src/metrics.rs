use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking block allocation/reuse/reclaim activity, read by the
/// caller on demand rather than emitted as log lines on the hot path.
/// Fields are atomic since a chain's metrics may be observed from a
/// different thread than the one mutating the chain.
#[derive(Debug, Default)]
pub struct Metrics {
    pub blocks_allocated: AtomicU64,
    pub blocks_reused: AtomicU64,
    pub blocks_reclaimed: AtomicU64,
}

/// Point-in-time, non-atomic copy of [`Metrics`] for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub blocks_allocated: u64,
    pub blocks_reused: u64,
    pub blocks_reclaimed: u64,
}

impl Metrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            blocks_allocated: self.blocks_allocated.load(Ordering::Relaxed),
            blocks_reused: self.blocks_reused.load(Ordering::Relaxed),
            blocks_reclaimed: self.blocks_reclaimed.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_alloc(&self) {
        self.blocks_allocated.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reuse(&self) {
        self.blocks_reused.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reclaim(&self) {
        self.blocks_reclaimed.fetch_add(1, Ordering::Relaxed);
    }
}
