use std::sync::atomic::{AtomicU64, Ordering};

/// Plain atomic counters; no histogram, no sampling — a cheap always-on
/// tally of commit and retry activity.
#[derive(Debug, Default)]
pub struct Metrics {
    commits: AtomicU64,
    read_retries: AtomicU64,
    write_retries: AtomicU64,
    apply_to_aborts: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub commits: u64,
    pub read_retries: u64,
    pub write_retries: u64,
    pub apply_to_aborts: u64,
}

impl Metrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            commits: self.commits.load(Ordering::Relaxed),
            read_retries: self.read_retries.load(Ordering::Relaxed),
            write_retries: self.write_retries.load(Ordering::Relaxed),
            apply_to_aborts: self.apply_to_aborts.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_commit(&self) {
        self.commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_read_retry(&self) {
        self.read_retries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write_retry(&self) {
        self.write_retries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_apply_to_abort(&self) {
        self.apply_to_aborts.fetch_add(1, Ordering::Relaxed);
    }
}
