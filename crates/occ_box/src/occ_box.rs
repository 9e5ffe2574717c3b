use crate::backoff::Backoff;
use crate::metrics::Metrics;
use crate::state::StateRecord;
use arc_swap::ArcSwap;
#[cfg(feature = "multi_commit")]
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A versioned cell: optimistic reads observe a consistent snapshot without
/// taking a lock, writes commit a brand-new State record via a single
/// compare-exchange. Readers never block writers and vice versa.
pub struct Box<T> {
    state: ArcSwap<StateRecord<T>>,
    #[cfg(feature = "multi_commit")]
    pub(crate) marker: AtomicBool,
    metrics: Metrics,
}

impl<T> Box<T> {
    pub fn new(data: T) -> Self {
        Self {
            state: ArcSwap::new(StateRecord::new(0, Arc::new(data))),
            #[cfg(feature = "multi_commit")]
            marker: AtomicBool::new(false),
            metrics: Metrics::default(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Current State's version, for observation only.
    pub fn get_version(&self) -> u64 {
        self.state.load().version
    }

    /// Loads State twice around invoking `f`; if both loads observed the
    /// same State record, `f`'s result reflects a consistent snapshot.
    /// `f` must not mutate the Box; external side effects are fine.
    pub fn read<R>(&self, f: impl Fn(&T) -> R) -> R {
        #[cfg(feature = "multi_commit")]
        crate::apply_to::wait_out_transaction(self);

        let mut backoff = Backoff::new();
        loop {
            let before = self.state.load_full();
            let result = f(&before.data);
            let after = self.state.load_full();
            if Arc::ptr_eq(&before, &after) {
                return result;
            }
            self.metrics.record_read_retry();
            backoff.snooze();
        }
    }

    /// Bounded `read`: at most `n` attempts (`n = 0` behaves as `n = 1`).
    /// The first attempt runs outside the retry loop, so `n = 1` makes
    /// exactly one attempt with no spurious backoff.
    pub fn try_read<R>(&self, f: impl Fn(&T) -> R, n: usize) -> Option<R> {
        let limit = n.max(1);
        let before = self.state.load_full();
        let result = f(&before.data);
        let after = self.state.load_full();
        if Arc::ptr_eq(&before, &after) {
            return Some(result);
        }
        self.metrics.record_read_retry();

        let mut backoff = Backoff::new();
        for _ in 1..limit {
            backoff.snooze();
            let before = self.state.load_full();
            let result = f(&before.data);
            let after = self.state.load_full();
            if Arc::ptr_eq(&before, &after) {
                return Some(result);
            }
            self.metrics.record_read_retry();
        }
        None
    }

    /// Deep-copies the current data, runs `f` on the copy, and
    /// compare-exchanges a fresh State (`version + 1`) into place,
    /// retrying on contention.
    pub fn write(&self, f: impl Fn(&mut T))
    where
        T: Clone,
    {
        let mut backoff = Backoff::new();
        loop {
            if self.commit_once(&f) {
                return;
            }
            self.metrics.record_write_retry();
            backoff.snooze();
        }
    }

    /// Bounded `write`: true on commit, false on retry exhaustion.
    pub fn try_write(&self, f: impl Fn(&mut T), n: usize) -> bool
    where
        T: Clone,
    {
        let limit = n.max(1);
        if self.commit_once(&f) {
            return true;
        }
        self.metrics.record_write_retry();

        let mut backoff = Backoff::new();
        for _ in 1..limit {
            backoff.snooze();
            if self.commit_once(&f) {
                return true;
            }
            self.metrics.record_write_retry();
        }
        false
    }

    fn commit_once(&self, f: &impl Fn(&mut T)) -> bool
    where
        T: Clone,
    {
        #[cfg(feature = "multi_commit")]
        crate::apply_to::wait_out_transaction(self);

        let current = self.state.load_full();
        let mut data = (*current.data).clone();
        f(&mut data);
        let new_state = StateRecord::new(current.version.wrapping_add(1), Arc::new(data));
        let committed = self.compare_and_swap(&current, new_state);
        if committed {
            self.metrics.record_commit();
        }
        committed
    }

    /// Like `write`, but `f` takes the current owned data handle and
    /// returns the replacement directly: no intermediate clone.
    pub fn write_ptr(&self, f: impl Fn(Arc<T>) -> Arc<T>) {
        let mut backoff = Backoff::new();
        loop {
            if self.commit_ptr_once(&f) {
                return;
            }
            self.metrics.record_write_retry();
            backoff.snooze();
        }
    }

    /// Bounded `write_ptr`: true on commit, false on retry exhaustion.
    pub fn try_write_ptr(&self, f: impl Fn(Arc<T>) -> Arc<T>, n: usize) -> bool {
        let limit = n.max(1);
        if self.commit_ptr_once(&f) {
            return true;
        }
        self.metrics.record_write_retry();

        let mut backoff = Backoff::new();
        for _ in 1..limit {
            backoff.snooze();
            if self.commit_ptr_once(&f) {
                return true;
            }
            self.metrics.record_write_retry();
        }
        false
    }

    fn commit_ptr_once(&self, f: &impl Fn(Arc<T>) -> Arc<T>) -> bool {
        #[cfg(feature = "multi_commit")]
        crate::apply_to::wait_out_transaction(self);

        let current = self.state.load_full();
        let new_data = f(Arc::clone(&current.data));
        let new_state = StateRecord::new(current.version.wrapping_add(1), new_data);
        let committed = self.compare_and_swap(&current, new_state);
        if committed {
            self.metrics.record_commit();
        }
        committed
    }

    fn compare_and_swap(&self, current: &Arc<StateRecord<T>>, new_state: Arc<StateRecord<T>>) -> bool {
        let previous = self.state.compare_and_swap(current, new_state);
        Arc::ptr_eq(&previous, current)
    }

    #[cfg(feature = "multi_commit")]
    pub(crate) fn load_full(&self) -> Arc<StateRecord<T>> {
        self.state.load_full()
    }

    #[cfg(feature = "multi_commit")]
    pub(crate) fn compare_and_swap_state(
        &self,
        current: &Arc<StateRecord<T>>,
        new_state: Arc<StateRecord<T>>,
    ) -> bool {
        self.compare_and_swap(current, new_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_after_write_observes_new_value() {
        let b = Box::new(10i32);
        b.write(|v| *v += 5);
        assert_eq!(b.read(|v| *v), 15);
    }

    #[test]
    fn version_advances_exactly_once_per_commit() {
        let b = Box::new(0i32);
        assert_eq!(b.get_version(), 0);
        b.write(|v| *v += 1);
        assert_eq!(b.get_version(), 1);
        b.write(|v| *v += 1);
        assert_eq!(b.get_version(), 2);
    }

    #[test]
    fn try_read_single_attempt_never_retries_spuriously() {
        let b = Box::new(42i32);
        assert_eq!(b.try_read(|v| *v, 1), Some(42));
    }

    #[test]
    fn try_write_single_attempt_commits_uncontended() {
        let b = Box::new(1i32);
        assert!(b.try_write(|v| *v *= 10, 1));
        assert_eq!(b.read(|v| *v), 10);
    }

    #[test]
    fn write_ptr_replaces_without_cloning_caller_data() {
        let b = Box::new(Arc::new(100i32));
        b.write_ptr(|_current| Arc::new(Arc::new(200)));
        assert_eq!(**b.read(|v| Arc::clone(v)), 200);
    }

    #[test]
    fn concurrent_writers_never_lose_a_commit() {
        use std::thread;
        let b = Arc::new(Box::new(0i64));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let b = Arc::clone(&b);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        b.write(|v| *v += 1);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(b.read(|v| *v), 8000);
        assert_eq!(b.get_version(), 8000);
    }
}
