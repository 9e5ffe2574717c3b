use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::metrics::Metrics;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Customer-supplied content hash, used instead of pointer identity so the
/// pool deduplicates by value rather than by allocation.
pub trait ContentHash {
    fn content_hash(&self) -> u64;
}

/// Customer-supplied content equality, used alongside [`ContentHash`].
pub trait ContentEq {
    fn content_eq(&self, other: &Self) -> bool;
}

struct PoolState<T> {
    // Keyed by content hash rather than a single flat `HashSet<Slot<T>>`:
    // this sidesteps needing a `Borrow`-compatible probe key for an
    // as-yet-unwrapped candidate value, while preserving the same
    // dedup-by-content-under-lock behavior. See DESIGN.md.
    buckets: HashMap<u64, Vec<Weak<T>>>,
    reserved_size: usize,
}

impl<T> PoolState<T> {
    /// Count of all slots, expired or not; `cleanup()` is the only way to
    /// collapse them.
    fn total_slots(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    fn live_slots(&self) -> usize {
        self.buckets
            .values()
            .flatten()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn cleanup(&mut self) {
        self.buckets.retain(|_, slots| {
            slots.retain(|w| w.strong_count() > 0);
            !slots.is_empty()
        });
    }
}

/// A generic, content-addressed pool over weak references.
///
/// `acquire` constructs a candidate, probes for an equivalent live value
/// and returns it if found, otherwise inserts the candidate and returns a
/// fresh handle. Expired slots are not removed eagerly; only
/// [`Pool::cleanup`]/[`Pool::cleanup_shrink`] collapse them.
pub struct Pool<T> {
    state: RwLock<PoolState<T>>,
    config: PoolConfig,
    metrics: Metrics,
}

impl<T: ContentHash + ContentEq> Pool<T> {
    pub fn new() -> Self {
        Self::with_config(PoolConfig::DEFAULT)
    }

    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            state: RwLock::new(PoolState {
                buckets: HashMap::new(),
                reserved_size: config.min_reserved_size,
            }),
            config,
            metrics: Metrics::default(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn probe(state: &PoolState<T>, hash: u64, value: &T) -> Option<Arc<T>> {
        let bucket = state.buckets.get(&hash)?;
        for weak in bucket {
            if let Some(existing) = weak.upgrade() {
                if existing.content_eq(value) {
                    return Some(existing);
                }
            }
        }
        None
    }

    /// Acquires a handle to `value`'s equivalence class: an existing live
    /// slot if one matches, otherwise a freshly inserted one.
    pub fn acquire(&self, value: T) -> Result<Arc<T>, PoolError> {
        let hash = value.content_hash();

        {
            let state = self.state.read();
            if let Some(found) = Self::probe(&state, hash, &value) {
                self.metrics.record_hit();
                return Ok(found);
            }
        }

        let mut state = self.state.write();
        // Re-probe: another thread may have inserted an equivalent value
        // between our shared probe and acquiring the exclusive lock.
        if let Some(found) = Self::probe(&state, hash, &value) {
            self.metrics.record_hit();
            return Ok(found);
        }

        let bucket = state.buckets.entry(hash).or_default();
        bucket.try_reserve(1).map_err(|_| PoolError::AllocFailed)?;
        let arc = Arc::new(value);
        bucket.push(Arc::downgrade(&arc));
        self.metrics.record_acquire();

        if state.live_slots() >= state.reserved_size {
            state.cleanup();
            self.metrics.record_cleanup();
            let live = state.live_slots();
            if live as f64 >= state.reserved_size as f64 * self.config.high_watermark_ratio {
                state.reserved_size *= 2;
                self.metrics.record_resize();
            } else if live as f64 <= state.reserved_size as f64 * self.config.low_watermark_ratio {
                state.reserved_size =
                    (state.reserved_size / 2).max(self.config.min_reserved_size);
                self.metrics.record_resize();
            }
        }

        Ok(arc)
    }

    /// Removes expired slots.
    pub fn cleanup(&self) {
        let mut state = self.state.write();
        state.cleanup();
        self.metrics.record_cleanup();
    }

    /// Cleanup plus a low-watermark-driven shrink of reserved size.
    pub fn cleanup_shrink(&self) {
        let mut state = self.state.write();
        state.cleanup();
        self.metrics.record_cleanup();
        let live = state.live_slots();
        if live as f64 <= state.reserved_size as f64 * self.config.low_watermark_ratio {
            state.reserved_size = (state.reserved_size / 2).max(self.config.min_reserved_size);
            self.metrics.record_resize();
        }
    }

    /// Number of slots, including expired ones.
    pub fn size(&self) -> usize {
        self.state.read().total_slots()
    }

    /// Current reserved-size capacity hint.
    pub fn reserved_size(&self) -> usize {
        self.state.read().reserved_size
    }

    /// Drops all slots and resets reserved size to the configured minimum.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.buckets.clear();
        state.reserved_size = self.config.min_reserved_size;
    }
}

impl<T: ContentHash + ContentEq> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

// `acquire` is intentionally only defined for `&self`; Rust has no
// separate const/non-const overload set to additionally restrict — see
// DESIGN.md's Open Question notes.
