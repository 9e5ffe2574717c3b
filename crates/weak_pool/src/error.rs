use thiserror::Error;

/// Failure modes surfaced by [`crate::Pool::acquire`].
///
/// Allocation failures propagate out of `acquire` and are never retried
/// internally; the pool's invariants hold even when a candidate is
/// discarded mid-insert.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to insert a new slot into the pool")]
    AllocFailed,
}
