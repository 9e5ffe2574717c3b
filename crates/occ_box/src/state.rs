use std::sync::Arc;

/// An immutable (version, data) pair. Never mutated after construction —
/// a commit always builds a fresh one and swaps the whole thing in.
pub(crate) struct StateRecord<T> {
    pub(crate) version: u64,
    pub(crate) data: Arc<T>,
}

impl<T> StateRecord<T> {
    pub(crate) fn new(version: u64, data: Arc<T>) -> Arc<Self> {
        Arc::new(Self { version, data })
    }
}
