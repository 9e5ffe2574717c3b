use crate::error::InternError;
use crate::string::ImmutableString;
use std::sync::Arc;
use weak_pool::{ContentEq, ContentHash, Pool};

impl ContentHash for ImmutableString {
    fn content_hash(&self) -> u64 {
        self.content_hash()
    }
}

impl ContentEq for ImmutableString {
    fn content_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// A pool of [`ImmutableString`]s, deduplicated by trimmed content.
///
/// Thin wrapper over [`weak_pool::Pool`] that accepts plain byte slices
/// instead of pre-built `ImmutableString` values, since constructing one
/// requires committing to a constructor (`from_cstr` vs `from_bytes_guarded`)
/// before it's known whether an equivalent value is already interned.
pub struct InternedStringPool {
    inner: Pool<ImmutableString>,
}

impl InternedStringPool {
    pub fn new() -> Self {
        Self { inner: Pool::new() }
    }

    /// Interns `bytes`, returning a shared handle. Trimming (if enabled)
    /// happens before dedup, so `"a"` and `" a "` resolve to one handle.
    ///
    /// `bytes` is a length-qualified slice, not a NUL-terminated one, so an
    /// embedded NUL is rejected rather than silently truncating the input.
    pub fn intern(&self, bytes: &[u8]) -> Result<Arc<ImmutableString>, InternError> {
        let value = ImmutableString::from_bytes_guarded(bytes, &())?;
        Ok(self
            .inner
            .acquire(value)
            .expect("interning a string should not fail to allocate"))
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn cleanup(&self) {
        self.inner.cleanup();
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

impl Default for InternedStringPool {
    fn default() -> Self {
        Self::new()
    }
}
