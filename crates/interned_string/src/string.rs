use crate::error::InternError;
use std::collections::hash_map::DefaultHasher;
use std::ffi::CStr;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Whether leading/trailing ASCII whitespace is stripped at construction.
///
/// A process-wide compile-time constant; there is no run-time toggle.
pub const AUTO_TRIM: bool = true;

fn normalize(bytes: &[u8]) -> &[u8] {
    if AUTO_TRIM {
        trim_ascii(bytes)
    } else {
        bytes
    }
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |p| p + 1);
    &bytes[start..end]
}

/// An immutable, content-addressed byte sequence with a lazily-computed,
/// cached content hash.
///
/// Values are never copied or moved once constructed — callers share them
/// through handles obtained from an [`crate::InternedStringPool`]. Equality
/// and hashing operate on the final (trimmed, NUL-free) content, not on
/// pointer identity.
pub struct ImmutableString {
    // Trailing NUL is stored but not counted in `len`, so `as_ptr_cstr`
    // can hand out a null-terminated view without a second allocation.
    data: Box<[u8]>,
    len: usize,
    hash: OnceLock<u64>,
}

impl ImmutableString {
    /// Constructs from a NUL-terminated source; the content stops at the
    /// first NUL by construction, so embedded-NUL rejection never applies.
    pub fn from_cstr(s: &CStr) -> Self {
        Self::new_from_bytes(s.to_bytes())
    }

    /// Constructs from a `(pointer, length)`-equivalent slice whose source
    /// buffer the caller guarantees is stable for the duration of the call
    /// by holding `_guard`, an external lock guarding the source buffer
    /// against mutation during the copy.
    ///
    /// Rejects embedded NUL bytes, since the length is given explicitly
    /// rather than implied by a NUL terminator.
    pub fn from_bytes_guarded<'a, Guard>(
        bytes: &'a [u8],
        _guard: &'a Guard,
    ) -> Result<Self, InternError> {
        if bytes.contains(&0) {
            return Err(InternError::EmbeddedNul);
        }
        Ok(Self::new_from_bytes(bytes))
    }

    fn new_from_bytes(bytes: &[u8]) -> Self {
        let trimmed = normalize(bytes);
        let mut data = Vec::with_capacity(trimmed.len() + 1);
        data.extend_from_slice(trimmed);
        data.push(0);
        Self {
            data: data.into_boxed_slice(),
            len: trimmed.len(),
            hash: OnceLock::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A non-owning view of the content, without the trailing NUL.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// A pointer to a NUL-terminated copy of the content.
    #[inline]
    pub fn as_ptr_cstr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// An owning copy of the content.
    pub fn to_owned_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Content-based hash, computed once and cached under a one-time
    /// barrier; subsequent calls return the cached value.
    pub fn content_hash(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.as_bytes().hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl PartialEq for ImmutableString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ImmutableString {}

impl std::fmt::Debug for ImmutableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableString")
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn trims_whitespace_by_default() {
        let s = ImmutableString::new_from_bytes(b"  hello world  ");
        assert_eq!(s.as_bytes(), b"hello world");
    }

    #[test]
    fn cstr_stops_at_nul() {
        let c = CString::new("hi").unwrap();
        let s = ImmutableString::from_cstr(&c);
        assert_eq!(s.as_bytes(), b"hi");
    }

    #[test]
    fn rejects_embedded_nul_when_length_given() {
        let lock = parking_lot::Mutex::new(());
        let guard = lock.lock();
        let err = ImmutableString::from_bytes_guarded(b"a\0b", &guard).unwrap_err();
        assert!(matches!(err, InternError::EmbeddedNul));
    }

    #[test]
    fn bytes_guarded_construction_succeeds_without_embedded_nul() {
        let lock = parking_lot::Mutex::new(());
        let guard = lock.lock();
        let s = ImmutableString::from_bytes_guarded(b"plain text", &guard).unwrap();
        assert_eq!(s.as_bytes(), b"plain text");
    }

    #[test]
    fn equal_trimmed_content_hashes_equal() {
        let a = ImmutableString::new_from_bytes(b"same");
        let b = ImmutableString::new_from_bytes(b"  same  ");
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn hash_is_cached() {
        let s = ImmutableString::new_from_bytes(b"stable");
        let h1 = s.content_hash();
        let h2 = s.content_hash();
        assert_eq!(h1, h2);
    }
}
