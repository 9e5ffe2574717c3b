use thiserror::Error;

/// Failure modes surfaced by [`crate::ImmutableString`] construction.
#[derive(Debug, Error)]
pub enum InternError {
    /// A length-qualified input contained an interior NUL byte. Null-terminated
    /// inputs never hit this — they simply stop at the NUL.
    #[error("input contains an embedded NUL byte")]
    EmbeddedNul,
}
