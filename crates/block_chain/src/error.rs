use thiserror::Error;

/// Failure modes surfaced by block-chain containers.
///
/// Per the core's error-handling policy, these are reserved for
/// out-of-resource conditions; expected, recoverable situations (an empty
/// stack, an out-of-range index) are expressed with `Option` instead.
#[derive(Debug, Error)]
pub enum BlockChainError {
    /// A new `Block` could not be allocated.
    #[error("failed to allocate a new block")]
    AllocFailed,
}
