//! An interned, immutable string type deduplicated through a weak-reference
//! pool: equal trimmed content always resolves to the same shared handle.

mod error;
mod pool;
mod string;

pub use error::InternError;
pub use pool::InternedStringPool;
pub use string::{ImmutableString, AUTO_TRIM};
