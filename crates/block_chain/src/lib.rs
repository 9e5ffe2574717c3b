//! Append-only, block-allocated containers: a LIFO stack and a FIFO buffer
//! built from chained fixed-size blocks, plus a radix sort engine that
//! consumes the buffer as its bucket type.
//!
//! Chained fixed-size blocks avoid the reallocate-and-copy cost of
//! contiguous growable buffers while keeping intra-block access
//! cache-friendly; explicit reserve/reclaim operations separate "what's
//! live" from "what memory to hold."

mod block;
mod buffer;
mod error;
mod metrics;
mod radix;
mod stack;

pub use buffer::{DataSink, Iter, OwnedIter, OwnedSink, SinkElement, MIN_BUFFER_BLOCK_SIZE};
pub use error::BlockChainError;
pub use metrics::{Metrics, MetricsSnapshot};
pub use radix::{
    radix_sort_u16, radix_sort_u32, radix_sort_u64, radix_sort_u8, sort_u32, sort_u64,
};
pub use stack::{PodStack, MIN_STACK_BLOCK_SIZE};
