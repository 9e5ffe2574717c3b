//! A versioned cell with optimistic reads, commit-replace writes, and
//! (behind the `multi_commit` feature) two-phase multi-cell transactions.

mod backoff;
#[cfg(feature = "multi_commit")]
mod apply_to;
mod metrics;
#[allow(clippy::module_inception)]
mod occ_box;
mod state;

pub use crate::occ_box::Box;
pub use metrics::{Metrics, MetricsSnapshot};

#[cfg(feature = "multi_commit")]
pub use apply_to::{apply_to2, apply_to3, is_in_transaction};
