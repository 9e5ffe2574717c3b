//! A coroutine Slot bound one-to-one to a synchronization Hub. Signals
//! deliver values into Listener inboxes under the Hub's timed mutex and
//! resume the Slot inline; there is no background scheduler thread.
//!
//! The Hub's mutex is ordinary, non-reentrant `parking_lot::Mutex`: a
//! [`Signal::emit`] reached from within the Slot body its own resume is
//! running on deadlocks against itself (bounded by the Hub's timeout, not
//! forever). See [`Signal::emit`]'s docs.

mod config;
mod hub;
mod listener;
mod metrics;
mod signal;
mod slot;
mod yield_now;

pub use config::HubConfig;
pub use hub::Hub;
pub use listener::{Listener, Recv};
pub use metrics::{Metrics, MetricsSnapshot};
pub use signal::Signal;
pub use slot::Slot;
pub use yield_now::yield_now;
