use crate::hub::Hub;
use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// A one-shot inbox holding at most one `T`, plus a back-reference to the
/// Hub whose mutex guards every transition of that inbox. Constructed only
/// through [`Hub::make_listener`].
pub struct Listener<T> {
    inbox: Mutex<Option<T>>,
    pub(crate) hub: Arc<Hub>,
}

impl<T> Listener<T> {
    pub(crate) fn new(hub: Arc<Hub>) -> Self {
        Self {
            inbox: Mutex::new(None),
            hub,
        }
    }

    pub(crate) fn fill(&self, value: T) {
        *self.inbox.lock() = Some(value);
    }

    /// Awaits the next value delivered to this Listener. Every poll after
    /// an empty inbox returns `Pending`; a concurrent `Signal::emit` fills
    /// the inbox and resumes the bound Slot, and the next poll observes
    /// and clears the value in one step.
    pub fn recv(&self) -> Recv<'_, T> {
        Recv { listener: self }
    }
}

pub struct Recv<'a, T> {
    listener: &'a Listener<T>,
}

impl<'a, T> Future for Recv<'a, T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        match self.listener.inbox.lock().take() {
            Some(value) => Poll::Ready(value),
            None => Poll::Pending,
        }
    }
}
