use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A cooperative no-op suspension point: the first poll requests an
/// immediate re-poll and suspends; the second poll resumes right away.
/// Useful for deterministic phase boundaries inside a Slot body.
pub fn yield_now() -> YieldNow {
    YieldNow { done: false }
}

pub struct YieldNow {
    done: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.done {
            return Poll::Ready(());
        }
        self.done = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
