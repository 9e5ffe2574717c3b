use futures_util::task::ArcWake;
use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

#[derive(Default)]
struct WakeFlag {
    woken: AtomicBool,
}

impl ArcWake for WakeFlag {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.woken.store(true, Ordering::SeqCst);
    }
}

/// A coroutine handle plus a once-initialization flag: the Slot body is a
/// native `async` task, driven entirely on whatever thread first calls
/// `spawn`, and subsequently resumed synchronously by `Signal::emit` under
/// the bound Hub's mutex.
///
/// There is no background scheduler thread: resumption only ever happens
/// inline on the caller's stack.
pub struct Slot {
    future: Mutex<Option<Pin<Box<dyn Future<Output = ()> + Send>>>>,
    spawned: AtomicBool,
}

impl Slot {
    pub fn new(body: impl Future<Output = ()> + Send + 'static) -> Arc<Self> {
        Arc::new(Self {
            future: Mutex::new(Some(Box::pin(body))),
            spawned: AtomicBool::new(false),
        })
    }

    /// One-shot resume; safe no-op after the first call.
    pub fn spawn(self: &Arc<Self>) {
        if self
            .spawned
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
        {
            self.poll_once();
        }
    }

    /// Whether `spawn` has run at least once: the only point at which this
    /// Slot's bound thread becomes fixed.
    pub(crate) fn is_spawned(&self) -> bool {
        self.spawned.load(Ordering::Acquire)
    }

    /// Drives the future until it either completes or suspends waiting on
    /// something external (an `await listener` with an empty inbox). A
    /// `yield_now` point re-polls immediately in the same call, since the
    /// wake flag it sets is observed before we give up the turn.
    pub(crate) fn poll_once(&self) {
        let mut guard = self.future.lock();
        let Some(fut) = guard.as_mut() else {
            return;
        };

        let flag = Arc::new(WakeFlag::default());
        loop {
            flag.woken.store(false, Ordering::SeqCst);
            let waker = futures_util::task::waker(Arc::clone(&flag));
            let mut cx = Context::from_waker(&waker);
            match fut.as_mut().poll(&mut cx) {
                Poll::Ready(()) => {
                    *guard = None;
                    return;
                }
                Poll::Pending => {
                    if flag.woken.load(Ordering::SeqCst) {
                        continue;
                    }
                    return;
                }
            }
        }
    }
}
