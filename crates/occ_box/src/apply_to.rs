//! Multi-cell transactions: present only when the `multi_commit` feature is
//! enabled, which gates the transaction marker on each `Box`.

use crate::backoff::Backoff;
use crate::occ_box::Box;
use crate::state::StateRecord;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn try_acquire<T>(b: &Box<T>) -> bool {
    b.marker
        .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        .is_ok()
}

fn release<T>(b: &Box<T>) {
    b.marker.store(false, Ordering::Release);
}

/// Priority-ordering helper: readers and single-Box writers consult this
/// before committing, backing off if a transaction currently holds the
/// marker.
pub fn is_in_transaction<T>(b: &Box<T>) -> bool {
    b.marker.load(Ordering::Acquire)
}

/// Two-Box transaction.
pub fn apply_to2<A, B>(
    boxes: (&Box<A>, &Box<B>),
    funcs: (impl Fn(&mut A), impl Fn(&mut B)),
) -> bool
where
    A: Clone,
    B: Clone,
{
    let (box_a, box_b) = boxes;
    let (fn_a, fn_b) = funcs;

    if !try_acquire(box_a) {
        return false;
    }
    if !try_acquire(box_b) {
        release(box_a);
        return false;
    }

    let snap_a = box_a.load_full();
    let snap_b = box_b.load_full();
    let mut new_a = (*snap_a.data).clone();
    let mut new_b = (*snap_b.data).clone();
    fn_a(&mut new_a);
    fn_b(&mut new_b);

    let diverged = !Arc::ptr_eq(&box_a.load_full(), &snap_a) || !Arc::ptr_eq(&box_b.load_full(), &snap_b);
    if diverged {
        box_a.metrics().record_apply_to_abort();
        release(box_a);
        release(box_b);
        return false;
    }

    let state_a = StateRecord::new(snap_a.version.wrapping_add(1), Arc::new(new_a));
    let state_b = StateRecord::new(snap_b.version.wrapping_add(1), Arc::new(new_b));
    box_a.compare_and_swap_state(&snap_a, state_a);
    box_b.compare_and_swap_state(&snap_b, state_b);
    release(box_a);
    release(box_b);
    true
}

/// Three-Box transaction.
pub fn apply_to3<A, B, C>(
    boxes: (&Box<A>, &Box<B>, &Box<C>),
    funcs: (impl Fn(&mut A), impl Fn(&mut B), impl Fn(&mut C)),
) -> bool
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    let (box_a, box_b, box_c) = boxes;
    let (fn_a, fn_b, fn_c) = funcs;

    if !try_acquire(box_a) {
        return false;
    }
    if !try_acquire(box_b) {
        release(box_a);
        return false;
    }
    if !try_acquire(box_c) {
        release(box_a);
        release(box_b);
        return false;
    }

    let snap_a = box_a.load_full();
    let snap_b = box_b.load_full();
    let snap_c = box_c.load_full();
    let mut new_a = (*snap_a.data).clone();
    let mut new_b = (*snap_b.data).clone();
    let mut new_c = (*snap_c.data).clone();
    fn_a(&mut new_a);
    fn_b(&mut new_b);
    fn_c(&mut new_c);

    let diverged = !Arc::ptr_eq(&box_a.load_full(), &snap_a)
        || !Arc::ptr_eq(&box_b.load_full(), &snap_b)
        || !Arc::ptr_eq(&box_c.load_full(), &snap_c);
    if diverged {
        box_a.metrics().record_apply_to_abort();
        release(box_a);
        release(box_b);
        release(box_c);
        return false;
    }

    let state_a = StateRecord::new(snap_a.version.wrapping_add(1), Arc::new(new_a));
    let state_b = StateRecord::new(snap_b.version.wrapping_add(1), Arc::new(new_b));
    let state_c = StateRecord::new(snap_c.version.wrapping_add(1), Arc::new(new_c));
    box_a.compare_and_swap_state(&snap_a, state_a);
    box_b.compare_and_swap_state(&snap_b, state_b);
    box_c.compare_and_swap_state(&snap_c, state_c);
    release(box_a);
    release(box_b);
    release(box_c);
    true
}

/// Backs off while a Box is under an in-flight `apply_to` transaction.
/// Single-Box `write`/`read` call this to honor the priority ordering
/// multi-commit > single-write > read.
pub(crate) fn wait_out_transaction<T>(b: &Box<T>) {
    if !is_in_transaction(b) {
        return;
    }
    let mut backoff = Backoff::new();
    while is_in_transaction(b) {
        backoff.snooze();
    }
}
