//! Multi-Box transaction tests; only compiled with the `multi_commit`
//! feature.

#![cfg(feature = "multi_commit")]

use occ_box::{apply_to2, Box};

#[test]
fn scenario_transfer_between_two_boxes() {
    let a = Box::new(100i64);
    let b = Box::new(200i64);

    let committed = apply_to2((&a, &b), (|x: &mut i64| *x -= 50, |y: &mut i64| *y += 50));

    assert!(committed);
    assert_eq!(a.read(|v| *v), 50);
    assert_eq!(b.read(|v| *v), 250);
}

#[test]
fn transfer_preserves_the_total_under_concurrent_transactions() {
    use std::sync::Arc;
    use std::thread;

    let a = Arc::new(Box::new(1000i64));
    let b = Arc::new(Box::new(1000i64));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let a = Arc::clone(&a);
            let b = Arc::clone(&b);
            thread::spawn(move || {
                for _ in 0..50 {
                    loop {
                        if apply_to2((&a, &b), (|x: &mut i64| *x -= 1, |y: &mut i64| *y += 1)) {
                            break;
                        }
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(a.read(|v| *v) + b.read(|v| *v), 2000);
}
