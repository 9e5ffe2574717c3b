//! Concrete scenarios exercising concurrent commits to an OCC Box.

use occ_box::Box;
use std::sync::Arc;
use std::thread;

#[test]
fn scenario_deterministic_sum_regardless_of_interleaving() {
    let b = Arc::new(Box::new(40i64));
    let deltas = [10i64, -15, 20, -5];

    let handles: Vec<_> = deltas
        .into_iter()
        .map(|d| {
            let b = Arc::clone(&b);
            thread::spawn(move || b.write(|v| *v += d))
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(b.read(|v| *v), 50);
    assert_eq!(b.get_version(), 4);
}
