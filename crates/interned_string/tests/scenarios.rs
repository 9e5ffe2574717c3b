//! Equal trimmed content resolves to the same pointer identity through the
//! pool; unequal content does not.

use interned_string::InternedStringPool;
use std::sync::Arc;

#[test]
fn scenario_pool_dedup_by_trimmed_content() {
    let pool = InternedStringPool::new();

    let a = pool.intern(b"configuration").unwrap();
    let b = pool.intern(b"  configuration  ").unwrap();
    let c = pool.intern(b"configuration!").unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(a.content_hash(), b.content_hash());
    assert_ne!(a.content_hash(), c.content_hash());
}

#[test]
fn scenario_handle_survives_original_drop() {
    let pool = InternedStringPool::new();
    let first = pool.intern(b"kept alive").unwrap();
    drop(pool.intern(b"kept alive"));
    assert_eq!(first.as_bytes(), b"kept alive");
}
