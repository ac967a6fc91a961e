// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! HashIndex behavior at scale: many inserts, many resizes, no losses.

use cryptogram_search::HashIndex;

#[test]
fn test_thousand_keys_across_resizes() {
    let mut index = HashIndex::new();
    for i in 0..1000u32 {
        index.associate(format!("key-{i}"), i);
    }

    assert_eq!(index.len(), 1000);
    for i in 0..1000u32 {
        assert_eq!(index.find(&format!("key-{i}")), Some(&i));
    }
    assert_eq!(index.find(&"key-1000".to_string()), None);
}

#[test]
fn test_upserts_never_grow_the_index() {
    let mut index = HashIndex::new();
    for round in 0..3u32 {
        for i in 0..200u32 {
            index.associate(format!("key-{i}"), i + round);
        }
    }

    // Overwrites in place: still one entry per key, holding the last value.
    assert_eq!(index.len(), 200);
    for i in 0..200u32 {
        assert_eq!(index.find(&format!("key-{i}")), Some(&(i + 2)));
    }
}

#[test]
fn test_reset_returns_to_initial_capacity() {
    let mut index = HashIndex::new();
    for i in 0..500u32 {
        index.associate(i, i);
    }
    assert!(index.load_factor() <= 0.5);

    index.reset();
    assert!(index.is_empty());

    // Rebuilding after reset behaves like a fresh index.
    for i in 0..500u32 {
        index.associate(i, i * 2);
    }
    for i in 0..500u32 {
        assert_eq!(index.find(&i), Some(&(i * 2)));
    }
}
