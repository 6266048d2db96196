//! Stress tests that push the binomial heap through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_binomial_heap::BinomialHeap;

/// Small deterministic LCG so failures reproduce
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *seed >> 33
}

#[test]
fn test_massive_operations() {
    let mut heap = BinomialHeap::new();

    for i in 0..10_000 {
        heap.insert(i, i);
    }
    assert_eq!(heap.len(), 10_000);
    assert!(heap.verify_internal_structure());

    for i in 0..10_000 {
        assert_eq!(heap.pop_min(), Some((i, i)));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_reverse_order_inserts() {
    let mut heap = BinomialHeap::from_keys((0..4096).rev());
    assert_eq!(heap.root_degrees(), vec![12]);
    assert!(heap.drain().eq(0..4096));
}

#[test]
fn test_many_decrease_keys() {
    let mut heap = BinomialHeap::new();
    let handles: Vec<_> = (0..2000).map(|i| heap.insert(10_000 + i, i)).collect();

    // decrease in reverse so every call bubbles through a populated tree
    for (i, handle) in handles.iter().enumerate().rev() {
        assert!(heap.decrease(handle, i as i32).is_ok());
    }
    assert!(heap.verify_internal_structure());

    for i in 0..2000 {
        assert_eq!(heap.pop_min(), Some((i, i)));
    }
}

#[test]
fn test_repeated_decrease_on_same_handle() {
    let mut heap = BinomialHeap::from_keys(0..1000);
    let h = heap.insert(5000, -1);

    for key in (-100..5000).rev().step_by(37) {
        heap.decrease(&h, key).unwrap();
        assert_eq!(heap.get(&h).map(|(k, _)| *k), Ok(key));
    }
    assert!(heap.verify_internal_structure());
}

#[test]
fn test_alternating_ops() {
    let mut heap = BinomialHeap::new();

    for i in 0..500 {
        heap.insert(i * 2, i);
        heap.insert(i * 2 + 1, i + 1000);
        assert_eq!(heap.pop_min(), Some((i, if i % 2 == 0 { i / 2 } else { i / 2 + 1000 })));
    }
    assert_eq!(heap.len(), 500);
    assert!(heap.verify_internal_structure());
}

#[test]
fn test_delete_everything_through_handles() {
    let mut heap = BinomialHeap::new();
    let mut seed = 7;
    let mut handles: Vec<_> = (0..3000)
        .map(|_| {
            let k = (lcg(&mut seed) % 500) as i64;
            heap.insert_key(k)
        })
        .collect();

    // delete in a scrambled order
    while !handles.is_empty() {
        let idx = (lcg(&mut seed) as usize) % handles.len();
        let h = handles.swap_remove(idx);
        assert!(heap.delete(&h).is_ok());
        assert!(!h.is_live());
    }
    assert!(heap.is_empty());
    assert!(heap.verify_internal_structure());
}

#[test]
fn test_many_unions() {
    let mut seed = 99;
    let mut total = BinomialHeap::new();
    let mut all = Vec::new();
    let mut handles = Vec::new();

    for round in 0..200 {
        let mut part = BinomialHeap::new();
        for _ in 0..(round % 17) {
            let k = lcg(&mut seed) as u32;
            handles.push(part.insert_key(k));
            all.push(k);
        }
        total.union(part);
    }
    assert_eq!(total.len(), all.len());
    assert!(total.verify_internal_structure());
    assert!(handles.iter().all(|h| total.contains(h)));

    all.sort_unstable();
    assert_eq!(total.drain().collect::<Vec<_>>(), all);
}

#[test]
fn test_random_mixed_workload() {
    let mut seed = 2024;
    let mut heap = BinomialHeap::new();
    let mut live = Vec::new();

    for step in 0..20_000 {
        match lcg(&mut seed) % 10 {
            0..=4 => live.push(heap.insert_key((lcg(&mut seed) % 100_000) as i64)),
            5 | 6 => {
                heap.extract_min();
            }
            7 | 8 if !live.is_empty() => {
                let h = &live[(lcg(&mut seed) as usize) % live.len()];
                if let Ok((&k, _)) = heap.get(h) {
                    heap.decrease(h, k - (lcg(&mut seed) % 1000) as i64).unwrap();
                }
            }
            _ if !live.is_empty() => {
                let h = live.swap_remove((lcg(&mut seed) as usize) % live.len());
                let _ = heap.delete(&h);
            }
            _ => {}
        }
        live.retain(|h| h.is_live());
        if step % 1000 == 0 {
            assert!(heap.verify_internal_structure());
        }
    }

    assert!(heap.verify_internal_structure());
    let drained: Vec<_> = heap.drain_entries().map(|(k, _)| k).collect();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}
