//! Criterion benchmarks for the binomial heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench binomial
//!
//! # only the union group
//! cargo bench --bench binomial -- union
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_binomial_heap::BinomialHeap;
use std::hint::black_box;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn bench_insert_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_drain");
    for &n in &SIZES {
        let keys = random_keys(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinomialHeap::from_keys(keys.iter().copied());
                let mut sum = 0u64;
                for k in heap.drain() {
                    sum = sum.wrapping_add(k);
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for &n in &SIZES {
        let keys = random_keys(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinomialHeap::new();
                let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k, ())).collect();
                for (i, h) in handles.iter().enumerate() {
                    let (&k, _) = heap.get(h).unwrap();
                    heap.decrease(h, k / 2 + (i as u64 & 1)).ok();
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    for &n in &SIZES {
        let left = random_keys(n, 1);
        let right = random_keys(n / 4, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(left, right), |b, (l, r)| {
            b.iter_batched(
                || {
                    (
                        BinomialHeap::from_keys(l.iter().copied()),
                        BinomialHeap::from_keys(r.iter().copied()),
                    )
                },
                |(mut a, other)| {
                    a.union(other);
                    black_box(a.len())
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for &n in &SIZES {
        let keys = random_keys(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinomialHeap::new();
                let handles: Vec<_> = keys.iter().map(|&k| heap.insert_key(k)).collect();
                for h in handles.iter().step_by(2) {
                    heap.delete(h).ok();
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_drain,
    bench_decrease_key,
    bench_union,
    bench_delete
);
criterion_main!(benches);
