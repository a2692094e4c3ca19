//! Criterion micro-benchmarks for node pool allocation and reuse.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trek_arena::{ArenaConfig, NodePool};

const NODES: usize = 10_000;

#[derive(Clone, Copy, Default)]
struct Payload {
    _g: f32,
    _h: f32,
    _f: f32,
    _parent: u64,
}

/// Benchmark: grow a fresh pool to 10K nodes (10 batches at the default size).
fn bench_pool_fill_10k(c: &mut Criterion) {
    c.bench_function("pool_fill_10k", |b| {
        b.iter(|| {
            let mut pool = NodePool::new(ArenaConfig::default()).unwrap();
            for _ in 0..NODES {
                black_box(pool.alloc(Payload::default()));
            }
            black_box(pool.capacity());
        });
    });
}

/// Benchmark: free and reallocate 10K nodes in an already-grown pool.
fn bench_pool_reuse_10k(c: &mut Criterion) {
    let mut pool = NodePool::new(ArenaConfig::default()).unwrap();
    let mut handles: Vec<_> = (0..NODES).map(|_| pool.alloc(Payload::default())).collect();

    c.bench_function("pool_reuse_10k", |b| {
        b.iter(|| {
            for h in handles.drain(..) {
                pool.free(h);
            }
            for _ in 0..NODES {
                handles.push(pool.alloc(Payload::default()));
            }
            black_box(pool.in_use());
        });
    });
}

/// Benchmark: resolve 10K live handles.
fn bench_pool_get_10k(c: &mut Criterion) {
    let mut pool = NodePool::new(ArenaConfig::default()).unwrap();
    let handles: Vec<_> = (0..NODES).map(|_| pool.alloc(Payload::default())).collect();

    c.bench_function("pool_get_10k", |b| {
        b.iter(|| {
            for &h in &handles {
                black_box(pool.get(h));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_pool_fill_10k,
    bench_pool_reuse_10k,
    bench_pool_get_10k
);
criterion_main!(benches);
