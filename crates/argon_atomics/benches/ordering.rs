//! Cost of the operation set across ordering levels.
//!
//! The abstraction claims zero overhead beyond the underlying operation;
//! these numbers should track `core::sync::atomic` exactly.

#![allow(missing_docs)]
#![allow(unsafe_code)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use argon_atomics::{fetch_add, load, store, MemoryOrder};

fn bench_load(c: &mut Criterion) {
    let mut slot: u64 = 42;
    let ptr: *mut u64 = &mut slot;

    c.bench_function("load_relaxed", |b| {
        // SAFETY: `slot` is live for the whole benchmark, single-threaded.
        b.iter(|| unsafe { black_box(load(ptr, MemoryOrder::Relaxed)) });
    });
    c.bench_function("load_seqcst", |b| {
        // SAFETY: as above.
        b.iter(|| unsafe { black_box(load(ptr, MemoryOrder::SeqCst)) });
    });
}

fn bench_store(c: &mut Criterion) {
    let mut slot: u64 = 0;
    let ptr: *mut u64 = &mut slot;

    c.bench_function("store_release", |b| {
        // SAFETY: `slot` is live for the whole benchmark, single-threaded.
        b.iter(|| unsafe { store(ptr, black_box(7), MemoryOrder::Release) });
    });
    c.bench_function("store_seqcst", |b| {
        // SAFETY: as above.
        b.iter(|| unsafe { store(ptr, black_box(7), MemoryOrder::SeqCst) });
    });
}

fn bench_fetch_add(c: &mut Criterion) {
    let mut slot: u64 = 0;
    let ptr: *mut u64 = &mut slot;

    c.bench_function("fetch_add_relaxed", |b| {
        // SAFETY: `slot` is live for the whole benchmark, single-threaded.
        b.iter(|| unsafe { black_box(fetch_add(ptr, 1, MemoryOrder::Relaxed)) });
    });
    c.bench_function("fetch_add_seqcst", |b| {
        // SAFETY: as above.
        b.iter(|| unsafe { black_box(fetch_add(ptr, 1, MemoryOrder::SeqCst)) });
    });
}

criterion_group!(benches, bench_load, bench_store, bench_fetch_add);
criterion_main!(benches);
