//! Lost-update stress test.
//!
//! Only meaningful on the native branch: the fallback makes no atomicity
//! claim, so this whole file compiles away without it.

#![cfg(all(feature = "threads", native_atomics))]
#![allow(unsafe_code)]

use std::thread;

use argon_atomics::{fetch_add, load, AtomicInt, MemoryOrder};

/// A raw location that may be handed to spawned threads. The tests keep the
/// pointee alive for the whole scope.
#[derive(Clone, Copy)]
struct SharedSlot(*mut u64);

// SAFETY: all access through the pointer inside the tests is atomic.
unsafe impl Send for SharedSlot {}

#[test]
fn concurrent_fetch_add_loses_no_updates() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 25_000;

    let mut counter: u64 = 0;
    let slot = SharedSlot(&mut counter);

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(move || {
                // Capture the whole wrapper, not the `!Send` pointer field.
                let slot = slot;
                for _ in 0..PER_THREAD {
                    // SAFETY: `counter` outlives the scope; every access in
                    // the scope goes through an atomic operation.
                    let _ = unsafe { fetch_add(slot.0, 1, MemoryOrder::SeqCst) };
                }
            });
        }
    });

    assert_eq!(counter, THREADS * PER_THREAD);
}

#[test]
fn handle_is_shareable_across_threads() {
    const THREADS: u64 = 4;
    const PER_THREAD: u64 = 10_000;

    let mut counter: u64 = 0;
    let slot = SharedSlot(&mut counter);
    // SAFETY: `counter` outlives the handle; all access goes through it.
    let handle = unsafe { AtomicInt::bind(slot.0) };

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..PER_THREAD {
                    let mut expected = handle.load(MemoryOrder::Relaxed);
                    let mut desired = expected.wrapping_add(1);
                    while !handle.compare_exchange(
                        &mut expected,
                        desired,
                        MemoryOrder::SeqCst,
                        MemoryOrder::Relaxed,
                    ) {
                        // `expected` was refreshed by the failed attempt.
                        desired = expected.wrapping_add(1);
                    }
                }
            });
        }
    });

    // SAFETY: the scope has joined; this is the only remaining access.
    assert_eq!(unsafe { load(slot.0, MemoryOrder::SeqCst) }, THREADS * PER_THREAD);
}
