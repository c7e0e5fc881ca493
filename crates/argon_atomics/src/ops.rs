//! The atomic operation set.
//!
//! Five generic operations over caller-owned integral storage, implemented
//! twice behind `cfg(native_atomics)`:
//!
//! - native branch: routed through `core::sync::atomic::Atomic*::from_ptr`,
//!   honoring the requested [`MemoryOrder`];
//! - fallback branch: plain `ptr::read`/`ptr::write`, correct only because
//!   the build guarantees single-threaded execution.
//!
//! All arithmetic is wrapping; there is no overflow checking.

#![allow(unsafe_code)]

use crate::order::MemoryOrder;

mod sealed {
    pub trait Sealed {}
}

/// An integral type the operation set is instantiated for.
///
/// Sealed: implemented for `u8 u16 u32 u64 usize i8 i16 i32 i64 isize` and
/// nothing else. The methods are raw plumbing for the free functions in this
/// module and the [`AtomicInt`](crate::AtomicInt) handle; callers go through
/// those.
pub trait AtomicRepr: Copy + Eq + sealed::Sealed {
    /// Reads `*src`.
    ///
    /// # Safety
    /// `src` must be valid, aligned for the width's atomic type, and free of
    /// concurrent non-atomic access.
    unsafe fn raw_load(src: *const Self, order: MemoryOrder) -> Self;

    /// Writes `value` to `*dst`.
    ///
    /// # Safety
    /// Same contract as [`AtomicRepr::raw_load`], for `dst`.
    unsafe fn raw_store(dst: *mut Self, value: Self, order: MemoryOrder);

    /// Adds `delta` to `*dst`, returning the post-update value.
    ///
    /// # Safety
    /// Same contract as [`AtomicRepr::raw_load`], for `dst`.
    unsafe fn raw_fetch_add(dst: *mut Self, delta: Self, order: MemoryOrder) -> Self;

    /// Replaces `*dst` with `value`, returning the previous value.
    ///
    /// # Safety
    /// Same contract as [`AtomicRepr::raw_load`], for `dst`.
    unsafe fn raw_exchange(dst: *mut Self, value: Self, order: MemoryOrder) -> Self;

    /// Strong compare-and-swap of `*dst`; see [`compare_exchange`].
    ///
    /// # Safety
    /// Same contract as [`AtomicRepr::raw_load`], for `dst`.
    unsafe fn raw_compare_exchange(
        dst: *mut Self,
        expected: &mut Self,
        desired: Self,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool;
}

macro_rules! impl_atomic_repr {
    ($($int:ty => $atomic:ty),* $(,)?) => {$(
        impl sealed::Sealed for $int {}

        #[cfg(native_atomics)]
        impl AtomicRepr for $int {
            #[inline]
            unsafe fn raw_load(src: *const Self, order: MemoryOrder) -> Self {
                // SAFETY: caller upholds validity and alignment; the atomic
                // view aliases the plain integer only for this call.
                unsafe { <$atomic>::from_ptr(src.cast_mut()).load(order.to_native()) }
            }

            #[inline]
            unsafe fn raw_store(dst: *mut Self, value: Self, order: MemoryOrder) {
                // SAFETY: as in raw_load.
                unsafe { <$atomic>::from_ptr(dst).store(value, order.to_native()) }
            }

            #[inline]
            unsafe fn raw_fetch_add(dst: *mut Self, delta: Self, order: MemoryOrder) -> Self {
                // The native primitive returns the pre-update value; the
                // contract here is add-then-fetch.
                // SAFETY: as in raw_load.
                unsafe { <$atomic>::from_ptr(dst).fetch_add(delta, order.to_native()) }
                    .wrapping_add(delta)
            }

            #[inline]
            unsafe fn raw_exchange(dst: *mut Self, value: Self, order: MemoryOrder) -> Self {
                // SAFETY: as in raw_load.
                unsafe { <$atomic>::from_ptr(dst).swap(value, order.to_native()) }
            }

            #[inline]
            unsafe fn raw_compare_exchange(
                dst: *mut Self,
                expected: &mut Self,
                desired: Self,
                success: MemoryOrder,
                failure: MemoryOrder,
            ) -> bool {
                // SAFETY: as in raw_load.
                let result = unsafe {
                    <$atomic>::from_ptr(dst).compare_exchange(
                        *expected,
                        desired,
                        success.to_native(),
                        failure.to_native(),
                    )
                };
                match result {
                    Ok(_) => true,
                    Err(actual) => {
                        *expected = actual;
                        false
                    }
                }
            }
        }

        #[cfg(not(native_atomics))]
        impl AtomicRepr for $int {
            #[inline]
            unsafe fn raw_load(src: *const Self, _order: MemoryOrder) -> Self {
                // SAFETY: caller upholds validity and alignment; the build
                // guarantees no concurrent access exists.
                unsafe { src.read() }
            }

            #[inline]
            unsafe fn raw_store(dst: *mut Self, value: Self, _order: MemoryOrder) {
                // SAFETY: as in raw_load.
                unsafe { dst.write(value) }
            }

            #[inline]
            unsafe fn raw_fetch_add(dst: *mut Self, delta: Self, _order: MemoryOrder) -> Self {
                // SAFETY: as in raw_load.
                let updated = unsafe { dst.read() }.wrapping_add(delta);
                // SAFETY: as in raw_load.
                unsafe { dst.write(updated) };
                updated
            }

            #[inline]
            unsafe fn raw_exchange(dst: *mut Self, value: Self, _order: MemoryOrder) -> Self {
                // SAFETY: as in raw_load.
                let previous = unsafe { dst.read() };
                // SAFETY: as in raw_load.
                unsafe { dst.write(value) };
                previous
            }

            #[inline]
            unsafe fn raw_compare_exchange(
                dst: *mut Self,
                expected: &mut Self,
                desired: Self,
                _success: MemoryOrder,
                _failure: MemoryOrder,
            ) -> bool {
                // SAFETY: as in raw_load.
                let current = unsafe { dst.read() };
                if current == *expected {
                    // SAFETY: as in raw_load.
                    unsafe { dst.write(desired) };
                    true
                } else {
                    *expected = current;
                    false
                }
            }
        }
    )*};
}

impl_atomic_repr! {
    u8 => core::sync::atomic::AtomicU8,
    u16 => core::sync::atomic::AtomicU16,
    u32 => core::sync::atomic::AtomicU32,
    u64 => core::sync::atomic::AtomicU64,
    usize => core::sync::atomic::AtomicUsize,
    i8 => core::sync::atomic::AtomicI8,
    i16 => core::sync::atomic::AtomicI16,
    i32 => core::sync::atomic::AtomicI32,
    i64 => core::sync::atomic::AtomicI64,
    isize => core::sync::atomic::AtomicIsize,
}

/// Reads the current value of `*src`.
///
/// `order` must be one of `Relaxed`, `Consume`, `Acquire` or `SeqCst`;
/// release orderings are meaningless for a pure load and must not be passed
/// (a precondition, not checked here).
///
/// # Safety
///
/// `src` must be non-null, valid for reads, aligned for the width's atomic
/// type, and not subject to concurrent non-atomic access.
#[inline]
#[must_use]
pub unsafe fn load<T: AtomicRepr>(src: *const T, order: MemoryOrder) -> T {
    // SAFETY: forwarded contract.
    unsafe { T::raw_load(src, order) }
}

/// Writes `value` to `*dst`.
///
/// `order` must be one of `Relaxed`, `Release` or `SeqCst`. When a call site
/// has no deliberate ordering decision, pass `SeqCst`.
///
/// # Safety
///
/// `dst` must be non-null, valid for reads and writes, aligned for the
/// width's atomic type, and not subject to concurrent non-atomic access.
#[inline]
pub unsafe fn store<T: AtomicRepr>(dst: *mut T, value: T, order: MemoryOrder) {
    // SAFETY: forwarded contract.
    unsafe { T::raw_store(dst, value, order) }
}

/// Writes `value` to `*dst` with relaxed ordering.
///
/// Always equivalent to `store(dst, value, MemoryOrder::Relaxed)`; provided
/// separately because relaxed stores are the common case in reference-count
/// hot paths.
///
/// # Safety
///
/// Same contract as [`store`].
#[inline]
pub unsafe fn relaxed_store<T: AtomicRepr>(dst: *mut T, value: T) {
    // SAFETY: forwarded contract.
    unsafe { T::raw_store(dst, value, MemoryOrder::Relaxed) }
}

/// Adds `delta` to `*dst` and returns the value **after** the addition.
///
/// Add-then-fetch, not fetch-then-add: two calls with deltas `d1`, `d2` from
/// initial value `v0` return `v0 + d1` and then `v0 + d1 + d2`. Arithmetic
/// wraps at the type's width.
///
/// # Safety
///
/// Same contract as [`store`].
#[inline]
pub unsafe fn fetch_add<T: AtomicRepr>(dst: *mut T, delta: T, order: MemoryOrder) -> T {
    // SAFETY: forwarded contract.
    unsafe { T::raw_fetch_add(dst, delta, order) }
}

/// Replaces `*dst` with `new_value` and returns what was stored before.
///
/// # Safety
///
/// Same contract as [`store`].
#[inline]
pub unsafe fn exchange<T: AtomicRepr>(dst: *mut T, new_value: T, order: MemoryOrder) -> T {
    // SAFETY: forwarded contract.
    unsafe { T::raw_exchange(dst, new_value, order) }
}

/// Strong compare-and-swap.
///
/// If `*dst == *expected`, stores `desired` honoring `success` and returns
/// `true`, leaving `*expected` untouched. Otherwise leaves `*dst` unchanged,
/// overwrites `*expected` with the observed value (so the caller can retry
/// with updated knowledge), honors `failure`, and returns `false`. Never
/// fails spuriously.
///
/// `failure` must not be `Release` or `AcqRel` (precondition, not checked).
///
/// # Safety
///
/// Same contract as [`store`].
#[inline]
pub unsafe fn compare_exchange<T: AtomicRepr>(
    dst: *mut T,
    expected: &mut T,
    desired: T,
    success: MemoryOrder,
    failure: MemoryOrder,
) -> bool {
    // SAFETY: forwarded contract.
    unsafe { T::raw_compare_exchange(dst, expected, desired, success, failure) }
}
