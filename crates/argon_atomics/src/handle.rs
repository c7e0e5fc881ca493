//! The bound handle.
//!
//! Packages one backing-storage address with the operation set, so call
//! sites write `handle.load(order)` instead of threading a raw pointer and
//! ordering arguments around.

#![allow(unsafe_code)]

use crate::ops::{self, AtomicRepr};
use crate::order::MemoryOrder;

/// A non-owning binding to exactly one integral storage location.
///
/// Deliberately neither `Clone` nor `Copy`: a silently duplicated handle
/// reads like an independent counter while actually aliasing the same
/// storage. Binding the same location twice on purpose is legal; do it
/// through [`AtomicInt::bind`] so the aliasing is visible at the call site.
///
/// On the native branch the handle is `Send + Sync`, since every method is
/// an atomic operation. On the fallback branch it holds a bare raw pointer
/// and is neither, which keeps the non-atomic implementation from being
/// smuggled across threads.
pub struct AtomicInt<T: AtomicRepr> {
    slot: *mut T,
}

impl<T: AtomicRepr> AtomicInt<T> {
    /// Binds to `slot`. No validation is performed.
    ///
    /// # Safety
    ///
    /// The caller guarantees `slot` is non-null, aligned for the width's
    /// atomic type, stays valid for the whole lifetime of the handle, and is
    /// never accessed non-atomically while the handle is live.
    #[inline]
    #[must_use]
    pub const unsafe fn bind(slot: *mut T) -> Self {
        Self { slot }
    }

    /// Reads the current value; see [`load`](crate::load) for the valid
    /// orders.
    #[inline]
    #[must_use]
    pub fn load(&self, order: MemoryOrder) -> T {
        // SAFETY: discharged by the `bind` contract.
        unsafe { ops::load(self.slot, order) }
    }

    /// Writes `value`; see [`store`](crate::store) for the valid orders.
    #[inline]
    pub fn store(&self, value: T, order: MemoryOrder) {
        // SAFETY: discharged by the `bind` contract.
        unsafe { ops::store(self.slot, value, order) }
    }

    /// Replaces the stored value, returning the previous one.
    #[inline]
    pub fn exchange(&self, new_value: T, order: MemoryOrder) -> T {
        // SAFETY: discharged by the `bind` contract.
        unsafe { ops::exchange(self.slot, new_value, order) }
    }

    /// Strong compare-and-swap; see [`compare_exchange`](crate::compare_exchange)
    /// for the full contract, including the update of `expected` on failure.
    #[inline]
    pub fn compare_exchange(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        // SAFETY: discharged by the `bind` contract.
        unsafe { ops::compare_exchange(self.slot, expected, desired, success, failure) }
    }
}

// SAFETY: on the native branch every method is an atomic operation on the
// bound location, so concurrent use from any number of threads is sound.
#[cfg(native_atomics)]
unsafe impl<T: AtomicRepr> Send for AtomicInt<T> {}

// SAFETY: as for Send; &AtomicInt exposes only atomic operations.
#[cfg(native_atomics)]
unsafe impl<T: AtomicRepr> Sync for AtomicInt<T> {}
