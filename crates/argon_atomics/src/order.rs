//! Memory-order levels.
//!
//! The same six enumerators exist on both branches. On the native branch each
//! level maps to its `core::sync::atomic::Ordering` counterpart; on the
//! fallback branch the parameter is accepted and ignored, because there is no
//! concurrency to order.

/// Ordering constraint for a single atomic operation, per the standard
/// C/C++ memory model.
///
/// `SeqCst` is the strongest level and the safe choice when in doubt; call
/// sites that omit a deliberate ordering decision should pass it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOrder {
    /// No ordering constraint beyond atomicity of the access itself.
    Relaxed,
    /// Data-dependency ordering. Treated as [`MemoryOrder::Acquire`]: Rust,
    /// like every mainstream C/C++ compiler, promotes consume to acquire.
    Consume,
    /// No later read or write may be reordered before this operation.
    Acquire,
    /// No earlier read or write may be reordered after this operation.
    Release,
    /// Both [`MemoryOrder::Acquire`] and [`MemoryOrder::Release`].
    AcqRel,
    /// Acquire-release, plus a single global total order across all
    /// sequentially-consistent operations.
    SeqCst,
}

#[cfg(native_atomics)]
impl MemoryOrder {
    /// Maps to the toolchain's native ordering constant.
    #[inline]
    pub(crate) fn to_native(self) -> core::sync::atomic::Ordering {
        use core::sync::atomic::Ordering;
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Consume | Self::Acquire => Ordering::Acquire,
            Self::Release => Ordering::Release,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_distinct_levels() {
        let levels = [
            MemoryOrder::Relaxed,
            MemoryOrder::Consume,
            MemoryOrder::Acquire,
            MemoryOrder::Release,
            MemoryOrder::AcqRel,
            MemoryOrder::SeqCst,
        ];

        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[cfg(native_atomics)]
    #[test]
    fn consume_promotes_to_acquire() {
        use core::sync::atomic::Ordering;

        assert_eq!(MemoryOrder::Consume.to_native(), Ordering::Acquire);
        assert_eq!(MemoryOrder::Acquire.to_native(), Ordering::Acquire);
    }
}
