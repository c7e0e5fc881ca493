//! # ARGON Atomics
//!
//! Portable atomic operations for runtime internals: reference counts,
//! one-time initialization flags, lock-free state transitions.
//!
//! ## Architecture Rules
//!
//! 1. **One branch per build** - `build.rs` picks the native-intrinsic branch
//!    or the plain-access fallback once; there is no runtime dispatch.
//! 2. **Identical signatures on both branches** - call sites never know which
//!    branch is active.
//! 3. **Zero overhead** - no allocation, no locks, no panics; an operation
//!    costs exactly what the underlying memory access costs.
//!
//! ## Branch selection
//!
//! ```text
//!               threads feature?
//!                /           \
//!              yes            no
//!               |              \
//!     target has atomics?       fallback (plain accesses,
//!        /           \          nothing to synchronize against)
//!      yes            no
//!       |              \
//!  native branch    fallback + build warning
//!  (core::sync::    (atomicity NOT provided;
//!   atomic)          the operator was told)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use argon_atomics::{AtomicInt, MemoryOrder};
//!
//! let mut refcount: u32 = 1;
//! // SAFETY: `refcount` outlives the handle and is only touched through it.
//! let handle = unsafe { AtomicInt::bind(&mut refcount) };
//!
//! handle.store(2, MemoryOrder::SeqCst);
//! assert_eq!(handle.load(MemoryOrder::SeqCst), 2);
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod caps;
mod handle;
mod ops;
mod order;

pub use handle::AtomicInt;
pub use ops::{compare_exchange, exchange, fetch_add, load, relaxed_store, store, AtomicRepr};
pub use order::MemoryOrder;
