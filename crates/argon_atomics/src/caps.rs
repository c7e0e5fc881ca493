//! Build-time capability report.
//!
//! Mirrors the decision `build.rs` already made, so tests and embedding code
//! can assert which branch they are running on. Nothing here influences the
//! branch selection; that happened before this crate was compiled.

/// Whether the build has threading support at all.
///
/// When `false`, the fallback branch is active by policy even if the target
/// could have provided atomics: there is nothing to synchronize against.
pub const THREADS_ENABLED: bool = cfg!(feature = "threads");

/// Whether the native-intrinsic branch is compiled in.
///
/// `false` with [`THREADS_ENABLED`] `true` means the build proceeded on the
/// fallback after the capability warning: operations are plain accesses and
/// atomicity is not actually provided.
pub const NATIVE_ATOMICS: bool = cfg!(native_atomics);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_branch_requires_threads() {
        // Policy from build.rs: no threads, no native branch.
        assert!(!NATIVE_ATOMICS || THREADS_ENABLED);
    }
}
