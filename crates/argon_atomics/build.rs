//! Capability detection.
//!
//! Decides, once per build, which branch of the operation set gets compiled:
//!
//! - `threads` enabled and the target has native atomics at every width the
//!   crate supports -> emit `native_atomics`, the intrinsic branch.
//! - `threads` disabled -> fallback branch, silently. There is nothing to
//!   synchronize against, so plain accesses are correct.
//! - `threads` enabled but the target lacks atomics -> fallback branch with
//!   a build warning. The build stays usable, but concurrency on it is not.

/// Atomic widths every `AtomicRepr` implementation relies on.
const REQUIRED_WIDTHS: [&str; 5] = ["8", "16", "32", "64", "ptr"];

fn main() {
    println!("cargo:rustc-check-cfg=cfg(native_atomics)");

    let threads = std::env::var_os("CARGO_FEATURE_THREADS").is_some();
    let available = std::env::var("CARGO_CFG_TARGET_HAS_ATOMIC").unwrap_or_default();
    let has_all = REQUIRED_WIDTHS
        .iter()
        .all(|width| available.split(',').any(|have| have == *width));

    if threads && has_all {
        println!("cargo:rustc-cfg=native_atomics");
    } else if threads {
        let target = std::env::var("TARGET").unwrap_or_default();
        println!(
            "cargo:warning=argon_atomics: target `{target}` is missing native atomic \
             support (have: `{available}`); compiling the non-atomic fallback. \
             Atomicity is NOT guaranteed on this build."
        );
    }
}
