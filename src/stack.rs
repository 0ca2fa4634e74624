//! Stack growth for recursive grammars.
//!
//! A recursive grammar recurses on the native stack once per nesting level
//! of its input, so deeply nested input could overflow it. Recursion can only
//! be introduced through [`lazy`](crate::lazy::lazy), which runs each
//! invocation through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: uses `stacker` to grow the stack on demand.
//! - **WASM targets**: plain call (WASM manages its own stack).

/// If less than this much stack remains, grow it (100KB)
const RED_ZONE: usize = 100 * 1024;

/// Stack allocated per growth (1MB)
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
