//! Stack growth for deeply nested expressions.
//!
//! Parsing, reading and evaluating a Lispy expression all recurse once per
//! level of `(...)` / `{...}` nesting. Nothing bounds that nesting, so every
//! recursive step goes through [`ensure_sufficient_stack`], which moves the
//! rest of the computation onto a freshly allocated segment when the current
//! one runs low.
//!
//! This is growth, not a limit: input nested deeply enough will still run
//! the process out of memory eventually.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if fewer than
/// [`RED_ZONE`] bytes remain on the current one.
///
/// ```text
/// fn eval(env: &mut Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(cells) => eval_sexpr(env, cells),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
