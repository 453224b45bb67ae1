//! Lazily resolved dispatch payloads.
//!
//! A [`Source`] produces a payload on demand. Every `FnOnce() -> T` closure is
//! a source, and [`ready`] wraps an already-built value, so call sites look the
//! same whether the payload is precomputed or expensive to construct.

/// A payload that is resolved at most once, when the dispatcher needs it.
///
/// # Example
///
/// ```rust
/// use claimant_core::{Source, ready};
///
/// assert_eq!(ready(7).resolve(), 7);
/// assert_eq!((|| 6 + 1).resolve(), 7);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Source` of `{T}`",
    label = "expected a `FnOnce() -> {T}` closure or `ready(value)`",
    note = "Wrap precomputed payloads with `claimant_core::ready`."
)]
pub trait Source<T> {
    /// Produce the payload.
    fn resolve(self) -> T;
}

impl<T, F> Source<T> for F
where
    F: FnOnce() -> T,
{
    fn resolve(self) -> T {
        self()
    }
}

/// A precomputed payload. Created with [`ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ready<T>(T);

impl<T> Ready<T> {
    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Source<T> for Ready<T> {
    fn resolve(self) -> T {
        self.0
    }
}

impl<T> From<T> for Ready<T> {
    fn from(value: T) -> Self {
        Ready(value)
    }
}

/// Wrap an already available payload as a [`Source`].
pub fn ready<T>(value: T) -> Ready<T> {
    Ready(value)
}
