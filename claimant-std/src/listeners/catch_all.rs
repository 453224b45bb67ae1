//! Listeners that claim unconditionally.

use claimant_core::{Listener, Priority};

/// A listener that corroborates every payload.
pub fn always<C, A>() -> Listener<C, A> {
    Listener::new().with_corroborate(|_| true)
}

/// A catch-all listener consulted after every other listener.
///
/// Claims everything at the lowest precedence ([`Priority::MAX`]); listeners
/// with the same priority that were attached earlier still come first.
pub fn fallback<C, A, F>(action: F) -> Listener<C, A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    always()
        .named("fallback")
        .with_priority(Priority::MAX)
        .with_accept(action)
}
