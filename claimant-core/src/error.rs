//! Error types for claimant.
//!
//! Dispatch itself is total: [`Dispatcher::invoke`](crate::Dispatcher::invoke)
//! never fails, and hook panics propagate to the caller untouched. The only
//! error is the opt-in conversion of an unclaimed [`Outcome`](crate::Outcome).

use thiserror::Error;

/// Errors derived from dispatch outcomes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// No attached listener corroborated the event.
    #[error("no listener claimed the dispatch")]
    Unclaimed,
}
