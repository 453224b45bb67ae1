//! # claimant-core
//!
//! Core types for claim-driven event dispatch.
//!
//! A [`Dispatcher`] holds a priority-ordered roster of [`Listener`]s. When it
//! is invoked, listeners are asked one by one whether they *corroborate* the
//! event; the first one that does *claims* it, receives the claim payload and
//! the dispatch stops. Unlike a fan-out dispatcher, at most one listener acts
//! per invocation.
//!
//! # Two-Phase Protocol
//!
//! 1. **Corroborate**: each listener's predicate inspects a shared
//!    corroborate payload `C` (resolved once per invocation).
//! 2. **Claim**: the winning listener's action receives the claim payload `A`,
//!    which is only resolved when a claimant exists.
//!
//! Both payloads are passed as a [`Source`], so callers hand in either a
//! precomputed value ([`ready`]) or a closure producing it.
//!
//! # Example
//!
//! ```rust
//! use claimant_core::{Dispatcher, Listener, Outcome};
//!
//! let on_command = Dispatcher::<String>::new();
//! let echo = Listener::new()
//!     .with_corroborate(|cmd: &String| cmd.starts_with("echo "))
//!     .with_accept(|cmd: String| println!("{}", &cmd[5..]));
//! on_command.attach(&echo);
//!
//! assert_eq!(on_command.dispatch(|| "echo hi".to_string()), Outcome::Claimed);
//! assert_eq!(on_command.dispatch(|| "quit".to_string()), Outcome::Unclaimed);
//! ```
//!
//! # Reentrancy
//!
//! Attaching, detaching or re-prioritizing listeners from inside a hook is
//! outside the contract. It does not deadlock (no lock is held while a hook
//! runs), and changes only become visible to the next invocation.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

#[macro_use]
mod trace;

mod dispatcher;
mod error;
mod listener;
mod outcome;
mod source;
mod sync;

// Re-exports
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use listener::{Listener, Priority};
pub use outcome::Outcome;
pub use source::{Ready, Source, ready};
