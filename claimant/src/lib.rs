//! # claimant - Claim-Driven Event Dispatch
//!
//! `claimant` dispatches an event to *one* handler: the first listener, in
//! priority order, that corroborates it. Listeners that decline are skipped;
//! once a listener claims the event it receives the claim payload and the
//! dispatch stops.
//!
//! ## Quick Start
//!
//! ```rust
//! use claimant::prelude::*;
//!
//! struct Command {
//!     keywords: Vec<&'static str>,
//! }
//!
//! let on_command = Dispatcher::<Command>::new();
//!
//! let print = Listener::new()
//!     .with_corroborate(|cmd: &Command| cmd.keywords[0] == "print")
//!     .with_accept(|cmd: Command| println!("{}", cmd.keywords[1]));
//! on_command.attach(&print);
//! on_command.attach(&fallback(|_: Command| println!("unknown command")));
//!
//! let outcome = on_command.dispatch(ready(Command { keywords: vec!["print", "Hi"] }));
//! assert!(outcome.is_claimed());
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): phase logging through `tracing` at `debug`/`trace`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use claimant_core::{
    // Errors
    DispatchError,
    // Dispatch
    Dispatcher,
    Listener,
    Outcome,
    Priority,
    // Sources
    Ready,
    Source,
    ready,
};

/// Standard listener presets.
pub mod listeners {
    pub use claimant_std::listeners::{always, fallback, keyed, when};
}

/// Testing utilities.
pub mod testing {
    pub use claimant_std::testing::{CallCounter, EventLog, collecting, counting, recording};
}

/// Prelude module - common imports for claimant.
///
/// # Usage
///
/// ```rust
/// use claimant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DispatchError, Dispatcher, Listener, Outcome, Priority, Source,
        listeners::{always, fallback, keyed, when},
        ready,
    };
}
