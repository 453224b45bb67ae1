//! Standard listener presets.

pub mod catch_all;
pub mod filter;

pub use catch_all::{always, fallback};
pub use filter::{keyed, when};
