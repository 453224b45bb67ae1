//! # claimant-std
//!
//! Standard implementations on top of `claimant-core`.
//!
//! This crate provides:
//! - **Listener presets**: [`when`], [`keyed`], [`always`], [`fallback`]
//! - **Testing utilities**: call counters, scan logs and recording listeners
//!
//! [`when`]: listeners::when
//! [`keyed`]: listeners::keyed
//! [`always`]: listeners::always
//! [`fallback`]: listeners::fallback

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use claimant_core;

// Modules
pub mod listeners;
pub mod testing;
