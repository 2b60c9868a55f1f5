//! promgate core: report data model, name derivation, and error types.
//!
//! This crate defines the decoded shape of a stream-worker metrics report
//! and the rules that flatten its hierarchical metric paths into a
//! scrape-safe name space. It intentionally carries no transport or
//! runtime dependencies so the same logic can be reused by tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `BridgeError`/`Result` so the
//! long-running bridge process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod naming;
pub mod report;

/// Shared result type.
pub use error::{BridgeError, Result};
