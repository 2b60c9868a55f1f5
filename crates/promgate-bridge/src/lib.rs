//! promgate bridge library entry.
//!
//! This crate wires the Kafka consumer, the registry reconciler, and the
//! scrape endpoint into a runnable bridge. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod consumer;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
