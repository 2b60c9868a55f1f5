//! Bridge self-observability.
//!
//! The bridge exports a handful of counters about itself through the same
//! registry it fills with reconciled gauges, so one scrape shows both the
//! workers' metrics and the bridge's own health.

pub mod stats;

pub use stats::BridgeStats;
