//! Self-observability counters, registered in the shared scrape registry.

use prometheus::{IntCounter, Opts, Registry};

use promgate_core::error::{BridgeError, Result};

/// Counters describing the bridge itself. Handles are cheap clones sharing
/// one underlying atomic each.
#[derive(Clone)]
pub struct BridgeStats {
    /// Reports consumed from the metrics topic.
    pub reports_total: IntCounter,
    /// Payloads that failed JSON decoding and were skipped.
    pub decode_failures_total: IntCounter,
    /// Boolean-typed metric values skipped (not modeled as gauges).
    pub booleans_skipped_total: IntCounter,
}

impl BridgeStats {
    pub fn register(exporter: &Registry) -> Result<Self> {
        Ok(Self {
            reports_total: counter(
                exporter,
                "promgate_reports_total",
                "Metrics reports consumed from the bus topic",
            )?,
            decode_failures_total: counter(
                exporter,
                "promgate_decode_failures_total",
                "Payloads skipped because JSON decoding failed",
            )?,
            booleans_skipped_total: counter(
                exporter,
                "promgate_booleans_skipped_total",
                "Boolean metric values skipped",
            )?,
        })
    }
}

fn counter(exporter: &Registry, name: &str, help: &str) -> Result<IntCounter> {
    let c = IntCounter::with_opts(Opts::new(name, help))
        .map_err(|e| BridgeError::Exporter(format!("bad counter opts for {name}: {e}")))?;
    exporter
        .register(Box::new(c.clone()))
        .map_err(|e| BridgeError::Exporter(format!("register {name} failed: {e}")))?;
    Ok(c)
}
