//! Registry reconciler: maps decoded reports onto long-lived gauges.
//!
//! The vault owns the FQN -> gauge map. It is written only by the consumer
//! task; the scrape handler reads values through the prometheus `Registry`,
//! whose gauges are safe for concurrent read/write on their own.
//!
//! State machine per name: *absent* -> *bound-to-gauge*, one-way, on first
//! observation. A name already taken by a collector of another kind (for
//! example one of the bridge's own counters) is a fatal inconsistency.

use std::collections::{HashMap, HashSet};

use prometheus::{Gauge, Opts, Registry};

use promgate_core::error::{BridgeError, Result};
use promgate_core::naming;
use promgate_core::report::{MetricValue, MetricsReport};

use crate::obs::BridgeStats;

struct GaugeBinding {
    gauge: Gauge,
    /// Raw pre-sanitization paths that mapped here. More than one entry
    /// means the per-character sanitizer collided distinct inputs.
    raw_paths: HashSet<String>,
}

/// Process-wide map from fully-qualified metric name to its gauge handle.
/// Grows monotonically; entries live until process exit.
pub struct MetricVault {
    exporter: Registry,
    stats: BridgeStats,
    bindings: HashMap<String, GaugeBinding>,
}

impl MetricVault {
    pub fn new(exporter: Registry, stats: BridgeStats) -> Self {
        Self {
            exporter,
            stats,
            bindings: HashMap::new(),
        }
    }

    /// Reconcile every measurement of one report into the registry.
    ///
    /// Numbers become gauge sets (last write wins). Booleans are skipped with
    /// one info line each. Values outside the report schema are skipped
    /// silently to tolerate upstream drift.
    pub fn absorb_report(&mut self, report: &MetricsReport) -> Result<()> {
        for (group, metrics) in &report.metrics {
            for (name, value) in metrics {
                let raw = naming::raw_path(&report.header, group, name);
                let fqn = naming::sanitize(&raw);
                match MetricValue::classify(value) {
                    MetricValue::Number(n) => self.set_gauge(&fqn, &raw, n)?,
                    MetricValue::Bool(b) => {
                        self.stats.booleans_skipped_total.inc();
                        tracing::info!(metric = %fqn, value = b, "skipping boolean metric");
                    }
                    MetricValue::Other => {}
                }
            }
        }
        Ok(())
    }

    fn set_gauge(&mut self, fqn: &str, raw: &str, n: &serde_json::Number) -> Result<()> {
        let value = n.as_f64().ok_or_else(|| BridgeError::BadNumber {
            name: fqn.to_string(),
            raw: n.to_string(),
        })?;

        if let Some(binding) = self.bindings.get_mut(fqn) {
            if binding.raw_paths.insert(raw.to_string()) {
                // a raw path not seen before just mapped onto an existing FQN
                tracing::warn!(
                    metric = %fqn,
                    path = %raw,
                    "distinct metric paths collide after sanitization"
                );
            }
            binding.gauge.set(value);
            return Ok(());
        }

        // help text carries the original dotted path for operators
        let gauge = Gauge::with_opts(Opts::new(fqn, raw))
            .map_err(|e| BridgeError::Exporter(format!("bad gauge name {fqn}: {e}")))?;
        // the name passed validation above, so a refusal here means the
        // registry already holds a collector under this name
        if self.exporter.register(Box::new(gauge.clone())).is_err() {
            return Err(BridgeError::KindConflict {
                name: fqn.to_string(),
            });
        }
        gauge.set(value);

        let mut raw_paths = HashSet::new();
        raw_paths.insert(raw.to_string());
        self.bindings
            .insert(fqn.to_string(), GaugeBinding { gauge, raw_paths });
        Ok(())
    }

    /// Number of distinct names bound so far.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Current value of a bound gauge, if any.
    pub fn value(&self, fqn: &str) -> Option<f64> {
        self.bindings.get(fqn).map(|b| b.gauge.get())
    }
}
