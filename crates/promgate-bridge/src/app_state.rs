//! Shared application state for the promgate bridge.
//!
//! Holds the config, the prometheus registry shared between the reconciler
//! (writer) and the scrape handler (reader), the bridge's own counters, and
//! the readiness flag flipped once the consumer has subscribed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use prometheus::Registry;

use promgate_core::error::Result;

use crate::config::BridgeConfig;
use crate::obs::BridgeStats;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: BridgeConfig,
    exporter: Registry,
    stats: BridgeStats,
    ready: AtomicBool,
}

impl AppState {
    pub fn new(cfg: BridgeConfig) -> Result<Self> {
        let exporter = Registry::new();
        let stats = BridgeStats::register(&exporter)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                exporter,
                stats,
                ready: AtomicBool::new(false),
            }),
        })
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.inner.cfg
    }

    /// The scrape registry. `Registry` is internally shared; clones observe
    /// the same collectors.
    pub fn exporter(&self) -> &Registry {
        &self.inner.exporter
    }

    pub fn stats(&self) -> &BridgeStats {
        &self.inner.stats
    }

    /// Flipped by the consumer once the topic subscription succeeded.
    pub fn mark_ready(&self) {
        self.inner.ready.store(true, Ordering::Relaxed);
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Relaxed)
    }
}
