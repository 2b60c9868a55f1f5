//! Kafka consumer loop.
//!
//! Subscribes to the configured metrics topic and drives one
//! decode -> reconcile pass per message. Read errors are logged and the loop
//! continues (librdkafka recovers on its own); a report that fails to decode
//! is counted and skipped; reconciler errors are structural and fatal.

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::Message;

use promgate_core::error::{BridgeError, Result};
use promgate_core::report;

use crate::app_state::AppState;
use crate::config::KafkaSection;
use crate::registry::MetricVault;

fn client_config(cfg: &KafkaSection) -> ClientConfig {
    let mut cc = ClientConfig::new();
    cc.set("bootstrap.servers", &cfg.brokers)
        .set("group.id", &cfg.group_id)
        .set("auto.offset.reset", &cfg.auto_offset_reset);
    cc
}

/// Run the consumer until a fatal error. Never returns `Ok` in normal
/// operation; process termination is by signal.
pub async fn run(cfg: KafkaSection, state: AppState, mut vault: MetricVault) -> Result<()> {
    let consumer: StreamConsumer = client_config(&cfg)
        .create()
        .map_err(|e| BridgeError::Consumer(format!("client construction failed: {e}")))?;

    consumer
        .subscribe(&[cfg.topic.as_str()])
        .map_err(|e| BridgeError::Consumer(format!("subscribe to {} failed: {e}", cfg.topic)))?;

    tracing::info!(topic = %cfg.topic, group = %cfg.group_id, brokers = %cfg.brokers, "subscribed");
    state.mark_ready();

    loop {
        let msg = match consumer.recv().await {
            Ok(msg) => msg,
            Err(e) => {
                // the client recovers from transient read errors by itself
                tracing::warn!(error = %e, "kafka read error");
                continue;
            }
        };

        let Some(payload) = msg.payload() else {
            continue;
        };
        state.stats().reports_total.inc();

        let outcome = report::decode(payload).and_then(|r| vault.absorb_report(&r));
        if let Err(e) = outcome {
            if e.is_skippable() {
                state.stats().decode_failures_total.inc();
                tracing::error!(
                    error = %e,
                    topic = msg.topic(),
                    partition = msg.partition(),
                    offset = msg.offset(),
                    "skipping undecodable report"
                );
            } else {
                // kind conflict or corrupt number: die loudly, let the
                // supervisor restart us
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_carries_bus_settings() {
        let cfg = KafkaSection::default();
        let cc = client_config(&cfg);
        assert_eq!(cc.get("bootstrap.servers"), Some("localhost:9092"));
        assert_eq!(cc.get("group.id"), Some("samza-metrics-collector"));
        assert_eq!(cc.get("auto.offset.reset"), Some("latest"));
    }
}
