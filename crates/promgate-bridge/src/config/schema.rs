use serde::Deserialize;

use promgate_core::error::{BridgeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    pub version: u32,

    #[serde(default)]
    pub kafka: KafkaSection,

    #[serde(default)]
    pub http: HttpSection,
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BridgeError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.kafka.validate()?;
        self.http.validate()?;
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            kafka: KafkaSection::default(),
            http: HttpSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KafkaSection {
    /// Comma-separated broker list.
    #[serde(default = "default_brokers")]
    pub brokers: String,

    #[serde(default = "default_group_id")]
    pub group_id: String,

    /// Topic carrying the periodic metrics reports.
    #[serde(default = "default_topic")]
    pub topic: String,

    /// "latest" by default so a fresh bridge does not back-fill stale
    /// history into brand-new gauges.
    #[serde(default = "default_auto_offset_reset")]
    pub auto_offset_reset: String,
}

impl Default for KafkaSection {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            group_id: default_group_id(),
            topic: default_topic(),
            auto_offset_reset: default_auto_offset_reset(),
        }
    }
}

impl KafkaSection {
    pub fn validate(&self) -> Result<()> {
        if self.brokers.is_empty() {
            return Err(BridgeError::Config("kafka.brokers must not be empty".into()));
        }
        if self.group_id.is_empty() {
            return Err(BridgeError::Config("kafka.group_id must not be empty".into()));
        }
        if self.topic.is_empty() {
            return Err(BridgeError::Config("kafka.topic must not be empty".into()));
        }
        if !["earliest", "latest", "none"].contains(&self.auto_offset_reset.as_str()) {
            return Err(BridgeError::Config(format!(
                "kafka.auto_offset_reset must be earliest, latest, or none (got {})",
                self.auto_offset_reset
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl HttpSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| BridgeError::Config(format!("http.listen is not a socket address: {e}")))?;
        Ok(())
    }
}

fn default_brokers() -> String {
    "localhost:9092".into()
}
fn default_group_id() -> String {
    "samza-metrics-collector".into()
}
fn default_topic() -> String {
    "metrics".into()
}
fn default_auto_offset_reset() -> String {
    "latest".into()
}
fn default_listen() -> String {
    "0.0.0.0:2112".into()
}
