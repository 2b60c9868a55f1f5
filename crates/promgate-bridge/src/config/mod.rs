//! Bridge config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use promgate_core::error::{BridgeError, Result};

pub use schema::{BridgeConfig, HttpSection, KafkaSection};

pub fn load_from_file(path: &str) -> Result<BridgeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BridgeError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`] but a missing file falls back to defaults, so the
/// binary runs out of the box against a local broker.
pub fn load_or_default(path: &str) -> Result<BridgeConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BridgeConfig::default()),
        Err(e) => Err(BridgeError::Config(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<BridgeConfig> {
    let cfg: BridgeConfig =
        serde_yaml::from_str(s).map_err(|e| BridgeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
