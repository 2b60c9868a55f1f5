//! Shared error type across promgate crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type used by core and bridge.
///
/// Variants double as the error policy table: `MalformedReport` is skippable
/// in the consumer loop, everything else that reaches the loop is fatal and
/// tears the process down so a supervisor can restart it.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("config: {0}")]
    Config(String),
    #[error("malformed report: {0}")]
    MalformedReport(String),
    #[error("metric {name} carries unrepresentable numeric value {raw}")]
    BadNumber { name: String, raw: String },
    #[error("metric {name} is already registered with a different kind")]
    KindConflict { name: String },
    #[error("exporter: {0}")]
    Exporter(String),
    #[error("consumer: {0}")]
    Consumer(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Whether the consumer loop may drop the offending message and continue.
    ///
    /// Read errors are handled by the bus client itself; at this level only a
    /// report that fails to decode is survivable.
    pub fn is_skippable(&self) -> bool {
        matches!(self, BridgeError::MalformedReport(_))
    }
}
