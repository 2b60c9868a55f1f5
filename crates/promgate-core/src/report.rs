//! Metrics report decoding (JSON).
//!
//! Reports arrive as JSON documents with a `header` identity block and a
//! two-level `metrics` map (group -> name -> value). Values are kept as
//! `serde_json::Value` because a single schema slot mixes numbers, booleans,
//! and the occasional stray type; callers dispatch through [`MetricValue`].
//!
//! `serde_json` is compiled with `arbitrary_precision`, so numeric tokens
//! keep their original textual form until someone commits to an `f64`.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BridgeError, Result};

/// Group name -> metric name -> raw value.
pub type MetricGroups = HashMap<String, HashMap<String, Value>>;

/// Identity block of a report. Only `job_name`, `job_id`, `container_name`
/// and `source` feed name derivation; the rest is informational.
///
/// Every field defaults so partial headers from older workers still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportHeader {
    #[serde(rename = "job-name", default)]
    pub job_name: String,
    #[serde(rename = "job-id", default)]
    pub job_id: String,
    #[serde(rename = "container-name", default)]
    pub container_name: String,
    /// Reporting subcomponent. Equal to `container_name` for container-level
    /// rollups, distinct for per-task metrics.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub host: String,
    #[serde(rename = "exec-env-container-id", default)]
    pub exec_env_container_id: String,
    #[serde(rename = "samza-version", default)]
    pub samza_version: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "reset-time", default)]
    pub reset_time: i64,
    #[serde(default)]
    pub time: i64,
}

/// One decoded metrics report.
///
/// Unknown header fields are tolerated; a missing or null `metrics` object
/// decodes to an empty map rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsReport {
    #[serde(default)]
    pub header: ReportHeader,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metrics: MetricGroups,
}

/// Tagged view over a raw metric value.
pub enum MetricValue<'a> {
    Number(&'a serde_json::Number),
    Bool(bool),
    /// Null, string, array, object: not part of the report schema, skipped.
    Other,
}

impl<'a> MetricValue<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => MetricValue::Number(n),
            Value::Bool(b) => MetricValue::Bool(*b),
            _ => MetricValue::Other,
        }
    }
}

/// Decode one bus payload into a report.
pub fn decode(payload: &[u8]) -> Result<MetricsReport> {
    serde_json::from_slice(payload).map_err(|e| BridgeError::MalformedReport(e.to_string()))
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<MetricGroups, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let groups = Option::<MetricGroups>::deserialize(deserializer)?;
    Ok(groups.unwrap_or_default())
}
