#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promgate_bridge::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
kafka:
  brokerz: "localhost:9092" # typo should fail
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn ok_minimal_config_with_defaults() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.kafka.brokers, "localhost:9092");
    assert_eq!(cfg.kafka.group_id, "samza-metrics-collector");
    assert_eq!(cfg.kafka.topic, "metrics");
    assert_eq!(cfg.kafka.auto_offset_reset, "latest");
    assert_eq!(cfg.http.listen, "0.0.0.0:2112");
}

#[test]
fn rejects_unknown_config_version() {
    let bad = r#"
version: 2
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn rejects_bad_offset_reset() {
    let bad = r#"
version: 1
kafka:
  auto_offset_reset: "sometimes"
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn rejects_unparseable_listen_address() {
    let bad = r#"
version: 1
http:
  listen: "not-an-address"
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/promgate.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.http.listen, "0.0.0.0:2112");
}
