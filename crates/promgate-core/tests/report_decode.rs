#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promgate_core::report::{self, MetricValue};
use serde_json::Value;

#[test]
fn decodes_minimal_report() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C"},"metrics":{"g":{"m":5}}}"#;
    let r = report::decode(payload).expect("must decode");
    assert_eq!(r.header.job_name, "J");
    assert_eq!(r.header.job_id, "1");
    assert_eq!(r.header.container_name, "C");
    assert_eq!(r.header.source, "C");
    assert_eq!(r.metrics["g"]["m"], Value::from(5));
}

#[test]
fn tolerates_unknown_header_fields() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C","future-field":"x"},"metrics":{}}"#;
    let r = report::decode(payload).expect("unknown header fields are fine");
    assert_eq!(r.header.job_name, "J");
}

#[test]
fn decodes_informational_header_fields() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C",
        "host":"h1","samza-version":"1.6.0","version":"0.0.1","reset-time":1599000000000,"time":1599000060000,
        "exec-env-container-id":"container_e01"},"metrics":{}}"#;
    let r = report::decode(payload).unwrap();
    assert_eq!(r.header.host, "h1");
    assert_eq!(r.header.samza_version, "1.6.0");
    assert_eq!(r.header.reset_time, 1_599_000_000_000);
    assert_eq!(r.header.time, 1_599_000_060_000);
    assert_eq!(r.header.exec_env_container_id, "container_e01");
}

#[test]
fn missing_metrics_yields_empty_body() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C"}}"#;
    let r = report::decode(payload).expect("missing metrics is fine");
    assert!(r.metrics.is_empty());
}

#[test]
fn null_metrics_yields_empty_body() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C"},"metrics":null}"#;
    let r = report::decode(payload).expect("null metrics is fine");
    assert!(r.metrics.is_empty());
}

#[test]
fn rejects_non_json_payload() {
    let err = report::decode(b"not json").expect_err("must fail");
    assert!(err.is_skippable());
}

#[test]
fn large_integer_keeps_its_text_until_conversion() {
    let payload = br#"{"header":{"job-name":"J","job-id":"1","container-name":"C","source":"C"},"metrics":{"g":{"m":1234567890123456789}}}"#;
    let r = report::decode(payload).unwrap();
    let v = &r.metrics["g"]["m"];
    match MetricValue::classify(v) {
        MetricValue::Number(n) => {
            // arbitrary_precision keeps the original token verbatim
            assert_eq!(n.to_string(), "1234567890123456789");
            let f = n.as_f64().unwrap();
            assert_eq!(f, 1_234_567_890_123_456_789_u64 as f64);
        }
        _ => panic!("expected a number"),
    }
}

#[test]
fn classifies_value_kinds() {
    let payload = br#"{"header":{},"metrics":{"g":{
        "num":1.5,"flag":true,"none":null,"list":[1],"obj":{},"text":"x"}}}"#;
    let r = report::decode(payload).unwrap();
    let g = &r.metrics["g"];
    assert!(matches!(MetricValue::classify(&g["num"]), MetricValue::Number(_)));
    assert!(matches!(MetricValue::classify(&g["flag"]), MetricValue::Bool(true)));
    for other in ["none", "list", "obj", "text"] {
        assert!(matches!(MetricValue::classify(&g[other]), MetricValue::Other));
    }
}
