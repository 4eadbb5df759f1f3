//! On-disk JSON form of the counter set.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, Instant};

use riecount_core::protocol::{AllCountersResponse, CounterResponse};
use riecount_core::CounterSet;

#[test]
fn parse_keeps_document_order() {
    let set: CounterSet = serde_json::from_str(r#"{"zeta": 1, "alpha": 9, "mid": 0}"#).unwrap();
    let names: Vec<_> = set.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(set.get("alpha"), 9);
}

#[test]
fn serialize_matches_file_format() {
    let set: CounterSet = [("default-counter", 3), ("page-views", 17)].into_iter().collect();
    let s = serde_json::to_string(&set).unwrap();
    assert_eq!(s, r#"{"default-counter":3,"page-views":17}"#);
}

#[test]
fn empty_object_is_empty_set() {
    let set: CounterSet = serde_json::from_str("{}").unwrap();
    assert!(set.is_empty());
}

#[test]
fn duplicate_key_last_value_wins() {
    let set: CounterSet = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 7}"#).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.get("a"), 7);
    assert_eq!(set.iter().next(), Some(("a", 7)));
}

#[test]
fn rejects_non_counter_documents() {
    for bad in [
        r#"{"a": -1}"#,
        r#"{"a": 1.5}"#,
        r#"{"a": "3"}"#,
        r#"[1, 2]"#,
        r#"{"a": 1"#,
        "",
    ] {
        assert!(serde_json::from_str::<CounterSet>(bad).is_err(), "accepted: {bad:?}");
    }
}

#[test]
fn response_shapes() {
    let one = CounterResponse { name: "x".into(), count: 0 };
    assert_eq!(serde_json::to_value(&one).unwrap(), serde_json::json!({"name": "x", "count": 0}));

    let all = AllCountersResponse {
        counters: [("a", 5), ("b", 2)].into_iter().collect(),
    };
    assert_eq!(
        serde_json::to_value(&all).unwrap(),
        serde_json::json!({"counters": {"a": 5, "b": 2}})
    );
}

#[test]
fn large_sets_load_in_linear_time() {
    let n = 60_000u64;
    let mut doc = String::from("{");
    for i in 0..n {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!("\"counter-{i}\":{i}"));
    }
    doc.push('}');

    let started = Instant::now();
    let mut set: CounterSet = serde_json::from_str(&doc).unwrap();
    assert_eq!(set.len(), n as usize);
    assert_eq!(set.get("counter-0"), 0);
    assert_eq!(set.get(&format!("counter-{}", n - 1)), n - 1);
    assert_eq!(set.increment("counter-30000").unwrap(), 30_001);
    assert_eq!(set.increment("fresh").unwrap(), 1);
    assert_eq!(set.iter().last(), Some(("fresh", 1)));
    // A quadratic load of this many keys takes many seconds even unoptimized.
    assert!(started.elapsed() < Duration::from_secs(3), "took {:?}", started.elapsed());
}
