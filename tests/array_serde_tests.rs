#![cfg(all(feature = "collection", feature = "serde"))]

//! Integration tests for serde support of Array.

use kitbag::collection::Array;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Job {
    name: String,
    priority: u8,
}

#[rstest]
fn test_array_json_roundtrip() {
    let original: Array<i32> = (1..=100).collect();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Array<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_array_nested_in_struct() {
    #[derive(Serialize, Deserialize)]
    struct Queue {
        jobs: Array<Job>,
    }

    let json = r#"{"jobs":[{"name":"build","priority":2},{"name":"test","priority":1}]}"#;
    let queue: Queue = serde_json::from_str(json).unwrap();

    assert_eq!(queue.jobs.len(), 2);
    assert_eq!(
        queue.jobs.find(|job| job.priority == 1).map(|job| job.name),
        Some("test".to_string())
    );
    assert_eq!(serde_json::to_string(&queue).unwrap(), json);
}

#[cfg(feature = "yaml")]
#[rstest]
fn test_array_from_yaml_sequence() {
    let array: Array<String> = kitbag::config::yaml::decode(b"- alpha\n- beta\n").unwrap();
    assert_eq!(array.to_vec(), vec!["alpha".to_string(), "beta".to_string()]);
}
