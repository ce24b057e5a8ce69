//! Field access and recurrence detection on raw task records.

use super::{raw, upstream_task};
use crate::task::domain::{canonical_task_url, is_truthy};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::flag_true(json!({"due": {"is_recurring": true}}), true)]
#[case::flag_false(json!({"due": {"is_recurring": false}}), false)]
#[case::due_without_flag(json!({"due": {"date": "2025-01-02"}}), false)]
#[case::due_null(json!({"due": null}), false)]
#[case::no_due(json!({"content": "one-off"}), false)]
#[case::due_not_an_object(json!({"due": "every day"}), false)]
#[case::truthy_number(json!({"due": {"is_recurring": 1}}), true)]
#[case::flag_null(json!({"due": {"is_recurring": null}}), false)]
fn recurrence_requires_a_truthy_due_flag(#[case] record: Value, #[case] expected: bool) {
    assert_eq!(raw(record).is_recurring(), expected);
}

#[rstest]
#[case(json!(null), false)]
#[case(json!(0), false)]
#[case(json!(0.0), false)]
#[case(json!(""), false)]
#[case(json!([]), false)]
#[case(json!({}), false)]
#[case(json!(-1), true)]
#[case(json!("yes"), true)]
#[case(json!([false]), true)]
fn truthiness_follows_loose_flag_semantics(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_truthy(&value), expected);
}

#[test]
fn null_fields_read_as_absent() {
    let task = raw(json!({"content": null, "priority": null}));
    assert_eq!(task.str_field("content"), None);
    assert_eq!(task.i64_field("priority"), None);
    assert!(task.get("content").is_none());
}

#[test]
fn id_falls_back_to_task_id() {
    assert_eq!(raw(json!({"task_id": "77"})).id().as_deref(), Some("77"));
    assert_eq!(
        raw(json!({"id": "1", "task_id": "2"})).id().as_deref(),
        Some("1")
    );
    assert_eq!(raw(json!({"content": "orphan"})).id(), None);
}

#[test]
fn set_url_replaces_the_source_link() {
    let mut task = upstream_task("T3", false, true);
    task.set_url(canonical_task_url("T3"));
    assert_eq!(task.url(), Some("https://todoist.com/showTask?id=T3"));
}

#[test]
fn raw_task_serializes_as_the_plain_object() {
    let task = raw(json!({"id": "9", "labels": ["a"]}));
    let value = serde_json::to_value(&task).expect("raw task serializes");
    assert_eq!(value, json!({"id": "9", "labels": ["a"]}));
}
