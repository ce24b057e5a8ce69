//! Unit tests for task retrieval and formatting.

mod raw_task_tests;

use crate::task::domain::RawTask;
use serde_json::{Value, json};

/// Builds a raw task from a JSON object literal.
fn raw(value: Value) -> RawTask {
    serde_json::from_value(value).expect("task fixture should be a JSON object")
}

/// Builds an upstream record shaped like the active or completed endpoints.
fn upstream_task(id: &str, is_recurring: bool, completed: bool) -> RawTask {
    raw(json!({
        "id": id,
        "content": format!("Task {id}"),
        "url": format!("https://app.todoist.com/showTask?id={id}"),
        "completed_at": completed.then_some("2025-01-15T10:00:00Z"),
        "due": {"date": "2025-01-02", "is_recurring": is_recurring},
    }))
}
