//! Loosely-typed task records as returned by the upstream task service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::num::FpCategory;

/// Host used for externally resolvable task links.
const TASK_URL_PREFIX: &str = "https://todoist.com/showTask?id=";

/// Builds the canonical, externally resolvable URL for a task identifier.
///
/// The completed-task endpoint reports app-internal links, so both sources
/// are normalized to this shape.
#[must_use]
pub fn canonical_task_url(task_id: &str) -> String {
    format!("{TASK_URL_PREFIX}{task_id}")
}

/// Task record in the upstream service's serialized form.
///
/// Records arriving from the active and completed endpoints do not share a
/// schema, so every accessor returns an optional value and treats JSON `null`
/// the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTask(Map<String, Value>);

impl RawTask {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, ignoring explicit nulls.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Returns a string field.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns an integer field.
    #[must_use]
    pub fn i64_field(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Returns a nested object field.
    #[must_use]
    pub fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Returns an identifier-like field, accepting strings and numbers.
    #[must_use]
    pub fn id_field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(identifier_text)
    }

    /// Returns the task identifier, falling back to `task_id`.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.id_field("id").or_else(|| self.id_field("task_id"))
    }

    /// Returns the task link as reported by the source.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// Replaces the task link.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.0.insert("url".to_owned(), Value::String(url.into()));
    }

    /// Reports whether the task regenerates on a schedule.
    ///
    /// Only a `due` object carrying a truthy `is_recurring` flag counts; a
    /// missing or null `due`, or a `due` without the flag, is non-recurring.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.object_field("due")
            .and_then(|due| due.get("is_recurring"))
            .is_some_and(is_truthy)
    }
}

/// Truthiness over loosely-typed JSON flags.
///
/// `null`, `false`, zero, and empty strings or collections are false.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() != FpCategory::Zero),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

pub(crate) fn identifier_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
