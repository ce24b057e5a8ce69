//! Flat, consumer-facing task records derived from [`RawTask`].

use super::raw::{RawTask, identifier_text, is_truthy};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Due-date details of a normalized task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDue {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Human-readable due string as typed by the user.
    pub string: Option<String>,
    /// Exact due timestamp, when the task has a time component.
    pub datetime: Option<String>,
    /// Time zone of `datetime`.
    pub timezone: Option<String>,
    /// Language used to parse `string`.
    pub lang: Option<String>,
    /// Whether the due date regenerates on a schedule.
    pub is_recurring: bool,
}

impl TaskDue {
    fn from_object(due: &Map<String, Value>) -> Self {
        Self {
            date: string_entry(due, "date"),
            string: string_entry(due, "string"),
            datetime: string_entry(due, "datetime"),
            timezone: string_entry(due, "timezone"),
            lang: string_entry(due, "lang"),
            is_recurring: due.get("is_recurring").is_some_and(is_truthy),
        }
    }
}

/// Estimated duration of a normalized task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDuration {
    /// Amount of `unit`s.
    pub amount: Option<i64>,
    /// Unit of `amount`, typically `minute` or `day`.
    pub unit: Option<String>,
}

impl TaskDuration {
    fn from_object(duration: &Map<String, Value>) -> Self {
        Self {
            amount: duration.get("amount").and_then(Value::as_i64),
            unit: string_entry(duration, "unit"),
        }
    }
}

/// Task record with a fixed key set.
///
/// Every field is serialized even when empty, so consumers can rely on the
/// shape without probing for keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTask {
    /// Upstream task identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Owning section.
    pub section_id: Option<String>,
    /// Parent task, for sub-tasks.
    pub parent_id: Option<String>,
    /// Task title.
    pub content: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the task carries a completion timestamp.
    pub is_completed: bool,
    /// Label names.
    pub labels: Vec<String>,
    /// Upstream priority, `1` (lowest) to `4` (urgent).
    pub priority: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last modification timestamp.
    pub updated_at: Option<String>,
    /// Completion timestamp.
    pub completed_at: Option<String>,
    /// Due-date details.
    pub due: Option<TaskDue>,
    /// Estimated duration.
    pub duration: Option<TaskDuration>,
    /// User the task is assigned to.
    pub assignee_id: Option<String>,
    /// User who assigned the task.
    pub assigner_id: Option<String>,
    /// Number of comments on the task.
    pub comment_count: Option<u64>,
    /// Source metadata, passed through unchanged.
    pub meta: Option<Value>,
    /// Link to the task.
    pub url: Option<String>,
}

impl NormalizedTask {
    /// Returns the due date, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due.as_ref().and_then(|due| due.date.as_deref())
    }
}

impl From<&RawTask> for NormalizedTask {
    fn from(raw: &RawTask) -> Self {
        normalize(raw)
    }
}

/// Maps a raw record onto the fixed normalized shape.
///
/// Total over any record shape: absent, null, or mistyped fields map to
/// `None` or an empty value. Completion is derived from `completed_at`
/// because completed-task records carry no status flag.
#[must_use]
pub fn normalize(raw: &RawTask) -> NormalizedTask {
    let completed_at = raw.str_field("completed_at").map(str::to_owned);
    NormalizedTask {
        id: raw.id(),
        project_id: raw.id_field("project_id"),
        section_id: raw.id_field("section_id"),
        parent_id: raw.id_field("parent_id"),
        content: owned_str(raw, "content"),
        description: owned_str(raw, "description"),
        is_completed: completed_at.is_some(),
        labels: labels(raw),
        priority: raw.i64_field("priority"),
        created_at: owned_str(raw, "created_at").or_else(|| owned_str(raw, "added_at")),
        updated_at: owned_str(raw, "updated_at"),
        completed_at,
        due: raw.object_field("due").map(TaskDue::from_object),
        duration: raw.object_field("duration").map(TaskDuration::from_object),
        assignee_id: raw
            .id_field("assignee_id")
            .or_else(|| raw.id_field("responsible_uid")),
        assigner_id: raw
            .id_field("assigner_id")
            .or_else(|| raw.id_field("assigned_by_uid")),
        comment_count: raw
            .get("comment_count")
            .or_else(|| raw.get("note_count"))
            .and_then(Value::as_u64),
        meta: raw.get("meta").cloned(),
        url: owned_str(raw, "url"),
    }
}

fn owned_str(raw: &RawTask, key: &str) -> Option<String> {
    raw.str_field(key).map(str::to_owned)
}

fn string_entry(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn labels(raw: &RawTask) -> Vec<String> {
    raw.get("labels")
        .and_then(Value::as_array)
        .map(|labels| labels.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}
