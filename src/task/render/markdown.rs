//! Markdown rendering of normalized tasks.

use super::date::format_date;
use crate::task::domain::NormalizedTask;

/// Heading used when a task has no title.
pub const UNTITLED: &str = "No Title";

/// Maps an upstream priority to its display label.
///
/// The service stores priorities inverted: `4` is what users see as P1.
#[must_use]
pub const fn priority_label(priority: i64) -> &'static str {
    match priority {
        1 => "P4 (Low)",
        2 => "P3 (Medium)",
        3 => "P2 (High)",
        4 => "P1 (Urgent)",
        _ => "Unknown",
    }
}

/// Renders a task as a markdown document.
///
/// Sections appear in a fixed order and only when their field has a value,
/// so the output is stable for a given task.
#[must_use]
pub fn to_markdown(task: &NormalizedTask) -> String {
    let mut out = String::new();

    let title = task.content.as_deref().filter(|content| !content.is_empty());
    out.push_str(&format!("# {}\n\n", title.unwrap_or(UNTITLED)));

    let status = if task.is_completed { "Completed" } else { "Open" };
    out.push_str(&format!("**Status:** {status}\n"));

    if let Some(duration) = &task.duration
        && let (Some(amount), Some(unit)) = (duration.amount, duration.unit.as_deref())
    {
        out.push_str(&format!("**Duration:** {amount} {unit}\n"));
    }

    if let Some(assignee) = non_empty(task.assignee_id.as_deref()) {
        out.push_str(&format!("**Assignee:** {assignee}\n"));
    }

    if let Some(updated_at) = non_empty(task.updated_at.as_deref()) {
        out.push_str(&format!("**Updated:** {}\n", format_date(updated_at)));
    }

    if let Some(due_date) = non_empty(task.due_date()) {
        out.push_str(&format!("**Due:** {due_date}\n"));
    }

    if let Some(priority) = task.priority.filter(|value| *value != 0) {
        out.push_str(&format!("**Priority:** {}\n", priority_label(priority)));
    }

    if !task.labels.is_empty() {
        out.push_str(&format!("**Labels:** {}\n", task.labels.join(", ")));
    }

    if let Some(created_at) = non_empty(task.created_at.as_deref()) {
        out.push_str(&format!("**Created:** {}\n\n", format_date(created_at)));
    }

    if let Some(description) = non_empty(task.description.as_deref()) {
        out.push_str(&format!("## Description\n\n{description}\n\n"));
    }

    if let Some(count) = task.comment_count.filter(|count| *count > 0) {
        out.push_str(&format!("**Comments:** {count}\n\n"));
    }

    out
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
