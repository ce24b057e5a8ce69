//! Best-effort fetch results and the issues collected along the way.

use crate::task::{
    domain::{RawTask, TaskDomainError},
    ports::TaskSourceError,
};
use thiserror::Error;

/// Separator used when joining issue messages.
pub const ISSUE_SEPARATOR: &str = "; ";

/// Problem recorded while fetching a date range.
#[derive(Debug, Clone, Error)]
pub enum FetchIssue {
    /// No credentials have been configured.
    #[error("Todoist token not initialized. Call set_token() first.")]
    NotInitialized,

    /// A range boundary is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}. Please use YYYY-MM-DD.")]
    InvalidDateFormat(#[source] TaskDomainError),

    /// The active-task source failed.
    #[error("Error fetching active tasks: {0}")]
    ActiveSource(#[source] TaskSourceError),

    /// The completed-task source failed.
    #[error("Error fetching completed tasks: {0}")]
    CompletedSource(#[source] TaskSourceError),

    /// Both sources succeeded but returned nothing to report.
    #[error("No tasks found in the specified date range.")]
    NoTasksFound,
}

impl FetchIssue {
    /// Reports whether the issue is a notice rather than a fault.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::NoTasksFound)
    }
}

/// Tasks gathered for a date range plus every issue encountered.
///
/// A non-empty issue list alongside tasks means a partial result; an empty
/// task list with only [`FetchIssue::NoTasksFound`] means there was simply
/// nothing to fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    tasks: Vec<RawTask>,
    issues: Vec<FetchIssue>,
}

impl FetchOutcome {
    /// Creates an outcome that failed before any upstream call.
    #[must_use]
    pub fn rejected(issue: FetchIssue) -> Self {
        Self {
            tasks: Vec::new(),
            issues: vec![issue],
        }
    }

    pub(crate) fn from_parts(tasks: Vec<RawTask>, mut issues: Vec<FetchIssue>) -> Self {
        if tasks.is_empty() && issues.is_empty() {
            issues.push(FetchIssue::NoTasksFound);
        }
        Self { tasks, issues }
    }

    /// Returns the fetched tasks.
    #[must_use]
    pub fn tasks(&self) -> &[RawTask] {
        &self.tasks
    }

    /// Returns the recorded issues, in the order they occurred.
    #[must_use]
    pub fn issues(&self) -> &[FetchIssue] {
        &self.issues
    }

    /// Reports whether any issue other than an empty-result notice occurred.
    #[must_use]
    pub fn has_faults(&self) -> bool {
        self.issues.iter().any(|issue| !issue.is_informational())
    }

    /// Joins all issue messages with `"; "`.
    ///
    /// Returns `None` when the fetch completed without issues.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        if self.issues.is_empty() {
            return None;
        }
        let messages: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        Some(messages.join(ISSUE_SEPARATOR))
    }

    /// Consumes the outcome, returning the tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<RawTask> {
        self.tasks
    }

    /// Consumes the outcome, returning `(tasks, joined error message)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<RawTask>, Option<String>) {
        let message = self.error_message();
        (self.tasks, message)
    }
}
