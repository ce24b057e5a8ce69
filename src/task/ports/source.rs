//! Source port for reading tasks from the upstream task service.

use crate::task::domain::{CompletionWindow, RawTask};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// One page of task records plus the cursor for the next page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPage {
    tasks: Vec<RawTask>,
    next_cursor: Option<String>,
}

impl TaskPage {
    /// Creates the final page of a result set.
    #[must_use]
    pub const fn last(tasks: Vec<RawTask>) -> Self {
        Self {
            tasks,
            next_cursor: None,
        }
    }

    /// Creates a page followed by the page at `next_cursor`.
    #[must_use]
    pub fn with_next(tasks: Vec<RawTask>, next_cursor: impl Into<String>) -> Self {
        Self {
            tasks,
            next_cursor: Some(next_cursor.into()),
        }
    }

    /// Returns the records on this page.
    #[must_use]
    pub fn tasks(&self) -> &[RawTask] {
        &self.tasks
    }

    /// Returns the cursor of the following page, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Splits the page into its records and next cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<RawTask>, Option<String>) {
        (self.tasks, self.next_cursor)
    }
}

/// Read access to the upstream task service.
///
/// Both operations are paginated: callers pass `None` for the first page and
/// then the previous page's [`TaskPage::next_cursor`] until it is absent.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Lists active tasks matching a filter query.
    ///
    /// The query uses the service's filter language, e.g.
    /// `created after: 2025-01-01 & created before: 2025-02-01`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the page cannot be retrieved.
    async fn active_tasks(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage>;

    /// Lists tasks whose completion time falls inside `window`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the page cannot be retrieved.
    async fn completed_tasks(
        &self,
        window: &CompletionWindow,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The service rejected the credentials.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// The service throttled the request.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The service answered with an unexpected status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error detail reported by the service.
        message: String,
    },

    /// The response body could not be decoded into a task page.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The source is unavailable for a reason it describes itself.
    #[error("{0}")]
    Unavailable(String),
}

impl TaskSourceError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Creates an error carrying a free-form description.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
