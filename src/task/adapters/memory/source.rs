//! In-memory task source for fetch tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CompletionWindow, RawTask},
    ports::{TaskPage, TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe, scripted task source.
///
/// Pages are served in the order they were pushed, with the page index as
/// cursor. Clones share state, so a test can keep a handle for inspection
/// after moving the source into a service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    active: ScriptedFeed,
    completed: ScriptedFeed,
    active_queries: Vec<String>,
    completed_windows: Vec<CompletionWindow>,
}

#[derive(Debug, Default)]
struct ScriptedFeed {
    pages: Vec<Vec<RawTask>>,
    failure: Option<ScriptedFailure>,
    calls: usize,
}

#[derive(Debug)]
struct ScriptedFailure {
    page: usize,
    message: String,
}

impl ScriptedFeed {
    fn serve(&mut self, cursor: Option<&str>) -> TaskSourceResult<TaskPage> {
        self.calls += 1;
        let index = match cursor {
            None => 0,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| TaskSourceError::unavailable(format!("unknown cursor '{raw}'")))?,
        };

        if let Some(failure) = self.failure.as_ref()
            && failure.page == index
        {
            return Err(TaskSourceError::unavailable(failure.message.clone()));
        }

        let tasks = self.pages.get(index).cloned().unwrap_or_default();
        let next = index + 1;
        if next < self.pages.len() {
            Ok(TaskPage::with_next(tasks, next.to_string()))
        } else {
            Ok(TaskPage::last(tasks))
        }
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskSourceError {
    TaskSourceError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskSource {
    /// Creates a source with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page to the active-task feed.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn push_active_page(&self, tasks: Vec<RawTask>) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.active.pages.push(tasks);
        Ok(())
    }

    /// Appends a page to the completed-task feed.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn push_completed_page(&self, tasks: Vec<RawTask>) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.completed.pages.push(tasks);
        Ok(())
    }

    /// Makes the active-task feed fail when page `page` is requested.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn fail_active_at(&self, page: usize, message: impl Into<String>) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.active.failure = Some(ScriptedFailure {
            page,
            message: message.into(),
        });
        Ok(())
    }

    /// Makes the completed-task feed fail when page `page` is requested.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn fail_completed_at(
        &self,
        page: usize,
        message: impl Into<String>,
    ) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.completed.failure = Some(ScriptedFailure {
            page,
            message: message.into(),
        });
        Ok(())
    }

    /// Returns how many active-task pages were requested.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn active_calls(&self) -> TaskSourceResult<usize> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.active.calls)
    }

    /// Returns how many completed-task pages were requested.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn completed_calls(&self) -> TaskSourceResult<usize> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.completed.calls)
    }

    /// Returns every filter query received, in request order.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn active_queries(&self) -> TaskSourceResult<Vec<String>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.active_queries.clone())
    }

    /// Returns every completion window received, in request order.
    ///
    /// # Errors
    ///
    /// Returns source errors when lock acquisition fails.
    pub fn completed_windows(&self) -> TaskSourceResult<Vec<CompletionWindow>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.completed_windows.clone())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn active_tasks(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.active_queries.push(query.to_owned());
        state.active.serve(cursor.as_deref())
    }

    async fn completed_tasks(
        &self,
        window: &CompletionWindow,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.completed_windows.push(*window);
        state.completed.serve(cursor.as_deref())
    }
}
