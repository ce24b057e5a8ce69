//! Date-range task retrieval across the active and completed task sources.

use super::outcome::{FetchIssue, FetchOutcome};
use crate::task::{
    domain::{DateRange, RawTask, canonical_task_url},
    ports::{TaskPage, TaskSource, TaskSourceResult},
};
use std::future::Future;
use tracing::{debug, info, warn};

/// Credential state of a fetcher.
///
/// A source only exists once credentials have been supplied, so every fetch
/// has to go through the `Configured` arm to reach it.
#[derive(Debug, Clone)]
pub enum SourceState<S> {
    /// No credentials have been supplied yet.
    Unconfigured,
    /// Credentials are present and the source is ready.
    Configured(S),
}

/// Retrieves tasks for a calendar date range.
///
/// Active tasks are selected by creation date and completed tasks by
/// completion date. Recurring tasks are dropped from both. A failure in one
/// source is recorded and never prevents the other source from being read.
#[derive(Debug, Clone)]
pub struct TaskRangeFetcher<S>
where
    S: TaskSource,
{
    state: SourceState<S>,
}

impl<S> Default for TaskRangeFetcher<S>
where
    S: TaskSource,
{
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl<S> TaskRangeFetcher<S>
where
    S: TaskSource,
{
    /// Creates a fetcher without credentials.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self {
            state: SourceState::Unconfigured,
        }
    }

    /// Creates a fetcher backed by a ready source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            state: SourceState::Configured(source),
        }
    }

    /// Installs or replaces the source.
    pub fn configure(&mut self, source: S) {
        self.state = SourceState::Configured(source);
    }

    /// Reports whether a source is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self.state, SourceState::Configured(_))
    }

    /// Returns the credential state.
    #[must_use]
    pub const fn state(&self) -> &SourceState<S> {
        &self.state
    }

    /// Fetches tasks created, or completed, between two `YYYY-MM-DD` dates.
    ///
    /// Never fails. Every problem, including an empty result, is reported
    /// through [`FetchOutcome::issues`].
    pub async fn fetch_tasks(
        &self,
        start_date: &str,
        end_date: &str,
        include_completed: bool,
    ) -> FetchOutcome {
        let SourceState::Configured(source) = &self.state else {
            return FetchOutcome::rejected(FetchIssue::NotInitialized);
        };
        match DateRange::parse(start_date, end_date) {
            Ok(range) => collect(source, range, include_completed).await,
            Err(err) => FetchOutcome::rejected(FetchIssue::InvalidDateFormat(err)),
        }
    }

    /// Fetches tasks for an already-parsed range.
    pub async fn fetch_range(&self, range: DateRange, include_completed: bool) -> FetchOutcome {
        match &self.state {
            SourceState::Configured(source) => collect(source, range, include_completed).await,
            SourceState::Unconfigured => FetchOutcome::rejected(FetchIssue::NotInitialized),
        }
    }
}

async fn collect<S>(source: &S, range: DateRange, include_completed: bool) -> FetchOutcome
where
    S: TaskSource,
{
    let mut tasks: Vec<RawTask> = Vec::new();
    let mut issues = Vec::new();

    let query = range.active_filter_query();
    let query_ref = query.as_str();
    let active = drain_pages(
        "active",
        move |cursor| source.active_tasks(query_ref, cursor),
        |task| tasks.push(task),
    )
    .await;
    if let Err(err) = active {
        warn!(error = %err, %range, "active task source failed");
        issues.push(FetchIssue::ActiveSource(err));
    }

    if include_completed {
        let window = range.completion_window();
        let window_ref = &window;
        let completed = drain_pages(
            "completed",
            move |cursor| source.completed_tasks(window_ref, cursor),
            |mut task| {
                task.id().map_or_else(
                    || warn!("completed task has no identifier; keeping its source URL"),
                    |id| task.set_url(canonical_task_url(&id)),
                );
                tasks.push(task);
            },
        )
        .await;
        if let Err(err) = completed {
            warn!(error = %err, %range, "completed task source failed");
            issues.push(FetchIssue::CompletedSource(err));
        }
    }

    info!(
        %range,
        include_completed,
        tasks = tasks.len(),
        issues = issues.len(),
        "fetched tasks for date range"
    );
    FetchOutcome::from_parts(tasks, issues)
}

/// Requests pages until the source reports no further cursor, handing every
/// non-recurring record to `accept`.
///
/// Records from pages received before a failure have already been accepted
/// when the error is returned.
async fn drain_pages<F, Fut>(
    source_name: &'static str,
    mut next_page: F,
    mut accept: impl FnMut(RawTask),
) -> TaskSourceResult<()>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = TaskSourceResult<TaskPage>>,
{
    let mut cursor: Option<String> = None;
    loop {
        let requested = cursor.clone();
        let (records, next_cursor) = next_page(cursor.take()).await?.into_parts();

        let received = records.len();
        let mut recurring = 0_usize;
        for record in records {
            if record.is_recurring() {
                recurring += 1;
            } else {
                accept(record);
            }
        }
        debug!(
            source = source_name,
            received,
            recurring,
            has_more = next_cursor.is_some(),
            "fetched task page"
        );

        match next_cursor {
            None => return Ok(()),
            Some(next) if requested.as_deref() == Some(next.as_str()) => {
                warn!(source = source_name, "task source repeated its cursor; stopping");
                return Ok(());
            }
            Some(next) => cursor = Some(next),
        }
    }
}
