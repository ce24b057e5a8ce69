//! `reqwest`-backed adapter for the Todoist REST API.

use super::{ApiToken, TodoistConfig};
use crate::task::{
    domain::{CompletionWindow, RawTask},
    ports::{TaskPage, TaskSource, TaskSourceError, TaskSourceResult},
};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const ACTIVE_TASKS_PATH: &str = "/tasks/filter";
const COMPLETED_TASKS_PATH: &str = "/tasks/completed/by_completion_date";

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum TodoistClientError {
    /// The API token is blank.
    #[error("Todoist API token must not be empty")]
    EmptyToken,

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Page envelope shared by the paginated task endpoints.
///
/// The filter endpoint lists records under `results`, the completed-task
/// endpoint under `items`.
#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default, alias = "items")]
    results: Vec<RawTask>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl From<PageBody> for TaskPage {
    fn from(body: PageBody) -> Self {
        match body.next_cursor {
            Some(cursor) if !cursor.is_empty() => Self::with_next(body.results, cursor),
            _ => Self::last(body.results),
        }
    }
}

/// Todoist task source.
#[derive(Debug, Clone)]
pub struct TodoistClient {
    http: reqwest::Client,
    config: TodoistConfig,
    token: ApiToken,
}

impl TodoistClient {
    /// Creates a client for the given token.
    ///
    /// # Errors
    ///
    /// Returns [`TodoistClientError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn new(token: ApiToken, config: TodoistConfig) -> Result<Self, TodoistClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &TodoistConfig {
        &self.config
    }

    async fn get_page(
        &self,
        path: &str,
        mut params: Vec<(&'static str, String)>,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage> {
        params.push(("limit", self.config.page_limit().to_string()));
        if let Some(next) = cursor {
            params.push(("cursor", next));
        }

        let url = format!("{}{path}", self.config.base_url());
        let response = self
            .http
            .get(&url)
            .header("Authorization", self.token.bearer())
            .query(&params)
            .send()
            .await
            .map_err(TaskSourceError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        let body: PageBody = response
            .json()
            .await
            .map_err(|err| TaskSourceError::Decode(err.to_string()))?;
        Ok(body.into())
    }
}

#[async_trait]
impl TaskSource for TodoistClient {
    async fn active_tasks(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage> {
        self.get_page(ACTIVE_TASKS_PATH, vec![("query", query.to_owned())], cursor)
            .await
    }

    async fn completed_tasks(
        &self,
        window: &CompletionWindow,
        cursor: Option<String>,
    ) -> TaskSourceResult<TaskPage> {
        let params = vec![
            ("since", window.since_param()),
            ("until", window.until_param()),
        ];
        self.get_page(COMPLETED_TASKS_PATH, params, cursor).await
    }
}

/// Maps an HTTP error status to a source error.
fn map_http_error(status: reqwest::StatusCode, body: &str) -> TaskSourceError {
    let message = extract_error_message(body);
    match status.as_u16() {
        401 | 403 => TaskSourceError::Unauthorized(message),
        429 => TaskSourceError::RateLimited(message),
        code => TaskSourceError::Status {
            status: code,
            message,
        },
    }
}

/// Extracts the `error` string of a JSON error body, falling back to the raw
/// body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_owned())
}
