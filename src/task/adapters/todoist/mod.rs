//! Todoist REST API adapter.
//!
//! Implements [`TaskSource`](crate::task::ports::TaskSource) over the
//! paginated `tasks/filter` and `tasks/completed/by_completion_date`
//! endpoints.

mod client;
mod config;
mod token;

pub use client::{TodoistClient, TodoistClientError};
pub use config::{
    BASE_URL_ENV, DEFAULT_BASE_URL, MAX_PAGE_LIMIT, PAGE_LIMIT_ENV, TIMEOUT_ENV, TodoistConfig,
    TodoistConfigError,
};
pub use token::ApiToken;
