//! Application services for date-range task retrieval.

mod connector;
mod fetch;
mod outcome;

pub use connector::{ConnectorSetupError, TOKEN_ENV, TodoistConnector};
pub use fetch::{SourceState, TaskRangeFetcher};
pub use outcome::{FetchIssue, FetchOutcome, ISSUE_SEPARATOR};
