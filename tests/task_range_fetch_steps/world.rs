//! Shared world state for date-range retrieval BDD scenarios.

use rstest::fixture;
use serde_json::{Value, json};
use todoist_bridge::task::{
    adapters::memory::InMemoryTaskSource, domain::RawTask, services::FetchOutcome,
};

/// Scenario world for date-range retrieval behaviour tests.
pub struct FetchWorld {
    pub source: InMemoryTaskSource,
    pub has_token: bool,
    pub last_outcome: Option<FetchOutcome>,
}

impl FetchWorld {
    /// Creates a world with an empty, credentialed source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: InMemoryTaskSource::new(),
            has_token: true,
            last_outcome: None,
        }
    }

    /// Returns the outcome of the last fetch.
    pub fn outcome(&self) -> Result<&FetchOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing fetch outcome in scenario world"))
    }
}

impl Default for FetchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FetchWorld {
    FetchWorld::default()
}

/// Builds an upstream task record.
pub fn task_record(
    id: &str,
    is_recurring: bool,
    url: Option<&str>,
) -> Result<RawTask, eyre::Report> {
    let value: Value = json!({
        "id": id,
        "content": format!("Task {id}"),
        "url": url,
        "due": {"date": "2025-01-02", "is_recurring": is_recurring},
    });
    serde_json::from_value(value).map_err(|err| eyre::eyre!("invalid task record: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
