//! Todoist-backed construction of the range fetcher.

use super::fetch::{SourceState, TaskRangeFetcher};
use crate::task::adapters::todoist::{
    ApiToken, TodoistClient, TodoistClientError, TodoistConfig, TodoistConfigError,
};
use std::env;
use thiserror::Error;

/// Environment variable holding the Todoist API token.
pub const TOKEN_ENV: &str = "TODOIST_API_TOKEN";

/// Range fetcher reading from the Todoist REST API.
pub type TodoistConnector = TaskRangeFetcher<TodoistClient>;

/// Errors raised while building a connector from the environment.
#[derive(Debug, Error)]
pub enum ConnectorSetupError {
    /// A configuration variable is invalid.
    #[error(transparent)]
    Config(#[from] TodoistConfigError),
    /// The client could not be constructed.
    #[error(transparent)]
    Client(#[from] TodoistClientError),
}

impl TaskRangeFetcher<TodoistClient> {
    /// Creates a configured connector.
    ///
    /// # Errors
    ///
    /// Returns [`TodoistClientError::EmptyToken`] for a blank token and
    /// [`TodoistClientError::Http`] when the HTTP client cannot be built.
    pub fn with_token(
        token: impl Into<String>,
        config: TodoistConfig,
    ) -> Result<Self, TodoistClientError> {
        let client = TodoistClient::new(ApiToken::new(token)?, config)?;
        Ok(Self::new(client))
    }

    /// Supplies or replaces the API token.
    ///
    /// An already-configured connector keeps its configuration; an
    /// unconfigured one starts from [`TodoistConfig::default`]. On error the
    /// previous state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoistClientError`] as for [`Self::with_token`].
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), TodoistClientError> {
        let config = match self.state() {
            SourceState::Configured(client) => client.config().clone(),
            SourceState::Unconfigured => TodoistConfig::default(),
        };
        let client = TodoistClient::new(ApiToken::new(token)?, config)?;
        self.configure(client);
        Ok(())
    }

    /// Builds a connector from `TODOIST_*` environment variables.
    ///
    /// A missing or blank `TODOIST_API_TOKEN` yields an unconfigured
    /// connector rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorSetupError`] when a configuration variable is
    /// invalid or the client cannot be built.
    pub fn from_env() -> Result<Self, ConnectorSetupError> {
        let config = TodoistConfig::from_env()?;
        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        token.map_or_else(
            || Ok(Self::unconfigured()),
            |value| Ok(Self::with_token(value, config)?),
        )
    }
}
