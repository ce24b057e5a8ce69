//! Bearer token for the Todoist REST API.

use super::TodoistClientError;
use std::fmt;

/// Non-empty API token.
///
/// `Debug` output is redacted so the token never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a validated token.
    ///
    /// # Errors
    ///
    /// Returns [`TodoistClientError::EmptyToken`] when the token is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoistClientError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoistClientError::EmptyToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}
