//! Connection settings for the Todoist REST API.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TODOIST_API_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "TODOIST_TIMEOUT_SECS";
/// Environment variable overriding the page size.
pub const PAGE_LIMIT_ENV: &str = "TODOIST_PAGE_LIMIT";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";
/// Largest page size the API accepts.
pub const MAX_PAGE_LIMIT: u16 = 200;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoistConfigError {
    /// The base URL is empty or not HTTP(S).
    #[error("invalid Todoist base URL '{0}', expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The timeout is not a positive number of seconds.
    #[error("invalid timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),

    /// The page size is outside `1..=200`.
    #[error("invalid page limit '{0}', expected an integer between 1 and 200")]
    InvalidPageLimit(String),
}

/// Settings shared by every request the client issues.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use todoist_bridge::task::adapters::todoist::TodoistConfig;
///
/// let config = TodoistConfig::default().with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://api.todoist.com/api/v1");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoistConfig {
    base_url: String,
    timeout: Duration,
    page_limit: u16,
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
            page_limit: MAX_PAGE_LIMIT,
        }
    }
}

impl TodoistConfig {
    /// Builds the default configuration overlaid with environment overrides.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TodoistConfigError`] when a variable is set to an invalid
    /// value.
    pub fn from_env() -> Result<Self, TodoistConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = read_var(BASE_URL_ENV) {
            config.base_url = validate_base_url(&base_url)?;
        }
        if let Some(timeout) = read_var(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&timeout)?;
        }
        if let Some(limit) = read_var(PAGE_LIMIT_ENV) {
            config.page_limit = parse_page_limit(&limit)?;
        }
        Ok(config)
    }

    /// Sets the base URL (useful for testing with mock servers).
    ///
    /// # Errors
    ///
    /// Returns [`TodoistConfigError::InvalidBaseUrl`] when the URL is empty
    /// or does not use HTTP(S).
    pub fn with_base_url(
        mut self,
        base_url: impl Into<String>,
    ) -> Result<Self, TodoistConfigError> {
        self.base_url = validate_base_url(&base_url.into())?;
        Ok(self)
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the page size, clamped to `1..=200`.
    #[must_use]
    pub fn with_page_limit(mut self, page_limit: u16) -> Self {
        self.page_limit = page_limit.clamp(1, MAX_PAGE_LIMIT);
        self
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_limit(&self) -> u16 {
        self.page_limit
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn validate_base_url(raw: &str) -> Result<String, TodoistConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_valid_prefix = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_valid_prefix {
        return Err(TodoistConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(raw: &str) -> Result<Duration, TodoistConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(TodoistConfigError::InvalidTimeout(raw.to_owned())),
    }
}

fn parse_page_limit(raw: &str) -> Result<u16, TodoistConfigError> {
    match raw.parse::<u16>() {
        Ok(limit) if (1..=MAX_PAGE_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(TodoistConfigError::InvalidPageLimit(raw.to_owned())),
    }
}
