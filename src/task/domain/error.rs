//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A calendar date did not parse as `YYYY-MM-DD`.
    #[error("time data '{input}' does not match format '%Y-%m-%d' ({reason})")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: chrono::ParseError,
    },
}
