//! Port contracts for task retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod source;

pub use source::{TaskPage, TaskSource, TaskSourceError, TaskSourceResult};
