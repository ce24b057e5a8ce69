//! Date-range task retrieval from Todoist.
//!
//! The fetcher reconciles two upstream sources, active tasks selected by
//! creation date and completed tasks selected by completion date, drops
//! recurring tasks from both, and reports partial failures alongside
//! whatever it managed to collect. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Markdown presentation in [`render`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod tests;
