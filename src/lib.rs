//! Todoist bridge: date-range task retrieval and markdown export.
//!
//! This crate fetches tasks from the Todoist REST API for a calendar date
//! range, drops recurring tasks, and renders the rest as markdown documents
//! for downstream indexing.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Raw and normalized task records, date ranges
//! - **Ports**: The paginated task source trait
//! - **Adapters**: Todoist HTTP client and a scripted in-memory source
//! - **Services**: Range fetching across the active and completed sources
//!
//! # Modules
//!
//! - [`task`]: Task retrieval, normalization, and rendering

pub mod task;
