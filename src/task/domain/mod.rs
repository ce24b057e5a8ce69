//! Domain model for task retrieval and normalization.
//!
//! Upstream task records are kept loosely typed ([`RawTask`]) because the
//! active and completed endpoints disagree on shape. Everything consumers
//! see goes through [`normalize`] into the fixed [`NormalizedTask`] shape.

mod error;
mod normalized;
mod range;
mod raw;

pub use error::TaskDomainError;
pub use normalized::{NormalizedTask, TaskDue, TaskDuration, normalize};
pub use range::{CompletionWindow, DATE_FORMAT, DateRange};
pub use raw::{RawTask, canonical_task_url, is_truthy};
