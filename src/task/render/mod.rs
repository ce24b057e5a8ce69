//! Presentation of normalized tasks for display and storage.

mod date;
mod markdown;

pub use date::{DISPLAY_FORMAT, UNKNOWN_DATE, format_date};
pub use markdown::{UNTITLED, priority_label, to_markdown};
