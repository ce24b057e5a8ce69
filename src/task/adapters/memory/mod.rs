//! In-memory adapters for task retrieval tests.

mod source;

pub use source::InMemoryTaskSource;
