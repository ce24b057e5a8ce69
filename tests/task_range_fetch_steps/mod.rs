//! Step definitions for date-range task retrieval scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
