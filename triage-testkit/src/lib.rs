//! Test fixtures for the triage scheduler.
//!
//! Labelled job builders, a drain helper, and a min-heap invariant checker,
//! shared by the library's integration tests and benches.

mod heap;
mod job;

pub use heap::*;
pub use job::*;
