//! Triage - priority-ordered job scheduling on a binary min-heap.
//!
//! A small crate that accepts units of work tagged with a numeric priority
//! and releases them strictly in priority order, breaking ties by arrival
//! order (first-come-first-served among equal priorities).
//!
//! # Core Concepts
//!
//! - **Queue**: [`OrderedPriorityQueue`] is the ordered-selection engine —
//!   an array-backed binary min-heap over any `Ord` key type, with
//!   logarithmic insert and extract-minimum.
//!
//! - **Job**: [`Job`] is the unit of work: a caller-assigned [`JobId`], an
//!   opaque description, a signed priority (lower is served earlier), and an
//!   arrival sequence number used only to break priority ties.
//!
//! - **Factory**: [`JobFactory`] owns the arrival counter and is the only
//!   way to construct jobs, making tie-break ordering deterministic per
//!   factory.
//!
//! - **Scheduler**: [`JobScheduler`] binds the queue to `Job` keys and
//!   exposes the scheduling-domain operations: submit, peek, dispatch,
//!   count, idle. [`SharedJobScheduler`] is the lock-protected clonable
//!   handle for concurrent producers.
//!
//! # Example
//!
//! ```
//! use triage::{JobFactory, JobId, JobScheduler};
//!
//! let factory = JobFactory::new();
//! let mut scheduler = JobScheduler::new();
//! scheduler.submit(factory.job(JobId::new(), "reindex search", 5));
//! scheduler.submit(factory.job(JobId::new(), "page the on-call", 1));
//!
//! let next = scheduler.dispatch_next().unwrap();
//! assert_eq!(next.priority(), 1);
//! ```

/// Configuration structures for queue sizing.
///
/// The `config` module defines [`QueueConfig`], consumed by the
/// `with_config` constructors.
pub mod config;

/// Core job definitions.
///
/// The `job` module defines the unit of work and its construction path:
/// - [`Job`] - an immutable (id, description, priority, arrival) record
/// - [`JobId`] - caller-assigned opaque identifier
/// - [`JobFactory`] - owner of the arrival-sequence counter
pub mod job;

/// The ordered-selection engine.
///
/// The `queue` module defines [`OrderedPriorityQueue`], a binary min-heap
/// over any totally ordered key type.
pub mod queue;

/// Scheduling facade over the queue.
///
/// The `scheduler` module defines [`JobScheduler`] and the lock-protected
/// [`SharedJobScheduler`] handle for concurrent callers.
pub mod scheduler;

/// Tracing spans and event helpers for the job lifecycle.
pub mod telemetry;

pub use config::*;
pub use job::*;
pub use queue::*;
pub use scheduler::*;
