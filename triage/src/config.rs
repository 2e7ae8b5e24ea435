use serde::{Deserialize, Serialize};

/// Configuration for queue sizing.
///
/// Consumed by the `with_config` constructors on
/// [`OrderedPriorityQueue`](crate::OrderedPriorityQueue) and
/// [`JobScheduler`](crate::JobScheduler).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Number of job slots to preallocate in the backing storage.
    /// 0 means allocate on first insert.
    pub initial_capacity: usize,
}
