use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::QueueConfig;
use crate::job::Job;
use crate::queue::OrderedPriorityQueue;
use crate::telemetry;

/// Scheduling facade over a single [`OrderedPriorityQueue`] of [`Job`]s.
///
/// The scheduler owns its queue for its entire lifetime and holds no other
/// state: submitted jobs are pending until dispatched, and
/// [`dispatch_next`](Self::dispatch_next) is the only way a job leaves the
/// scheduler's ownership. Jobs are released strictly by ascending priority,
/// first-come-first-served among equal priorities.
pub struct JobScheduler {
    queue: OrderedPriorityQueue<Job>,
}

impl fmt::Debug for JobScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobScheduler")
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl Default for JobScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl JobScheduler {
    /// Create a scheduler with an empty queue.
    pub fn new() -> Self {
        Self {
            queue: OrderedPriorityQueue::new(),
        }
    }

    /// Create a scheduler with preallocated storage for `capacity` jobs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: OrderedPriorityQueue::with_capacity(capacity),
        }
    }

    /// Create a scheduler sized according to the given configuration.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            queue: OrderedPriorityQueue::with_config(config),
        }
    }

    /// Accept a job for later dispatch.
    ///
    /// Job fields are opaque to the scheduler; no validation is performed.
    pub fn submit(&mut self, job: Job) {
        telemetry::record_job_submitted(&job);
        self.queue.insert(job);
    }

    /// The job that [`dispatch_next`](Self::dispatch_next) would release,
    /// without removing it. `None` when the scheduler is idle.
    #[must_use]
    pub fn peek_next(&self) -> Option<&Job> {
        self.queue.min()
    }

    /// Release the highest-priority pending job, transferring ownership back
    /// to the caller. `None` when the scheduler is idle.
    pub fn dispatch_next(&mut self) -> Option<Job> {
        let job = self.queue.remove_min();
        if let Some(job) = &job {
            telemetry::record_job_dispatched(job, self.queue.len());
        }
        job
    }

    /// Number of jobs submitted but not yet dispatched.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// True when no jobs are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Clonable handle sharing one [`JobScheduler`] across threads.
///
/// Each operation holds a single lock for the full insert or extraction, so
/// no caller ever observes the heap mid-restructure. Pair it with one shared
/// [`JobFactory`](crate::JobFactory) so arrival numbers stay totally ordered
/// across producers.
#[derive(Clone)]
pub struct SharedJobScheduler {
    inner: Arc<Mutex<JobScheduler>>,
}

impl fmt::Debug for SharedJobScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SharedJobScheduler");
        match self.inner.try_lock() {
            Some(scheduler) => {
                debug.field("pending", &scheduler.pending_count());
            }
            None => {
                debug.field("state", &"<locked>");
            }
        }
        debug.finish()
    }
}

impl Default for SharedJobScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedJobScheduler {
    /// Create a shared scheduler with an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(JobScheduler::new())),
        }
    }

    /// Create a shared scheduler sized according to the given configuration.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(JobScheduler::with_config(config))),
        }
    }

    /// Accept a job for later dispatch.
    pub fn submit(&self, job: Job) {
        self.inner.lock().submit(job);
    }

    /// Clone of the next job to dispatch; a borrow cannot outlive the lock.
    #[must_use]
    pub fn peek_next(&self) -> Option<Job> {
        self.inner.lock().peek_next().cloned()
    }

    /// Release the highest-priority pending job.
    pub fn dispatch_next(&self) -> Option<Job> {
        self.inner.lock().dispatch_next()
    }

    /// Number of jobs submitted but not yet dispatched.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }

    /// True when no jobs are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.inner.lock().is_idle()
    }
}
