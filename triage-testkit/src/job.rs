use triage::{Job, JobFactory, JobId, JobScheduler};

/// Build a job with the given priority, labelled for assertions.
pub fn labelled_job(factory: &JobFactory, label: &str, priority: i32) -> Job {
    factory.job(JobId::new(), label, priority)
}

/// Build one job per `(label, priority)` pair, in order, from one factory.
///
/// The batch order is the arrival order, so tie-break expectations can be
/// stated directly against the slice.
pub fn job_batch(factory: &JobFactory, specs: &[(&str, i32)]) -> Vec<Job> {
    specs
        .iter()
        .map(|(label, priority)| factory.job(JobId::new(), *label, *priority))
        .collect()
}

/// Dispatch until idle, returning the jobs in release order.
pub fn drain(scheduler: &mut JobScheduler) -> Vec<Job> {
    let mut released = Vec::with_capacity(scheduler.pending_count());
    while let Some(job) = scheduler.dispatch_next() {
        released.push(job);
    }
    released
}
