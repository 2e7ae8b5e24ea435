//! Tracing instrumentation for scheduler operations.
//!
//! Helper functions for creating tracing spans and recording events around
//! the job lifecycle: submit and dispatch. The scheduler emits the record
//! events itself; the span helpers are for drivers that want their
//! processing work attributed to a specific job.
//!
//! # Example
//!
//! ```ignore
//! use triage::telemetry::dispatch_span;
//!
//! let span = dispatch_span(&job);
//! let _enter = span.enter();
//! // ... process the dispatched job
//! ```

use tracing::{info_span, Span};

use crate::job::Job;

/// Create a tracing span for a submit operation.
///
/// The span carries the job id and priority as fields.
#[must_use]
pub fn submit_span(job: &Job) -> Span {
    info_span!(
        "triage.submit",
        job_id = %job.id(),
        priority = job.priority(),
    )
}

/// Create a tracing span for a dispatch operation.
///
/// The span carries the job id and priority as fields.
#[must_use]
pub fn dispatch_span(job: &Job) -> Span {
    info_span!(
        "triage.dispatch",
        job_id = %job.id(),
        priority = job.priority(),
    )
}

/// Record that a job entered the scheduler.
pub fn record_job_submitted(job: &Job) {
    tracing::debug!(
        job_id = %job.id(),
        priority = job.priority(),
        arrival = job.arrival(),
        "job submitted"
    );
}

/// Record that a job left the scheduler, with the remaining pending count.
pub fn record_job_dispatched(job: &Job, remaining: usize) {
    tracing::debug!(
        job_id = %job.id(),
        priority = job.priority(),
        remaining = remaining,
        "job dispatched"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobFactory, JobId};

    fn sample_job() -> Job {
        JobFactory::new().job(JobId::new(), "sample", 2)
    }

    fn with_subscriber(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_submit_span() {
        with_subscriber(|| {
            let span = submit_span(&sample_job());
            assert_eq!(span.metadata().unwrap().name(), "triage.submit");
        });
    }

    #[test]
    fn test_dispatch_span() {
        with_subscriber(|| {
            let span = dispatch_span(&sample_job());
            assert_eq!(span.metadata().unwrap().name(), "triage.dispatch");
        });
    }

    #[test]
    fn test_record_events_do_not_panic() {
        with_subscriber(|| {
            let job = sample_job();
            record_job_submitted(&job);
            record_job_dispatched(&job, 0);
        });
    }
}
