use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::atomic::AtomicU64;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a job, assigned by the caller.
///
/// The scheduler never interprets it; it exists so drivers can correlate
/// dispatched jobs with whatever produced them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl JobId {
    /// Create a new job ID using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work awaiting dispatch.
///
/// Jobs are immutable once constructed and are only built through a
/// [`JobFactory`], which assigns the arrival sequence number. Lower
/// `priority` values are served earlier; among equal priorities, the lower
/// `arrival` (submitted first) wins.
///
/// Equality and ordering consider only `(priority, arrival)` — the id and
/// description are opaque payload. Two jobs from the same factory are never
/// equal because their arrival numbers are unique.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    description: String,
    priority: i32,
    arrival: u64,
}

impl Job {
    /// Caller-assigned identifier.
    #[must_use]
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Opaque description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Scheduling priority; lower is served earlier.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Arrival sequence number assigned at construction, used only to break
    /// priority ties.
    #[must_use]
    pub fn arrival(&self) -> u64 {
        self.arrival
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.arrival == other.arrival
    }
}

impl Eq for Job {}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Job {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.arrival.cmp(&other.arrival))
    }
}

impl Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "job {} (priority {}): {}",
            self.id, self.priority, self.description
        )
    }
}

/// Allocates jobs with monotonically increasing arrival sequence numbers.
///
/// The factory owns the arrival counter outright: it starts at 0 and every
/// job built from the same factory draws the next value atomically, so the
/// tie-break order among equal priorities is the construction order. Jobs
/// that must be mutually ordered have to come from the same factory; share
/// one across producer threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct JobFactory {
    next_arrival: AtomicU64,
}

impl JobFactory {
    /// Create a factory whose arrival counter starts at 0.
    pub fn new() -> Self {
        Self {
            next_arrival: AtomicU64::new(0),
        }
    }

    /// Construct a job, drawing the next arrival number from this factory.
    ///
    /// The counter only needs uniqueness and monotonicity, so a relaxed
    /// fetch-add suffices.
    pub fn job(
        &self,
        id: JobId,
        description: impl Into<String>,
        priority: i32,
    ) -> Job {
        let arrival = self
            .next_arrival
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Job {
            id,
            description: description.into(),
            priority,
            arrival,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_assigns_increasing_arrivals() {
        let factory = JobFactory::new();
        let first = factory.job(JobId::new(), "first", 5);
        let second = factory.job(JobId::new(), "second", 5);
        let third = factory.job(JobId::new(), "third", 5);

        assert_eq!(first.arrival(), 0);
        assert_eq!(second.arrival(), 1);
        assert_eq!(third.arrival(), 2);
    }

    #[test]
    fn independent_factories_start_at_zero() {
        let a = JobFactory::new();
        let b = JobFactory::new();
        a.job(JobId::new(), "warm-up", 1);

        assert_eq!(b.job(JobId::new(), "fresh", 1).arrival(), 0);
    }

    #[test]
    fn lower_priority_value_orders_first() {
        let factory = JobFactory::new();
        let low_urgency = factory.job(JobId::new(), "cleanup", 8);
        let high_urgency = factory.job(JobId::new(), "alert", 1);

        assert!(high_urgency < low_urgency);
    }

    #[test]
    fn equal_priority_orders_by_arrival() {
        let factory = JobFactory::new();
        let first = factory.job(JobId::new(), "first", 3);
        let second = factory.job(JobId::new(), "second", 3);

        assert!(first < second);
        assert_ne!(first, second);
    }

    #[test]
    fn negative_priorities_order_before_zero() {
        let factory = JobFactory::new();
        let expedited = factory.job(JobId::new(), "expedited", -2);
        let normal = factory.job(JobId::new(), "normal", 0);

        assert!(expedited < normal);
    }

    #[test]
    fn display_includes_id_and_description() {
        let factory = JobFactory::new();
        let job = factory.job(JobId::new(), "rebuild index", 2);

        let rendered = job.to_string();
        assert!(rendered.contains(&job.id().to_string()));
        assert!(rendered.contains("rebuild index"));
        assert!(rendered.contains("priority 2"));
    }

    #[test]
    fn serialization_preserves_ordering_fields() {
        let factory = JobFactory::new();
        let first = factory.job(JobId::new(), "first", 4);
        let second = factory.job(JobId::new(), "second", 4);

        let json = serde_json::to_string(&first).unwrap();
        let restored: Job = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), first.id());
        assert_eq!(restored.arrival(), first.arrival());
        assert!(restored < second);
    }
}
