//! Demonstration driver: submit a small mixed-priority workload and drain
//! it in strict priority order.
//!
//! All presentation lives here — the scheduler returns structured jobs and
//! never produces text itself.

use triage::telemetry::dispatch_span;
use triage::{JobFactory, JobId, JobScheduler};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Triage Scheduler Demo ===\n");

    let factory = JobFactory::new();
    let mut scheduler = JobScheduler::new();

    println!("1. Submitting jobs...\n");

    let workload = [
        ("Normal task", 5),
        ("Urgent bug fix", 1),
        ("Background cleanup", 8),
        ("Customer support ticket", 3),
        ("Critical system alert", 1),
    ];
    for (description, priority) in workload {
        let job = factory.job(JobId::new(), description, priority);
        println!("   Submitted {job}");
        scheduler.submit(job);
    }

    println!("\n2. Jobs pending: {}", scheduler.pending_count());
    println!("\n3. Dispatching in priority order:\n");

    while let Some(job) = scheduler.dispatch_next() {
        let span = dispatch_span(&job);
        let _enter = span.enter();
        println!("   Processing -> {job}");
    }

    println!(
        "\n4. All jobs dispatched. Scheduler idle? {}",
        scheduler.is_idle()
    );

    Ok(())
}
