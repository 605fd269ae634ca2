//! Prometheus metrics for queue activity.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Tickets submitted to a queue.
pub static TICKETS_SUBMITTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("helpline_tickets_submitted_total", "Total tickets submitted").unwrap()
});

/// Tickets processed, by ordering strategy.
pub static TICKETS_PROCESSED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("helpline_tickets_processed_total", "Total tickets processed"),
        &["strategy"],
    )
    .unwrap()
});

/// Processing runs where the strategy yielded no tickets.
pub static EMPTY_PROCESS_RUNS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "helpline_empty_process_runs_total",
        "Processing runs that found nothing to do",
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TICKETS_SUBMITTED.clone()),
        Box::new(TICKETS_PROCESSED.clone()),
        Box::new(EMPTY_PROCESS_RUNS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register_cleanly() {
        TICKETS_PROCESSED.with_label_values(&["fifo"]).inc();
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
        assert_eq!(registry.gather().len(), 3);
    }
}
