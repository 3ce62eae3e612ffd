//! Unit tests for perf module.

use diagram_gestures::perf::{OperationStats, ScopedTimer, measure};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it never warns
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_reports_elapsed_time() {
    let (sum, elapsed) = measure(|| (0..1000u64).sum::<u64>());
    assert_eq!(sum, 499_500);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_empty_stats() {
    let stats = OperationStats::default();
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average(), 0.0);
    assert_eq!(stats.p95(), 0.0);
}

#[test]
fn test_p95_ignores_single_outlier_below_window() {
    let mut stats = OperationStats::default();
    for _ in 0..99 {
        stats.record(1.0);
    }
    stats.record(50.0);
    assert_eq!(stats.max_ms, 50.0);
    assert_eq!(stats.p95(), 1.0);
}
