//! Unit tests for perf module.

use pointer_agent::perf::{InputStats, ScopedTimer, measure};

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_input_stats_time_records_channel() {
    let mut stats = InputStats::new();
    let out = stats.time("move", || "done");
    stats.time("move", || ());
    stats.record("wheel", 2.0);

    assert_eq!(out, "done");
    assert_eq!(stats.get("move").map(|s| s.count()), Some(2));
    assert_eq!(stats.get("wheel").map(|s| s.max()), Some(2.0));
    assert!(stats.get("press").is_none());

    stats.log_slow_channels();
    stats.reset();
    assert!(stats.get("move").is_none());
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping must not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}
