use handcapture::observability::{CaptureMetrics, CaptureMonitor};
use std::sync::Arc;

#[test]
fn test_empty_report() {
    let monitor = CaptureMonitor::new(Arc::new(CaptureMetrics::new()));
    assert_eq!(monitor.generate_report(), "No ticks observed");
}

#[test]
fn test_report_contents() {
    let metrics = Arc::new(CaptureMetrics::new());
    for _ in 0..3 {
        metrics.record_tick();
    }
    metrics.record_missing_frame();
    metrics.record_sampled_tick();
    metrics.record_hand(22);
    metrics.record_provider_error();

    let report = CaptureMonitor::new(metrics.clone()).generate_report();

    assert!(report.contains("Capture Metrics"));
    assert!(report.contains("3 observed"));
    assert!(report.contains("1 without frame"));
    assert!(report.contains("1 tick, 1 hand, 22 rows"));
    assert!(report.contains("Provider errors: 1"));
    assert_eq!(metrics.snapshot().rows_written, 22);
}
