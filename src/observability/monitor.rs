use super::CaptureMetrics;
use std::sync::Arc;

pub struct CaptureMonitor {
    metrics: Arc<CaptureMetrics>,
}

impl CaptureMonitor {
    pub fn new(metrics: Arc<CaptureMetrics>) -> Self {
        Self { metrics }
    }

    pub fn generate_report(&self) -> String {
        let s = self.metrics.snapshot();

        if s.ticks_observed == 0 {
            return "No ticks observed".to_string();
        }

        let mut report = String::from("=== Capture Metrics ===\n");
        report.push_str(&format!(
            "  Ticks: {} observed, {} without frame, {} without hands, {} paused\n",
            s.ticks_observed, s.ticks_without_frame, s.ticks_without_hands, s.ticks_paused
        ));
        report.push_str(&format!(
            "  Samples: {} tick{}, {} hand{}, {} rows\n",
            s.sampled_ticks,
            if s.sampled_ticks == 1 { "" } else { "s" },
            s.hands_sampled,
            if s.hands_sampled == 1 { "" } else { "s" },
            s.rows_written
        ));
        if s.provider_errors > 0 {
            report.push_str(&format!("  Provider errors: {}\n", s.provider_errors));
        }

        report
    }

    pub fn metrics(&self) -> &Arc<CaptureMetrics> {
        &self.metrics
    }
}
