pub mod metrics;
pub mod monitor;

pub use metrics::{CaptureMetrics, MetricsSnapshot};
pub use monitor::CaptureMonitor;
