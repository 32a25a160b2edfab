use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of the capture counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub ticks_observed: u64,
    pub ticks_without_frame: u64,
    pub ticks_without_hands: u64,
    pub ticks_paused: u64,
    pub sampled_ticks: u64,
    pub hands_sampled: u64,
    pub rows_written: u64,
    pub provider_errors: u64,
}

#[derive(Debug, Default)]
pub struct CaptureMetrics {
    ticks_observed: AtomicU64,
    ticks_without_frame: AtomicU64,
    ticks_without_hands: AtomicU64,
    ticks_paused: AtomicU64,
    sampled_ticks: AtomicU64,
    hands_sampled: AtomicU64,
    rows_written: AtomicU64,
    provider_errors: AtomicU64,
}

impl CaptureMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&self) {
        self.ticks_observed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_frame(&self) {
        self.ticks_without_frame.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_frame(&self) {
        self.ticks_without_hands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_paused_tick(&self) {
        self.ticks_paused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sampled_tick(&self) {
        self.sampled_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hand(&self, rows: usize) {
        self.hands_sampled.fetch_add(1, Ordering::Relaxed);
        self.rows_written.fetch_add(rows as u64, Ordering::Relaxed);
    }

    pub fn record_provider_error(&self) {
        self.provider_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            ticks_observed: self.ticks_observed.load(Ordering::Relaxed),
            ticks_without_frame: self.ticks_without_frame.load(Ordering::Relaxed),
            ticks_without_hands: self.ticks_without_hands.load(Ordering::Relaxed),
            ticks_paused: self.ticks_paused.load(Ordering::Relaxed),
            sampled_ticks: self.sampled_ticks.load(Ordering::Relaxed),
            hands_sampled: self.hands_sampled.load(Ordering::Relaxed),
            rows_written: self.rows_written.load(Ordering::Relaxed),
            provider_errors: self.provider_errors.load(Ordering::Relaxed),
        }
    }
}
