use super::HostClock;
use crate::core::HostComponent;
use crate::hal::{FrameProvider, ProviderState};
use crate::observability::CaptureMetrics;
use anyhow::Result;
use log::{info, warn};
use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration, MissedTickBehavior};

/// Why `run_until` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The shutdown future resolved
    Shutdown,
    /// A finite provider ran out of frames
    ProviderExhausted,
    /// The component froze the clock and the session was asked to quit on pause
    Paused,
}

/// Host loop: owns a frame provider and a component and drives the
/// start / tick / shutdown hooks on the component.
pub struct CaptureSession<C: HostComponent> {
    provider: Box<dyn FrameProvider>,
    component: C,
    clock: HostClock,
    tick_interval: Duration,
    quit_when_paused: bool,
    metrics: Option<Arc<CaptureMetrics>>,
}

impl<C: HostComponent> CaptureSession<C> {
    pub fn new(provider: Box<dyn FrameProvider>, component: C) -> Self {
        Self {
            provider,
            component,
            clock: HostClock::new(),
            tick_interval: Duration::from_millis(16),
            quit_when_paused: false,
            metrics: None,
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn quit_when_paused(mut self, quit: bool) -> Self {
        self.quit_when_paused = quit;
        self
    }

    /// Provider read errors are counted here
    pub fn with_metrics(mut self, metrics: Arc<CaptureMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn clock(&self) -> &HostClock {
        &self.clock
    }

    pub fn provider(&self) -> &dyn FrameProvider {
        self.provider.as_ref()
    }

    /// Open and start the provider if needed, then run the component's start hook.
    /// The provider should already be configured.
    pub async fn start(&mut self) -> Result<()> {
        if self.provider.state() == ProviderState::Unopened {
            self.provider.open().await?;
        }
        self.provider.start().await?;
        info!("Provider '{}' running", self.provider.name());

        self.component.on_start(&mut self.clock).await
    }

    /// One host tick. A provider read error counts as "no frame" for this tick.
    pub async fn tick(&mut self) -> Result<()> {
        self.clock.advance();

        let frame = match self.provider.current_frame().await {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Provider '{}' read failed: {}", self.provider.name(), e);
                if let Some(metrics) = &self.metrics {
                    metrics.record_provider_error();
                }
                None
            }
        };

        self.component.on_tick(frame.as_ref(), &mut self.clock).await
    }

    /// Run `n` ticks back to back, ignoring the tick interval.
    pub async fn run_ticks(&mut self, n: u64) -> Result<()> {
        for _ in 0..n {
            self.tick().await?;
        }
        Ok(())
    }

    /// Tick at the configured interval until `shutdown` resolves, the provider
    /// is exhausted, or the clock freezes while `quit_when_paused` is set.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<StopReason>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut interval = time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut shutdown => return Ok(StopReason::Shutdown),
                _ = interval.tick() => {
                    self.tick().await?;

                    if self.provider.is_exhausted() {
                        info!("Provider '{}' exhausted", self.provider.name());
                        return Ok(StopReason::ProviderExhausted);
                    }
                    if self.quit_when_paused && self.clock.is_frozen() {
                        return Ok(StopReason::Paused);
                    }
                }
            }
        }
    }

    /// Close the provider, then run the component's shutdown hook.
    /// A close failure is logged; the shutdown hook still runs.
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Err(e) = self.provider.close().await {
            warn!("Failed to close provider '{}': {}", self.provider.name(), e);
        }
        self.component.on_shutdown().await
    }
}
