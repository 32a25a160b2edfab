use super::Frame;
use crate::engine::HostClock;
use anyhow::Result;
use async_trait::async_trait;

/// Lifecycle hooks a host loop drives on a capture component
#[async_trait]
pub trait HostComponent: Send {
    /// Called once before the first tick
    async fn on_start(&mut self, _clock: &mut HostClock) -> Result<()> {
        Ok(())
    }

    /// Called once per host tick with the provider's current frame, if any
    async fn on_tick(&mut self, frame: Option<&Frame>, clock: &mut HostClock) -> Result<()>;

    /// Called once when the host application exits
    async fn on_shutdown(&mut self) -> Result<()>;
}
