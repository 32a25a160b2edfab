use super::ProviderState;
use crate::core::Frame;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A hand-tracking sensor, polled once per host tick.
///
/// Lifecycle: `configure`/`open` from `Unopened`, `start` from `Opened` or
/// `Stopped`, `current_frame` only while `Running`. `stop` is a no-op when not
/// running and `close` stops first.
#[async_trait]
pub trait FrameProvider: Send {
    /// Provider identifier used in logs and the registry
    fn name(&self) -> &str;

    async fn configure(&mut self, config: Value) -> Result<()>;

    async fn open(&mut self) -> Result<()>;

    async fn start(&mut self) -> Result<()>;

    /// The sensor's frame for this tick; `None` when it has nothing to report
    async fn current_frame(&mut self) -> Result<Option<Frame>>;

    async fn stop(&mut self) -> Result<()>;

    async fn close(&mut self) -> Result<()>;

    fn state(&self) -> ProviderState;

    /// True once a finite source has no more frames to give
    fn is_exhausted(&self) -> bool {
        false
    }
}
