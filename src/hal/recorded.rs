use crate::core::Frame;
use crate::hal::{FrameProvider, ProviderState};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// Parse JSON lines, one `Frame` or `null` per line. Blank lines are skipped.
pub fn parse_recording(content: &str) -> Result<Vec<Option<Frame>>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Option<Frame>>(line)
                .with_context(|| format!("Invalid frame on line {}", i + 1))
        })
        .collect()
}

/// Render frames in the format `parse_recording` reads
pub fn to_recording(frames: &[Option<Frame>]) -> Result<String> {
    let mut out = String::new();
    for frame in frames {
        out.push_str(&serde_json::to_string(frame)?);
        out.push('\n');
    }
    Ok(out)
}

/// Replays a recorded session frame by frame
pub struct RecordedProvider {
    state: ProviderState,
    path: Option<PathBuf>,
    looping: bool,
    frames: Vec<Option<Frame>>,
    cursor: usize,
}

impl RecordedProvider {
    pub fn new() -> Self {
        Self {
            state: ProviderState::Unopened,
            path: None,
            looping: false,
            frames: Vec::new(),
            cursor: 0,
        }
    }

    /// Provider over in-memory frames; `open` keeps them instead of reading a file
    pub fn from_frames(frames: Vec<Option<Frame>>) -> Self {
        Self {
            frames,
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Default for RecordedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameProvider for RecordedProvider {
    fn name(&self) -> &str {
        "recorded"
    }

    async fn configure(&mut self, config: Value) -> Result<()> {
        if !self.state.can_configure() {
            return Err(anyhow!("Cannot configure provider in state {:?}", self.state));
        }

        if let Some(path) = config["path"].as_str() {
            self.path = Some(PathBuf::from(path));
        }
        self.looping = config["loop"].as_bool().unwrap_or(false);

        Ok(())
    }

    async fn open(&mut self) -> Result<()> {
        if self.state != ProviderState::Unopened {
            return Err(anyhow!("Cannot open provider in state {:?}", self.state));
        }

        if let Some(path) = &self.path {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read recording {}", path.display()))?;
            self.frames = parse_recording(&content)?;
            log::info!("Loaded {} frames from {}", self.frames.len(), path.display());
        }

        self.state = ProviderState::Opened;
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        if !self.state.can_start() {
            return Err(anyhow!("Cannot start provider in state {:?}", self.state));
        }
        self.state = ProviderState::Running;
        self.cursor = 0;
        Ok(())
    }

    async fn current_frame(&mut self) -> Result<Option<Frame>> {
        if !self.state.is_running() {
            return Err(anyhow!("Provider not running"));
        }

        if self.cursor >= self.frames.len() {
            if !self.looping || self.frames.is_empty() {
                return Ok(None);
            }
            self.cursor = 0;
        }

        let frame = self.frames[self.cursor].clone();
        self.cursor += 1;
        Ok(frame)
    }

    async fn stop(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }
        self.state = ProviderState::Stopped;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if self.state.is_running() {
            self.stop().await?;
        }
        self.state = ProviderState::Closed;
        Ok(())
    }

    fn state(&self) -> ProviderState {
        self.state.clone()
    }

    fn is_exhausted(&self) -> bool {
        !self.looping && self.cursor >= self.frames.len()
    }
}
