use super::{export, CaptureConfig, CaptureState, SampleBuffer};
use crate::core::{Frame, Hand, HostComponent, Vec3, BONES_PER_FINGER, FINGERS_PER_HAND};
use crate::engine::HostClock;
use crate::observability::CaptureMetrics;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rows written per matching hand
pub const POINTS_PER_HAND: usize = 2 + FINGERS_PER_HAND * BONES_PER_FINGER;

/// Palm, wrist, then `next_joint` of every bone of every finger, thumb first.
pub fn hand_points(hand: &Hand) -> impl Iterator<Item = Vec3> + '_ {
    [hand.palm_position, hand.wrist_position].into_iter().chain(
        hand.fingers
            .iter()
            .flat_map(|finger| finger.bones.iter().map(|bone| bone.next_joint)),
    )
}

/// Samples one handedness from incoming frames into a CSV buffer and writes it
/// out on shutdown.
///
/// The tick counter only advances on ticks whose frame holds at least one hand
/// (of any handedness). Rows are emitted on those ticks when the counter, read
/// before the increment, is a multiple of the stride. Once the counter reaches
/// the capture limit the sampler pauses for good and freezes the host clock.
pub struct Sampler {
    config: CaptureConfig,
    output_path: PathBuf,
    tick_count: u64,
    state: CaptureState,
    buffer: SampleBuffer,
    metrics: Arc<CaptureMetrics>,
}

impl Sampler {
    pub fn new(config: CaptureConfig) -> Result<Self> {
        config.validate()?;
        let output_path = config.output_path();
        Ok(Self {
            config,
            output_path,
            tick_count: 0,
            state: CaptureState::Active,
            buffer: SampleBuffer::new(),
            metrics: Arc::new(CaptureMetrics::new()),
        })
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == CaptureState::Paused
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn metrics(&self) -> Arc<CaptureMetrics> {
        Arc::clone(&self.metrics)
    }

    /// One host tick.
    pub fn sample(&mut self, frame: Option<&Frame>, clock: &mut HostClock) {
        self.metrics.record_tick();

        if self.tick_count == self.config.capture_limit {
            if self.state.can_transition_to(&CaptureState::Paused) {
                self.state = CaptureState::Paused;
                info!(
                    "Capture limit of {} ticks reached, {} rows buffered",
                    self.config.capture_limit,
                    self.buffer.rows()
                );
            }
            clock.freeze();
            self.metrics.record_paused_tick();
            debug!("pause");
            return;
        }

        let frame = match frame {
            Some(frame) if frame.has_hands() => frame,
            Some(_) => {
                self.metrics.record_empty_frame();
                return;
            }
            None => {
                self.metrics.record_missing_frame();
                return;
            }
        };

        if self.tick_count % self.config.stride == 0 {
            let target = self.config.handedness;

            for hand in frame.hands.iter().filter(|hand| hand.handedness == target) {
                let before = self.buffer.rows();
                self.buffer.extend(hand_points(hand));
                self.metrics.record_hand(self.buffer.rows() - before);
            }
            self.metrics.record_sampled_tick();
        }

        self.tick_count += 1;
        debug!("{}", self.tick_count);
    }

    /// Write the buffer to the output path, replacing any previous file.
    pub async fn flush(&self) -> Result<()> {
        export::write_csv(&self.output_path, self.buffer.as_str()).await?;
        info!(
            "Wrote {} rows ({} bytes) to {}",
            self.buffer.rows(),
            self.buffer.len_bytes(),
            self.output_path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl HostComponent for Sampler {
    async fn on_start(&mut self, clock: &mut HostClock) -> Result<()> {
        clock.reset();
        info!(
            "Sampling {} hand every {} ticks, pausing after {} ticks; output {}",
            self.config.handedness.as_str(),
            self.config.stride,
            self.config.capture_limit,
            self.output_path.display()
        );
        Ok(())
    }

    async fn on_tick(&mut self, frame: Option<&Frame>, clock: &mut HostClock) -> Result<()> {
        self.sample(frame, clock);
        Ok(())
    }

    async fn on_shutdown(&mut self) -> Result<()> {
        self.flush().await
    }
}
