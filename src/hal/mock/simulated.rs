use crate::core::{Finger, FingerType, Frame, Hand, Handedness, Vec3};
use crate::hal::{FrameProvider, ProviderState};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::f32::consts::PI;

/// Lateral offset of each finger base from the palm centre, in mm
const FINGER_SPREAD: [f32; 5] = [-45.0, -22.0, 0.0, 20.0, 38.0];
/// Bone lengths per finger, metacarpal to distal, in mm
const BONE_LENGTHS: [[f32; 4]; 5] = [
    [0.0, 46.0, 32.0, 25.0],
    [68.0, 39.0, 22.0, 18.0],
    [64.0, 44.0, 26.0, 19.0],
    [58.0, 41.0, 25.0, 19.0],
    [53.0, 32.0, 18.0, 17.0],
];

/// Procedurally animated hands: the palm bobs up and down and the fingers
/// curl and uncurl over a two second cycle.
pub struct SimulatedHandProvider {
    state: ProviderState,
    hands: Vec<Handedness>,
    frame_rate: f64,
    drop_every: u64,
    empty_every: u64,
    frame_counter: u64,
}

impl SimulatedHandProvider {
    pub fn new() -> Self {
        Self {
            state: ProviderState::Unopened,
            hands: vec![Handedness::Right],
            frame_rate: 60.0,
            drop_every: 0,
            empty_every: 0,
            frame_counter: 0,
        }
    }

    fn build_hand(&self, handedness: Handedness, t: f32) -> Hand {
        let side = match handedness {
            Handedness::Left => -1.0,
            Handedness::Right => 1.0,
        };
        let palm = Vec3::new(side * 80.0, 200.0 + 20.0 * (PI * t).sin(), 0.0);
        let wrist = palm.offset(0.0, 0.0, 60.0);
        let curl = 0.5 * (1.0 - (PI * t).cos());

        let fingers = std::array::from_fn(|i| {
            let base = palm.offset(side * FINGER_SPREAD[i], 0.0, 0.0);
            let mut joint = base;
            let mut angle = 0.0f32;
            let joints = std::array::from_fn(|b| {
                let length = BONE_LENGTHS[i][b];
                joint = joint.offset(0.0, -length * angle.sin(), -length * angle.cos());
                angle += curl * PI / 6.0;
                joint
            });
            Finger::from_joints(FingerType::ALL[i], base, joints)
        });

        Hand {
            id: match handedness {
                Handedness::Left => 1,
                Handedness::Right => 2,
            },
            handedness,
            palm_position: palm,
            wrist_position: wrist,
            fingers,
        }
    }
}

impl Default for SimulatedHandProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameProvider for SimulatedHandProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn configure(&mut self, config: Value) -> Result<()> {
        if !self.state.can_configure() {
            return Err(anyhow!("Cannot configure provider in state {:?}", self.state));
        }

        if let Some(hands) = config["hands"].as_array() {
            self.hands = hands
                .iter()
                .map(|h| {
                    h.as_str()
                        .ok_or_else(|| anyhow!("hands entries must be strings"))?
                        .parse::<Handedness>()
                })
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(rate) = config["frame_rate"].as_f64() {
            if rate <= 0.0 {
                return Err(anyhow!("frame_rate must be positive, got {}", rate));
            }
            self.frame_rate = rate;
        }
        if let Some(n) = config["drop_every"].as_u64() {
            self.drop_every = n;
        }
        if let Some(n) = config["empty_every"].as_u64() {
            self.empty_every = n;
        }

        Ok(())
    }

    async fn open(&mut self) -> Result<()> {
        if self.state != ProviderState::Unopened {
            return Err(anyhow!("Cannot open provider in state {:?}", self.state));
        }
        self.state = ProviderState::Opened;
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        if !self.state.can_start() {
            return Err(anyhow!("Cannot start provider in state {:?}", self.state));
        }
        self.state = ProviderState::Running;
        self.frame_counter = 0;
        Ok(())
    }

    async fn current_frame(&mut self) -> Result<Option<Frame>> {
        if !self.state.is_running() {
            return Err(anyhow!("Provider not running"));
        }

        self.frame_counter += 1;
        let n = self.frame_counter;

        if self.drop_every > 0 && n % self.drop_every == 0 {
            return Ok(None);
        }

        let timestamp = ((n - 1) as f64 * 1_000_000.0 / self.frame_rate) as u64;
        let mut frame = Frame::new(n, timestamp);

        if self.empty_every > 0 && n % self.empty_every == 0 {
            return Ok(Some(frame));
        }

        let t = (timestamp as f64 / 1_000_000.0) as f32;
        for &handedness in &self.hands {
            frame.hands.push(self.build_hand(handedness, t));
        }

        Ok(Some(frame))
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
}
