use super::Vec3;
use serde::{Deserialize, Serialize};

pub const FINGERS_PER_HAND: usize = 5;
pub const BONES_PER_FINGER: usize = 4;

/// Which hand the sensor believes it is tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Default for Handedness {
    fn default() -> Self {
        Handedness::Right
    }
}

impl std::str::FromStr for Handedness {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(anyhow::anyhow!("Unknown handedness: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerType {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl FingerType {
    pub const ALL: [FingerType; FINGERS_PER_HAND] = [
        FingerType::Thumb,
        FingerType::Index,
        FingerType::Middle,
        FingerType::Ring,
        FingerType::Pinky,
    ];
}

/// Bone segments from the palm outwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoneType {
    Metacarpal,
    Proximal,
    Intermediate,
    Distal,
}

impl BoneType {
    pub const ALL: [BoneType; BONES_PER_FINGER] = [
        BoneType::Metacarpal,
        BoneType::Proximal,
        BoneType::Intermediate,
        BoneType::Distal,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub bone_type: BoneType,
    /// Joint closer to the wrist
    pub prev_joint: Vec3,
    /// Joint closer to the fingertip
    pub next_joint: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finger {
    pub finger_type: FingerType,
    pub bones: [Bone; BONES_PER_FINGER],
}

impl Finger {
    /// Build a finger from its base joint and the four joints that follow it.
    pub fn from_joints(finger_type: FingerType, base: Vec3, joints: [Vec3; BONES_PER_FINGER]) -> Self {
        let mut prev = base;
        let bones = std::array::from_fn(|i| {
            let bone = Bone {
                bone_type: BoneType::ALL[i],
                prev_joint: prev,
                next_joint: joints[i],
            };
            prev = joints[i];
            bone
        });
        Self { finger_type, bones }
    }

    pub fn bone(&self, bone_type: BoneType) -> &Bone {
        &self.bones[bone_type.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub id: u32,
    pub handedness: Handedness,
    pub palm_position: Vec3,
    pub wrist_position: Vec3,
    pub fingers: [Finger; FINGERS_PER_HAND],
}

/// One sensor snapshot. Owned by the provider, read-only to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u64,
    /// Microseconds since the provider started
    pub timestamp: u64,
    #[serde(default)]
    pub hands: Vec<Hand>,
}

impl Frame {
    pub fn new(id: u64, timestamp: u64) -> Self {
        Self {
            id,
            timestamp,
            hands: Vec::new(),
        }
    }

    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hands.push(hand);
        self
    }

    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_chains_joints() {
        let joints = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ];
        let finger = Finger::from_joints(FingerType::Index, Vec3::ZERO, joints);

        assert_eq!(finger.bone(BoneType::Metacarpal).prev_joint, Vec3::ZERO);
        assert_eq!(finger.bone(BoneType::Proximal).prev_joint, joints[0]);
        assert_eq!(finger.bone(BoneType::Distal).next_joint, joints[3]);
    }

    #[test]
    fn test_handedness_parse() {
        assert_eq!("Right".parse::<Handedness>().unwrap(), Handedness::Right);
        assert_eq!("left".parse::<Handedness>().unwrap(), Handedness::Left);
        assert!("both".parse::<Handedness>().is_err());
    }
}
