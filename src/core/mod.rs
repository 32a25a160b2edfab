pub mod component;
pub mod frame;
pub mod point;

pub use component::HostComponent;
pub use frame::{
    Bone, BoneType, Finger, FingerType, Frame, Hand, Handedness, BONES_PER_FINGER,
    FINGERS_PER_HAND,
};
pub use point::Vec3;
