pub mod clock;
pub mod session;

pub use clock::HostClock;
pub use session::{CaptureSession, StopReason};
