pub mod buffer;
pub mod config;
pub mod export;
pub mod sampler;
pub mod state;

pub use buffer::SampleBuffer;
pub use config::{default_data_dir, CaptureConfig, DEFAULT_FILE_NAME};
pub use sampler::{hand_points, Sampler, POINTS_PER_HAND};
pub use state::CaptureState;
