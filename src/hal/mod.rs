pub mod mock;
pub mod recorded;
pub mod registry;
pub mod traits;
pub mod types;

pub use recorded::RecordedProvider;
pub use registry::ProviderRegistry;
pub use traits::FrameProvider;
pub use types::ProviderState;
