use serde::{Deserialize, Serialize};

/// Provider lifecycle states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderState {
    Unopened,
    Opened,
    Running,
    Stopped,
    Closed,
}

impl ProviderState {
    pub fn can_configure(&self) -> bool {
        *self == ProviderState::Unopened
    }

    pub fn can_start(&self) -> bool {
        matches!(self, ProviderState::Opened | ProviderState::Stopped)
    }

    pub fn is_running(&self) -> bool {
        *self == ProviderState::Running
    }
}

impl Default for ProviderState {
    fn default() -> Self {
        Self::Unopened
    }
}
