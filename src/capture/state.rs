use serde::{Deserialize, Serialize};

/// Sampler states. `Paused` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    Active,
    Paused,
}

impl CaptureState {
    pub fn can_transition_to(&self, target: &CaptureState) -> bool {
        matches!((self, target), (CaptureState::Active, CaptureState::Paused))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
        }
    }
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_to_paused_only() {
        assert!(CaptureState::Active.can_transition_to(&CaptureState::Paused));
        assert!(!CaptureState::Paused.can_transition_to(&CaptureState::Active));
        assert!(!CaptureState::Active.can_transition_to(&CaptureState::Active));
        assert!(!CaptureState::Paused.can_transition_to(&CaptureState::Paused));
    }
}
