/// Host time scale. Freezing it is how a component pauses the host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostClock {
    time_scale: f32,
    ticks: u64,
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            ticks: 0,
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn freeze(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }

    pub fn reset(&mut self) {
        self.time_scale = 1.0;
        self.ticks = 0;
    }

    /// Host ticks elapsed, frozen or not
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn advance(&mut self) {
        self.ticks += 1;
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}
