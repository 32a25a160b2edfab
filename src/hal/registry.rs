use super::mock::SimulatedHandProvider;
use super::recorded::RecordedProvider;
use super::FrameProvider;
use anyhow::{anyhow, Result};
use std::collections::HashMap;

type ProviderFactory = Box<dyn Fn() -> Box<dyn FrameProvider> + Send + Sync>;

/// Registry of available frame providers, keyed by name
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry with the built-in `simulated` and `recorded` providers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("simulated", || Box::new(SimulatedHandProvider::new()));
        registry.register("recorded", || Box::new(RecordedProvider::new()));
        registry
    }

    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn FrameProvider> + Send + Sync + 'static,
    {
        self.providers.insert(name.to_string(), Box::new(factory));
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn FrameProvider>> {
        self.providers
            .get(name)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown frame provider: {} (available: {})",
                    name,
                    self.list().join(", ")
                )
            })
            .map(|factory| factory())
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
