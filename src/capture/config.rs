use crate::core::Handedness;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "GestureData.csv";
const APP_DIR_NAME: &str = "handcapture";

/// Capture parameters. Every field has a default so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Rows are emitted when the tick counter is a multiple of this
    pub stride: u64,
    /// Tick count at which sampling pauses for good
    pub capture_limit: u64,
    pub handedness: Handedness,
    pub file_name: String,
    /// Overrides the platform data directory
    pub output_dir: Option<PathBuf>,
    pub tick_interval_ms: u64,
    pub quit_when_paused: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            stride: 10,
            capture_limit: 1000,
            handedness: Handedness::Right,
            file_name: DEFAULT_FILE_NAME.to_string(),
            output_dir: None,
            tick_interval_ms: 16,
            quit_when_paused: false,
        }
    }
}

impl CaptureConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: CaptureConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            bail!("stride must be at least 1");
        }
        if self.file_name.is_empty() {
            bail!("file_name must not be empty");
        }
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir(),
        };
        dir.join(&self.file_name)
    }
}

/// `<platform data dir>/handcapture`, or the working directory if the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CaptureConfig::default();
        assert_eq!(config.stride, 10);
        assert_eq!(config.capture_limit, 1000);
        assert_eq!(config.handedness, Handedness::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CaptureConfig::from_json(r#"{"stride": 5, "handedness": "left"}"#).unwrap();
        assert_eq!(config.stride, 5);
        assert_eq!(config.handedness, Handedness::Left);
        assert_eq!(config.capture_limit, 1000);
        assert_eq!(config.file_name, "GestureData.csv");
    }

    #[test]
    fn test_rejects_zero_stride() {
        assert!(CaptureConfig::from_json(r#"{"stride": 0}"#).is_err());
    }

    #[test]
    fn test_output_dir_override() {
        let config = CaptureConfig {
            output_dir: Some(PathBuf::from("/tmp/capture")),
            ..Default::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("/tmp/capture/GestureData.csv"));
    }
}
