//! Configuration management

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the mock workloads run by the demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How long each mock database call blocks
    pub workload_delay_ms: u64,
    /// Value handed back by the value-returning mock call
    pub result_value: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            workload_delay_ms: 1_000,
            result_value: 10,
        }
    }
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DemoConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`DemoConfig::load_from_file`], but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load_from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    #[inline]
    pub fn workload_delay(&self) -> Duration {
        Duration::from_millis(self.workload_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("timing-practice-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.workload_delay(), Duration::from_secs(1));
        assert_eq!(config.result_value, 10);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = DemoConfig {
            workload_delay_ms: 25,
            result_value: -3,
        };

        config.save_to_file(&path).unwrap();
        let loaded = DemoConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: DemoConfig = toml::from_str("workload_delay_ms = 5").unwrap();
        assert_eq!(config.workload_delay_ms, 5);
        assert_eq!(config.result_value, 10);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("missing");
        std::fs::remove_file(&path).ok();

        assert!(matches!(DemoConfig::load_from_file(&path), Err(ConfigError::Io(_))));
        assert_eq!(DemoConfig::load_or_default(&path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_path("invalid");
        std::fs::write(&path, "workload_delay_ms = \"soon\"").unwrap();

        let result = DemoConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_file(&path).ok();
    }
}
