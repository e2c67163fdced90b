//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use touchtoe_core::Layout;
use tracing::{debug, info, instrument};

/// Configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pause between poll-loop iterations, in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// File receiving the trace log while the terminal UI is active.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Screen geometry of the emulated panel.
    #[serde(default)]
    layout: Layout,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_log_file() -> PathBuf {
    PathBuf::from("touchtoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            log_file: default_log_file(),
            layout: Layout::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file and validates the layout.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .layout
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid layout: {}", e)))?;

        info!(tick_ms = config.tick_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use touchtoe_core::Rect;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
tick_ms = 40

[layout]
cell_gap = 8
"#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.tick_ms(), 40);
        assert_eq!(config.layout().cell_gap, 8);
        assert_eq!(config.layout().cell_size, Layout::default().cell_size);
        assert_eq!(*config.log_file(), default_log_file());
    }

    #[test]
    fn test_overlapping_layout_rejected() {
        let file = write_config(
            r#"
[layout]
back_button = { x = 10, y = 10, dx = 100, dy = 100 }
"#,
        );
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Invalid layout"), "{}", err);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("tick_ms = \"soon\"");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_default_config_survives_toml() {
        let config = AppConfig::default().with_log_file(PathBuf::from("game.log"));
        let text = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.layout().replay_button, Rect::new(160, 10, 70, 70));
    }
}
