use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/termfolio/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("termfolio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The progress tick interval is non-zero and the step is in `1..=100`
    /// - Every typewriter delay is non-zero
    /// - At least one typewriter phrase is configured
    /// - The profile has a name
    /// - Every skill level is at most 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loading.tick_ms == 0 {
            return Err(validation("loading.tick_ms must be greater than 0"));
        }

        if self.loading.step == 0 || self.loading.step > 100 {
            return Err(validation(format!(
                "loading.step must be between 1 and 100, got {}",
                self.loading.step
            )));
        }

        let typewriter_delays = [
            ("typewriter.type_ms", self.typewriter.type_ms),
            ("typewriter.delete_ms", self.typewriter.delete_ms),
            ("typewriter.hold_ms", self.typewriter.hold_ms),
        ];
        if let Some((name, _)) = typewriter_delays.iter().find(|(_, ms)| *ms == 0) {
            return Err(validation(format!("{name} must be greater than 0")));
        }

        if self.typewriter.phrases.is_empty() {
            return Err(validation("At least one typewriter phrase must be configured"));
        }

        if self.profile.name.trim().is_empty() {
            return Err(validation("profile.name must not be empty"));
        }

        for category in &self.profile.skills {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                return Err(validation(format!(
                    "Skill '{}' in '{}' has level {} (max 100)",
                    skill.name, category.title, skill.level
                )));
            }
        }

        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
