//! Configuration
//!
//! Centralized configuration with config-file loading, environment variable
//! overrides, runtime defaults, and validation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub claude_home: PathBuf,
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "pretty".to_string(),
                output: "console".to_string(),
            },
            paths: PathsConfig {
                claude_home: dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".claude"),
                log_directory: PathBuf::from("logs"),
            },
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and defaults.
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let config_paths = [
            PathBuf::from("claude-stats.toml"),
            PathBuf::from(".claude-stats.toml"),
            dirs::config_dir()
                .map(|d| d.join("claude-stats").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                info!(config_file = %path.display(), "Loading configuration from file");
                config = Self::load_from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        if let Ok(val) = env::var("CLAUDE_STATS_HOME") {
            self.paths.claude_home = PathBuf::from(val);
        }
        if let Ok(val) = env::var("CLAUDE_STATS_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.output.as_str() {
            "console" | "file" | "both" => {}
            other => {
                return Err(anyhow::anyhow!(
                    "Log output must be console, file, or both, got {}",
                    other
                ));
            }
        }

        // The file appender needs its directory up front
        if self.logging.output != "console" && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory)
                .context("Failed to create log directory")?;
        }

        Ok(())
    }
}

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| Config::load().expect("Failed to load configuration"))
}
