//! Configuration management for the LanShelf daemon.
//!
//! This module provides TOML-based configuration file loading with
//! environment-variable overrides. The default configuration path is
//! `~/.config/lanshelf/config.toml`; a missing file yields the defaults.

use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("log_level must be one of: trace, debug, info, warn, error; got {0}")]
    InvalidLogLevel(String),

    #[error("browse root does not exist or is not a directory: {0}")]
    InvalidBrowseRoot(String),

    #[error("device_name must not be empty")]
    EmptyDeviceName,
}

/// Valid log level values for tracing configuration.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for the LanShelf daemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// General daemon configuration.
    pub daemon: DaemonConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Browsing configuration.
    pub browse: BrowseConfig,
}

/// General daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DaemonConfig {
    /// Logging level (trace, debug, info, warn, error).
    pub log_level: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind: IpAddr,

    /// TCP port for the listener. Port 0 requests an ephemeral port.
    pub port: u16,

    /// Device name reported by the status endpoint.
    pub device_name: String,
}

/// Browsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowseConfig {
    /// Default directory for listings that supply no path. Also reported
    /// by the status endpoint as the current path.
    pub root: PathBuf,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            device_name: "LanShelf File Server".to_string(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            root: default_browse_root(),
        }
    }
}

/// Returns the default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lanshelf")
        .join("config.toml")
}

/// Returns the default browse root: the user's home directory.
fn default_browse_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

impl Config {
    /// Apply environment variable overrides to the configuration.
    ///
    /// Environment variables take precedence over config file values.
    /// Supported variables:
    /// - LANSHELF_PORT: Override the listener port
    /// - LANSHELF_BIND: Override the bind address
    /// - LANSHELF_LOG_LEVEL: Override log level (trace, debug, info, warn, error)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("LANSHELF_PORT") {
            match port.parse::<u16>() {
                Ok(port) => {
                    tracing::info!("Overriding port from environment: {}", port);
                    self.server.port = port;
                }
                Err(_) => {
                    tracing::warn!("Ignoring invalid LANSHELF_PORT value: {}", port);
                }
            }
        }

        if let Ok(bind) = std::env::var("LANSHELF_BIND") {
            match bind.parse::<IpAddr>() {
                Ok(addr) => {
                    tracing::info!("Overriding bind address from environment: {}", addr);
                    self.server.bind = addr;
                }
                Err(_) => {
                    tracing::warn!("Ignoring invalid LANSHELF_BIND value: {}", bind);
                }
            }
        }

        if let Ok(level) = std::env::var("LANSHELF_LOG_LEVEL") {
            if !level.is_empty() {
                tracing::info!("Overriding log_level from environment: {}", level);
                self.daemon.log_level = level;
            }
        }
    }

    /// Filter directive for tracing initialization.
    ///
    /// Derived from the configured log level; `verbose` forces debug and
    /// takes precedence.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.daemon.log_level.clone()
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.daemon.log_level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.daemon.log_level.clone()));
        }

        if !self.browse.root.is_dir() {
            return Err(ConfigError::InvalidBrowseRoot(
                self.browse.root.display().to_string(),
            ));
        }

        if self.server.device_name.trim().is_empty() {
            return Err(ConfigError::EmptyDeviceName);
        }

        Ok(())
    }

    /// Load configuration from a file.
    ///
    /// If the file does not exist, returns the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self> {
        Self::load(default_config_path())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| anyhow::anyhow!("Invalid TOML configuration: {e}"))
    }
}
