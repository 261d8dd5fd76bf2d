//! Configuration management for the Mercury core
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_ROWS_PER_PAGE, FINISHED_UPLOAD_RETENTION_SECONDS,
    MAX_RETENTION_SECONDS, MAX_ROWS_PER_PAGE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub uploads: UploadsConfig,
    pub logging: LoggingConfig,
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows shown per page before the user changes it
    pub default_rows_per_page: usize,
}

/// Upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Seconds a finished upload stays listed before it is evicted
    pub finished_retention_seconds: u64,
    /// Maximum size of an upload batch in bytes (unset = no limit)
    pub max_file_size_bytes: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log file path (unset = stderr only)
    pub file: Option<PathBuf>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            finished_retention_seconds: FINISHED_UPLOAD_RETENTION_SECONDS,
            max_file_size_bytes: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("mercury.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("mercury").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.grid.default_rows_per_page == 0 || self.grid.default_rows_per_page > MAX_ROWS_PER_PAGE
        {
            anyhow::bail!(
                "default_rows_per_page must be between 1 and {}, got {}",
                MAX_ROWS_PER_PAGE,
                self.grid.default_rows_per_page
            );
        }

        if self.uploads.finished_retention_seconds > MAX_RETENTION_SECONDS {
            anyhow::bail!(
                "finished_retention_seconds cannot exceed {} (1 hour)",
                MAX_RETENTION_SECONDS
            );
        }

        if self.uploads.max_file_size_bytes == Some(0) {
            anyhow::bail!("max_file_size_bytes must be positive when set");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Mercury Core Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("mercury"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
