//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Environment variables (`AKIRA_CONFIG`, `AKIRA_LOG_*`)
//! - Command-line arguments

use crate::error::{Error, Result};
use akira_core::{CodeSampleGenerator, Dialect, RenderOptions, SampleConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = ".akira.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Code sample settings
    pub samples: SamplesConfig,

    /// Rendered documentation settings
    pub render: RenderConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log format (compact, full, json)
    pub format: String,

    /// Log file path
    pub file: Option<PathBuf>,

    /// Include thread IDs
    pub thread_ids: bool,
}

/// Code sample configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Placeholder credential and fallback server
    #[serde(flatten)]
    pub placeholders: SampleConfig,

    /// Dialects generated when none are requested
    pub dialects: Vec<Dialect>,
}

/// Rendered documentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Include the endpoint index
    pub include_toc: bool,

    /// Include code samples under each endpoint
    pub include_samples: bool,

    /// Append the raw specification
    pub include_raw: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
            file: None,
            thread_ids: false,
        }
    }
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            placeholders: SampleConfig::default(),
            dialects: Dialect::ALL.to_vec(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_samples: false,
            include_raw: false,
        }
    }
}

/// Serialization format of a configuration file, by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::of(path) {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Path of the user-level configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("akira").join("config.toml"))
    }

    /// Get default configuration file paths to check, most specific first
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(PROJECT_CONFIG_FILE),
            PathBuf::from(".akira.yaml"),
            PathBuf::from(".akira.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let akira_dir = config_dir.join("akira");
            paths.push(akira_dir.join("config.toml"));
            paths.push(akira_dir.join("config.yaml"));
            paths.push(akira_dir.join("config.json"));
        }

        paths
    }

    /// Serialize in the format implied by a file extension
    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        Ok(match FileFormat::of(path) {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_for(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Code sample generator honoring the configured placeholders
    pub fn sample_generator(&self) -> CodeSampleGenerator {
        CodeSampleGenerator::new(self.samples.placeholders.clone())
    }

    /// Renderer options from the render and samples sections
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_toc: self.render.include_toc,
            include_samples: self.render.include_samples,
            dialects: self.samples.dialects.clone(),
            include_raw: self.render.include_raw,
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.samples.dialects.is_empty() {
            return Err(Error::config("samples.dialects must name at least one dialect"));
        }
        if self.samples.placeholders.credential_header.trim().is_empty() {
            return Err(Error::config("samples.credential_header must not be empty"));
        }
        if self.logging.format.parse::<crate::logging::LogFormat>().is_err() {
            return Err(Error::config(format!(
                "logging.format '{}' is not one of compact, full, json",
                self.logging.format
            )));
        }
        Ok(())
    }
}
