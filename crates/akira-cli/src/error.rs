//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use akira_core::source::LoadError;
use akira_core::{ParseError, UnsupportedDialectError};
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the akira-core library
    #[error("{0}")]
    Core(#[from] akira_core::Error),

    /// Retrieving the specification text failed
    #[error("{0}")]
    Load(#[from] LoadError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Endpoint id not present in the document
    #[error("Endpoint '{}' not found", id)]
    EndpointNotFound { id: String },

    /// An edited specification was rejected; the committed one was kept
    #[error("Edit rejected, previous document kept: {source}")]
    EditRejected {
        #[source]
        source: ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Core(error.into())
    }
}

impl From<UnsupportedDialectError> for Error {
    fn from(error: UnsupportedDialectError) -> Self {
        Self::Core(error.into())
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(akira_core::Error::Dialect(_)) => 6,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Load(_) => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::EndpointNotFound { .. } => 7,
            Self::EditRejected { .. } => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::TomlDe(_) | Self::TomlSer(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgs(_) | Self::Core(akira_core::Error::Dialect(_))
        )
    }

    /// The parse error behind this error, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Core(akira_core::Error::Parse(e)) => Some(e),
            Self::EditRejected { source } => Some(source),
            _ => None,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    use colored::Colorize;

    let mut message = if use_color {
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    };

    if let Some(parse_error) = error.parse_error() {
        let detail = format!("  kind: {}", parse_error.kind());
        message.push('\n');
        message.push_str(&if use_color { detail.dimmed().to_string() } else { detail });

        if let Some(endpoint) = parse_error.endpoint() {
            let detail = format!("  endpoint: {}", endpoint);
            message.push('\n');
            message.push_str(&if use_color { detail.dimmed().to_string() } else { detail });
        }
    }

    message
}
