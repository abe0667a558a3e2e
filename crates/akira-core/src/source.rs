//! Retrieval seam for raw specification text
//!
//! The engine never performs I/O itself. Callers hand it text obtained
//! through a `SpecLoader`, which the surrounding application implements for
//! whatever locators it understands.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where raw specification text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// A file on disk; `-` conventionally means standard input
    File(PathBuf),
    /// Text supplied inline
    Literal(String),
    /// A repository identifier whose documentation was generated elsewhere
    Repository(String),
}

impl Locator {
    /// Interpret a command-line argument as a locator
    ///
    /// `repo:<id>` names a repository; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        match arg.strip_prefix("repo:") {
            Some(id) => Locator::Repository(id.to_string()),
            None => Locator::File(PathBuf::from(arg)),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Locator::File(path) if path.as_os_str() == "-")
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::File(path) if path.as_os_str() == "-" => f.write_str("<stdin>"),
            Locator::File(path) => write!(f, "{}", path.display()),
            Locator::Literal(_) => f.write_str("<literal>"),
            Locator::Repository(id) => write!(f, "repo:{}", id),
        }
    }
}

/// Retrieval failures
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Locator '{locator}' is not supported by this loader")]
    Unsupported { locator: String },

    #[error("Specification at {locator} is empty")]
    Empty { locator: String },
}

impl LoadError {
    pub fn io(locator: &Locator, source: std::io::Error) -> Self {
        Self::Io {
            locator: locator.to_string(),
            source,
        }
    }

    pub fn unsupported(locator: &Locator) -> Self {
        Self::Unsupported {
            locator: locator.to_string(),
        }
    }

    pub fn empty(locator: &Locator) -> Self {
        Self::Empty {
            locator: locator.to_string(),
        }
    }
}

/// Supplies raw specification text for a locator
pub trait SpecLoader {
    fn load_spec(&self, locator: &Locator) -> Result<String, LoadError>;
}

/// Loader that only understands `Locator::Literal`
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralLoader;

impl SpecLoader for LiteralLoader {
    fn load_spec(&self, locator: &Locator) -> Result<String, LoadError> {
        match locator {
            Locator::Literal(text) if text.trim().is_empty() => Err(LoadError::empty(locator)),
            Locator::Literal(text) => Ok(text.clone()),
            other => Err(LoadError::unsupported(other)),
        }
    }
}
