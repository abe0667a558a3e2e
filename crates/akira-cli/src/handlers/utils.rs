//! Shared utilities for command handlers

use crate::cli::SpecInput;
use crate::error::{Error, Result};
use akira_core::{Document, Locator, LoadError, SpecLoader, SpecParser};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loader for files on disk and standard input
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SpecLoader for FsLoader {
    fn load_spec(&self, locator: &Locator) -> std::result::Result<String, LoadError> {
        let text = match locator {
            Locator::File(_) if locator.is_stdin() => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| LoadError::io(locator, e))?;
                text
            }
            Locator::File(path) => {
                std::fs::read_to_string(path).map_err(|e| LoadError::io(locator, e))?
            }
            Locator::Literal(text) => text.clone(),
            Locator::Repository(_) => return Err(LoadError::unsupported(locator)),
        };

        if text.trim().is_empty() {
            return Err(LoadError::empty(locator));
        }
        Ok(text)
    }
}

/// Read the raw text behind a locator off the async runtime
pub async fn load_text(locator: Locator) -> Result<String> {
    if let Locator::File(path) = &locator {
        if !locator.is_stdin() && !path.exists() {
            return Err(Error::FileNotFound { path: path.clone() });
        }
    }

    debug!(locator = %locator, "Loading specification");
    tokio::task::spawn_blocking(move || FsLoader.load_spec(&locator))
        .await
        .map_err(|e| Error::other(format!("Loader task failed: {}", e)))?
        .map_err(Error::from)
}

/// Parser honoring `--input-format`
pub fn parser_for(input: &SpecInput) -> SpecParser {
    match input.input_format {
        Some(format) => SpecParser::with_format(format.into()),
        None => SpecParser::new(),
    }
}

/// Load and parse a specification
pub async fn open_document(input: &SpecInput) -> Result<(String, Document)> {
    let raw_text = load_text(input.locator()).await?;
    let document = parser_for(input).parse(&raw_text)?;
    Ok((raw_text, document))
}

/// Write rendered content to a file, creating parent directories
pub fn save_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
