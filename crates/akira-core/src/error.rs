//! Error types for the AkiraDocs engine
//!
//! Parsing and resolution return their errors to the caller; `EditSync` is the
//! only component that decides what a failure means for the authoritative
//! document.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors raised while turning raw specification text into a `Document`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The raw text is not well-formed JSON/YAML. The decoder message is kept verbatim.
    #[error("Syntax error: {message}")]
    Syntax { message: String },

    /// A required field is absent
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// A field is present but has the wrong shape
    #[error("Invalid field '{path}': {reason}")]
    InvalidField { path: String, reason: String },

    /// A request body references a schema that cannot be resolved
    #[error("Unresolved reference in endpoint '{endpoint}': {source}")]
    UnresolvedReference {
        endpoint: String,
        #[source]
        source: SchemaResolutionError,
    },

    /// Two operations collapse onto the same endpoint identifier
    #[error("Duplicate operation '{endpoint}'")]
    DuplicateOperation { endpoint: String },
}

impl ParseError {
    /// Create a syntax error from a decoder message
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Endpoint identifier this error is attached to, if any
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::UnresolvedReference { endpoint, .. } => Some(endpoint),
            Self::DuplicateOperation { endpoint } => Some(endpoint),
            _ => None,
        }
    }

    /// Short machine-readable kind, used by the CLI's structured output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "syntax",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidField { .. } => "invalid_field",
            Self::UnresolvedReference { .. } => "unresolved_reference",
            Self::DuplicateOperation { .. } => "duplicate_operation",
        }
    }
}

/// Errors raised by `SchemaResolver`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaResolutionError {
    /// The pointer's final segment is not a key of `components.schemas`
    #[error("Schema '{name}' referenced by '{pointer}' not found in components.schemas")]
    NotFound { pointer: String, name: String },

    /// The pointer leaves the current document
    #[error("Reference '{pointer}' points outside the current document")]
    External { pointer: String },

    /// The pointer designates something other than a component schema
    #[error("Reference '{pointer}' does not designate a component schema")]
    Unsupported { pointer: String },

    /// A chain of alias references loops or is too deep
    #[error("Circular reference detected: {chain}")]
    Cycle { chain: String },
}

impl SchemaResolutionError {
    /// Create a cycle error from the chain of visited pointers
    pub fn cycle(chain: &[String]) -> Self {
        Self::Cycle {
            chain: chain.join(" -> "),
        }
    }

    /// The pointer this error is about (the last one for cycles)
    pub fn pointer(&self) -> Option<&str> {
        match self {
            Self::NotFound { pointer, .. }
            | Self::External { pointer }
            | Self::Unsupported { pointer } => Some(pointer),
            Self::Cycle { .. } => None,
        }
    }
}

/// Raised when a code sample is requested for a dialect outside the supported set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported code sample dialect '{dialect}' (expected one of: fetch, python, curl)")]
pub struct UnsupportedDialectError {
    pub dialect: String,
}

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum Error {
    /// Specification parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reference resolution failed outside of parsing
    #[error(transparent)]
    Resolution(#[from] SchemaResolutionError),

    /// Unknown code sample dialect
    #[error(transparent)]
    Dialect(#[from] UnsupportedDialectError),

    /// Serializing the document back to its wire format failed
    #[error("Serialization failed: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wrap a serialization failure
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}
