//! AkiraDocs core - API specification to documentation engine
//!
//! This crate turns a declarative API specification (OpenAPI-shaped JSON or
//! YAML) into a navigable, validated document model and derives the views a
//! documentation reader needs:
//! - **SpecParser**: decodes raw text into a normalized `Document`
//! - **SchemaResolver**: follows `#/components/schemas/...` references
//! - **NavigationIndex**: stable, ordered endpoint entries
//! - **CodeSampleGenerator**: example client code per dialect
//! - **EditSync**: the edit-and-revalidate loop owning the committed document
//! - **DocRenderer**: formatted markdown documentation
//!
//! ## Quick Start
//!
//! ```rust
//! use akira_core::{CodeSampleGenerator, Dialect, NavigationIndex, SpecParser};
//!
//! let raw = r#"{
//!   "info": {"title": "Planets", "version": "1.0"},
//!   "paths": {"/planets": {"get": {}, "post": {}}}
//! }"#;
//!
//! let document = SpecParser::new().parse(raw)?;
//! let index = NavigationIndex::build(&document);
//! assert_eq!(index.ids(), vec!["get-/planets", "post-/planets"]);
//!
//! let sample = CodeSampleGenerator::default()
//!     .generate_for(&document, "get-/planets", Dialect::Curl);
//! assert_eq!(sample.as_deref(), Some("curl -X GET 'http://api.example.com/v1/planets'"));
//! # Ok::<(), akira_core::ParseError>(())
//! ```
//!
//! The engine is synchronous and performs no I/O; raw text is supplied
//! through the `SpecLoader` seam.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

pub mod cache;
pub mod codegen;
pub mod edit;
pub mod error;
pub mod model;
pub mod navigation;
pub mod parser;
pub mod render;
pub mod resolver;
pub mod source;

// Re-export commonly used types for convenience
pub use cache::{CacheConfig, SampleCache};
pub use codegen::{CodeSampleGenerator, Dialect, SampleConfig};
pub use edit::{EditState, EditSync};
pub use error::{Error, ParseError, ParseResult, Result, SchemaResolutionError, UnsupportedDialectError};
pub use model::{Document, HttpMethod, Operation, Parameter, ParameterLocation, Schema, Server};
pub use navigation::{NavigationEntry, NavigationIndex};
pub use parser::{parse, Format, SpecParser};
pub use render::{render_markdown, DocRenderer, RenderOptions};
pub use resolver::SchemaResolver;
pub use source::{LoadError, Locator, SpecLoader};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
