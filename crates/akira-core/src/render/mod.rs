//! Markdown documentation for a document
//!
//! Renders the formatted view: a header, an endpoint index, one section per
//! endpoint in navigation order (anchored by endpoint id), optional code
//! samples, the authentication schemes and optionally the raw specification.
//! Absent optional fields render as nothing.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

pub mod templates;

use crate::codegen::{CodeSampleGenerator, Dialect};
use crate::error::Result;
use crate::model::Document;
use serde::{Deserialize, Serialize};
use templates::Template;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Include the endpoint index
    pub include_toc: bool,
    /// Include code samples under each endpoint
    pub include_samples: bool,
    /// Dialects rendered when samples are included
    pub dialects: Vec<Dialect>,
    /// Append the canonical JSON of the document
    pub include_raw: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_samples: false,
            dialects: Dialect::ALL.to_vec(),
            include_raw: false,
        }
    }
}

/// Markdown documentation renderer
#[derive(Debug, Clone, Default)]
pub struct DocRenderer {
    options: RenderOptions,
    generator: CodeSampleGenerator,
}

impl DocRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            generator: CodeSampleGenerator::default(),
        }
    }

    /// Use a custom sample generator for embedded samples
    pub fn with_generator(mut self, generator: CodeSampleGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the whole document
    pub fn render(&self, document: &Document) -> Result<String> {
        let mut doc = Template::header(&document.info.title, document.info.description.as_deref());

        let operations: Vec<_> = document.operations().collect();
        if self.options.include_toc && !operations.is_empty() {
            doc.push_str(&Template::table_of_contents(&operations));
        }

        for op in &operations {
            doc.push_str(&Template::endpoint_heading(op));
            doc.push_str(&Template::parameters(&op.parameters));
            if let Some(body) = &op.request_body {
                doc.push_str(&Template::request_body(body));
            }
            doc.push_str(&Template::responses(&op.responses));

            if self.options.include_samples {
                let id = op.id();
                for dialect in &self.options.dialects {
                    if let Some(code) = self.generator.generate_for(document, &id, *dialect) {
                        doc.push_str(&Template::code_sample(*dialect, &code));
                    }
                }
            }
        }

        if !document.components.security_schemes.is_empty() {
            doc.push_str(&Template::authentication(&document.components.security_schemes));
        }

        if self.options.include_raw {
            doc.push_str(&Template::raw(&document.to_json_pretty()?));
        }

        doc.push_str(&Template::footer());
        Ok(doc)
    }
}

/// Render a document with the given options
pub fn render_markdown(document: &Document, options: &RenderOptions) -> Result<String> {
    DocRenderer::with_options(options.clone()).render(document)
}
