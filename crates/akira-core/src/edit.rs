//! Edit-and-revalidate loop
//!
//! `EditSync` owns the single authoritative `Document`. Edits are composed as
//! raw text and only replace the document when the whole text parses; a
//! failed commit leaves the previous document, its navigation index and its
//! cached samples exactly as they were.
//!
//! Readers get `Arc<Document>` snapshots, so a snapshot taken before a commit
//! keeps showing the old document in full.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use crate::cache::{CacheConfig, SampleCache, SampleKey};
use crate::codegen::{CodeSampleGenerator, Dialect};
use crate::error::{ParseError, ParseResult, Result};
use crate::model::Document;
use crate::navigation::NavigationIndex;
use crate::parser::SpecParser;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Editing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// The committed document is authoritative and no edit is in progress
    Committed,
    /// Raw text is being composed; the committed document is unchanged
    Editing { draft: String },
}

/// Owner of the authoritative document and its derived views
#[derive(Debug)]
pub struct EditSync {
    parser: SpecParser,
    generator: CodeSampleGenerator,
    document: Arc<Document>,
    raw_text: String,
    state: EditState,
    revision: u64,
    last_error: Option<ParseError>,
    navigation: Option<NavigationIndex>,
    samples: SampleCache,
}

impl EditSync {
    /// Parse the initial text with a detecting parser
    pub fn new(raw_text: impl Into<String>) -> ParseResult<Self> {
        Self::with_parser(SpecParser::new(), raw_text)
    }

    /// Parse the initial text with the given parser
    pub fn with_parser(parser: SpecParser, raw_text: impl Into<String>) -> ParseResult<Self> {
        let raw_text = raw_text.into();
        let document = parser.parse(&raw_text)?;
        debug!(endpoints = document.endpoint_count(), "Opened document");

        Ok(Self {
            parser,
            generator: CodeSampleGenerator::default(),
            document: Arc::new(document),
            raw_text,
            state: EditState::Committed,
            revision: 0,
            last_error: None,
            navigation: None,
            samples: SampleCache::new(),
        })
    }

    /// Use a custom sample generator
    pub fn with_generator(mut self, generator: CodeSampleGenerator) -> Self {
        self.generator = generator;
        self.samples.clear();
        self
    }

    /// Use a custom sample cache configuration
    pub fn with_cache_config(mut self, config: CacheConfig) -> Self {
        self.samples = SampleCache::with_config(config);
        self
    }

    /// Committed → Editing, seeding the draft with the committed text
    ///
    /// Has no effect while already editing.
    pub fn begin_edit(&mut self) {
        if self.is_editing() {
            return;
        }
        debug!(revision = self.revision, "Beginning edit");
        self.state = EditState::Editing {
            draft: self.raw_text.clone(),
        };
    }

    /// Replace the in-progress text, beginning an edit if needed
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state = EditState::Editing { draft: text.into() };
    }

    /// Parse `raw_text` and, if it is valid, make it authoritative
    ///
    /// Always ends in `Committed`. On failure the error is returned as
    /// produced by the parser and the previous document stays in place.
    pub fn commit_edit(&mut self, raw_text: impl Into<String>) -> ParseResult<Arc<Document>> {
        let raw_text = raw_text.into();
        if !self.is_editing() {
            debug!("Commit without begin_edit; treating as a superseding edit");
        }
        self.state = EditState::Committed;

        match self.parser.parse(&raw_text) {
            Ok(document) => {
                self.document = Arc::new(document);
                self.raw_text = raw_text;
                self.revision += 1;
                self.last_error = None;
                self.navigation = None;
                self.samples.clear();

                info!(
                    revision = self.revision,
                    endpoints = self.document.endpoint_count(),
                    "Committed edit"
                );
                Ok(Arc::clone(&self.document))
            }
            Err(e) => {
                warn!(
                    revision = self.revision,
                    kind = e.kind(),
                    error = %e,
                    "Rejected edit; keeping committed document"
                );
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Commit the current draft, or the committed text when not editing
    pub fn commit_draft(&mut self) -> ParseResult<Arc<Document>> {
        let text = match &self.state {
            EditState::Editing { draft } => draft.clone(),
            EditState::Committed => self.raw_text.clone(),
        };
        self.commit_edit(text)
    }

    /// Editing → Committed, discarding the draft
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            debug!(revision = self.revision, "Cancelled edit");
        }
        self.state = EditState::Committed;
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// The in-progress text, if editing
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft } => Some(draft),
            EditState::Committed => None,
        }
    }

    /// Snapshot of the committed document
    pub fn document(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    /// The committed text exactly as supplied
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The committed document re-serialized as pretty JSON
    pub fn canonical_text(&self) -> Result<String> {
        self.document.to_json_pretty()
    }

    /// Number of successful commits since opening
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Error of the most recent rejected commit, cleared by a successful one
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Navigation index of the committed document, built on first use
    pub fn navigation(&mut self) -> &NavigationIndex {
        let document = &self.document;
        self.navigation
            .get_or_insert_with(|| NavigationIndex::build(document))
    }

    /// Code sample for an endpoint of the committed document
    ///
    /// Unknown endpoint ids yield `None`.
    pub fn code_sample(&mut self, endpoint_id: &str, dialect: Dialect) -> Option<Arc<str>> {
        let document = &self.document;
        document.operation(endpoint_id)?;

        let generator = &self.generator;
        let sample = self
            .samples
            .get_or_insert_with(SampleKey::new(endpoint_id, dialect), || {
                generator
                    .generate_for(document, endpoint_id, dialect)
                    .unwrap_or_default()
            });
        Some(sample)
    }

    pub fn cached_samples(&self) -> usize {
        self.samples.len()
    }
}
