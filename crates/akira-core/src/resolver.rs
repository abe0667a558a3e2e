//! Local `$ref` resolution against `components.schemas`
//!
//! `resolve` performs exactly one indirection. `resolve_chain` follows a chain
//! of alias schemas (a component that is itself only a `$ref`) and detects
//! cycles with a resolution stack, the same way nested file references are
//! tracked during loading.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use crate::error::SchemaResolutionError;
use crate::model::{Components, Document, Schema};

/// Prefix every supported pointer starts with
pub const COMPONENT_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// Tracks the pointers visited while following a reference chain
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    /// Stack for circular reference detection
    pub resolution_stack: Vec<String>,
    /// Maximum chain length before giving up
    pub max_depth: usize,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self {
            resolution_stack: Vec::new(),
            max_depth: 10,
        }
    }

    /// Push a pointer onto the stack, failing on revisits or excessive depth
    pub fn push_pointer(&mut self, pointer: &str) -> Result<(), SchemaResolutionError> {
        if self.resolution_stack.iter().any(|p| p == pointer)
            || self.resolution_stack.len() >= self.max_depth
        {
            let mut chain = self.resolution_stack.clone();
            chain.push(pointer.to_string());
            return Err(SchemaResolutionError::cycle(&chain));
        }

        self.resolution_stack.push(pointer.to_string());
        Ok(())
    }

    pub fn pop_pointer(&mut self) -> Option<String> {
        self.resolution_stack.pop()
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless resolver for document-local schema references
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaResolver;

impl SchemaResolver {
    /// Resolve `pointer` to the schema it designates (one indirection)
    pub fn resolve(document: &Document, pointer: &str) -> Result<Schema, SchemaResolutionError> {
        Self::resolve_in(&document.components, pointer).cloned()
    }

    /// Follow `schema`'s reference chain until a concrete schema is reached
    ///
    /// A schema without a reference is returned as is. Nested property
    /// references are left alone; callers resolve them lazily.
    pub fn resolve_chain(
        document: &Document,
        schema: &Schema,
    ) -> Result<Schema, SchemaResolutionError> {
        Self::resolve_chain_in(&document.components, schema, &mut ResolutionContext::new())
    }

    /// Same as `resolve_chain`, against components that are not yet part of a document
    pub(crate) fn resolve_chain_in(
        components: &Components,
        schema: &Schema,
        context: &mut ResolutionContext,
    ) -> Result<Schema, SchemaResolutionError> {
        let mut current = schema;
        while let Some(ref pointer) = current.reference {
            context.push_pointer(pointer)?;
            current = Self::resolve_in(components, pointer)?;
        }
        Ok(current.clone())
    }

    pub(crate) fn resolve_in<'a>(
        components: &'a Components,
        pointer: &str,
    ) -> Result<&'a Schema, SchemaResolutionError> {
        let name = Self::schema_name(pointer)?;
        components
            .schema(&name)
            .ok_or_else(|| SchemaResolutionError::NotFound {
                pointer: pointer.to_string(),
                name,
            })
    }

    /// Extract and decode the schema name from a `#/components/schemas/<Name>` pointer
    pub fn schema_name(pointer: &str) -> Result<String, SchemaResolutionError> {
        if !pointer.starts_with('#') {
            return Err(SchemaResolutionError::External {
                pointer: pointer.to_string(),
            });
        }

        match pointer.strip_prefix(COMPONENT_SCHEMAS_PREFIX) {
            Some(name) if !name.is_empty() && !name.contains('/') => Ok(decode_segment(name)),
            _ => Err(SchemaResolutionError::Unsupported {
                pointer: pointer.to_string(),
            }),
        }
    }
}

/// Decode JSON pointer escapes
fn decode_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
