//! Schema subset understood by the engine
//!
//! Only what documentation and code samples read is kept: type, description,
//! ordered properties, required names, array items, enum values, default and
//! the reference pointer. Composition keywords are not modelled.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// A (possibly referencing) schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    /// Object properties in declaration order
    pub properties: Vec<(String, Schema)>,
    pub required: Vec<String>,
    pub items: Option<Box<Schema>>,
    pub enum_values: Option<Vec<Value>>,
    pub default: Option<Value>,
    /// `$ref` pointer; a schema carrying one is a forward reference
    pub reference: Option<String>,
}

impl Schema {
    /// A schema that only holds a reference
    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Self::default()
        }
    }

    /// A schema with just a type
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Last segment of the reference pointer, i.e. the referenced schema name
    pub fn referenced_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .and_then(|pointer| pointer.rsplit('/').next())
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(prop_name, _)| prop_name == name)
            .map(|(_, schema)| schema)
    }

    /// Property names in declaration order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Short type label for display, e.g. `string`, `array<Planet>`, `Planet`
    pub fn display_type(&self) -> String {
        if let Some(name) = self.referenced_name() {
            return name.to_string();
        }

        match self.schema_type.as_deref() {
            Some("array") => match &self.items {
                Some(items) => format!("array<{}>", items.display_type()),
                None => "array".to_string(),
            },
            Some(t) => match &self.format {
                Some(format) => format!("{} ({})", t, format),
                None => t.to_string(),
            },
            None if !self.properties.is_empty() => "object".to_string(),
            None => "any".to_string(),
        }
    }
}

/// Render a literal value for display or URLs: strings unquoted, everything else as JSON
pub fn display_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
