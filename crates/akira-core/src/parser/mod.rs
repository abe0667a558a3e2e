//! Specification parsing
//!
//! `SpecParser` is the single place that performs defensive shape checks on
//! the raw specification. It decodes the text, validates the top-level shape,
//! resolves request-body references and normalizes every optional sequence,
//! returning either a complete `Document` or the reason it could not build one.
//!
//! # Example Usage
//!
//! ```rust
//! use akira_core::parser::SpecParser;
//!
//! let raw = r#"{
//!   "info": {"title": "Planets", "version": "1.0"},
//!   "paths": {"/planets": {"get": {"summary": "List planets"}}}
//! }"#;
//!
//! let document = SpecParser::new().parse(raw)?;
//! assert_eq!(document.endpoint_count(), 1);
//! # Ok::<(), akira_core::ParseError>(())
//! ```
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

mod fields;
pub mod format;
mod operations;
mod schema;

pub use format::Format;

use crate::error::{ParseError, ParseResult};
use crate::model::{Components, Document, Info, Server};
use fields::ObjectReader;
use operations::{parse_paths, OperationContext};
use schema::{parse_schema, parse_security_requirements, parse_security_scheme};
use serde_json::Value;
use tracing::debug;

/// Parser from raw specification text to `Document`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecParser {
    /// Forced input format; detected from the content when `None`
    format: Option<Format>,
}

impl SpecParser {
    /// Create a parser that detects JSON or YAML from the content
    pub fn new() -> Self {
        Self { format: None }
    }

    /// Create a parser for a fixed input format
    pub fn with_format(format: Format) -> Self {
        Self {
            format: Some(format),
        }
    }

    /// Parse raw specification text
    pub fn parse(&self, raw_text: &str) -> ParseResult<Document> {
        let format = self.format.unwrap_or_else(|| Format::detect(raw_text));
        debug!(format = format.name(), bytes = raw_text.len(), "Decoding specification");

        let value = format::decode(raw_text, format)?;
        self.parse_value(&value)
    }

    /// Build a document from an already decoded value
    pub fn parse_value(&self, value: &Value) -> ParseResult<Document> {
        let root = ObjectReader::new(value, "")?;

        let info_value = root.get("info").ok_or_else(|| ParseError::missing_field("info"))?;
        let paths_value = root.get("paths").ok_or_else(|| ParseError::missing_field("paths"))?;

        let info = parse_info(&ObjectReader::new(info_value, "info")?)?;
        let servers = parse_servers(&root)?;
        let security = match root.opt_array("security")? {
            Some(items) => parse_security_requirements(items, "security")?,
            None => Vec::new(),
        };
        let components = match root.get("components") {
            Some(components) => parse_components(&ObjectReader::new(components, "components")?)?,
            None => Components::default(),
        };

        let paths = parse_paths(
            &ObjectReader::new(paths_value, "paths")?,
            &OperationContext {
                components: &components,
                default_security: &security,
            },
        )?;

        let document = Document {
            openapi: root.opt_str("openapi")?,
            info,
            servers,
            paths,
            components,
            security,
        };

        debug!(
            title = %document.info.title,
            endpoints = document.endpoint_count(),
            schemas = document.components.schemas.len(),
            "Parsed specification"
        );

        Ok(document)
    }
}

/// Parse raw specification text, detecting its format
pub fn parse(raw_text: &str) -> ParseResult<Document> {
    SpecParser::new().parse(raw_text)
}

fn parse_info(info: &ObjectReader<'_>) -> ParseResult<Info> {
    Ok(Info {
        title: info.required_str("title")?,
        version: info.required_str("version")?,
        description: info.opt_str("description")?,
    })
}

fn parse_servers(root: &ObjectReader<'_>) -> ParseResult<Vec<Server>> {
    let Some(servers) = root.opt_array("servers")? else {
        return Ok(Vec::new());
    };

    servers
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let path = format!("servers[{}]", index);
            let server = ObjectReader::new(value, &path)?;
            Ok(Server {
                url: server.required_str("url")?,
                description: server.opt_str("description")?,
            })
        })
        .collect()
}

fn parse_components(components: &ObjectReader<'_>) -> ParseResult<Components> {
    let mut parsed = Components::default();

    if let Some(schemas) = components.get("schemas") {
        let schemas_path = components.child_path("schemas");
        let schemas = ObjectReader::new(schemas, &schemas_path)?;
        for (name, value) in schemas.entries() {
            let schema = parse_schema(value, &schemas.child_path(name))?;
            parsed.schemas.push((name.clone(), schema));
        }
    }

    if let Some(schemes) = components.get("securitySchemes") {
        let schemes_path = components.child_path("securitySchemes");
        let schemes = ObjectReader::new(schemes, &schemes_path)?;
        for (name, value) in schemes.entries() {
            let scheme = parse_security_scheme(value, &schemes.child_path(name))?;
            parsed.security_schemes.push((name.clone(), scheme));
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaResolutionError;
    use crate::model::{HttpMethod, ParameterLocation};
    use serde_json::json;

    const PLANETS_YAML: &str = r#"
openapi: 3.0.0
info:
  title: Planets API
  version: "1.0"
servers:
  - url: http://api.example.com/v1
paths:
  /planets:
    get:
      summary: List planets
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
            default: 10
    post:
      summary: Create a planet
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Planet'
      security:
        - ApiKeyAuth: []
components:
  schemas:
    Planet:
      type: object
      properties:
        name:
          type: string
        climate:
          type: string
  securitySchemes:
    ApiKeyAuth:
      type: apiKey
      in: header
      name: X-API-Key
"#;

    #[test]
    fn test_parse_yaml_document() {
        let doc = parse(PLANETS_YAML).unwrap();

        assert_eq!(doc.openapi.as_deref(), Some("3.0.0"));
        assert_eq!(doc.info.title, "Planets API");
        assert_eq!(doc.servers[0].url, "http://api.example.com/v1");
        assert_eq!(doc.endpoint_count(), 2);

        let get = doc.find_operation(HttpMethod::Get, "/planets").unwrap();
        assert_eq!(get.parameters[0].location, ParameterLocation::Query);
        assert_eq!(get.parameters[0].schema.default, Some(json!(10)));
        assert!(get.request_body.is_none());
        assert!(get.security.is_empty());

        let post = doc.find_operation(HttpMethod::Post, "/planets").unwrap();
        let body = post.request_body_schema().unwrap();
        assert_eq!(body.property_names().collect::<Vec<_>>(), vec!["name", "climate"]);
        assert_eq!(post.security, vec!["ApiKeyAuth"]);
        assert!(post.parameters.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            parse(r#"{"paths": {}}"#),
            Err(ParseError::missing_field("info"))
        );
        assert_eq!(
            parse(r#"{"info": {"title": "T", "version": "1"}}"#),
            Err(ParseError::missing_field("paths"))
        );
        assert_eq!(
            parse(r#"{"info": {"version": "1"}, "paths": {}}"#),
            Err(ParseError::missing_field("info.title"))
        );
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let doc = parse(r#"{"info": {"title": "T", "version": "1"}, "paths": {}}"#).unwrap();
        assert!(doc.servers.is_empty());
        assert!(doc.components.is_empty());
        assert!(doc.security.is_empty());
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            parse("- just\n- a list\n"),
            Err(ParseError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_unresolved_request_body_names_endpoint() {
        let raw = r##"{
            "info": {"title": "T", "version": "1"},
            "paths": {"/planets": {"post": {"requestBody": {"content": {"application/json": {
                "schema": {"$ref": "#/components/schemas/Moon"}
            }}}}}},
            "components": {"schemas": {"Planet": {"type": "object"}}}
        }"##;

        assert_eq!(
            parse(raw),
            Err(ParseError::UnresolvedReference {
                endpoint: "post-/planets".to_string(),
                source: SchemaResolutionError::NotFound {
                    pointer: "#/components/schemas/Moon".to_string(),
                    name: "Moon".to_string(),
                },
            })
        );
    }

    #[test]
    fn test_forced_format() {
        let raw = r#"{"info": {"title": "T", "version": "1"}, "paths": {}}"#;
        assert!(SpecParser::with_format(Format::Json).parse(raw).is_ok());
        // JSON is a YAML subset, so a YAML parser accepts it too
        assert!(SpecParser::with_format(Format::Yaml).parse(raw).is_ok());
        assert!(matches!(
            SpecParser::with_format(Format::Json).parse("info: {}"),
            Err(ParseError::Syntax { .. })
        ));
    }
}
