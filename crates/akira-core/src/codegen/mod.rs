//! Example client code generation
//!
//! Turns one endpoint into ready-to-paste client code for a closed set of
//! dialects. Generation is a pure function of its arguments: the same
//! endpoint, server and configuration always produce byte-identical text.
//!
//! ```
//! use akira_core::codegen::{CodeSampleGenerator, Dialect};
//! use akira_core::model::{HttpMethod, Server};
//!
//! let generator = CodeSampleGenerator::default();
//! let server = Server::new("http://api.example.com/v1");
//! let sample = generator.generate(Dialect::Curl, &server, HttpMethod::Get, "/planets", &[], None);
//! assert_eq!(sample, "curl -X GET 'http://api.example.com/v1/planets'");
//! ```
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

mod curl;
mod fetch;
mod python;

use crate::error::UnsupportedDialectError;
use crate::model::{display_literal, Document, HttpMethod, Parameter, ParameterLocation, Schema, Server};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder server used when a document declares none
pub const FALLBACK_SERVER: &str = "http://api.example.com/v1";

/// Token substituted for query parameters without a default
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Supported output dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// JavaScript `fetch`
    Fetch,
    /// Python `requests`
    Python,
    /// Command-line `curl`
    Curl,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Fetch, Dialect::Python, Dialect::Curl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Fetch => "fetch",
            Dialect::Python => "python",
            Dialect::Curl => "curl",
        }
    }

    /// Human-facing tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            Dialect::Fetch => "JavaScript",
            Dialect::Python => "Python",
            Dialect::Curl => "cURL",
        }
    }

    /// Info string for fenced code blocks
    pub fn fence_language(&self) -> &'static str {
        match self {
            Dialect::Fetch => "javascript",
            Dialect::Python => "python",
            Dialect::Curl => "bash",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = UnsupportedDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fetch" | "javascript" | "js" => Ok(Dialect::Fetch),
            "python" | "py" => Ok(Dialect::Python),
            "curl" | "shell" => Ok(Dialect::Curl),
            _ => Err(UnsupportedDialectError {
                dialect: s.to_string(),
            }),
        }
    }
}

/// Placeholders written into generated samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Header carrying the placeholder credential
    pub credential_header: String,
    /// Placeholder credential value
    pub credential: String,
    /// Server used when the document declares none
    pub fallback_server: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            credential_header: "X-API-Key".to_string(),
            credential: "YOUR_API_KEY".to_string(),
            fallback_server: FALLBACK_SERVER.to_string(),
        }
    }
}

/// Everything a dialect needs to print one request
#[derive(Debug)]
pub(crate) struct SampleRequest<'a> {
    pub method: HttpMethod,
    /// Server URL, path and query string joined
    pub url: String,
    /// `Some` iff the endpoint has a request body; one comment line per field
    pub body_fields: Option<Vec<String>>,
    pub config: &'a SampleConfig,
}

impl SampleRequest<'_> {
    pub fn has_body(&self) -> bool {
        self.body_fields.is_some()
    }

    pub fn body_fields(&self) -> &[String] {
        self.body_fields.as_deref().unwrap_or(&[])
    }
}

/// Generates client code samples for endpoints
#[derive(Debug, Clone, Default)]
pub struct CodeSampleGenerator {
    config: SampleConfig,
}

impl CodeSampleGenerator {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Generate a sample for one request shape
    pub fn generate(
        &self,
        dialect: Dialect,
        server: &Server,
        method: HttpMethod,
        path: &str,
        parameters: &[Parameter],
        request_body_schema: Option<&Schema>,
    ) -> String {
        let request = SampleRequest {
            method,
            url: request_url(&server.url, path, parameters),
            body_fields: request_body_schema.map(body_field_comments),
            config: &self.config,
        };

        match dialect {
            Dialect::Fetch => fetch::render(&request),
            Dialect::Python => python::render(&request),
            Dialect::Curl => curl::render(&request),
        }
    }

    /// Generate a sample for an endpoint of a document
    ///
    /// Uses the document's first server, or the configured fallback. Unknown
    /// endpoint ids yield `None`.
    pub fn generate_for(&self, document: &Document, endpoint_id: &str, dialect: Dialect) -> Option<String> {
        let operation = document.operation(endpoint_id)?;
        let fallback;
        let server = match document.primary_server() {
            Some(server) => server,
            None => {
                fallback = Server::new(self.config.fallback_server.as_str());
                &fallback
            }
        };

        Some(self.generate(
            dialect,
            server,
            operation.method,
            &operation.path,
            &operation.parameters,
            operation.request_body_schema(),
        ))
    }
}

/// `server ++ path`, verbatim, plus the query string if any
pub fn request_url(server_url: &str, path: &str, parameters: &[Parameter]) -> String {
    let mut url = format!("{server_url}{path}");
    if let Some(query) = query_string(parameters) {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// `a=1&b={value}` over the query parameters, in declaration order
pub fn query_string(parameters: &[Parameter]) -> Option<String> {
    let pairs: Vec<String> = parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| {
            let value = p
                .schema
                .default
                .as_ref()
                .map(display_literal)
                .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string());
            format!("{}={}", p.name, value)
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("&"))
    }
}

/// `name: type` lines describing a body schema, never sample values
fn body_field_comments(schema: &Schema) -> Vec<String> {
    schema
        .properties
        .iter()
        .map(|(name, property)| {
            let mut line = format!("{}: {}", name, property.display_type());
            if schema.is_required(name) {
                line.push_str(" (required)");
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn limit() -> Parameter {
        Parameter::new("limit", ParameterLocation::Query).with_default(json!(10))
    }

    fn planet_schema() -> Schema {
        let mut schema = Schema::of_type("object");
        schema.properties = vec![
            ("name".to_string(), Schema::of_type("string")),
            ("moons".to_string(), Schema::of_type("integer")),
        ];
        schema.required = vec!["name".to_string()];
        schema
    }

    #[test]
    fn test_dialect_aliases() {
        assert_eq!("js".parse::<Dialect>().unwrap(), Dialect::Fetch);
        assert_eq!("JavaScript".parse::<Dialect>().unwrap(), Dialect::Fetch);
        assert_eq!("py".parse::<Dialect>().unwrap(), Dialect::Python);
        assert_eq!("shell".parse::<Dialect>().unwrap(), Dialect::Curl);

        let err = "ruby".parse::<Dialect>().unwrap_err();
        assert_eq!(err.dialect, "ruby");
    }

    #[test]
    fn test_query_string() {
        let params = vec![
            Parameter::new("id", ParameterLocation::Path),
            limit(),
            Parameter::new("q", ParameterLocation::Query),
            Parameter::new("X-Trace", ParameterLocation::Header),
        ];
        assert_eq!(query_string(&params).as_deref(), Some("limit=10&q={value}"));
        assert_eq!(query_string(&params[..1]), None);
    }

    #[test]
    fn test_falsy_defaults_are_literals() {
        let params = vec![
            Parameter::new("offset", ParameterLocation::Query).with_default(json!(0)),
            Parameter::new("archived", ParameterLocation::Query).with_default(json!(false)),
            Parameter::new("sort", ParameterLocation::Query).with_default(json!("")),
        ];
        assert_eq!(query_string(&params).as_deref(), Some("offset=0&archived=false&sort="));
    }

    #[test]
    fn test_url_joined_verbatim() {
        assert_eq!(
            request_url("http://api.example.com/v1/", "/planets", &[]),
            "http://api.example.com/v1//planets"
        );
    }

    #[test]
    fn test_query_in_every_dialect() {
        let generator = CodeSampleGenerator::default();
        let server = Server::new(FALLBACK_SERVER);
        for dialect in Dialect::ALL {
            let sample = generator.generate(dialect, &server, HttpMethod::Get, "/planets", &[limit()], None);
            assert!(
                sample.contains("http://api.example.com/v1/planets?limit=10"),
                "{dialect}: {sample}"
            );
        }
    }

    #[test]
    fn test_auth_only_with_body() {
        let generator = CodeSampleGenerator::default();
        let server = Server::new(FALLBACK_SERVER);
        let schema = planet_schema();
        for dialect in Dialect::ALL {
            let without = generator.generate(dialect, &server, HttpMethod::Delete, "/planets/{id}", &[], None);
            assert!(!without.contains("X-API-Key"), "{dialect}");

            let with = generator.generate(dialect, &server, HttpMethod::Post, "/planets", &[], Some(&schema));
            assert!(with.contains("X-API-Key"), "{dialect}");
            assert!(with.contains("YOUR_API_KEY"), "{dialect}");
            assert!(with.contains("name: string (required)"), "{dialect}");
            assert!(with.contains("moons: integer"), "{dialect}");
        }
    }

    #[test]
    fn test_custom_credential() {
        let generator = CodeSampleGenerator::new(SampleConfig {
            credential_header: "Authorization".to_string(),
            credential: "Bearer TOKEN".to_string(),
            ..SampleConfig::default()
        });
        let server = Server::new(FALLBACK_SERVER);
        let sample = generator.generate(
            Dialect::Curl,
            &server,
            HttpMethod::Put,
            "/planets/1",
            &[],
            Some(&Schema::of_type("object")),
        );
        assert!(sample.contains("-H 'Authorization: Bearer TOKEN'"));
    }

    #[test]
    fn test_generate_for_falls_back_to_placeholder_server() {
        let doc = crate::parser::parse(
            r#"{"info": {"title": "T", "version": "1"}, "paths": {"/planets": {"get": {}}}}"#,
        )
        .unwrap();
        let generator = CodeSampleGenerator::default();

        assert_eq!(
            generator.generate_for(&doc, "get-/planets", Dialect::Curl).as_deref(),
            Some("curl -X GET 'http://api.example.com/v1/planets'")
        );
        assert_eq!(generator.generate_for(&doc, "get-/moons", Dialect::Curl), None);
    }
}
