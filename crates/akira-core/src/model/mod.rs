//! Document model produced by `SpecParser`
//!
//! Every optional part of the wire format is modelled explicitly: absent
//! sequences are empty, absent scalars are `None`. Nothing downstream of the
//! parser needs to guard against missing shape.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

pub mod schema;
pub mod wire;

pub use schema::{display_literal, Schema};

use std::fmt;
use std::str::FromStr;

/// Content type whose schema is preferred for request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A parsed, normalized and cross-referenced API specification
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Value of the top-level `openapi` field, if any
    pub openapi: Option<String>,
    pub info: Info,
    pub servers: Vec<Server>,
    /// Paths in declaration order
    pub paths: Vec<PathItem>,
    pub components: Components,
    /// Document-level default security scheme names
    pub security: Vec<String>,
}

/// API metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

/// A server base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }
}

/// One entry of `paths`: a path template and its operations in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub path: String,
    pub operations: Vec<Operation>,
}

/// Reusable definitions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Components {
    /// Named schemas in declaration order
    pub schemas: Vec<(String, Schema)>,
    /// Named security schemes in declaration order
    pub security_schemes: Vec<(String, SecurityScheme)>,
}

impl Components {
    /// Look up a schema by name
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|(schema_name, _)| schema_name == name)
            .map(|(_, schema)| schema)
    }

    /// Look up a security scheme by name
    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.security_schemes
            .iter()
            .find(|(scheme_name, _)| scheme_name == name)
            .map(|(_, scheme)| scheme)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.security_schemes.is_empty()
    }
}

/// HTTP methods that may key an operation inside a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lower-case wire name, as used in endpoint identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Upper-case name, as used on the wire by HTTP clients
    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Match a path-item key case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown HTTP method '{}'", s))
    }
}

/// Build the externally visible endpoint identifier `<method>-<path>`
///
/// This format is linked to from outside (deep links, scroll anchors), so it
/// must not change.
pub fn endpoint_id(method: HttpMethod, path: &str) -> String {
    format!("{}-{}", method.as_str(), path)
}

/// One `(method, path)` endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Path-level parameters merged with the operation's own, in declaration order
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// Security scheme names; inherited from the document when not declared
    pub security: Vec<String>,
    pub responses: Vec<Response>,
}

impl Operation {
    /// Create an operation with every optional part empty
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            security: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// Endpoint identifier of this operation
    pub fn id(&self) -> String {
        endpoint_id(self.method, &self.path)
    }

    /// Concrete (resolved) request body schema
    pub fn request_body_schema(&self) -> Option<&Schema> {
        self.request_body.as_ref().map(|body| &body.resolved)
    }

    /// Parameters sent in the query string, in declaration order
    pub fn query_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
    }

    pub fn requires_auth(&self) -> bool {
        !self.security.is_empty()
    }

    /// Summary if present, otherwise `METHOD path`
    pub fn title(&self) -> String {
        match &self.summary {
            Some(summary) if !summary.is_empty() => summary.clone(),
            _ => format!("{} {}", self.method, self.path),
        }
    }
}

/// Request body of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub content_type: String,
    pub required: bool,
    pub description: Option<String>,
    /// The schema exactly as declared (possibly a `$ref`)
    pub schema: Schema,
    /// The declared schema with its reference chain followed
    pub resolved: Schema,
}

/// A documented response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: String,
    pub description: Option<String>,
}

/// Where a parameter is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(ParameterLocation::Path),
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "cookie" => Ok(ParameterLocation::Cookie),
            other => Err(format!(
                "expected one of path, query, header, cookie but found '{}'",
                other
            )),
        }
    }
}

/// An operation parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<String>,
    pub schema: Schema,
}

impl Parameter {
    /// Create a parameter with an empty schema; path parameters start out required
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            required: location == ParameterLocation::Path,
            description: None,
            schema: Schema::default(),
        }
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.schema.default = Some(default);
        self
    }
}

/// A named authentication mechanism from `components.securitySchemes`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityScheme {
    /// `apiKey`, `http`, `oauth2`, ...
    pub scheme_type: String,
    /// `header`, `query` or `cookie` for API keys
    pub location: Option<String>,
    /// Header or query parameter carrying the credential
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Document {
    /// All operations in paths order, then method order within each path
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.paths.iter().flat_map(|item| item.operations.iter())
    }

    /// Find an operation by endpoint identifier
    pub fn operation(&self, id: &str) -> Option<&Operation> {
        self.operations().find(|op| op.id() == id)
    }

    /// Find an operation by method and path
    pub fn find_operation(&self, method: HttpMethod, path: &str) -> Option<&Operation> {
        self.paths
            .iter()
            .filter(|item| item.path == path)
            .flat_map(|item| item.operations.iter())
            .find(|op| op.method == method)
    }

    pub fn endpoint_count(&self) -> usize {
        self.paths.iter().map(|item| item.operations.len()).sum()
    }

    /// First declared server, if any
    pub fn primary_server(&self) -> Option<&Server> {
        self.servers.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_id_lowercases_method() {
        assert_eq!(endpoint_id(HttpMethod::Get, "/planets/{id}"), "get-/planets/{id}");
        assert_eq!(Operation::new(HttpMethod::Delete, "/x").id(), "delete-/x");
    }

    #[test]
    fn test_method_keys_are_case_insensitive() {
        assert_eq!(HttpMethod::from_key("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_key("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::from_key("parameters"), None);
        assert!("summary".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_parameter_location_parsing() {
        assert_eq!("query".parse::<ParameterLocation>(), Ok(ParameterLocation::Query));
        assert!("body".parse::<ParameterLocation>().is_err());
    }

    #[test]
    fn test_operation_title_falls_back_to_method_and_path() {
        let mut op = Operation::new(HttpMethod::Post, "/planets");
        assert_eq!(op.title(), "POST /planets");
        op.summary = Some("Create a planet".to_string());
        assert_eq!(op.title(), "Create a planet");
    }

    #[test]
    fn test_document_lookup() {
        let doc = Document {
            paths: vec![PathItem {
                path: "/planets".to_string(),
                operations: vec![
                    Operation::new(HttpMethod::Get, "/planets"),
                    Operation::new(HttpMethod::Post, "/planets"),
                ],
            }],
            ..Document::default()
        };

        assert_eq!(doc.endpoint_count(), 2);
        assert!(doc.operation("post-/planets").is_some());
        assert!(doc.operation("put-/planets").is_none());
        assert!(doc.find_operation(HttpMethod::Get, "/planets").is_some());
        assert!(doc.primary_server().is_none());
    }

    #[test]
    fn test_new_parameter_required_only_in_path() {
        assert!(Parameter::new("planetId", ParameterLocation::Path).required);
        assert!(!Parameter::new("limit", ParameterLocation::Query).required);
        assert!(!Parameter::new("X-Trace", ParameterLocation::Header).required);
    }
}
