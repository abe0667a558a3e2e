//! Markdown templates for rendered documentation
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use crate::codegen::Dialect;
use crate::model::{display_literal, Operation, Parameter, RequestBody, Response, SecurityScheme};

/// Template for generating markdown documentation
pub struct Template;

impl Template {
    /// Document header
    pub fn header(title: &str, description: Option<&str>) -> String {
        let mut result = format!("# {} Documentation\n\n", title);

        if let Some(desc) = description.filter(|d| !d.is_empty()) {
            result.push_str(&format!("{}\n\n", desc));
        }

        result.push_str("---\n\n");
        result
    }

    /// Endpoint table of contents, linking to endpoint anchors
    pub fn table_of_contents(operations: &[&Operation]) -> String {
        let mut result = String::from("## Endpoints\n\n");

        for op in operations {
            result.push_str(&format!("- [{} {}](#{})\n", op.method, op.path, op.id()));
        }

        result.push('\n');
        result
    }

    /// Heading, method line, description and auth note of one endpoint
    pub fn endpoint_heading(op: &Operation) -> String {
        let mut result = format!("<a id=\"{}\"></a>\n\n### {}\n\n", op.id(), op.title());
        result.push_str(&format!("`{} {}`\n\n", op.method, op.path));

        if let Some(desc) = op.description.as_deref().filter(|d| !d.is_empty()) {
            result.push_str(&format!("{}\n\n", desc));
        }

        if op.requires_auth() {
            result.push_str("**Note:** Requires authentication\n\n");
        }

        result
    }

    /// Parameter list
    pub fn parameters(params: &[Parameter]) -> String {
        if params.is_empty() {
            return String::new();
        }

        let mut result = String::from("#### Parameters\n\n");
        for param in params {
            result.push_str(&Self::parameter(param));
            result.push('\n');
        }
        result.push('\n');
        result
    }

    /// One parameter line
    pub fn parameter(param: &Parameter) -> String {
        let mut line = format!(
            "- **{}** ({}, {})",
            param.name,
            param.location,
            if param.required { "required" } else { "optional" }
        );

        if let Some(desc) = param.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!(": {}", desc));
        }

        if let Some(values) = &param.schema.enum_values {
            let values: Vec<String> = values.iter().map(display_literal).collect();
            line.push_str(&format!(" ({})", values.join(", ")));
        }

        if let Some(default) = &param.schema.default {
            line.push_str(&format!(" (default: {})", display_literal(default)));
        }

        line
    }

    /// Request body summary with its field list
    pub fn request_body(body: &RequestBody) -> String {
        let mut result = String::from("#### Request Body\n\n");

        if let Some(desc) = body.description.as_deref().filter(|d| !d.is_empty()) {
            result.push_str(&format!("{}\n\n", desc));
        }

        let schema = &body.resolved;
        if schema.properties.is_empty() {
            result.push_str(&format!(
                "`{}` value of type `{}`\n\n",
                body.content_type,
                schema.display_type()
            ));
            return result;
        }

        let names: Vec<&str> = schema.property_names().collect();
        result.push_str(&format!("JSON object containing: {}\n\n", names.join(", ")));

        for (name, property) in &schema.properties {
            result.push_str(&format!("- `{}`: `{}`", name, property.display_type()));
            if schema.is_required(name) {
                result.push_str(" **[Required]**");
            }
            if let Some(desc) = property.description.as_deref().filter(|d| !d.is_empty()) {
                result.push_str(&format!(" {}", desc));
            }
            result.push('\n');
        }
        result.push('\n');
        result
    }

    /// Response list
    pub fn responses(responses: &[Response]) -> String {
        if responses.is_empty() {
            return String::new();
        }

        let mut result = String::from("#### Responses\n\n");
        for response in responses {
            match response.description.as_deref().filter(|d| !d.is_empty()) {
                Some(desc) => result.push_str(&format!("- `{}`: {}\n", response.status, desc)),
                None => result.push_str(&format!("- `{}`\n", response.status)),
            }
        }
        result.push('\n');
        result
    }

    /// Fenced code sample
    pub fn code_sample(dialect: Dialect, code: &str) -> String {
        format!(
            "**{}**\n\n```{}\n{}\n```\n\n",
            dialect.display_name(),
            dialect.fence_language(),
            code
        )
    }

    /// Authentication section from the declared security schemes
    pub fn authentication(schemes: &[(String, SecurityScheme)]) -> String {
        let mut result = String::from("## Authentication\n\n");

        for (_, scheme) in schemes {
            result.push_str(&format!(
                "Some endpoints require authentication using {}.\n",
                scheme.scheme_type
            ));
            if let (Some(name), Some(location)) = (&scheme.name, &scheme.location) {
                result.push_str(&format!(
                    "Include the {} in the **{}** {} of your requests.\n",
                    scheme.scheme_type, name, location
                ));
            }
            if let Some(desc) = scheme.description.as_deref().filter(|d| !d.is_empty()) {
                result.push_str(&format!("{}\n", desc));
            }
            result.push('\n');
        }

        result
    }

    /// Raw specification block
    pub fn raw(json: &str) -> String {
        format!("## Raw Specification\n\n```json\n{}\n```\n\n", json)
    }

    pub fn footer() -> String {
        "---\n\n*Generated by AkiraDocs*\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HttpMethod, ParameterLocation, Schema};
    use serde_json::json;

    #[test]
    fn test_header_generation() {
        let header = Template::header("Planets", Some("Planetary data"));
        assert!(header.starts_with("# Planets Documentation\n\n"));
        assert!(header.contains("Planetary data"));

        let bare = Template::header("Planets", Some(""));
        assert_eq!(bare, "# Planets Documentation\n\n---\n\n");
    }

    #[test]
    fn test_parameter_line() {
        let mut param = Parameter::new("sort", ParameterLocation::Query).with_default(json!("name"));
        param.description = Some("Sort order".to_string());
        param.schema.enum_values = Some(vec![json!("name"), json!("mass")]);

        assert_eq!(
            Template::parameter(&param),
            "- **sort** (query, optional): Sort order (name, mass) (default: name)"
        );

        let id = Parameter::new("id", ParameterLocation::Path);
        assert_eq!(Template::parameter(&id), "- **id** (path, required)");
    }

    #[test]
    fn test_request_body_fields() {
        let mut schema = Schema::of_type("object");
        schema.properties = vec![
            ("name".to_string(), Schema::of_type("string")),
            ("moons".to_string(), Schema::of_type("integer")),
        ];
        schema.required = vec!["name".to_string()];
        let body = RequestBody {
            content_type: "application/json".to_string(),
            required: true,
            description: None,
            schema: Schema::reference("#/components/schemas/Planet"),
            resolved: schema,
        };

        let doc = Template::request_body(&body);
        assert!(doc.contains("JSON object containing: name, moons"));
        assert!(doc.contains("- `name`: `string` **[Required]**"));
        assert!(doc.contains("- `moons`: `integer`\n"));
    }

    #[test]
    fn test_endpoint_heading_auth_note() {
        let mut op = Operation::new(HttpMethod::Post, "/planets");
        assert!(!Template::endpoint_heading(&op).contains("Requires authentication"));

        op.security = vec!["ApiKeyAuth".to_string()];
        let heading = Template::endpoint_heading(&op);
        assert!(heading.contains("<a id=\"post-/planets\"></a>"));
        assert!(heading.contains("### POST /planets"));
        assert!(heading.contains("**Note:** Requires authentication"));
    }

    #[test]
    fn test_authentication_section() {
        let scheme = SecurityScheme {
            scheme_type: "apiKey".to_string(),
            location: Some("header".to_string()),
            name: Some("X-API-Key".to_string()),
            description: None,
        };
        let doc = Template::authentication(&[("ApiKeyAuth".to_string(), scheme)]);
        assert!(doc.contains("Include the apiKey in the **X-API-Key** header of your requests."));
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        assert!(Template::parameters(&[]).is_empty());
        assert!(Template::responses(&[]).is_empty());
    }
}
