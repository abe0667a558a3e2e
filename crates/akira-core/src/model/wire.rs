//! Re-serialization of the document model to its wire format
//!
//! The output re-parses to an equal `Document`; it is also the canonical
//! "raw specification" view shown next to the formatted documentation.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use super::{Document, Operation, Parameter, ParameterLocation, PathItem, Schema, SecurityScheme};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

impl Document {
    /// Convert back to the wire format, preserving declaration order
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();

        if let Some(ref openapi) = self.openapi {
            root.insert("openapi".to_string(), Value::String(openapi.clone()));
        }

        let mut info = Map::new();
        info.insert("title".to_string(), Value::String(self.info.title.clone()));
        info.insert("version".to_string(), Value::String(self.info.version.clone()));
        insert_opt(&mut info, "description", &self.info.description);
        root.insert("info".to_string(), Value::Object(info));

        if !self.servers.is_empty() {
            let servers = self
                .servers
                .iter()
                .map(|server| {
                    let mut obj = Map::new();
                    obj.insert("url".to_string(), Value::String(server.url.clone()));
                    insert_opt(&mut obj, "description", &server.description);
                    Value::Object(obj)
                })
                .collect();
            root.insert("servers".to_string(), Value::Array(servers));
        }

        if !self.security.is_empty() {
            root.insert("security".to_string(), security_value(&self.security));
        }

        let mut paths = Map::new();
        for item in &self.paths {
            paths.insert(item.path.clone(), self.path_item_value(item));
        }
        root.insert("paths".to_string(), Value::Object(paths));

        if !self.components.is_empty() {
            let mut components = Map::new();
            if !self.components.schemas.is_empty() {
                let schemas = self
                    .components
                    .schemas
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_value()))
                    .collect();
                components.insert("schemas".to_string(), Value::Object(schemas));
            }
            if !self.components.security_schemes.is_empty() {
                let schemes = self
                    .components
                    .security_schemes
                    .iter()
                    .map(|(name, scheme)| (name.clone(), scheme.to_value()))
                    .collect();
                components.insert("securitySchemes".to_string(), Value::Object(schemes));
            }
            root.insert("components".to_string(), Value::Object(components));
        }

        Value::Object(root)
    }

    /// Pretty-printed JSON wire format
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_value())
            .map_err(|e| Error::serialization("Failed to serialize document", e))
    }

    fn path_item_value(&self, item: &PathItem) -> Value {
        let operations = item
            .operations
            .iter()
            .map(|op| (op.method.as_str().to_string(), self.operation_value(op)))
            .collect();
        Value::Object(operations)
    }

    fn operation_value(&self, op: &Operation) -> Value {
        let mut obj = Map::new();
        insert_opt(&mut obj, "summary", &op.summary);
        insert_opt(&mut obj, "description", &op.description);

        if !op.parameters.is_empty() {
            let params = op.parameters.iter().map(Parameter::to_value).collect();
            obj.insert("parameters".to_string(), Value::Array(params));
        }

        if let Some(ref body) = op.request_body {
            let mut media = Map::new();
            media.insert("schema".to_string(), body.schema.to_value());
            let mut content = Map::new();
            content.insert(body.content_type.clone(), Value::Object(media));

            let mut body_obj = Map::new();
            insert_opt(&mut body_obj, "description", &body.description);
            if body.required {
                body_obj.insert("required".to_string(), Value::Bool(true));
            }
            body_obj.insert("content".to_string(), Value::Object(content));
            obj.insert("requestBody".to_string(), Value::Object(body_obj));
        }

        // An empty list only needs to be written when it overrides a document default
        if !op.security.is_empty() || !self.security.is_empty() {
            obj.insert("security".to_string(), security_value(&op.security));
        }

        if !op.responses.is_empty() {
            let responses = op
                .responses
                .iter()
                .map(|response| {
                    let mut r = Map::new();
                    insert_opt(&mut r, "description", &response.description);
                    (response.status.clone(), Value::Object(r))
                })
                .collect();
            obj.insert("responses".to_string(), Value::Object(responses));
        }

        Value::Object(obj)
    }
}

impl Parameter {
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert("in".to_string(), Value::String(self.location.as_str().to_string()));
        // Path parameters default to required, so an explicit `false` must survive
        if self.required || self.location == ParameterLocation::Path {
            obj.insert("required".to_string(), Value::Bool(self.required));
        }
        insert_opt(&mut obj, "description", &self.description);
        obj.insert("schema".to_string(), self.schema.to_value());
        Value::Object(obj)
    }
}

impl Schema {
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(ref pointer) = self.reference {
            obj.insert("$ref".to_string(), Value::String(pointer.clone()));
        }
        insert_opt(&mut obj, "type", &self.schema_type);
        insert_opt(&mut obj, "format", &self.format);
        insert_opt(&mut obj, "description", &self.description);
        if !self.properties.is_empty() {
            let props = self
                .properties
                .iter()
                .map(|(name, schema)| (name.clone(), schema.to_value()))
                .collect();
            obj.insert("properties".to_string(), Value::Object(props));
        }
        if !self.required.is_empty() {
            let required = self.required.iter().cloned().map(Value::String).collect();
            obj.insert("required".to_string(), Value::Array(required));
        }
        if let Some(ref items) = self.items {
            obj.insert("items".to_string(), items.to_value());
        }
        if let Some(ref values) = self.enum_values {
            obj.insert("enum".to_string(), Value::Array(values.clone()));
        }
        if let Some(ref default) = self.default {
            obj.insert("default".to_string(), default.clone());
        }
        Value::Object(obj)
    }
}

impl SecurityScheme {
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String(self.scheme_type.clone()));
        insert_opt(&mut obj, "in", &self.location);
        insert_opt(&mut obj, "name", &self.name);
        insert_opt(&mut obj, "description", &self.description);
        Value::Object(obj)
    }
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::String(v.clone()));
    }
}

/// Security requirements are written one scheme per requirement object
fn security_value(names: &[String]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| {
                let mut requirement = Map::new();
                requirement.insert(name.clone(), Value::Array(Vec::new()));
                Value::Object(requirement)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use crate::model::{HttpMethod, Info, ParameterLocation, RequestBody, Server};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_document_value() {
        let doc = Document {
            info: Info {
                title: "Planets".to_string(),
                version: "1.0".to_string(),
                description: None,
            },
            servers: vec![Server::new("http://api.example.com/v1")],
            paths: vec![PathItem {
                path: "/planets".to_string(),
                operations: vec![Operation::new(HttpMethod::Get, "/planets")],
            }],
            ..Document::default()
        };

        assert_eq!(
            doc.to_value(),
            json!({
                "info": {"title": "Planets", "version": "1.0"},
                "servers": [{"url": "http://api.example.com/v1"}],
                "paths": {"/planets": {"get": {}}}
            })
        );
    }

    #[test]
    fn test_request_body_keeps_declared_reference() {
        let mut op = Operation::new(HttpMethod::Post, "/planets");
        op.request_body = Some(RequestBody {
            content_type: "application/json".to_string(),
            required: true,
            description: None,
            schema: Schema::reference("#/components/schemas/Planet"),
            resolved: Schema::of_type("object"),
        });
        op.parameters.push(Parameter::new("dry_run", ParameterLocation::Query));

        let doc = Document {
            paths: vec![PathItem {
                path: "/planets".to_string(),
                operations: vec![op],
            }],
            ..Document::default()
        };

        let value = doc.to_value();
        let post = &value["paths"]["/planets"]["post"];
        assert_eq!(
            post["requestBody"]["content"]["application/json"]["schema"],
            json!({"$ref": "#/components/schemas/Planet"})
        );
        assert_eq!(post["requestBody"]["required"], json!(true));
        assert_eq!(post["parameters"][0]["in"], json!("query"));
        assert!(post.get("security").is_none());
    }

    #[test]
    fn test_explicit_empty_security_overrides_document_default() {
        let doc = Document {
            security: vec!["ApiKeyAuth".to_string()],
            paths: vec![PathItem {
                path: "/health".to_string(),
                operations: vec![Operation::new(HttpMethod::Get, "/health")],
            }],
            ..Document::default()
        };

        let value = doc.to_value();
        assert_eq!(value["security"], json!([{"ApiKeyAuth": []}]));
        assert_eq!(value["paths"]["/health"]["get"]["security"], json!([]));
    }
}
