//! Paths, operations, parameters and request bodies

use super::fields::{expected, ObjectReader};
use super::schema::{parse_schema, parse_security_requirements};
use crate::error::{ParseError, ParseResult, SchemaResolutionError};
use crate::model::{
    endpoint_id, Components, HttpMethod, Operation, Parameter, ParameterLocation, PathItem,
    RequestBody, Response, Schema, JSON_CONTENT_TYPE,
};
use crate::resolver::{ResolutionContext, SchemaResolver};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, warn};

static PATH_TEMPLATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Path-item keys that are not operations and are understood or safely ignored
const PATH_ITEM_FIELDS: &[&str] = &["parameters", "summary", "description", "servers", "$ref"];

/// Shared inputs for operation parsing
pub(crate) struct OperationContext<'a> {
    pub components: &'a Components,
    /// Document-level security, inherited by operations that declare none
    pub default_security: &'a [String],
}

/// Parse the `paths` object in declaration order
pub(crate) fn parse_paths(
    paths: &ObjectReader<'_>,
    context: &OperationContext<'_>,
) -> ParseResult<Vec<PathItem>> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (path, item_value) in paths.entries() {
        let item_path = paths.child_path(path);
        let item = ObjectReader::new(item_value, &item_path)?;

        let shared_parameters = match item.opt_array("parameters")? {
            Some(values) => parse_parameters(values, &item.child_path("parameters"))?,
            None => Vec::new(),
        };

        let mut operations = Vec::new();
        for (key, op_value) in item.entries() {
            let Some(method) = HttpMethod::from_key(key) else {
                if !PATH_ITEM_FIELDS.contains(&key.as_str()) {
                    debug!(path = %path, key = %key, "Ignoring unknown path item field");
                }
                continue;
            };

            let id = endpoint_id(method, path);
            if !seen.insert(id.clone()) {
                return Err(ParseError::DuplicateOperation { endpoint: id });
            }

            let op_path = item.child_path(key);
            let operation =
                parse_operation(method, path, op_value, &op_path, &shared_parameters, context)?;
            check_path_template(&operation);
            operations.push(operation);
        }

        items.push(PathItem {
            path: path.clone(),
            operations,
        });
    }

    Ok(items)
}

fn parse_operation(
    method: HttpMethod,
    path: &str,
    value: &Value,
    field_path: &str,
    shared_parameters: &[Parameter],
    context: &OperationContext<'_>,
) -> ParseResult<Operation> {
    let reader = ObjectReader::new(value, field_path)?;
    let mut operation = Operation::new(method, path);

    operation.summary = reader.opt_str("summary")?;
    operation.description = reader.opt_str("description")?;

    let own_parameters = match reader.opt_array("parameters")? {
        Some(values) => parse_parameters(values, &reader.child_path("parameters"))?,
        None => Vec::new(),
    };
    operation.parameters = merge_parameters(shared_parameters, own_parameters);

    if let Some(body) = reader.get("requestBody") {
        let body_path = reader.child_path("requestBody");
        operation.request_body = Some(parse_request_body(body, &body_path, &operation, context)?);
    }

    operation.security = match reader.opt_array("security")? {
        Some(items) => parse_security_requirements(items, &reader.child_path("security"))?,
        None => context.default_security.to_vec(),
    };

    if let Some(responses) = reader.get("responses") {
        let responses_path = reader.child_path("responses");
        operation.responses = parse_responses(&ObjectReader::new(responses, &responses_path)?)?;
    }

    Ok(operation)
}

fn parse_parameters(values: &[Value], field_path: &str) -> ParseResult<Vec<Parameter>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| parse_parameter(value, &format!("{}[{}]", field_path, index)))
        .collect()
}

fn parse_parameter(value: &Value, field_path: &str) -> ParseResult<Parameter> {
    let reader = ObjectReader::new(value, field_path)?;
    let name = reader.required_str("name")?;
    let location = reader
        .required_str("in")?
        .parse::<ParameterLocation>()
        .map_err(|reason| ParseError::invalid_field(reader.child_path("in"), reason))?;

    let schema = match reader.get("schema") {
        Some(schema) => parse_schema(schema, &reader.child_path("schema"))?,
        None => Schema::default(),
    };

    Ok(Parameter {
        name,
        location,
        required: reader
            .opt_bool("required")?
            .unwrap_or(location == ParameterLocation::Path),
        description: reader.opt_str("description")?,
        schema,
    })
}

/// Path-level parameters first, unless the operation redeclares the same `(name, in)`
fn merge_parameters(shared: &[Parameter], own: Vec<Parameter>) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = shared
        .iter()
        .filter(|p| !own.iter().any(|o| o.name == p.name && o.location == p.location))
        .cloned()
        .collect();
    merged.extend(own);
    merged
}

fn parse_request_body(
    value: &Value,
    field_path: &str,
    operation: &Operation,
    context: &OperationContext<'_>,
) -> ParseResult<RequestBody> {
    let reader = ObjectReader::new(value, field_path)?;

    if let Some(pointer) = reader.opt_str("$ref")? {
        // Only component schemas are resolvable; a shared requestBody is reported as such
        let source = SchemaResolver::schema_name(&pointer)
            .err()
            .unwrap_or_else(|| SchemaResolutionError::Unsupported { pointer });
        return Err(ParseError::UnresolvedReference {
            endpoint: operation.id(),
            source,
        });
    }

    let (content_type, schema) = match reader.get("content") {
        Some(content) => {
            let content_path = reader.child_path("content");
            let content = ObjectReader::new(content, &content_path)?;
            select_media_schema(&content)?
        }
        None => (JSON_CONTENT_TYPE.to_string(), Schema::default()),
    };

    let resolved = SchemaResolver::resolve_chain_in(
        context.components,
        &schema,
        &mut ResolutionContext::new(),
    )
    .map_err(|source| ParseError::UnresolvedReference {
        endpoint: operation.id(),
        source,
    })?;

    Ok(RequestBody {
        content_type,
        required: reader.opt_bool("required")?.unwrap_or(false),
        description: reader.opt_str("description")?,
        schema,
        resolved,
    })
}

/// Prefer `application/json`, otherwise the first declared content type
fn select_media_schema(content: &ObjectReader<'_>) -> ParseResult<(String, Schema)> {
    let selected = content
        .opt_value(JSON_CONTENT_TYPE)
        .map(|media| (JSON_CONTENT_TYPE.to_string(), media))
        .or_else(|| {
            content
                .entries()
                .next()
                .map(|(content_type, media)| (content_type.clone(), media))
        });

    let Some((content_type, media)) = selected else {
        return Ok((JSON_CONTENT_TYPE.to_string(), Schema::default()));
    };

    let media_path = content.child_path(&content_type);
    let media = ObjectReader::new(media, &media_path)?;
    let schema = match media.get("schema") {
        Some(schema) => parse_schema(schema, &media.child_path("schema"))?,
        None => Schema::default(),
    };
    Ok((content_type, schema))
}

fn parse_responses(responses: &ObjectReader<'_>) -> ParseResult<Vec<Response>> {
    responses
        .entries()
        .map(|(status, value)| {
            let description = match value {
                Value::Object(_) => {
                    let response_path = responses.child_path(status);
                    ObjectReader::new(value, &response_path)?.opt_str("description")?
                }
                other => {
                    return Err(ParseError::invalid_field(
                        responses.child_path(status),
                        expected("an object", other),
                    ))
                }
            };
            Ok(Response {
                status: status.clone(),
                description,
            })
        })
        .collect()
}

/// Warn about `{name}` placeholders that have no matching path parameter
fn check_path_template(operation: &Operation) {
    let regex = PATH_TEMPLATE_REGEX.get_or_init(|| {
        Regex::new(r"\{([^{}/]+)\}").expect("path template pattern is valid")
    });

    for capture in regex.captures_iter(&operation.path) {
        let name = &capture[1];
        let declared = operation
            .parameters
            .iter()
            .any(|p| p.location == ParameterLocation::Path && p.name == name);
        if !declared {
            warn!(
                endpoint = %operation.id(),
                parameter = name,
                "Path template placeholder has no declared path parameter"
            );
        }
    }
}
