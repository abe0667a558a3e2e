//! Schema, security scheme and security requirement parsing

use super::fields::{expected, ObjectReader};
use crate::error::{ParseError, ParseResult};
use crate::model::{Schema, SecurityScheme};
use serde_json::Value;

/// Parse a schema object; `$ref` is kept as a forward reference
pub(crate) fn parse_schema(value: &Value, path: &str) -> ParseResult<Schema> {
    let reader = ObjectReader::new(value, path)?;

    let mut properties = Vec::new();
    if let Some(props) = reader.get("properties") {
        let props_path = reader.child_path("properties");
        let props_reader = ObjectReader::new(props, &props_path)?;
        for (name, prop) in props_reader.entries() {
            let prop_path = props_reader.child_path(name);
            properties.push((name.clone(), parse_schema(prop, &prop_path)?));
        }
    }

    let items = match reader.get("items") {
        Some(items) => Some(Box::new(parse_schema(items, &reader.child_path("items"))?)),
        None => None,
    };

    Ok(Schema {
        schema_type: parse_type(&reader)?,
        format: reader.opt_str("format")?,
        description: reader.opt_str("description")?,
        properties,
        required: string_list(&reader, "required")?,
        items,
        enum_values: reader.opt_array("enum")?.cloned(),
        default: reader.get("default").cloned(),
        reference: reader.opt_str("$ref")?,
    })
}

/// `type` is a string, or a list of strings where `null` marks nullability
fn parse_type(reader: &ObjectReader<'_>) -> ParseResult<Option<String>> {
    match reader.get("type") {
        Some(Value::Array(types)) => Ok(types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null")
            .map(str::to_string)),
        _ => reader.opt_str("type"),
    }
}

fn string_list(reader: &ObjectReader<'_>, key: &str) -> ParseResult<Vec<String>> {
    let Some(items) = reader.opt_array(key)? else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ParseError::invalid_field(reader.child_path(key), expected("a list of strings", item))
            })
        })
        .collect()
}

/// Parse one entry of `components.securitySchemes`
pub(crate) fn parse_security_scheme(value: &Value, path: &str) -> ParseResult<SecurityScheme> {
    let reader = ObjectReader::new(value, path)?;
    Ok(SecurityScheme {
        scheme_type: reader.required_str("type")?,
        location: reader.opt_str("in")?,
        name: reader.opt_str("name")?,
        description: reader.opt_str("description")?,
    })
}

/// Flatten `[{name: [scopes]}, ...]` into scheme names, keeping first occurrence order
pub(crate) fn parse_security_requirements(items: &[Value], path: &str) -> ParseResult<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        let reader = ObjectReader::new(item, path)?;
        for (name, _scopes) in reader.entries() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    Ok(names)
}
