//! Defensive accessors over decoded JSON objects
//!
//! Every read carries the dotted path of the field so shape errors point at
//! the exact location in the specification.

use crate::error::{ParseError, ParseResult};
use serde_json::{Map, Value};

/// A JSON object together with its location in the document
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectReader<'a> {
    obj: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> ObjectReader<'a> {
    /// Wrap `value`, failing unless it is an object
    pub fn new(value: &'a Value, path: &'a str) -> ParseResult<Self> {
        value
            .as_object()
            .map(|obj| Self { obj, path })
            .ok_or_else(|| ParseError::invalid_field(display_path(path), expected("an object", value)))
    }

    pub fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|v| !v.is_null())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.obj.iter()
    }

    /// A string that must be present
    pub fn required_str(&self, key: &str) -> ParseResult<String> {
        self.opt_str(key)?
            .ok_or_else(|| ParseError::missing_field(self.child_path(key)))
    }

    /// A string that may be absent; numbers and booleans are accepted as text
    pub fn opt_str(&self, key: &str) -> ParseResult<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
            Some(other) => Err(ParseError::invalid_field(
                self.child_path(key),
                expected("a string", other),
            )),
        }
    }

    pub fn opt_bool(&self, key: &str) -> ParseResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(ParseError::invalid_field(
                self.child_path(key),
                expected("a boolean", other),
            )),
        }
    }

    pub fn opt_array(&self, key: &str) -> ParseResult<Option<&'a Vec<Value>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(ParseError::invalid_field(
                self.child_path(key),
                expected("an array", other),
            )),
        }
    }

    pub fn opt_value(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key)
    }
}

/// Describe a type mismatch
pub(crate) fn expected(what: &str, found: &Value) -> String {
    format!("expected {} but found {}", what, kind_of(found))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reader_requires_object() {
        let value = json!(["not", "an", "object"]);
        let err = ObjectReader::new(&value, "").unwrap_err();
        assert_eq!(
            err,
            ParseError::invalid_field("<root>", "expected an object but found an array")
        );
    }

    #[test]
    fn test_string_accessors() {
        let value = json!({"title": "Planets", "version": 2, "tags": [], "empty": null});
        let reader = ObjectReader::new(&value, "info").unwrap();

        assert_eq!(reader.required_str("title").unwrap(), "Planets");
        assert_eq!(reader.opt_str("version").unwrap().as_deref(), Some("2"));
        assert_eq!(reader.opt_str("empty").unwrap(), None);
        assert_eq!(
            reader.required_str("summary"),
            Err(ParseError::missing_field("info.summary"))
        );
        assert!(matches!(
            reader.opt_str("tags"),
            Err(ParseError::InvalidField { ref path, .. }) if path == "info.tags"
        ));
    }

    #[test]
    fn test_bool_and_array_accessors() {
        let value = json!({"required": "yes", "parameters": []});
        let reader = ObjectReader::new(&value, "paths./a.get").unwrap();
        assert!(reader.opt_bool("required").is_err());
        assert_eq!(reader.opt_array("parameters").unwrap().map(Vec::len), Some(0));
        assert_eq!(reader.opt_array("security").unwrap(), None);
    }
}
