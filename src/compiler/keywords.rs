//! Keyword tables and typed readers for keyword values.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::path::JsonPath;
use crate::validator::Numeric;

/// Keywords the compiler turns into checks.
pub(crate) const SUPPORTED: &[&str] = &[
    "$ref",
    "type",
    "properties",
    "additionalProperties",
    "required",
    "minProperties",
    "maxProperties",
    "items",
    "additionalItems",
    "minItems",
    "maxItems",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "minLength",
    "maxLength",
    "pattern",
    "anyOf",
    "allOf",
    "oneOf",
];

/// Keywords that carry no constraint and are always skipped.
pub(crate) const ANNOTATIONS: &[&str] = &[
    "$schema",
    "id",
    "title",
    "description",
    "default",
    "definitions",
];

/// Keywords that only narrow a sibling `type`.
pub(crate) const NEEDS_TYPE: &[&str] = &[
    "properties",
    "additionalProperties",
    "required",
    "minProperties",
    "maxProperties",
    "items",
    "additionalItems",
    "minItems",
    "maxItems",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
];

pub(crate) fn invalid(keyword: &str, location: &JsonPath, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidKeyword {
        keyword: keyword.to_string(),
        location: location.to_pointer(),
        reason: reason.into(),
    }
}

/// Reads a non-negative integer such as `minItems`.
pub(crate) fn count(
    map: &Map<String, Value>,
    keyword: &str,
    location: &JsonPath,
) -> Result<Option<usize>, SchemaError> {
    match map.get(keyword) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(keyword, location, "expected a non-negative integer")),
    }
}

/// Reads a numeric bound such as `minimum`.
pub(crate) fn number(
    map: &Map<String, Value>,
    keyword: &str,
    location: &JsonPath,
) -> Result<Option<Numeric>, SchemaError> {
    match map.get(keyword) {
        None => Ok(None),
        Some(Value::Number(n)) => Numeric::from_number(n)
            .map(Some)
            .ok_or_else(|| invalid(keyword, location, "number is out of range")),
        Some(_) => Err(invalid(keyword, location, "expected a number")),
    }
}

/// Reads a boolean flag such as `exclusiveMinimum`; absent is `false`.
pub(crate) fn flag(
    map: &Map<String, Value>,
    keyword: &str,
    location: &JsonPath,
) -> Result<bool, SchemaError> {
    match map.get(keyword) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(keyword, location, "expected a boolean")),
    }
}

/// Reads a non-empty list of sub-schemas (`anyOf`, `allOf`, `oneOf`).
pub(crate) fn schema_list<'a>(
    map: &'a Map<String, Value>,
    keyword: &str,
    location: &JsonPath,
) -> Result<Option<&'a [Value]>, SchemaError> {
    match map.get(keyword) {
        None => Ok(None),
        Some(Value::Array(items)) if !items.is_empty() => Ok(Some(items.as_slice())),
        Some(Value::Array(_)) => Err(invalid(keyword, location, "expected at least one schema")),
        Some(_) => Err(invalid(keyword, location, "expected an array of schemas")),
    }
}

/// Reads a list of strings (`required`).
pub(crate) fn string_list(
    map: &Map<String, Value>,
    keyword: &str,
    location: &JsonPath,
) -> Result<Option<Vec<String>>, SchemaError> {
    let items = match map.get(keyword) {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(invalid(keyword, location, "expected an array of strings")),
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(keyword, location, "expected an array of strings"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keywords(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_count_rejects_negative_and_fractional() {
        let map = keywords(json!({"a": 3, "b": -1, "c": 1.5}));
        let root = JsonPath::root();

        assert_eq!(count(&map, "a", &root).unwrap(), Some(3));
        assert_eq!(count(&map, "missing", &root).unwrap(), None);
        assert!(count(&map, "b", &root).is_err());
        assert!(count(&map, "c", &root).is_err());
    }

    #[test]
    fn test_number_and_flag() {
        let map = keywords(json!({"min": 2.5, "bad": "2", "excl": true, "nope": 1}));
        let root = JsonPath::root();

        assert_eq!(number(&map, "min", &root).unwrap(), Some(Numeric::Float(2.5)));
        assert!(number(&map, "bad", &root).is_err());
        assert!(flag(&map, "excl", &root).unwrap());
        assert!(!flag(&map, "missing", &root).unwrap());
        assert!(flag(&map, "nope", &root).is_err());
    }

    #[test]
    fn test_lists() {
        let map = keywords(json!({
            "anyOf": [{}],
            "empty": [],
            "required": ["a", "b"],
            "mixed": ["a", 1]
        }));
        let root = JsonPath::root();

        assert_eq!(schema_list(&map, "anyOf", &root).unwrap().map(|s| s.len()), Some(1));
        assert!(schema_list(&map, "empty", &root).is_err());
        assert_eq!(
            string_list(&map, "required", &root).unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(string_list(&map, "mixed", &root).is_err());
    }
}
