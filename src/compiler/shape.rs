//! The shapes a schema value can take.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::path::JsonPath;
use crate::types::InstanceType;

/// A schema value sorted into the forms the compiler handles.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SchemaShape<'a> {
    /// `null`, `{}` or `[]`: no constraint.
    Empty,
    /// A bare type name such as `"integer"`.
    TypeName(&'a str),
    /// A list of schemas, any of which may match.
    Union(&'a [Value]),
    /// A mapping of keywords.
    Keywords(&'a Map<String, Value>),
}

impl<'a> SchemaShape<'a> {
    pub(crate) fn classify(schema: &'a Value, location: &JsonPath) -> Result<Self, SchemaError> {
        match schema {
            Value::Null => Ok(SchemaShape::Empty),
            Value::Object(map) if map.is_empty() => Ok(SchemaShape::Empty),
            Value::Array(items) if items.is_empty() => Ok(SchemaShape::Empty),
            Value::Object(map) => Ok(SchemaShape::Keywords(map)),
            Value::Array(items) => Ok(SchemaShape::Union(items)),
            Value::String(name) => Ok(SchemaShape::TypeName(name)),
            Value::Bool(_) | Value::Number(_) => Err(SchemaError::Malformed {
                location: location.to_pointer(),
                found: InstanceType::of(schema).name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_forms() {
        for schema in [json!(null), json!({}), json!([])] {
            let shape = SchemaShape::classify(&schema, &JsonPath::root()).unwrap();
            assert!(matches!(shape, SchemaShape::Empty));
        }
    }

    #[test]
    fn test_scalars_are_malformed() {
        let err = SchemaShape::classify(&json!(true), &JsonPath::root()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Malformed {
                location: "#".to_string(),
                found: "boolean".to_string()
            }
        );
        assert!(SchemaShape::classify(&json!(3), &JsonPath::root()).is_err());
    }

    #[test]
    fn test_non_empty_forms() {
        let union = json!(["string", "null"]);
        assert!(matches!(
            SchemaShape::classify(&union, &JsonPath::root()).unwrap(),
            SchemaShape::Union(items) if items.len() == 2
        ));

        let keywords = json!({"type": "string"});
        assert!(matches!(
            SchemaShape::classify(&keywords, &JsonPath::root()).unwrap(),
            SchemaShape::Keywords(_)
        ));
    }
}
