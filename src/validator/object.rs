//! Object checks: declared properties, required keys and key counts.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::{collect_into, finish, type_mismatch, Additional, Validator};

/// Validators for declared properties plus a policy for the rest.
///
/// Declared properties are optional here; presence is a separate
/// [`Validator::Required`] node.
#[derive(Debug, Clone)]
pub struct ObjectShape {
    pub properties: IndexMap<String, Validator>,
    pub additional: Additional,
}

impl ObjectShape {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        let obj = match as_object(value, path) {
            Ok(o) => o,
            Err(failure) => return failure,
        };

        let mut errors = Vec::new();

        for (name, validator) in &self.properties {
            if let Some(field_value) = obj.get(name) {
                collect_into(
                    validator.validate_at(field_value, &path.push_field(name)),
                    &mut errors,
                );
            }
        }

        for (key, field_value) in obj {
            if self.properties.contains_key(key) {
                continue;
            }
            let field_path = path.push_field(key);
            match &self.additional {
                Additional::AllowAny => {}
                Additional::Reject => errors.push(
                    ValidationError::new(field_path, format!("unknown field '{}'", key))
                        .with_code("additional_property"),
                ),
                Additional::AllowIf(validator) => {
                    collect_into(validator.validate_at(field_value, &field_path), &mut errors)
                }
            }
        }

        finish(errors)
    }
}

/// Every key in `keys` must be present. Missing keys are all reported.
pub(crate) fn validate_required(
    keys: &[String],
    value: &Value,
    path: &JsonPath,
) -> ValidationResult<()> {
    let obj = match as_object(value, path) {
        Ok(o) => o,
        Err(failure) => return failure,
    };

    let errors = keys
        .iter()
        .filter(|key| !obj.contains_key(key.as_str()))
        .map(|key| {
            ValidationError::new(
                path.push_field(key),
                format!("required field '{}' is missing", key),
            )
            .with_code("required")
            .with_expected("value")
        })
        .collect();

    finish(errors)
}

/// Inclusive bounds on the number of keys in an object.
#[derive(Debug, Clone)]
pub struct PropertyCount {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl PropertyCount {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        let obj = match as_object(value, path) {
            Ok(o) => o,
            Err(failure) => return failure,
        };
        let count = obj.len();
        let mut errors = Vec::new();

        if let Some(min) = self.min.filter(|min| count < *min) {
            errors.push(
                ValidationError::new(
                    path.clone(),
                    format!("object must have at least {} properties, got {}", min, count),
                )
                .with_code("min_properties")
                .with_expected(format!("at least {} properties", min))
                .with_got(format!("{} properties", count)),
            );
        }

        if let Some(max) = self.max.filter(|max| count > *max) {
            errors.push(
                ValidationError::new(
                    path.clone(),
                    format!("object must have at most {} properties, got {}", max, count),
                )
                .with_code("max_properties")
                .with_expected(format!("at most {} properties", max))
                .with_got(format!("{} properties", count)),
            );
        }

        finish(errors)
    }
}

fn as_object<'v>(
    value: &'v Value,
    path: &JsonPath,
) -> Result<&'v Map<String, Value>, ValidationResult<()>> {
    value.as_object().ok_or_else(|| {
        Validation::Failure(ValidationErrors::single(type_mismatch("object", value, path)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstanceType;
    use serde_json::json;

    fn unwrap_failure<T: std::fmt::Debug, E>(v: Validation<T, E>) -> E {
        v.into_result().unwrap_err()
    }

    fn shape(additional: Additional) -> ObjectShape {
        let mut properties = IndexMap::new();
        properties.insert("a".to_string(), Validator::Type(InstanceType::Boolean));
        properties.insert("b".to_string(), Validator::Type(InstanceType::Integer));
        ObjectShape {
            properties,
            additional,
        }
    }

    #[test]
    fn test_declared_properties_are_optional() {
        let check = shape(Additional::Reject);
        assert!(check.validate(&json!({}), &JsonPath::root()).is_success());
        assert!(check.validate(&json!({"a": true}), &JsonPath::root()).is_success());
    }

    #[test]
    fn test_property_errors_carry_field_path() {
        let check = shape(Additional::AllowAny);
        let errors = unwrap_failure(check.validate(&json!({"a": 1, "b": "x"}), &JsonPath::root()));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.at_path(&JsonPath::root().push_field("a")).len(), 1);
        assert_eq!(errors.at_path(&JsonPath::root().push_field("b")).len(), 1);
    }

    #[test]
    fn test_reject_unknown_keys() {
        let check = shape(Additional::Reject);
        let errors = unwrap_failure(check.validate(&json!({"a": true, "c": 1}), &JsonPath::root()));

        assert_eq!(errors.first().code, "additional_property");
        assert_eq!(errors.first().path.to_string(), "c");
    }

    #[test]
    fn test_conditional_unknown_keys() {
        let check = shape(Additional::AllowIf(Box::new(Validator::Type(
            InstanceType::String,
        ))));

        assert!(check.validate(&json!({"a": true, "c": "x"}), &JsonPath::root()).is_success());
        assert!(check.validate(&json!({"c": 3}), &JsonPath::root()).is_failure());
    }

    #[test]
    fn test_shape_rejects_non_objects() {
        let check = shape(Additional::AllowAny);
        let errors = unwrap_failure(check.validate(&json!([]), &JsonPath::root()));
        assert_eq!(errors.first().code, "invalid_type");
    }

    #[test]
    fn test_required_reports_every_missing_key() {
        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let errors = unwrap_failure(validate_required(&keys, &json!({"b": 1}), &JsonPath::root()));

        assert_eq!(errors.with_code("required").len(), 2);
        assert!(validate_required(&keys, &json!({"a": 0, "b": 0, "c": 0}), &JsonPath::root())
            .is_success());
        assert!(validate_required(&keys, &json!("a"), &JsonPath::root()).is_failure());
    }

    #[test]
    fn test_property_count() {
        let check = PropertyCount {
            min: Some(1),
            max: Some(2),
        };

        assert!(check.validate(&json!({"x": 1}), &JsonPath::root()).is_success());
        let errors = unwrap_failure(check.validate(&json!({}), &JsonPath::root()));
        assert_eq!(errors.first().code, "min_properties");
        let errors = unwrap_failure(check.validate(&json!({"x": 1, "y": 2, "z": 3}), &JsonPath::root()));
        assert_eq!(errors.first().code, "max_properties");
        assert!(check.validate(&json!(null), &JsonPath::root()).is_failure());
    }
}
