//! Shared fixtures for integration tests.

#![allow(dead_code)]

use jsonshape::{compile, ValidationErrors, Validator};
use serde_json::Value;
use stillwater::Validation;

pub fn unwrap_failure<T: std::fmt::Debug>(v: Validation<T, ValidationErrors>) -> ValidationErrors {
    v.into_result().unwrap_err()
}

/// Compiles `schema` and checks it against both lists of values.
pub fn check_schema(schema: Value, accepted: &[Value], rejected: &[Value]) -> Validator {
    let validator = compile(&schema).unwrap();

    for value in accepted {
        assert!(
            validator.validate(value).is_success(),
            "schema {} should accept {}",
            schema,
            value
        );
    }
    for value in rejected {
        assert!(
            validator.validate(value).is_failure(),
            "schema {} should reject {}",
            schema,
            value
        );
    }

    validator
}
