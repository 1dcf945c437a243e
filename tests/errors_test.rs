//! Tests for how validation failures are reported.

mod common;

use common::unwrap_failure;
use jsonshape::{compile, JsonPath, ValidationError, ValidationErrors, ValidationResult};
use stillwater::prelude::*;
use stillwater::Validation;
use serde_json::json;

#[test]
fn test_error_full_context() {
    let error = ValidationError::new(JsonPath::root().push_field("email"), "must match pattern '@'")
        .with_code("pattern")
        .with_got("not-an-email")
        .with_expected("match for /@/");

    assert_eq!(error.path.to_string(), "email");
    assert_eq!(error.code, "pattern");
    assert_eq!(
        error.to_string(),
        "email: must match pattern '@' (expected: match for /@/) (got: not-an-email)"
    );
}

#[test]
fn test_errors_combine_via_semigroup() {
    let e1 = ValidationErrors::single(ValidationError::new(JsonPath::root().push_field("a"), "first"));
    let e2 = ValidationErrors::single(ValidationError::new(JsonPath::root().push_field("b"), "second"));

    let combined = e1.combine(e2);
    assert_eq!(combined.len(), 2);
    assert!(!combined.is_empty());

    let messages: Vec<&str> = combined.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_validation_result_alias() {
    let result: ValidationResult<i32> = Validation::Success(42);
    assert!(result.is_success());
}

#[test]
fn test_report_lists_every_failure() {
    let validator = compile(&json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "tags": {"type": "array", "maxItems": 1}
        }
    }))
    .unwrap();

    let errors = unwrap_failure(validator.validate(&json!({"id": "7", "tags": [1, 2]})));
    let report = errors.to_string();

    assert!(report.starts_with("Validation failed with 2 error(s):"));
    assert!(report.contains("1. id: expected integer (expected: integer) (got: string)"));
    assert!(report.contains("2. tags: length must be at most 1 items, got 2"));
}

#[test]
fn test_root_errors_are_labelled() {
    let validator = compile(&json!("null")).unwrap();
    let errors = unwrap_failure(validator.validate(&json!(0)));

    assert!(errors.first().path.is_root());
    assert!(errors.first().to_string().starts_with("(root): expected null"));
}
