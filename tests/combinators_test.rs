//! Tests for anyOf, allOf and oneOf.

mod common;

use common::{check_schema, unwrap_failure};
use serde_json::json;

#[test]
fn test_any_of() {
    let validator = check_schema(
        json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}),
        &[json!("a"), json!(1), json!("abdc"), json!(1234)],
        &[json!([]), json!([1]), json!(["a"]), json!(null), json!({})],
    );

    let errors = unwrap_failure(validator.validate(&json!(null)));
    let error = errors.first();
    assert_eq!(error.code, "any_of_none_matched");
    assert!(error.message.contains("did not match any of 2 schemas"));
    assert_eq!(errors.with_code("invalid_type").len(), 2);
}

#[test]
fn test_all_of() {
    check_schema(
        json!({"allOf": [{"type": "string"}, {"maxLength": 5}]}),
        &[json!(""), json!("a"), json!("ab"), json!("abcde")],
        &[
            json!("abcdef"),
            json!("abcdefg"),
            json!(1234),
            json!([]),
            json!([1]),
            json!(null),
            json!({}),
        ],
    );
}

#[test]
fn test_one_of_exactly_one_match() {
    let validator = check_schema(
        json!({"oneOf": [{"type": "integer"}, {"type": "number", "minimum": 10}]}),
        &[json!(1), json!(10.5), json!(-3)],
        &[json!(10), json!("a"), json!(5.5)],
    );

    let errors = unwrap_failure(validator.validate(&json!(10)));
    assert_eq!(errors.first().code, "one_of_multiple_matched");
    assert!(errors.first().message.contains("matched 2 schemas"));
    assert!(errors.first().message.contains("expected exactly one"));

    let errors = unwrap_failure(validator.validate(&json!("a")));
    assert_eq!(errors.first().code, "one_of_none_matched");
}

#[test]
fn test_one_of_discriminated_union() {
    let circle = json!({
        "type": "object",
        "required": ["radius"],
        "properties": {"kind": {"type": "string"}, "radius": {"type": "number"}},
        "additionalProperties": false
    });
    let rectangle = json!({
        "type": "object",
        "required": ["width", "height"],
        "properties": {
            "kind": {"type": "string"},
            "width": {"type": "number"},
            "height": {"type": "number"}
        },
        "additionalProperties": false
    });

    check_schema(
        json!({"oneOf": [circle, rectangle]}),
        &[
            json!({"kind": "circle", "radius": 2}),
            json!({"kind": "rect", "width": 1, "height": 2.5}),
        ],
        &[
            json!({"kind": "circle"}),
            json!({"radius": 1, "width": 1, "height": 1}),
            json!([]),
        ],
    );
}

#[test]
fn test_type_combines_with_combinators() {
    check_schema(
        json!({
            "type": "string",
            "anyOf": [{"maxLength": 2}, {"pattern": "^x"}]
        }),
        &[json!("ab"), json!("xyzzy")],
        &[json!("abc"), json!(12)],
    );
}

#[test]
fn test_nested_combinators() {
    check_schema(
        json!({
            "allOf": [
                {"anyOf": [{"type": "integer"}, {"type": "null"}]},
                {"oneOf": [{"type": "null"}, {"type": "integer", "multipleOf": 3}]}
            ]
        }),
        &[json!(null), json!(9), json!(0)],
        &[json!(4), json!(3.0), json!("3")],
    );
}

#[test]
fn test_length_outside_type() {
    check_schema(
        json!({"minLength": 2, "maxLength": 3}),
        &[json!("ab"), json!("abc"), json!(7), json!([1]), json!(null)],
        &[json!("a"), json!("abcd")],
    );
}
