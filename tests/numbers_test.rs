//! Tests for numeric bounds and divisibility.

mod common;

use common::{check_schema, unwrap_failure};
use serde_json::json;

fn non_numbers() -> Vec<serde_json::Value> {
    vec![json!(null), json!([]), json!({}), json!("")]
}

#[test]
fn test_integer_multiple_of() {
    check_schema(
        json!({"type": "integer", "multipleOf": 2}),
        &[json!(-10), json!(-4), json!(0), json!(2), json!(8)],
        &[
            json!(-9),
            json!(-1),
            json!(1),
            json!(3),
            json!(11),
            json!(""),
            json!("2"),
            json!([]),
            json!({}),
            json!([2]),
        ],
    );
}

#[test]
fn test_number_multiple_of_uses_exact_remainder() {
    check_schema(
        json!({"type": "number", "multipleOf": 1.1}),
        &[json!(-4.4), json!(-2.2), json!(-1.1), json!(0), json!(1.1), json!(2.2), json!(4.4)],
        &[
            json!(-3.3),
            json!(3.3),
            json!(1.100001),
            json!(1.10001),
            json!(1.0999),
            json!(2.20001),
            json!(2.19999),
            json!(1),
            json!(2),
            json!([]),
            json!(null),
        ],
    );
}

#[test]
fn test_minimum() {
    let mut rejected = vec![json!(0.999), json!(0), json!(-1), json!(-100)];
    rejected.extend(non_numbers());

    check_schema(
        json!({"type": "number", "minimum": 1}),
        &[json!(1), json!(2), json!(2.5), json!(100), json!(u64::MAX)],
        &rejected,
    );
}

#[test]
fn test_exclusive_minimum() {
    let mut rejected = vec![json!(2.1), json!(1), json!(0.5), json!(0), json!(-1.5)];
    rejected.extend(non_numbers());

    check_schema(
        json!({"type": "number", "minimum": 2.1, "exclusiveMinimum": true}),
        &[json!(2.1001), json!(3), json!(4), json!(5.5), json!(1e100)],
        &rejected,
    );
}

#[test]
fn test_maximum() {
    let mut rejected = vec![json!(300.0001), json!(301), json!(99999)];
    rejected.extend(non_numbers());

    check_schema(
        json!({"type": "number", "maximum": 300}),
        &[json!(300), json!(299.9999), json!(0), json!(-300)],
        &rejected,
    );
}

#[test]
fn test_exclusive_maximum() {
    let mut rejected = vec![json!(300), json!(300.0001), json!(301)];
    rejected.extend(non_numbers());

    check_schema(
        json!({"type": "number", "maximum": 300, "exclusiveMaximum": true}),
        &[json!(299.9999), json!(200), json!(0), json!(-300)],
        &rejected,
    );
}

#[test]
fn test_integer_between_bounds() {
    let mut rejected = vec![json!(-2), json!(-1.1), json!(-0.5), json!(0.5), json!(1.1), json!(2)];
    rejected.extend(non_numbers());

    check_schema(
        json!({"type": "integer", "minimum": -1, "maximum": 1}),
        &[json!(-1), json!(0), json!(1)],
        &rejected,
    );
    check_schema(
        json!({
            "type": "integer",
            "minimum": -1,
            "maximum": 1,
            "exclusiveMinimum": true,
            "exclusiveMaximum": true
        }),
        &[json!(0)],
        &[json!(-1), json!(1), json!(0.5)],
    );
}

#[test]
fn test_float_bounds_compare_exactly_with_large_integers() {
    check_schema(
        json!({"type": "integer", "maximum": 9007199254740992.0}),
        &[json!(9007199254740992_u64), json!(-9007199254740993_i64)],
        &[json!(9007199254740993_u64), json!(u64::MAX)],
    );
    check_schema(
        json!({"type": "integer", "minimum": 9007199254740992.0, "exclusiveMinimum": true}),
        &[json!(9007199254740993_u64)],
        &[json!(9007199254740992_u64), json!(0)],
    );
    check_schema(
        json!({"type": "integer", "minimum": -4.5}),
        &[json!(-4), json!(i64::MAX)],
        &[json!(-5), json!(i64::MIN)],
    );
}

#[test]
fn test_empty_range_rejects_everything() {
    let validator = check_schema(
        json!({"type": "integer", "minimum": 1, "maximum": -1}),
        &[],
        &[json!(-2), json!(-1), json!(0), json!(1), json!(2), json!(0.5), json!(null)],
    );

    let errors = unwrap_failure(validator.validate(&json!(0)));
    assert_eq!(errors.with_code("min_value").len(), 1);
    assert_eq!(errors.with_code("max_value").len(), 1);
}

#[test]
fn test_exclusive_flag_without_bound_is_ignored() {
    check_schema(
        json!({"type": "number", "exclusiveMinimum": true}),
        &[json!(1), json!(2.2), json!(-1.1), json!(-4)],
        &[json!(null), json!([]), json!({}), json!(""), json!("1"), json!("1.1")],
    );
}

#[test]
fn test_range_boundary_errors() {
    let validator = check_schema(json!({"type": "number", "minimum": 5}), &[json!(5)], &[]);

    let errors = unwrap_failure(validator.validate(&json!(4.5)));
    let error = errors.first();
    assert_eq!(error.code, "min_value");
    assert_eq!(error.expected.as_deref(), Some("at least 5"));
    assert_eq!(error.got.as_deref(), Some("4.5"));
}
