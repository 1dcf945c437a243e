//! Logical combinators: `Any`, `All` and `ExactlyOne`.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::{collect_into, finish, Validator};

/// At least one child must accept.
///
/// Stops at the first accepting child. When none accepts, the summary error
/// is followed by every child's failures.
pub(crate) fn validate_any(
    children: &[Validator],
    value: &Value,
    path: &JsonPath,
) -> ValidationResult<()> {
    let mut causes = Vec::new();

    for child in children {
        match child.validate_at(value, path) {
            Validation::Success(()) => return Validation::Success(()),
            Validation::Failure(e) => causes.extend(e),
        }
    }

    let summary = ValidationError::new(
        path.clone(),
        format!("value did not match any of {} schemas", children.len()),
    )
    .with_code("any_of_none_matched");

    Validation::Failure(ValidationErrors::with_causes(summary, causes))
}

/// Every child must accept; failures from all children are accumulated.
pub(crate) fn validate_all(
    children: &[Validator],
    value: &Value,
    path: &JsonPath,
) -> ValidationResult<()> {
    let mut errors = Vec::new();

    for child in children {
        collect_into(child.validate_at(value, path), &mut errors);
    }

    finish(errors)
}

/// Exactly one child must accept.
pub(crate) fn validate_exactly_one(
    children: &[Validator],
    value: &Value,
    path: &JsonPath,
) -> ValidationResult<()> {
    let mut matched = Vec::new();
    let mut causes = Vec::new();

    for (i, child) in children.iter().enumerate() {
        match child.validate_at(value, path) {
            Validation::Success(()) => matched.push(i),
            Validation::Failure(e) => causes.extend(e),
        }
    }

    match matched.len() {
        1 => Validation::Success(()),
        0 => {
            let summary = ValidationError::new(
                path.clone(),
                format!("value did not match any of {} schemas", children.len()),
            )
            .with_code("one_of_none_matched");

            Validation::Failure(ValidationErrors::with_causes(summary, causes))
        }
        n => {
            let error = ValidationError::new(
                path.clone(),
                format!(
                    "value matched {} schemas (indices {:?}), expected exactly one",
                    n, matched
                ),
            )
            .with_code("one_of_multiple_matched");

            Validation::Failure(ValidationErrors::single(error))
        }
    }
}
