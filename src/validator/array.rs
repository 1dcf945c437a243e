//! Array element checks.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::{collect_into, finish, type_mismatch, Validator};

/// Policy for array elements past the positional list, or for object keys
/// not declared in `properties`.
#[derive(Debug, Clone)]
pub enum Additional {
    /// Any extra element or key is a failure.
    Reject,
    /// Extras are unconstrained.
    AllowAny,
    /// Every extra must satisfy the validator.
    AllowIf(Box<Validator>),
}

/// Validates array elements by position.
///
/// Element `i` must satisfy `items[i]`. Arrays shorter than `items` are
/// fine; elements past the end are governed by `additional`.
#[derive(Debug, Clone)]
pub struct PositionalArray {
    pub items: Vec<Validator>,
    pub additional: Additional,
}

impl PositionalArray {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        let elements = match value.as_array() {
            Some(a) => a,
            None => {
                return Validation::Failure(ValidationErrors::single(type_mismatch(
                    "array", value, path,
                )))
            }
        };

        let mut errors = Vec::new();

        for (index, (validator, element)) in self.items.iter().zip(elements).enumerate() {
            collect_into(validator.validate_at(element, &path.push_index(index)), &mut errors);
        }

        if elements.len() > self.items.len() {
            let extra = self.items.len()..elements.len();
            match &self.additional {
                Additional::AllowAny => {}
                Additional::Reject => errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!(
                            "additional items are not allowed ({} declared, got {})",
                            self.items.len(),
                            elements.len()
                        ),
                    )
                    .with_code("additional_items")
                    .with_expected(format!("at most {} items", self.items.len()))
                    .with_got(format!("{} items", elements.len())),
                ),
                Additional::AllowIf(validator) => {
                    for index in extra {
                        collect_into(
                            validator.validate_at(&elements[index], &path.push_index(index)),
                            &mut errors,
                        );
                    }
                }
            }
        }

        finish(errors)
    }
}

/// Every element of an array must satisfy `items`.
pub(crate) fn validate_array_of(
    items: &Validator,
    value: &Value,
    path: &JsonPath,
) -> ValidationResult<()> {
    let elements = match value.as_array() {
        Some(a) => a,
        None => {
            return Validation::Failure(ValidationErrors::single(type_mismatch(
                "array", value, path,
            )))
        }
    };

    let mut errors = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        collect_into(items.validate_at(element, &path.push_index(index)), &mut errors);
    }

    finish(errors)
}
