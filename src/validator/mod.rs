//! Compiled validator trees.
//!
//! A [`Validator`] is a closed tree of checks produced by the compiler.
//! Evaluation is an exhaustive match over the node kinds; no node holds
//! mutable state, so a tree can be shared freely between threads and reused
//! for any number of values.
//!
//! # Example
//!
//! ```rust
//! use jsonshape::{InstanceType, Validator};
//! use serde_json::json;
//!
//! let id = Validator::Any(vec![
//!     Validator::Type(InstanceType::String),
//!     Validator::Type(InstanceType::Integer),
//! ]);
//!
//! assert!(id.is_valid(&json!("abc-123")));
//! assert!(id.is_valid(&json!(42)));
//! assert!(!id.is_valid(&json!(null)));
//! ```

mod array;
mod combinators;
mod numeric;
mod object;
mod render;
mod string;

pub use array::{Additional, PositionalArray};
pub use numeric::{MultipleOfCheck, Numeric, RangeCheck};
pub use object::{ObjectShape, PropertyCount};
pub use string::{LengthCheck, LengthUnit, PatternCheck};

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::types::InstanceType;
use crate::ValidationResult;

/// A node of a compiled validator tree.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Accepts every value. Produced for the empty schema.
    Anything,

    /// Accepts values of one instance type.
    Type(InstanceType),

    /// Accepts if at least one child accepts.
    Any(Vec<Validator>),

    /// Accepts if every child accepts. All failures are reported.
    All(Vec<Validator>),

    /// Accepts if exactly one child accepts.
    ExactlyOne(Vec<Validator>),

    /// Numeric bounds.
    Range(RangeCheck),

    /// Bounds on string characters or array elements.
    Length(LengthCheck),

    /// Exact divisibility.
    MultipleOf(MultipleOfCheck),

    /// Regular expression search on strings.
    Pattern(PatternCheck),

    /// Every array element must satisfy the same validator.
    ArrayOf(Box<Validator>),

    /// Array elements checked by position.
    PositionalArray(PositionalArray),

    /// Per-property validators plus a policy for undeclared keys.
    ObjectShape(ObjectShape),

    /// Keys that must be present in an object.
    Required(Vec<String>),

    /// Bounds on the number of keys in an object.
    PropertyCount(PropertyCount),
}

impl Validator {
    /// Combines `parts` with `All`, unwrapping the trivial cases.
    ///
    /// No parts means no constraint; a single part is returned as is.
    pub fn all(mut parts: Vec<Validator>) -> Validator {
        match parts.len() {
            0 => Validator::Anything,
            1 => parts.remove(0),
            _ => Validator::All(parts),
        }
    }

    /// Validates a value, reporting failures relative to the root.
    pub fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.validate_at(value, &JsonPath::root())
    }

    /// Returns true if `value` is accepted.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_success()
    }

    /// Validates a value located at `path` within a larger instance.
    pub fn validate_at(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        match self {
            Validator::Anything => Validation::Success(()),
            Validator::Type(kind) => check_type(*kind, value, path),
            Validator::Any(children) => combinators::validate_any(children, value, path),
            Validator::All(children) => combinators::validate_all(children, value, path),
            Validator::ExactlyOne(children) => {
                combinators::validate_exactly_one(children, value, path)
            }
            Validator::Range(range) => range.validate(value, path),
            Validator::Length(length) => length.validate(value, path),
            Validator::MultipleOf(multiple) => multiple.validate(value, path),
            Validator::Pattern(pattern) => pattern.validate(value, path),
            Validator::ArrayOf(items) => array::validate_array_of(items, value, path),
            Validator::PositionalArray(positional) => positional.validate(value, path),
            Validator::ObjectShape(shape) => shape.validate(value, path),
            Validator::Required(keys) => object::validate_required(keys, value, path),
            Validator::PropertyCount(count) => count.validate(value, path),
        }
    }
}

fn check_type(kind: InstanceType, value: &Value, path: &JsonPath) -> ValidationResult<()> {
    if kind.matches(value) {
        Validation::Success(())
    } else {
        Validation::Failure(ValidationErrors::single(type_mismatch(kind.name(), value, path)))
    }
}

/// The error reported when a value has the wrong kind for a check.
pub(crate) fn type_mismatch(expected: &str, value: &Value, path: &JsonPath) -> ValidationError {
    ValidationError::new(path.clone(), format!("expected {}", expected))
        .with_code("invalid_type")
        .with_expected(expected.to_string())
        .with_got(InstanceType::of(value).name())
}

/// Turns accumulated errors into a result.
pub(crate) fn finish(errors: Vec<ValidationError>) -> ValidationResult<()> {
    if errors.is_empty() {
        Validation::Success(())
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

/// Appends the errors of a failed result to `errors`.
pub(crate) fn collect_into(result: ValidationResult<()>, errors: &mut Vec<ValidationError>) {
    if let Validation::Failure(e) = result {
        errors.extend(e);
    }
}

// Trees are shared across threads once compiled.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};
