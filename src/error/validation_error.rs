//! Evaluation failure types.
//!
//! This module provides [`ValidationError`] for a single rejected check and
//! [`ValidationErrors`] for the accumulated failures of one `validate` call.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single failed check, located in the validated instance.
///
/// - **path**: where in the instance the check failed
/// - **message**: human-readable description of the failure
/// - **got**: the offending value or measurement (optional)
/// - **expected**: what the check required instead (optional)
/// - **code**: machine-readable error code, e.g. `min_length`
///
/// # Example
///
/// ```rust
/// use jsonshape::{JsonPath, ValidationError};
///
/// let error = ValidationError::new(
///     JsonPath::root().push_field("age"),
///     "must be at least 18"
/// )
/// .with_code("min_value")
/// .with_got("16")
/// .with_expected("value >= 18");
///
/// assert_eq!(error.code, "min_value");
/// assert_eq!(error.to_string(), "age: must be at least 18 (expected: value >= 18) (got: 16)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The path to the value that failed validation.
    pub path: JsonPath,
    /// Human-readable error message.
    pub message: String,
    /// The actual value that was received (formatted as string).
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Machine-readable error code.
    pub code: String,
}

impl ValidationError {
    /// Creates a new error with the given path and message.
    ///
    /// The code defaults to `validation_error`.
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "validation_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the "got" field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A non-empty collection of validation failures.
///
/// Wrapping a `NonEmptyVec` guarantees that a `Validation::Failure` always
/// carries at least one reason. Collections combine through `Semigroup`:
///
/// ```rust
/// use jsonshape::{JsonPath, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let a = ValidationErrors::single(
///     ValidationError::new(JsonPath::root().push_field("id"), "required")
/// );
/// let b = ValidationErrors::single(
///     ValidationError::new(JsonPath::root().push_field("name"), "expected string")
/// );
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a collection from a head error and any number of follow-ups.
    pub fn with_causes(head: ValidationError, causes: Vec<ValidationError>) -> Self {
        let mut errors = Vec::with_capacity(causes.len() + 1);
        errors.push(head);
        errors.extend(causes);
        Self::from_vec(errors)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors at the specified instance path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Creates a collection from a `Vec<ValidationError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty. Callers only reach this after
    /// having pushed at least one error.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// Failures are handed across threads along with shared validators.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
