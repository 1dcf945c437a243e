//! Length and pattern checks.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::finish;

/// What a [`LengthCheck`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Unicode scalar values of a string (`minLength`/`maxLength`).
    Characters,
    /// Elements of an array (`minItems`/`maxItems`).
    Elements,
}

impl LengthUnit {
    fn noun(self) -> &'static str {
        match self {
            LengthUnit::Characters => "characters",
            LengthUnit::Elements => "items",
        }
    }

    fn measure(self, value: &Value) -> Option<usize> {
        match (self, value) {
            (LengthUnit::Characters, Value::String(s)) => Some(s.chars().count()),
            (LengthUnit::Elements, Value::Array(items)) => Some(items.len()),
            _ => None,
        }
    }
}

/// Inclusive bounds on a string or array length.
///
/// Values of another kind are not measured and pass; the type check next
/// to this node is what rejects them.
#[derive(Debug, Clone)]
pub struct LengthCheck {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub unit: LengthUnit,
}

impl LengthCheck {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        let len = match self.unit.measure(value) {
            Some(len) => len,
            None => return Validation::Success(()),
        };
        let noun = self.unit.noun();
        let mut errors = Vec::new();

        if let Some(min) = self.min {
            if len < min {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("length must be at least {} {}, got {}", min, noun, len),
                    )
                    .with_code("min_length")
                    .with_expected(format!("at least {} {}", min, noun))
                    .with_got(format!("{} {}", len, noun)),
                );
            }
        }

        if let Some(max) = self.max {
            if len > max {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("length must be at most {} {}, got {}", max, noun, len),
                    )
                    .with_code("max_length")
                    .with_expected(format!("at most {} {}", max, noun))
                    .with_got(format!("{} {}", len, noun)),
                );
            }
        }

        finish(errors)
    }
}

/// A regular expression that must match somewhere in a string.
#[derive(Debug, Clone)]
pub struct PatternCheck {
    pub regex: Regex,
}

impl PatternCheck {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        match value {
            Value::String(s) if !self.regex.is_match(s) => {
                Validation::Failure(ValidationErrors::single(
                    ValidationError::new(
                        path.clone(),
                        format!("must match pattern '{}'", self.regex.as_str()),
                    )
                    .with_code("pattern")
                    .with_expected(format!("match for /{}/", self.regex.as_str()))
                    .with_got(s.clone()),
                ))
            }
            _ => Validation::Success(()),
        }
    }
}
