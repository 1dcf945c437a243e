//! Numeric checks: bounds and divisibility.
//!
//! Integers are compared exactly (as `i128`, which holds every `i64` and
//! `u64`), including against float bounds. Two floats compare as `f64`.
//! Divisibility uses the exact IEEE remainder, so `3.3` is not a multiple of
//! `1.1` even though the quotient is close to 3.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::{finish, type_mismatch};

/// A number read from a schema or an instance.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    /// Reads a JSON number, keeping integers exact.
    pub fn from_number(number: &Number) -> Option<Self> {
        if let Some(i) = number.as_i64() {
            Some(Numeric::Int(i128::from(i)))
        } else if let Some(u) = number.as_u64() {
            Some(Numeric::Int(i128::from(u)))
        } else {
            number.as_f64().map(Numeric::Float)
        }
    }

    /// Reads a numeric instance. Booleans count as `1`/`0` only when
    /// `booleans_as_numbers` is set.
    pub fn from_value(value: &Value, booleans_as_numbers: bool) -> Option<Self> {
        match value {
            Value::Number(n) => Self::from_number(n),
            Value::Bool(b) if booleans_as_numbers => Some(Numeric::Int(i128::from(*b))),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    /// Returns true if the value is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        match self {
            Numeric::Int(i) => i > 0,
            Numeric::Float(f) => f > 0.0,
        }
    }

    /// Returns true if `self` divides by `divisor` with no remainder.
    ///
    /// `divisor` must be non-zero; the compiler only builds positive ones.
    pub fn is_multiple_of(self, divisor: Numeric) -> bool {
        match (self, divisor) {
            (Numeric::Int(a), Numeric::Int(b)) => a % b == 0,
            (a, b) => a.as_f64() % b.as_f64() == 0.0,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (Numeric::Int(a), Numeric::Float(b)) => compare_int_float(a, b),
            (Numeric::Float(a), Numeric::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b),
        }
    }
}

/// 2^127, the first float above every `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Compares an integer with a float without rounding the integer.
///
/// Casting `i` to `f64` loses precision above 2^53, so the float's integral
/// part is compared as an `i128` instead and its fraction breaks ties.
fn compare_int_float(i: i128, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I128_BOUND {
        return Some(Ordering::Greater);
    }

    let floor = f.floor();
    match i.cmp(&(floor as i128)) {
        Ordering::Equal if f > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Numeric bounds; an absent side is unbounded.
#[derive(Debug, Clone)]
pub struct RangeCheck {
    pub min: Option<Numeric>,
    pub max: Option<Numeric>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
    pub booleans_as_numbers: bool,
}

impl RangeCheck {
    /// Rejects non-numbers and numbers outside the bounds. When both
    /// bounds are violated (an empty range) both are reported.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        let n = match Numeric::from_value(value, self.booleans_as_numbers) {
            Some(n) => n,
            None => {
                return Validation::Failure(ValidationErrors::single(type_mismatch(
                    "number", value, path,
                )))
            }
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min {
            let below = if self.min_inclusive { n < min } else { n <= min };
            if below {
                let bound = if self.min_inclusive {
                    format!("at least {}", min)
                } else {
                    format!("greater than {}", min)
                };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {}, got {}", bound, n))
                        .with_code("min_value")
                        .with_expected(bound)
                        .with_got(n.to_string()),
                );
            }
        }

        if let Some(max) = self.max {
            let above = if self.max_inclusive { n > max } else { n >= max };
            if above {
                let bound = if self.max_inclusive {
                    format!("at most {}", max)
                } else {
                    format!("less than {}", max)
                };
                errors.push(
                    ValidationError::new(path.clone(), format!("must be {}, got {}", bound, n))
                        .with_code("max_value")
                        .with_expected(bound)
                        .with_got(n.to_string()),
                );
            }
        }

        finish(errors)
    }
}

/// Exact divisibility by a positive divisor.
#[derive(Debug, Clone)]
pub struct MultipleOfCheck {
    pub divisor: Numeric,
    pub booleans_as_numbers: bool,
}

impl MultipleOfCheck {
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<()> {
        match Numeric::from_value(value, self.booleans_as_numbers) {
            Some(n) if n.is_multiple_of(self.divisor) => Validation::Success(()),
            Some(n) => Validation::Failure(ValidationErrors::single(
                ValidationError::new(
                    path.clone(),
                    format!("{} is not a multiple of {}", n, self.divisor),
                )
                .with_code("multiple_of")
                .with_expected(format!("multiple of {}", self.divisor))
                .with_got(n.to_string()),
            )),
            None => Validation::Failure(ValidationErrors::single(type_mismatch(
                "number", value, path,
            ))),
        }
    }
}
