//! Instance kinds named by the `type` keyword.

use std::fmt::{self, Display};

use serde_json::Value;

/// One of the seven draft 4 primitive types.
///
/// `Integer` is the numbers stored without a fractional part (`i64`/`u64`);
/// `Number` covers those and every float. A float that happens to be
/// integral, such as `1.0`, is not an `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl InstanceType {
    /// Looks up a type by its schema name.
    ///
    /// ```rust
    /// use jsonshape::InstanceType;
    ///
    /// assert_eq!(InstanceType::from_name("integer"), Some(InstanceType::Integer));
    /// assert_eq!(InstanceType::from_name("float"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(InstanceType::Null),
            "boolean" => Some(InstanceType::Boolean),
            "integer" => Some(InstanceType::Integer),
            "number" => Some(InstanceType::Number),
            "string" => Some(InstanceType::String),
            "array" => Some(InstanceType::Array),
            "object" => Some(InstanceType::Object),
            _ => None,
        }
    }

    /// Returns the schema name of this type.
    pub fn name(self) -> &'static str {
        match self {
            InstanceType::Null => "null",
            InstanceType::Boolean => "boolean",
            InstanceType::Integer => "integer",
            InstanceType::Number => "number",
            InstanceType::String => "string",
            InstanceType::Array => "array",
            InstanceType::Object => "object",
        }
    }

    /// Returns the most specific type of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => InstanceType::Null,
            Value::Bool(_) => InstanceType::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => InstanceType::Integer,
            Value::Number(_) => InstanceType::Number,
            Value::String(_) => InstanceType::String,
            Value::Array(_) => InstanceType::Array,
            Value::Object(_) => InstanceType::Object,
        }
    }

    /// Returns true if `value` is an instance of this type.
    pub fn matches(self, value: &Value) -> bool {
        let actual = Self::of(value);
        actual == self || (self == InstanceType::Number && actual == InstanceType::Integer)
    }
}

impl Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
