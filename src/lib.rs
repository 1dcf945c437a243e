//! # jsonshape
//!
//! Compiles JSON Schema documents (a Draft 4 subset) into validator trees
//! and evaluates values against them.
//!
//! ## Overview
//!
//! Compilation happens once per schema. The result is a [`Validator`], an
//! immutable tree of checks with every `$ref` already resolved, which can
//! be evaluated against any number of values from any number of threads.
//! Evaluation accumulates ALL failures rather than stopping at the first,
//! using stillwater's `Validation` type.
//!
//! ## Core Types
//!
//! - [`Compiler`] / [`compile`]: turn a `serde_json::Value` schema into a [`Validator`]
//! - [`Validator`]: the compiled tree; [`Validator::validate`] reports failures
//! - [`ValidationErrors`]: a non-empty collection of [`ValidationError`]s with paths
//! - [`SchemaError`]: why a schema failed to compile
//! - [`ValidatorRegistry`]: compiled validators shared by name
//!
//! ## Example
//!
//! ```rust
//! use jsonshape::compile;
//! use serde_json::json;
//!
//! let validator = compile(&json!({
//!     "type": "array",
//!     "items": [{ "type": "boolean" }, { "type": "integer" }],
//!     "additionalItems": false
//! }))
//! .unwrap();
//!
//! assert!(validator.validate(&json!([true, 1])).is_success());
//!
//! let errors = validator
//!     .validate(&json!([true, 1, 2]))
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(errors.first().code, "additional_items");
//! ```

pub mod compiler;
pub mod error;
pub mod path;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod validator;

pub use compiler::{compile, compile_with, is_valid, CompileOptions, Compiler};
pub use error::{ResolutionError, SchemaError, ValidationError, ValidationErrors};
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, ValidatorRegistry};
pub use resolver::{resolve, Resolver};
pub use types::InstanceType;
pub use validator::{
    Additional, LengthCheck, LengthUnit, MultipleOfCheck, Numeric, ObjectShape, PatternCheck,
    PositionalArray, PropertyCount, RangeCheck, Validator,
};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
