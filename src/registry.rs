//! Named storage for compiled validators.
//!
//! This module provides the [`ValidatorRegistry`] type, which compiles
//! schemas once and hands out shared validator trees by name.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::compiler::{CompileOptions, Compiler};
use crate::error::SchemaError;
use crate::validator::Validator;
use crate::ValidationResult;

/// Type alias for the validator storage map.
type ValidatorMap = Arc<RwLock<HashMap<String, Arc<Validator>>>>;

/// A thread-safe registry of compiled validators.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can look up and validate concurrently (read access)
/// - Registration operations are serialized (write access)
///
/// Compilation happens before the write lock is taken, so a slow compile
/// never blocks readers.
///
/// # Example
///
/// ```rust
/// use jsonshape::ValidatorRegistry;
/// use serde_json::json;
///
/// let registry = ValidatorRegistry::new();
/// registry
///     .register("Even", &json!({ "type": "integer", "multipleOf": 2 }))
///     .unwrap();
///
/// assert!(registry.validate("Even", &json!(8)).unwrap().is_success());
/// assert!(registry.validate("Even", &json!(3)).unwrap().is_failure());
/// assert!(registry.validate("Odd", &json!(3)).is_err());
/// ```
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: ValidatorMap,
    options: CompileOptions,
}

impl ValidatorRegistry {
    /// Creates an empty registry that compiles with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options used by later [`register`](Self::register) calls.
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Compiles `schema` and stores the result under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is taken and
    /// `RegistryError::Compile` if the schema does not compile. Nothing is
    /// stored in either case.
    pub fn register(&self, name: impl Into<String>, schema: &Value) -> Result<(), RegistryError> {
        let name = name.into();
        if self.validators.read().contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let validator = Compiler::new(schema)
            .with_options(self.options)
            .compile()
            .map_err(|source| RegistryError::Compile {
                name: name.clone(),
                source,
            })?;

        self.insert(name, validator)
    }

    /// Stores an already built validator under `name`.
    pub fn insert(&self, name: impl Into<String>, validator: Validator) -> Result<(), RegistryError> {
        let name = name.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        validators.insert(name, Arc::new(validator));
        Ok(())
    }

    /// Retrieves a validator by name.
    pub fn get(&self, name: &str) -> Option<Arc<Validator>> {
        self.validators.read().get(name).cloned()
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a value against a named validator.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name doesn't exist.
    pub fn validate(&self, name: &str, value: &Value) -> Result<ValidationResult<()>, RegistryError> {
        let validator = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(validator.validate(value))
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// The schema given to `register` failed to compile.
    #[error("schema '{name}' failed to compile: {source}")]
    Compile {
        name: String,
        #[source]
        source: SchemaError,
    },
}
