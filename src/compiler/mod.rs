//! Schema compilation.
//!
//! The compiler walks a schema document once and produces a [`Validator`]
//! tree. Every `$ref` is resolved along the way, so the tree never refers
//! back to the document.
//!
//! # Example
//!
//! ```rust
//! use jsonshape::compile;
//! use serde_json::json;
//!
//! let validator = compile(&json!({
//!     "type": "object",
//!     "required": ["name", "id"],
//!     "properties": { "name": { "type": "string" } }
//! }))
//! .unwrap();
//!
//! assert!(validator.is_valid(&json!({ "name": "x", "id": null })));
//! assert!(!validator.is_valid(&json!({ "name": "x" })));
//! assert!(!validator.is_valid(&json!({ "name": 1, "id": 2 })));
//! ```

mod context;
mod keywords;
mod options;
mod shape;

pub use options::{CompileOptions, DEFAULT_MAX_REF_DEPTH};

use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::path::JsonPath;
use crate::resolver::Resolver;
use crate::types::InstanceType;
use crate::validator::{
    Additional, LengthCheck, LengthUnit, MultipleOfCheck, ObjectShape, PatternCheck,
    PositionalArray, PropertyCount, RangeCheck, Validator,
};

use context::CompileContext;
use keywords::{count, flag, invalid, number, schema_list, string_list};
use shape::SchemaShape;

type Combinator = fn(Vec<Validator>) -> Validator;

/// Compiles one schema document.
///
/// A compiler is bound to its document, which is also the document `$ref`
/// pointers are resolved against. Compiling is pure: calling
/// [`compile`](Self::compile) twice yields equivalent trees.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    resolver: Resolver<'a>,
    options: CompileOptions,
}

impl<'a> Compiler<'a> {
    /// Creates a compiler with default options.
    pub fn new(document: &'a Value) -> Self {
        Self {
            resolver: Resolver::new(document),
            options: CompileOptions::default(),
        }
    }

    /// Replaces the compile options.
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles the whole document.
    pub fn compile(&self) -> Result<Validator, SchemaError> {
        let context = CompileContext::new(self.options.ref_depth_limit());
        let validator = self.compile_at(self.resolver.document(), &JsonPath::root(), &context)?;
        debug!(validator = %validator, "schema compiled");
        Ok(validator)
    }

    fn compile_at(
        &self,
        schema: &'a Value,
        location: &JsonPath,
        context: &CompileContext,
    ) -> Result<Validator, SchemaError> {
        match SchemaShape::classify(schema, location)? {
            SchemaShape::Empty => Ok(Validator::Anything),
            SchemaShape::TypeName(name) => self.type_validator(name, location),
            SchemaShape::Union(schemas) => self
                .compile_list(schemas, location, context)
                .map(Validator::Any),
            SchemaShape::Keywords(map) => self.compile_keywords(map, location, context),
        }
    }

    fn compile_list(
        &self,
        schemas: &'a [Value],
        location: &JsonPath,
        context: &CompileContext,
    ) -> Result<Vec<Validator>, SchemaError> {
        schemas
            .iter()
            .enumerate()
            .map(|(i, schema)| self.compile_at(schema, &location.push_index(i), context))
            .collect()
    }

    fn compile_keywords(
        &self,
        map: &'a Map<String, Value>,
        location: &JsonPath,
        context: &CompileContext,
    ) -> Result<Validator, SchemaError> {
        if let Some(reference) = map.get("$ref") {
            return self.compile_ref(reference, map, location, context);
        }

        self.check_keywords(map, location)?;

        let mut parts = Vec::new();

        match map.get("type") {
            Some(type_value) => {
                self.compile_typed(type_value, map, location, context, &mut parts)?
            }
            None => {
                if let Some(keyword) = keywords::NEEDS_TYPE.iter().find(|k| map.contains_key(**k)) {
                    return Err(SchemaError::MissingType {
                        keyword: keyword.to_string(),
                        location: location.to_pointer(),
                    });
                }
            }
        }

        let combinators: [(&str, Combinator); 3] = [
            ("anyOf", Validator::Any),
            ("allOf", Validator::All),
            ("oneOf", Validator::ExactlyOne),
        ];
        for (keyword, combine) in combinators {
            if let Some(schemas) = schema_list(map, keyword, location)? {
                let children = self.compile_list(schemas, &location.push_field(keyword), context)?;
                parts.push(combine(children));
            }
        }

        let min = count(map, "minLength", location)?;
        let max = count(map, "maxLength", location)?;
        if min.is_some() || max.is_some() {
            parts.push(Validator::Length(LengthCheck {
                min,
                max,
                unit: LengthUnit::Characters,
            }));
        }

        if let Some(pattern) = map.get("pattern") {
            let source = pattern
                .as_str()
                .ok_or_else(|| invalid("pattern", location, "expected a string"))?;
            let regex = Regex::new(source)
                .map_err(|e| invalid("pattern", location, e.to_string()))?;
            parts.push(Validator::Pattern(PatternCheck { regex }));
        }

        Ok(Validator::all(parts))
    }

    fn compile_ref(
        &self,
        reference: &Value,
        map: &Map<String, Value>,
        location: &JsonPath,
        context: &CompileContext,
    ) -> Result<Validator, SchemaError> {
        let reference = reference
            .as_str()
            .ok_or_else(|| invalid("$ref", location, "expected a string"))?;

        let (target_path, target) = self
            .resolver
            .locate(reference)
            .map_err(|source| SchemaError::Resolution {
                location: location.to_pointer(),
                source,
            })?;
        let target_pointer = target_path.to_pointer();
        let child = context.follow(&target_pointer, &location.to_pointer())?;

        let ignored: Vec<&str> = map
            .keys()
            .map(String::as_str)
            .filter(|k| *k != "$ref" && !keywords::ANNOTATIONS.contains(k))
            .collect();
        if !ignored.is_empty() {
            warn!(
                reference,
                location = %location.to_pointer(),
                ignored = ?ignored,
                "keywords next to $ref are ignored"
            );
        }

        debug!(reference, target = %target_pointer, depth = child.depth(), "following $ref");
        self.compile_at(target, &target_path, &child)
    }

    fn check_keywords(
        &self,
        map: &Map<String, Value>,
        location: &JsonPath,
    ) -> Result<(), SchemaError> {
        for keyword in map.keys().map(String::as_str) {
            if keywords::SUPPORTED.contains(&keyword) || keywords::ANNOTATIONS.contains(&keyword) {
                continue;
            }
            if !self.options.ignores_unknown_keywords() {
                return Err(SchemaError::UnsupportedKeyword {
                    keyword: keyword.to_string(),
                    location: location.to_pointer(),
                });
            }
            warn!(keyword, location = %location.to_pointer(), "skipping unsupported keyword");
        }
        Ok(())
    }

    fn type_validator(&self, name: &str, location: &JsonPath) -> Result<Validator, SchemaError> {
        let kind = InstanceType::from_name(name).ok_or_else(|| SchemaError::UnknownType {
            name: name.to_string(),
            location: location.to_pointer(),
        })?;

        let numeric = matches!(kind, InstanceType::Integer | InstanceType::Number);
        if numeric && self.options.treats_booleans_as_numbers() {
            Ok(Validator::Any(vec![
                Validator::Type(kind),
                Validator::Type(InstanceType::Boolean),
            ]))
        } else {
            Ok(Validator::Type(kind))
        }
    }

    /// Appends the base type check and everything that narrows it.
    fn compile_typed(
        &self,
        type_value: &Value,
        map: &'a Map<String, Value>,
        location: &JsonPath,
        context: &CompileContext,
        parts: &mut Vec<Validator>,
    ) -> Result<(), SchemaError> {
        let type_location = location.push_field("type");

        let numeric = match type_value {
            Value::String(name) => {
                parts.push(self.type_validator(name, &type_location)?);
                name == "integer" || name == "number"
            }
            Value::Array(names) if !names.is_empty() => {
                let kinds = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| match name.as_str() {
                        Some(name) => self.type_validator(name, &type_location.push_index(i)),
                        None => Err(invalid("type", location, "expected a list of type names")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                parts.push(Validator::Any(kinds));
                false
            }
            _ => {
                return Err(invalid(
                    "type",
                    location,
                    "expected a type name or a non-empty list of type names",
                ))
            }
        };

        self.object_parts(map, location, context, parts)?;
        self.array_parts(map, location, context, parts)?;
        if numeric {
            self.numeric_parts(map, location, parts)?;
        }
        Ok(())
    }

    fn object_parts(
        &self,
        map: &'a Map<String, Value>,
        location: &JsonPath,
        context: &CompileContext,
        parts: &mut Vec<Validator>,
    ) -> Result<(), SchemaError> {
        let properties = match map.get("properties") {
            None => None,
            Some(Value::Object(declared)) => {
                let base = location.push_field("properties");
                let mut compiled = IndexMap::with_capacity(declared.len());
                for (name, schema) in declared {
                    let validator = self.compile_at(schema, &base.push_field(name), context)?;
                    compiled.insert(name.clone(), validator);
                }
                Some(compiled)
            }
            Some(_) => return Err(invalid("properties", location, "expected an object")),
        };

        if properties.is_some() || map.contains_key("additionalProperties") {
            let additional = self.additional_policy(map, "additionalProperties", location, context)?;
            parts.push(Validator::ObjectShape(ObjectShape {
                properties: properties.unwrap_or_default(),
                additional,
            }));
        }

        if let Some(keys) = string_list(map, "required", location)? {
            if !keys.is_empty() {
                parts.push(Validator::Required(keys));
            }
        }

        let min = count(map, "minProperties", location)?;
        let max = count(map, "maxProperties", location)?;
        if min.is_some() || max.is_some() {
            parts.push(Validator::PropertyCount(PropertyCount { min, max }));
        }

        Ok(())
    }

    fn array_parts(
        &self,
        map: &'a Map<String, Value>,
        location: &JsonPath,
        context: &CompileContext,
        parts: &mut Vec<Validator>,
    ) -> Result<(), SchemaError> {
        match map.get("items") {
            None => {}
            Some(Value::Array(schemas)) => {
                let items = self.compile_list(schemas, &location.push_field("items"), context)?;
                let additional = self.additional_policy(map, "additionalItems", location, context)?;
                parts.push(Validator::PositionalArray(PositionalArray { items, additional }));
            }
            Some(schema @ Value::Object(_)) => {
                let items = self.compile_at(schema, &location.push_field("items"), context)?;
                parts.push(Validator::ArrayOf(Box::new(items)));
            }
            Some(_) => {
                return Err(invalid(
                    "items",
                    location,
                    "expected a schema or an array of schemas",
                ))
            }
        }

        let min = count(map, "minItems", location)?;
        let max = count(map, "maxItems", location)?;
        if min.is_some() || max.is_some() {
            parts.push(Validator::Length(LengthCheck {
                min,
                max,
                unit: LengthUnit::Elements,
            }));
        }

        Ok(())
    }

    fn numeric_parts(
        &self,
        map: &Map<String, Value>,
        location: &JsonPath,
        parts: &mut Vec<Validator>,
    ) -> Result<(), SchemaError> {
        let booleans_as_numbers = self.options.treats_booleans_as_numbers();

        if let Some(divisor) = number(map, "multipleOf", location)? {
            if !divisor.is_positive() {
                return Err(invalid("multipleOf", location, "must be greater than 0"));
            }
            parts.push(Validator::MultipleOf(MultipleOfCheck {
                divisor,
                booleans_as_numbers,
            }));
        }

        let min = number(map, "minimum", location)?;
        let max = number(map, "maximum", location)?;
        let min_exclusive = flag(map, "exclusiveMinimum", location)?;
        let max_exclusive = flag(map, "exclusiveMaximum", location)?;

        // An exclusive flag without its bound adds nothing.
        if min.is_some() || max.is_some() {
            parts.push(Validator::Range(RangeCheck {
                min,
                max,
                min_inclusive: !min_exclusive,
                max_inclusive: !max_exclusive,
                booleans_as_numbers,
            }));
        }

        Ok(())
    }

    fn additional_policy(
        &self,
        map: &'a Map<String, Value>,
        keyword: &str,
        location: &JsonPath,
        context: &CompileContext,
    ) -> Result<Additional, SchemaError> {
        match map.get(keyword) {
            None | Some(Value::Bool(true)) => Ok(Additional::AllowAny),
            Some(Value::Bool(false)) => Ok(Additional::Reject),
            Some(schema) => {
                let validator = self.compile_at(schema, &location.push_field(keyword), context)?;
                Ok(Additional::AllowIf(Box::new(validator)))
            }
        }
    }
}

/// Compiles `schema` with default options.
pub fn compile(schema: &Value) -> Result<Validator, SchemaError> {
    Compiler::new(schema).compile()
}

/// Compiles `schema` with the given options.
pub fn compile_with(schema: &Value, options: CompileOptions) -> Result<Validator, SchemaError> {
    Compiler::new(schema).with_options(options).compile()
}

/// Compiles `schema` and checks a single value against it.
pub fn is_valid(schema: &Value, value: &Value) -> Result<bool, SchemaError> {
    compile(schema).map(|validator| validator.is_valid(value))
}
