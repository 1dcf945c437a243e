//! `$ref` resolution within a single schema document.
//!
//! Only fragment references (`#`, `#/definitions/foo`) are supported. The
//! fragment is percent-decoded and read as a JSON pointer: `/`-separated
//! tokens where `~1` stands for `/` and `~0` for `~`.

use serde_json::Value;

use crate::error::ResolutionError;
use crate::path::JsonPath;
use crate::types::InstanceType;

/// Resolves references against one schema document.
///
/// The resolver keeps no state between calls: the same reference always
/// yields the same sub-document.
///
/// # Example
///
/// ```rust
/// use jsonshape::Resolver;
/// use serde_json::json;
///
/// let document = json!({
///     "definitions": { "id": { "type": "integer" } }
/// });
///
/// let resolver = Resolver::new(&document);
/// assert_eq!(
///     resolver.resolve("#/definitions/id").unwrap(),
///     &json!({ "type": "integer" })
/// );
/// assert!(resolver.resolve("#/definitions/name").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    document: &'a Value,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver bound to `document`.
    pub fn new(document: &'a Value) -> Self {
        Self { document }
    }

    /// Returns the document references are resolved against.
    pub fn document(&self) -> &'a Value {
        self.document
    }

    /// Returns the sub-schema `reference` points to.
    pub fn resolve(&self, reference: &str) -> Result<&'a Value, ResolutionError> {
        self.locate(reference).map(|(_, target)| target)
    }

    /// Resolves `reference` and also returns the canonical location of the
    /// target inside the document.
    pub fn locate(&self, reference: &str) -> Result<(JsonPath, &'a Value), ResolutionError> {
        let fragment = reference
            .strip_prefix('#')
            .ok_or_else(|| ResolutionError::External(reference.to_string()))?;

        let pointer = urlencoding::decode(fragment).map_err(|e| ResolutionError::Malformed {
            reference: reference.to_string(),
            reason: format!("invalid percent-encoding: {}", e),
        })?;

        let mut location = JsonPath::root();
        let mut current = self.document;
        if pointer.is_empty() {
            return Ok((location, current));
        }

        let tokens = pointer.strip_prefix('/').ok_or_else(|| ResolutionError::Malformed {
            reference: reference.to_string(),
            reason: "pointer must be empty or start with '/'".to_string(),
        })?;

        for raw in tokens.split('/') {
            let token = unescape(raw).ok_or_else(|| ResolutionError::Malformed {
                reference: reference.to_string(),
                reason: format!("invalid escape in token '{}'", raw),
            })?;

            match current {
                Value::Object(members) => {
                    current = members.get(&token).ok_or_else(|| ResolutionError::MissingKey {
                        reference: reference.to_string(),
                        token: token.clone(),
                    })?;
                    location = location.push_field(token);
                }
                Value::Array(items) => {
                    let index = parse_index(&token).ok_or_else(|| ResolutionError::Malformed {
                        reference: reference.to_string(),
                        reason: format!("'{}' is not an array index", token),
                    })?;
                    current = items.get(index).ok_or_else(|| ResolutionError::IndexOutOfRange {
                        reference: reference.to_string(),
                        index,
                        len: items.len(),
                    })?;
                    location = location.push_index(index);
                }
                scalar => {
                    return Err(ResolutionError::NotAContainer {
                        reference: reference.to_string(),
                        token,
                        kind: InstanceType::of(scalar).name(),
                    })
                }
            }
        }

        Ok((location, current))
    }
}

/// Resolves `reference` against `document`.
pub fn resolve<'a>(document: &'a Value, reference: &str) -> Result<&'a Value, ResolutionError> {
    Resolver::new(document).resolve(reference)
}

/// Undoes `~0`/`~1` escaping; any other `~` sequence is invalid.
fn unescape(token: &str) -> Option<String> {
    if !token.contains('~') {
        return Some(token.to_string());
    }

    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Array tokens are decimal with no leading zeros.
fn parse_index(token: &str) -> Option<usize> {
    let canonical = token == "0" || (!token.starts_with('0') && !token.is_empty());
    if canonical && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}
