//! Compile-time error types.

/// Failure to turn a schema document into a validator.
///
/// Every variant names the schema location (a `#/...` pointer) where the
/// problem was found. No partial validator is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// A type name outside `string`, `integer`, `number`, `boolean`,
    /// `null`, `object`, `array`.
    #[error("unknown type name '{name}' at {location}")]
    UnknownType { name: String, location: String },

    /// A recognized keyword whose value has the wrong shape.
    #[error("invalid value for '{keyword}' at {location}: {reason}")]
    InvalidKeyword {
        keyword: String,
        location: String,
        reason: String,
    },

    /// A keyword outside the supported subset.
    #[error("unsupported keyword '{keyword}' at {location}")]
    UnsupportedKeyword { keyword: String, location: String },

    /// A keyword that narrows a `type` was given without one.
    #[error("keyword '{keyword}' at {location} requires a sibling 'type'")]
    MissingType { keyword: String, location: String },

    /// The schema value itself is not a schema (e.g. a number).
    #[error("malformed schema at {location}: expected object, array or type name, got {found}")]
    Malformed { location: String, found: String },

    /// A `$ref` that leads back into a reference already being compiled.
    #[error("recursive reference '{reference}' at {location}")]
    RecursiveReference { reference: String, location: String },

    /// Too many nested `$ref` follows.
    #[error("reference depth limit of {max_depth} exceeded at {location}")]
    DepthExceeded { max_depth: usize, location: String },

    /// A `$ref` that cannot be resolved against the document.
    #[error("{source} (referenced at {location})")]
    Resolution {
        location: String,
        #[source]
        source: ResolutionError,
    },
}

/// Failure to follow a `$ref` pointer through a schema document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolutionError {
    /// The reference points outside the current document.
    #[error("unsupported reference '{0}': only document-local '#...' references are resolved")]
    External(String),

    /// The reference is not a well-formed JSON pointer fragment.
    #[error("malformed reference '{reference}': {reason}")]
    Malformed { reference: String, reason: String },

    /// An object along the pointer lacks the requested member.
    #[error("reference '{reference}' does not resolve: no member '{token}'")]
    MissingKey { reference: String, token: String },

    /// An array along the pointer is shorter than the requested index.
    #[error("reference '{reference}' does not resolve: index {index} out of range (length {len})")]
    IndexOutOfRange {
        reference: String,
        index: usize,
        len: usize,
    },

    /// The pointer tries to descend into a scalar.
    #[error("reference '{reference}' does not resolve: cannot descend into {kind} at '{token}'")]
    NotAContainer {
        reference: String,
        token: String,
        kind: &'static str,
    },
}
