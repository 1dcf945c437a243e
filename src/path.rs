//! Paths into JSON documents.
//!
//! [`JsonPath`] serves two roles: it locates the offending value inside a
//! validated instance (`users[0].email`), and it locates a keyword inside a
//! schema document while compiling (`#/properties/users/items`).

use std::fmt::{self, Display};

/// A single step of a [`JsonPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object member (e.g., `user`, `properties`)
    Field(String),
    /// An array element (e.g., `[0]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a value in a nested JSON structure.
///
/// Paths are immutable: `push_*` returns a new path and leaves the receiver
/// untouched, so a parent path can be shared by all of its children.
///
/// # Example
///
/// ```rust
/// use jsonshape::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// assert_eq!(path.to_pointer(), "#/users/0/email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path as a URI-fragment JSON pointer (`#/a/0/b`).
    ///
    /// `~` and `/` inside field names are escaped as `~0` and `~1`, so the
    /// output can be fed back to the reference resolver.
    pub fn to_pointer(&self) -> String {
        let mut out = String::from("#");
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Field(name) => out.push_str(&name.replace('~', "~0").replace('/', "~1")),
                PathSegment::Index(idx) => out.push_str(&idx.to_string()),
            }
        }
        out
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
