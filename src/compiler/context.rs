//! Reference tracking during a compile.
//!
//! [`CompileContext`] is threaded through the recursive walk. Following a
//! `$ref` yields a child context with the target appended to the chain, so
//! a reference that leads back into itself is caught instead of recursing
//! forever.

use crate::error::SchemaError;

#[derive(Debug, Clone)]
pub(crate) struct CompileContext {
    chain: Vec<String>,
    max_depth: usize,
}

impl CompileContext {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            chain: Vec::new(),
            max_depth,
        }
    }

    /// Returns a context for compiling the target of a reference.
    ///
    /// `target` is the canonical pointer of the referenced sub-schema and
    /// `location` the place the `$ref` was found.
    pub(crate) fn follow(&self, target: &str, location: &str) -> Result<Self, SchemaError> {
        if self.chain.iter().any(|seen| seen == target) {
            return Err(SchemaError::RecursiveReference {
                reference: target.to_string(),
                location: location.to_string(),
            });
        }
        if self.chain.len() >= self.max_depth {
            return Err(SchemaError::DepthExceeded {
                max_depth: self.max_depth,
                location: location.to_string(),
            });
        }

        let mut chain = self.chain.clone();
        chain.push(target.to_string());
        Ok(Self {
            chain,
            max_depth: self.max_depth,
        })
    }

    /// Number of references currently being followed.
    pub(crate) fn depth(&self) -> usize {
        self.chain.len()
    }
}
