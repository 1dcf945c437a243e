//! Compiler configuration.

/// Default limit on nested `$ref` follows.
///
/// References are inlined, so a definition reached along several paths is
/// compiled once per path. Schemas where shared definitions fan out at
/// every level grow exponentially with nesting; the depth limit is what
/// bounds that growth.
pub const DEFAULT_MAX_REF_DEPTH: usize = 32;

/// Settings that change how a schema is compiled.
///
/// # Example
///
/// ```rust
/// use jsonshape::CompileOptions;
///
/// let options = CompileOptions::new()
///     .booleans_as_numbers(true)
///     .max_ref_depth(8);
///
/// assert!(options.treats_booleans_as_numbers());
/// assert_eq!(options.ref_depth_limit(), 8);
/// assert!(!options.ignores_unknown_keywords());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    booleans_as_numbers: bool,
    max_ref_depth: usize,
    ignore_unknown_keywords: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            booleans_as_numbers: false,
            max_ref_depth: DEFAULT_MAX_REF_DEPTH,
            ignore_unknown_keywords: false,
        }
    }
}

impl CompileOptions {
    /// Creates the default options: strict booleans, a reference depth of
    /// 32 and unknown keywords rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `integer`/`number` checks accept `true`/`false`, and numeric
    /// bounds read them as `1`/`0`.
    pub fn booleans_as_numbers(mut self, enabled: bool) -> Self {
        self.booleans_as_numbers = enabled;
        self
    }

    /// Sets the maximum nesting of `$ref` follows.
    ///
    /// Diamond-shaped references are not shared: each path through them
    /// gets its own copy of the target. Lower this limit when compiling
    /// untrusted schemas to cap both recursion and tree size.
    pub fn max_ref_depth(mut self, depth: usize) -> Self {
        self.max_ref_depth = depth;
        self
    }

    /// Skips unsupported keywords with a warning instead of failing.
    pub fn ignore_unknown_keywords(mut self, enabled: bool) -> Self {
        self.ignore_unknown_keywords = enabled;
        self
    }

    pub fn treats_booleans_as_numbers(&self) -> bool {
        self.booleans_as_numbers
    }

    pub fn ref_depth_limit(&self) -> usize {
        self.max_ref_depth
    }

    pub fn ignores_unknown_keywords(&self) -> bool {
        self.ignore_unknown_keywords
    }
}
