//! Configuration constants and load options for the registry.

/// Relative key of the synthetic root node.
pub const ROOT_KEY: &str = "root";

/// Separator between segments of an absolute key.
///
/// Names that themselves contain a dot cannot be told apart from a deeper
/// path; keys are compared as whole strings, not per segment.
pub const KEY_SEPARATOR: &str = ".";

/// Default maximum document size in bytes (100 MB).
///
/// Sources beyond this size are rejected before parsing so a runaway file
/// cannot exhaust memory. Can be overridden via CLI --max-size flag.
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// Default upper bound on parsed XML nodes.
pub const DEFAULT_NODES_LIMIT: u32 = u32::MAX;

/// Options applied when a document is loaded into a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum accepted source size in bytes.
    pub max_document_size: u64,

    /// Whether a DTD in the document is accepted.
    pub allow_dtd: bool,

    /// Maximum number of XML nodes the parser will build.
    pub nodes_limit: u32,
}

impl LoadOptions {
    /// Create options with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            allow_dtd: true,
            nodes_limit: DEFAULT_NODES_LIMIT,
        }
    }

    /// Set the maximum document size.
    #[must_use]
    pub fn with_max_document_size(mut self, bytes: u64) -> Self {
        self.max_document_size = bytes;
        self
    }

    /// Allow or reject a DTD.
    #[must_use]
    pub fn with_allow_dtd(mut self, allow: bool) -> Self {
        self.allow_dtd = allow;
        self
    }

    /// Set the node limit passed to the parser.
    #[must_use]
    pub fn with_nodes_limit(mut self, limit: u32) -> Self {
        self.nodes_limit = limit;
        self
    }

    /// Convert into parser options.
    #[must_use]
    pub fn parsing_options<'input>(&self) -> roxmltree::ParsingOptions<'input> {
        let mut opts = roxmltree::ParsingOptions::default();
        opts.allow_dtd = self.allow_dtd;
        opts.nodes_limit = self.nodes_limit;
        opts
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an absolute key into its segments.
///
/// # Examples
/// ```
/// use regelrecht_registry::config::split_key;
///
/// assert_eq!(split_key("root.a.b"), vec!["root", "a", "b"]);
/// ```
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(KEY_SEPARATOR).collect()
}

/// Join key segments into an absolute key.
///
/// # Examples
/// ```
/// use regelrecht_registry::config::join_key;
///
/// assert_eq!(join_key(["root", "a", "b"]), "root.a.b");
/// ```
pub fn join_key<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().collect::<Vec<_>>().join(KEY_SEPARATOR)
}
