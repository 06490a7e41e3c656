//! Error types for the registry.
//!
//! Uses the dual-error pattern: `RegistryError` for library consumers,
//! and `LoadCause` for the reason a document could not be loaded.

use thiserror::Error;

use crate::registry::NodeId;

/// Main error type for the registry library.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The document source could not be opened or parsed.
    #[error("Failed to load registry from {origin}: {source}")]
    Load {
        origin: String,
        #[source]
        source: LoadCause,
    },

    /// Child requested by position outside `[0, len)`.
    #[error("Child index {index} out of range for '{key}' ({len} children)")]
    IndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },

    /// Node identifier not issued by this tree.
    #[error("Unknown node id {0}")]
    UnknownNode(NodeId),

    /// YAML rendering of a snapshot failed.
    #[error("YAML serialization failed: {0}")]
    Snapshot(#[from] serde_yaml_ng::Error),
}

/// Underlying reason for a [`RegistryError::Load`].
#[derive(Debug, Error)]
pub enum LoadCause {
    /// Reading the source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The source exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

impl RegistryError {
    /// Wrap a load failure together with the source it came from.
    pub fn load(origin: impl Into<String>, cause: impl Into<LoadCause>) -> Self {
        Self::Load {
            origin: origin.into(),
            source: cause.into(),
        }
    }
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
