//! Serializable view of a registry subtree.
//!
//! Used by the CLI to print query results as YAML. This is a diagnostic
//! rendering only; it is not read back.

use serde::Serialize;

use crate::config::KEY_SEPARATOR;
use crate::error::Result;
use crate::registry::NodeRef;

/// Owned copy of a node and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    /// Absolute key of the node.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Capture `node` and its descendants.
    #[must_use]
    pub fn capture(node: NodeRef<'_>) -> Self {
        let key = node.key();
        Self::capture_with_key(node, key)
    }

    fn capture_with_key(node: NodeRef<'_>, key: String) -> Self {
        let children = node
            .children()
            .into_iter()
            .map(|child| {
                let child_key = format!("{key}{KEY_SEPARATOR}{}", child.relative_key());
                Self::capture_with_key(child, child_key)
            })
            .collect();

        Self {
            key,
            value: node.value().map(String::from),
            children,
        }
    }

    /// Render as YAML.
    ///
    /// # Errors
    /// Returns `Snapshot` if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
