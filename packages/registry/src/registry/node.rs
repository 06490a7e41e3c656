//! Registry nodes and borrowed node handles.

use std::fmt;

use super::tree::RegistryTree;
use crate::config::KEY_SEPARATOR;
use crate::error::{RegistryError, Result};

/// Index of a node in its [`RegistryTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entry of the registry, stored in the tree's arena.
///
/// The parent link is a plain index and never owns anything; children are
/// owned by the arena and listed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryNode {
    pub(crate) relative_key: String,
    pub(crate) value: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl RegistryNode {
    pub(crate) fn new(
        parent: Option<NodeId>,
        relative_key: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            relative_key: relative_key.into(),
            value,
            parent,
            children: Vec::new(),
        }
    }

    /// The node's own name.
    #[must_use]
    pub fn relative_key(&self) -> &str {
        &self.relative_key
    }

    /// The node's value, if one was attached.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child identifiers in insertion order.
    #[must_use]
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }
}

/// Borrowed view of a node together with the tree it lives in.
///
/// All read operations that need to look at other nodes (children, the
/// absolute key) go through this handle.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t RegistryTree,
    id: NodeId,
    node: &'t RegistryNode,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t RegistryTree, id: NodeId, node: &'t RegistryNode) -> Self {
        Self { tree, id, node }
    }

    /// Identifier of this node in its tree.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The stored node.
    #[must_use]
    pub fn node(&self) -> &'t RegistryNode {
        self.node
    }

    /// The node's own name.
    #[must_use]
    pub fn relative_key(&self) -> &'t str {
        &self.node.relative_key
    }

    /// The node's value, if one was attached.
    #[must_use]
    pub fn value(&self) -> Option<&'t str> {
        self.node.value.as_deref()
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node.parent.and_then(|id| self.tree.node(id))
    }

    /// Whether the node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.node.children.is_empty()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    /// The child at position `index`, in insertion order.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= child_count()`.
    pub fn child(&self, index: usize) -> Result<NodeRef<'t>> {
        self.node
            .children
            .get(index)
            .and_then(|id| self.tree.node(*id))
            .ok_or_else(|| RegistryError::IndexOutOfRange {
                key: self.key(),
                index,
                len: self.node.children.len(),
            })
    }

    /// All direct children, in insertion order.
    ///
    /// The returned vector is independent of the tree; changing it does not
    /// change the node.
    #[must_use]
    pub fn children(&self) -> Vec<NodeRef<'t>> {
        self.iter_children().collect()
    }

    /// Direct children whose relative key equals `relative_key`.
    #[must_use]
    pub fn children_named(&self, relative_key: &str) -> Vec<NodeRef<'t>> {
        self.iter_children()
            .filter(|child| child.relative_key() == relative_key)
            .collect()
    }

    /// The first direct child whose relative key equals `relative_key`.
    #[must_use]
    pub fn first_child(&self, relative_key: &str) -> Option<NodeRef<'t>> {
        self.iter_children()
            .find(|child| child.relative_key() == relative_key)
    }

    /// Absolute key: relative keys from the root down to this node, joined
    /// with `.`.
    #[must_use]
    pub fn key(&self) -> String {
        let mut parts = vec![self.relative_key()];
        let mut current = self.parent();
        while let Some(node) = current {
            parts.push(node.relative_key());
            current = node.parent();
        }
        parts.reverse();
        parts.join(KEY_SEPARATOR)
    }

    fn iter_children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        let node = self.node;
        node.children.iter().filter_map(move |id| tree.node(*id))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.node.relative_key)
            .field("value", &self.node.value)
            .field("children", &self.node.children.len())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
