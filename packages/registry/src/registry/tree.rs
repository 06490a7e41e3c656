//! Arena holding every node of a registry.

use std::fmt;

use super::node::{NodeId, NodeRef, RegistryNode};
use crate::config::{KEY_SEPARATOR, ROOT_KEY};
use crate::error::{RegistryError, Result};

/// Append-only tree of registry nodes.
///
/// Nodes live in a single vector and refer to each other by [`NodeId`].
/// The root is created with the tree and always sits at index 0. Nodes are
/// never removed or reparented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTree {
    nodes: Vec<RegistryNode>,
}

impl RegistryTree {
    /// Create a tree containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![RegistryNode::new(None, ROOT_KEY, None)],
        }
    }

    /// Identifier of the root node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId(0), &self.nodes[0])
    }

    /// Look up a node by identifier.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.0).map(|node| NodeRef::new(self, id, node))
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a new child under `parent` and return its identifier.
    ///
    /// Duplicate keys are accepted; children keep insertion order.
    ///
    /// # Errors
    /// Returns `UnknownNode` if `parent` was not issued by this tree.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        relative_key: impl Into<String>,
        value: Option<String>,
    ) -> Result<NodeId> {
        let id = NodeId(self.nodes.len());
        self.get_mut(parent)?.children.push(id);
        self.nodes
            .push(RegistryNode::new(Some(parent), relative_key, value));
        Ok(id)
    }

    /// Replace the value of a node.
    ///
    /// # Errors
    /// Returns `UnknownNode` if `id` was not issued by this tree.
    pub fn set_value(&mut self, id: NodeId, value: Option<String>) -> Result<()> {
        self.get_mut(id)?.value = value;
        Ok(())
    }

    /// Every node whose absolute key equals `key`, in pre-order.
    ///
    /// The walk continues below a match, so nodes that share a full path
    /// are all returned.
    #[must_use]
    pub fn nodes_by_key(&self, key: &str) -> Vec<NodeRef<'_>> {
        let mut found = Vec::new();
        self.walk(|node, node_key| {
            if node_key == key {
                found.push(node);
            }
        });
        found
    }

    /// Visit every node in pre-order together with its absolute key.
    pub fn walk<'t>(&'t self, mut visit: impl FnMut(NodeRef<'t>, &str)) {
        let mut stack = vec![(self.root_id(), ROOT_KEY.to_string())];
        while let Some((id, key)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            visit(node, &key);
            for child in node.node().child_ids().iter().rev() {
                if let Some(child_node) = self.nodes.get(child.0) {
                    let child_key = format!("{key}{KEY_SEPARATOR}{}", child_node.relative_key);
                    stack.push((*child, child_key));
                }
            }
        }
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut RegistryNode> {
        self.nodes
            .get_mut(id.0)
            .ok_or(RegistryError::UnknownNode(id))
    }
}

impl Default for RegistryTree {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per node in pre-order: `<key>[ value = <value>]`.
impl fmt::Display for RegistryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.walk(|node, key| {
            if result.is_err() {
                return;
            }
            result = match node.value() {
                Some(value) => writeln!(f, "{key} value = {value}"),
                None => writeln!(f, "{key}"),
            };
        });
        result
    }
}
