//! Population engine that walks a parsed XML document into a registry tree.

use roxmltree::Document;

use super::node::NodeId;
use super::tree::RegistryTree;
use crate::diagnostics::{DiagnosticSink, Level};
use crate::error::Result;
use crate::xml::MarkupNode;

/// Engine that converts XML nodes into registry nodes.
///
/// Elements and attributes each become a child of the current registry
/// node. Text does not create a node: its trimmed content overwrites the
/// value of the element that owns it, unless it is empty. Comments,
/// processing instructions and the document pseudo-node are skipped.
pub struct PopulationEngine<'s> {
    sink: &'s dyn DiagnosticSink,
}

impl<'s> PopulationEngine<'s> {
    /// Create a new engine reporting to `sink`.
    #[must_use]
    pub fn new(sink: &'s dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Populate `tree` below `parent` from the top-level nodes of `doc`.
    ///
    /// The document pseudo-node itself is not added; its children (the root
    /// element and any comments or processing instructions around it) are
    /// visited in document order.
    ///
    /// # Returns
    /// Number of registry nodes added
    ///
    /// # Errors
    /// Returns `UnknownNode` if `parent` is not part of `tree`.
    pub fn populate(
        &self,
        doc: &Document<'_>,
        tree: &mut RegistryTree,
        parent: NodeId,
    ) -> Result<usize> {
        let before = tree.node_count();
        for child in doc.root().children() {
            self.traverse(child.into(), tree, parent)?;
        }
        Ok(tree.node_count() - before)
    }

    /// Process a single XML node and, recursively, everything below it.
    ///
    /// # Errors
    /// Returns `UnknownNode` if `parent` is not part of `tree`.
    pub fn traverse(
        &self,
        node: MarkupNode<'_, '_>,
        tree: &mut RegistryTree,
        parent: NodeId,
    ) -> Result<()> {
        let name = node.name().unwrap_or_default();
        match node {
            MarkupNode::Element(element) => {
                self.sink
                    .emit(Level::Debug, format_args!("Adding element {name}"));
                let id = tree.add_child(parent, name, None)?;

                for attribute in element.attributes() {
                    self.traverse(attribute.into(), tree, id)?;
                }
                for child in element.children() {
                    self.traverse(child.into(), tree, id)?;
                }
            }
            MarkupNode::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    self.sink.emit(
                        Level::Debug,
                        format_args!("Setting text '{trimmed}' on {parent}"),
                    );
                    tree.set_value(parent, Some(trimmed.to_string()))?;
                }
            }
            MarkupNode::Attribute(attribute) => {
                let value = attribute.value();
                self.sink
                    .emit(Level::Debug, format_args!("Adding attribute {name}={value}"));
                tree.add_child(parent, name, Some(value.to_string()))?;
            }
            MarkupNode::Other(kind) => {
                self.sink
                    .emit(Level::Trace, format_args!("Skipping {kind:?} node"));
            }
        }
        Ok(())
    }
}
