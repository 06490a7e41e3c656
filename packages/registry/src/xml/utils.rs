//! Classification of parsed XML nodes for the population traversal.

use roxmltree::{Attribute, Document, Node, NodeType};

use crate::config::LoadOptions;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_registry::xml::get_tag_name;
///
/// let xml = r#"<ns:root xmlns:ns="http://example.com"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "root");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Parse XML text with the parser settings from `options`.
///
/// # Errors
/// Returns the parser error for malformed input or exceeded limits.
pub fn parse_document<'input>(
    text: &'input str,
    options: &LoadOptions,
) -> std::result::Result<Document<'input>, roxmltree::Error> {
    Document::parse_with_options(text, options.parsing_options())
}

/// A parsed XML node as seen by the traversal.
#[derive(Debug, Clone, Copy)]
pub enum MarkupNode<'a, 'input> {
    /// An element with a tag name, attributes and children.
    Element(Node<'a, 'input>),
    /// Character data belonging to the enclosing element.
    Text(&'a str),
    /// A single attribute of an element.
    Attribute(Attribute<'a, 'input>),
    /// Document pseudo-node, comments and processing instructions.
    Other(NodeType),
}

impl<'a, 'input> MarkupNode<'a, 'input> {
    /// Local name of an element or attribute, `None` for anything else.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Element(node) => Some(get_tag_name(*node)),
            Self::Attribute(attr) => Some(attr.name()),
            Self::Text(_) | Self::Other(_) => None,
        }
    }
}

impl<'a, 'input> From<Node<'a, 'input>> for MarkupNode<'a, 'input> {
    fn from(node: Node<'a, 'input>) -> Self {
        match node.node_type() {
            NodeType::Element => Self::Element(node),
            NodeType::Text => Self::Text(node.text().unwrap_or_default()),
            other => Self::Other(other),
        }
    }
}

impl<'a, 'input> From<Attribute<'a, 'input>> for MarkupNode<'a, 'input> {
    fn from(attr: Attribute<'a, 'input>) -> Self {
        Self::Attribute(attr)
    }
}
