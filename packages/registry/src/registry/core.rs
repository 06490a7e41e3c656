//! Registry container: owns the tree and loads documents into it.

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::engine::PopulationEngine;
use super::node::NodeRef;
use super::tree::RegistryTree;
use crate::config::LoadOptions;
use crate::diagnostics::{DiagnosticSink, Level, NoopSink};
use crate::error::{LoadCause, RegistryError, Result};
use crate::xml::parse_document;

/// In-memory key/value registry built from XML documents.
///
/// Every load appends below the same `root` node; earlier content is never
/// cleared, so loading twice yields duplicate paths.
pub struct Registry {
    tree: RegistryTree,
    options: LoadOptions,
    sink: Box<dyn DiagnosticSink>,
}

impl Registry {
    /// Create an empty registry containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: RegistryTree::new(),
            options: LoadOptions::default(),
            sink: Box::new(NoopSink),
        }
    }

    /// Set the diagnostic sink used while loading.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Set the load options.
    #[must_use]
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// The root node.
    #[must_use]
    pub fn root_node(&self) -> NodeRef<'_> {
        self.tree.root()
    }

    /// The underlying tree.
    #[must_use]
    pub fn tree(&self) -> &RegistryTree {
        &self.tree
    }

    /// Mutable access to the underlying tree, e.g. for `set_value`.
    pub fn tree_mut(&mut self) -> &mut RegistryTree {
        &mut self.tree
    }

    /// Every node whose absolute key equals `key`, in pre-order.
    #[must_use]
    pub fn get_nodes(&self, key: &str) -> Vec<NodeRef<'_>> {
        self.tree.nodes_by_key(key)
    }

    /// Load an XML file.
    ///
    /// # Errors
    /// Returns `Load` if the file cannot be read, is too large or is not
    /// well-formed XML.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| RegistryError::load(&origin, e))?;
        self.read_source(&origin, file)
    }

    /// Load XML from a byte stream.
    ///
    /// # Errors
    /// Returns `Load` if the stream cannot be read, is too large or is not
    /// well-formed XML.
    pub fn read_reader(&mut self, reader: impl Read) -> Result<()> {
        self.read_source("<stream>", reader)
    }

    /// Load XML from a string.
    ///
    /// # Errors
    /// Returns `Load` if the text is too large or not well-formed XML.
    pub fn read_str(&mut self, xml: &str) -> Result<()> {
        self.check_size("<string>", xml.len() as u64)?;
        self.load_text("<string>", xml)
    }

    /// Persist the registry.
    ///
    /// Writing a registry back to a document is not supported; this accepts
    /// any destination and writes nothing.
    ///
    /// # Errors
    /// Never fails.
    pub fn store(&self, destination: impl AsRef<Path>) -> Result<()> {
        self.sink.emit(
            Level::Debug,
            format_args!(
                "Store to {} requested, nothing written",
                destination.as_ref().display()
            ),
        );
        Ok(())
    }

    fn read_source(&mut self, origin: &str, reader: impl Read) -> Result<()> {
        let limit = self.options.max_document_size;
        let mut bytes = Vec::new();
        reader
            .take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| RegistryError::load(origin, e))?;
        self.check_size(origin, bytes.len() as u64)?;

        let text = String::from_utf8(bytes).map_err(|e| {
            RegistryError::load(origin, std::io::Error::new(ErrorKind::InvalidData, e))
        })?;
        self.load_text(origin, &text)
    }

    fn check_size(&self, origin: &str, size: u64) -> Result<()> {
        let limit = self.options.max_document_size;
        if size > limit {
            return Err(RegistryError::load(
                origin,
                LoadCause::TooLarge { size, limit },
            ));
        }
        Ok(())
    }

    fn load_text(&mut self, origin: &str, text: &str) -> Result<()> {
        let doc =
            parse_document(text, &self.options).map_err(|e| RegistryError::load(origin, e))?;

        self.sink
            .emit(Level::Debug, format_args!("Adding nodes from {origin}"));
        let root = self.tree.root_id();
        let added =
            PopulationEngine::new(self.sink.as_ref()).populate(&doc, &mut self.tree, root)?;

        self.sink.emit(
            Level::Info,
            format_args!("Loaded {added} nodes from {origin}"),
        );
        self.sink.emit(Level::Trace, format_args!("{}", self.tree));
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("nodes", &self.tree.node_count())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::RecordingSink;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::sync::Arc;

    #[test]
    fn test_new_registry_root() {
        let registry = Registry::new();
        let root = registry.root_node();
        assert_eq!(root.key(), "root");
        assert!(root.value().is_none());
        assert!(!root.has_children());
    }

    #[test]
    fn test_read_str_and_query() {
        let mut registry = Registry::new();
        registry.read_str("<a><b>42</b></a>").unwrap();

        let a = registry.get_nodes("root.a");
        assert_eq!(a.len(), 1);
        assert!(a[0].value().is_none());

        let b = registry.get_nodes("root.a.b");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].value(), Some("42"));
    }

    #[test]
    fn test_read_reader() {
        let mut registry = Registry::new();
        registry
            .read_reader(Cursor::new(br#"<a x="1"/>"#.to_vec()))
            .unwrap();

        let x = registry.get_nodes("root.a.x");
        assert_eq!(x.len(), 1);
        assert_eq!(x[0].value(), Some("1"));
    }

    #[test]
    fn test_repeated_read_appends() {
        let mut registry = Registry::new();
        registry.read_str("<a><b>1</b></a>").unwrap();
        registry.read_str("<a><b>2</b></a>").unwrap();

        let values: Vec<_> = registry
            .get_nodes("root.a.b")
            .iter()
            .map(|n| n.value())
            .collect();
        assert_eq!(values, vec![Some("1"), Some("2")]);
        assert_eq!(registry.root_node().child_count(), 2);
    }

    #[test]
    fn test_malformed_xml_is_load_error() {
        let mut registry = Registry::new();
        let err = registry.read_str("<a><b></a>").unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Load {
                source: LoadCause::Xml(_),
                ..
            }
        ));
        assert_eq!(registry.tree().node_count(), 1);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let mut registry = Registry::new();
        let err = registry
            .read_file("/nonexistent/registry.xml")
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Load {
                source: LoadCause::Io(_),
                ..
            }
        ));
        assert!(err.to_string().contains("/nonexistent/registry.xml"));
    }

    #[test]
    fn test_document_too_large() {
        let mut registry =
            Registry::new().with_options(LoadOptions::new().with_max_document_size(8));

        let err = registry.read_str("<abcdefgh/>").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Load {
                source: LoadCause::TooLarge { limit: 8, .. },
                ..
            }
        ));

        let err = registry
            .read_reader(Cursor::new(b"<abcdefgh/>".to_vec()))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Load {
                source: LoadCause::TooLarge { size: 9, limit: 8 },
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_load_error() {
        let mut registry = Registry::new();
        let err = registry
            .read_reader(Cursor::new(vec![b'<', b'a', b'>', 0xff, b'<', b'/', b'a', b'>']))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Load {
                source: LoadCause::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_display_dump() {
        let mut registry = Registry::new();
        registry.read_str(r#"<a x="1"><b>42</b><c/></a>"#).unwrap();

        assert_eq!(
            registry.to_string(),
            "root\nroot.a\nroot.a.x value = 1\nroot.a.b value = 42\nroot.a.c\n"
        );
    }

    #[test]
    fn test_store_is_noop() {
        let mut registry = Registry::new();
        registry.read_str("<a/>").unwrap();
        let before = registry.to_string();

        registry.store("/nonexistent/out.xml").unwrap();
        assert_eq!(registry.to_string(), before);
    }

    #[test]
    fn test_set_value_through_tree_mut() {
        let mut registry = Registry::new();
        registry.read_str("<a>old</a>").unwrap();

        let id = registry.get_nodes("root.a")[0].id();
        registry
            .tree_mut()
            .set_value(id, Some("new".to_string()))
            .unwrap();
        assert_eq!(registry.get_nodes("root.a")[0].value(), Some("new"));
    }

    #[test]
    fn test_load_summary_goes_to_sink() {
        struct Shared(Arc<RecordingSink>);

        impl DiagnosticSink for Shared {
            fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
                self.0.emit(level, message);
            }
        }

        let sink = Arc::new(RecordingSink::default());
        let mut registry = Registry::new().with_sink(Shared(Arc::clone(&sink)));
        registry.read_str("<a><b/></a>").unwrap();

        let messages = sink.take();
        assert!(messages.contains(&(Level::Info, "Loaded 2 nodes from <string>".to_string())));
        assert!(messages
            .iter()
            .any(|(level, m)| *level == Level::Trace && m.contains("root.a.b")));
    }
}
